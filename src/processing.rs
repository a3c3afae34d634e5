//! Entry point shared by every caller: validate, then sanitize.

use log::{debug, info, warn};

use crate::utils::validation::{validate, SanitizedUserInput, UserInput, ValidationErrors};

/// Runs the full pipeline on a user input record.
///
/// Every violated rule is returned, so the caller can display all problems at
/// once.
pub fn process_user_input(input: &UserInput) -> Result<SanitizedUserInput, ValidationErrors> {
    let processed = validate(input).and_then(|validated| validated.sanitize());

    match &processed {
        Ok(sanitized) => {
            info!("Validation passed, processing input");
            debug!("Sanitized input: {:?}", sanitized);
        }
        Err(errors) => warn!("Validation failed: {}", errors),
    }

    processed
}
