//! Validation rules for user input.
//!
//! Each field has its own rule so it can be checked on its own (for example
//! while a form is being filled), and [`validate`] runs all of them on a whole
//! record, collecting every violation instead of stopping at the first one.

use validator::ValidateEmail;

use crate::utils::validation::{
    FieldError, UserInput, ValidatedUserInput, ValidationErrorKind, ValidationErrors,
    MAX_EMAIL_LENGTH,
};

/// Checks that a name holds something other than whitespace
pub fn validate_name(name: &str) -> Result<(), FieldError> {
    if name.trim().is_empty() {
        return Err(ValidationErrorKind::MissingName.into());
    }
    Ok(())
}

/// Validates email addresses according to the HTML5 specification.
///
/// Surrounding whitespace is ignored.
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    let email_trimmed = email.trim();

    if email_trimmed.is_empty()
        || email_trimmed.len() > MAX_EMAIL_LENGTH
        || !email_trimmed.validate_email()
    {
        return Err(ValidationErrorKind::InvalidEmailFormat.into());
    }
    Ok(())
}

/// Validates a whole user input record.
///
/// Returns the input unchanged when every rule holds, or every violated rule
/// in field order (`name`, then `email`).
///
/// # Example
/// ```
/// use user_input::utils::validation::{validate, UserInput, ValidationErrorKind};
///
/// let errors = validate(&UserInput::new("", "bad")).unwrap_err();
/// assert_eq!(
///     errors.kinds(),
///     vec![ValidationErrorKind::MissingName, ValidationErrorKind::InvalidEmailFormat]
/// );
/// ```
pub fn validate(input: &UserInput) -> Result<ValidatedUserInput, ValidationErrors> {
    let name = validate_name(&input.name);
    let email = validate_email(&input.email);

    match (name, email) {
        (Ok(()), Ok(())) => Ok(ValidatedUserInput::new(input.clone())),
        (Err(error), Ok(())) | (Ok(()), Err(error)) => Err(error.into()),
        (Err(name_error), Err(email_error)) => {
            let mut errors = ValidationErrors::from(name_error);
            errors.push(email_error);
            Err(errors)
        }
    }
}
