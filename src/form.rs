//! Interactive terminal form: the client-side caller.
//!
//! Each prompt applies its field rule as soon as a value is entered, so a bad
//! value is rejected with its message before the form moves on.

use anyhow::{Context, Result};
use inquire::validator::Validation;
use inquire::{CustomUserError, Text};

use crate::utils::validation::{validate_email, validate_name, FieldError, UserInput};

/// Turns the outcome of a field rule into prompt feedback
pub fn field_feedback(check: Result<(), FieldError>) -> Validation {
    match check {
        Ok(()) => Validation::Valid,
        Err(error) => Validation::Invalid(error.message().into()),
    }
}

fn name_feedback(name: &str) -> Result<Validation, CustomUserError> {
    Ok(field_feedback(validate_name(name)))
}

fn email_feedback(email: &str) -> Result<Validation, CustomUserError> {
    Ok(field_feedback(validate_email(email)))
}

/// Prompts for every field of a `UserInput`
pub fn prompt_user_input() -> Result<UserInput> {
    let name = Text::new("Name:")
        .with_validator(name_feedback)
        .prompt()
        .context("Failed to read name")?;

    let email = Text::new("Email:")
        .with_placeholder("ada@example.com")
        .with_validator(email_feedback)
        .prompt()
        .context("Failed to read email")?;

    Ok(UserInput::new(name, email))
}
