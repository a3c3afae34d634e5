//! Root module for the validation system.
//! Exposes the public API for user input validation and sanitization.

mod constants;
mod sanitize;
mod types;
mod validators;

// Re-export commonly used types and functions
pub use constants::*;
pub use types::{
    EmailInput, Field, FieldError, NameInput, SanitizedUserInput, UserInput, ValidatedUserInput,
    ValidationErrorKind, ValidationErrors,
};
pub use validators::{validate, validate_email, validate_name};
