//! Type definitions for the validation system

mod email_input;
mod field_error;
mod name_input;
mod user_input;

// Re-export commonly used types and functions
pub use email_input::EmailInput;
pub use field_error::{Field, FieldError, ValidationErrorKind, ValidationErrors};
pub use name_input::NameInput;
pub use user_input::{SanitizedUserInput, UserInput, ValidatedUserInput};
