//! Represents a sanitized email address.
//!
//! This module provides a type-safe wrapper around email addresses that ensures
//! they meet standard email format requirements. The format check itself lives
//! in the validators; this type adds the normalization applied once an address
//! has been accepted.

use serde::Serialize;
use std::fmt;

use crate::utils::validation::validators::validate_email;
use crate::utils::validation::FieldError;

/// A validated email address, trimmed and lowercased.
/// This type can only be constructed through validation, ensuring that any
/// instance is a properly formatted email address.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailInput {
    // The validated and normalized email address
    email: String,
}

impl EmailInput {
    /// Creates a new `EmailInput` after validating the provided email string.
    ///
    /// The email address is trimmed of whitespace and validated against HTML5
    /// email format requirements, then lowercased.
    ///
    /// # Example
    /// ```
    /// use user_input::utils::validation::EmailInput;
    ///
    /// let email = EmailInput::new("  Ada@Example.com ").unwrap();
    /// assert_eq!(email.as_str(), "ada@example.com");
    /// assert!(EmailInput::new("not-an-email").is_err());
    /// ```
    pub fn new(email: &str) -> Result<Self, FieldError> {
        let email_trimmed = email.trim();

        validate_email(email_trimmed)?;

        // Convert to lowercase for consistency
        let normalized_email = email_trimmed.to_lowercase();

        Ok(Self {
            email: normalized_email,
        })
    }

    /// Returns a string slice of the validated email address
    pub fn as_str(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for EmailInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.email)
    }
}

impl AsRef<str> for EmailInput {
    fn as_ref(&self) -> &str {
        &self.email
    }
}
