//! Structured validation failures.
//!
//! Every rule violation is reported as a [`FieldError`] naming the offending
//! field and carrying a message that can be shown to the user as is. Failures
//! of a whole record are collected in [`ValidationErrors`], which is never
//! empty.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The fields of a user input record that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
}

impl Field {
    /// Returns the field identifier as it appears in the input record
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every rule a user input record can violate.
///
/// The display text of each kind is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    #[error("Name is required")]
    MissingName,
    #[error("Invalid email format")]
    InvalidEmailFormat,
}

impl ValidationErrorKind {
    /// Returns the field this kind of error is reported against
    pub fn field(self) -> Field {
        match self {
            ValidationErrorKind::MissingName => Field::Name,
            ValidationErrorKind::InvalidEmailFormat => Field::Email,
        }
    }
}

/// A single violated rule: which field failed, why, and what to tell the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    field: Field,
    #[serde(rename = "code")]
    kind: ValidationErrorKind,
    message: String,
}

impl FieldError {
    pub fn new(kind: ValidationErrorKind) -> Self {
        Self {
            field: kind.field(),
            kind,
            message: kind.to_string(),
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// Returns the ready-to-display message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ValidationErrorKind> for FieldError {
    fn from(kind: ValidationErrorKind) -> Self {
        Self::new(kind)
    }
}

/// A non-empty, ordered list of field errors.
///
/// It can only be built from a first error, so holding one always means at
/// least one rule was violated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Error)]
#[serde(transparent)]
#[error("{}", join_messages(.0))]
pub struct ValidationErrors(Vec<FieldError>);

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    /// Appends another violation after the ones already collected
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false, a `ValidationErrors` holds at least one error
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Returns whether a violation of the given kind was collected
    pub fn contains(&self, kind: ValidationErrorKind) -> bool {
        self.0.iter().any(|error| error.kind() == kind)
    }

    pub fn kinds(&self) -> Vec<ValidationErrorKind> {
        self.0.iter().map(FieldError::kind).collect()
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
