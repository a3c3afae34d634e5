//! The user input record and the states it goes through.
//!
//! `UserInput` is what a caller hands in. `ValidatedUserInput` can only be
//! obtained from [`validate`](crate::utils::validation::validate) and wraps the
//! record unchanged. `SanitizedUserInput` is the normalized form that is safe
//! to store or display.

use serde::{Deserialize, Serialize};

use super::{EmailInput, NameInput};

/// Raw user input, as submitted by a form or an API request.
///
/// A missing attribute deserializes as an empty string so that it is reported
/// as a validation error rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl UserInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A `UserInput` that passed every validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ValidatedUserInput(UserInput);

impl ValidatedUserInput {
    pub(crate) fn new(input: UserInput) -> Self {
        Self(input)
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn into_inner(self) -> UserInput {
        self.0
    }
}

impl AsRef<UserInput> for ValidatedUserInput {
    fn as_ref(&self) -> &UserInput {
        &self.0
    }
}

/// The normalized form of a validated input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SanitizedUserInput {
    name: NameInput,
    email: EmailInput,
}

impl SanitizedUserInput {
    pub(crate) fn new(name: NameInput, email: EmailInput) -> Self {
        Self { name, email }
    }

    pub fn name(&self) -> &NameInput {
        &self.name
    }

    pub fn email(&self) -> &EmailInput {
        &self.email
    }
}
