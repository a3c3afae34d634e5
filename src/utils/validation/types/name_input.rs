//! Provides a sanitized person name.
//!
//! A name is made safe for later display by:
//! - Normalizing surrounding whitespace
//! - Normalizing Unicode to NFKC
//! - Stripping every HTML tag (text content is kept, escaped)
//!
//! The last two steps repeat until the text stops changing: stripping decodes
//! character references, and a decoded character may fold again under NFKC
//! (`&#xFF1C;` becomes `＜`, then `<`).

use serde::Serialize;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

use crate::utils::validation::validators::validate_name;
use crate::utils::validation::{FieldError, MAX_SANITIZE_ROUNDS};

/// A name that passed validation and went through sanitization.
/// The content is never empty and contains no markup.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NameInput {
    name: String,
}

impl NameInput {
    /// Creates a new `NameInput` from raw user text.
    ///
    /// Fails with `MissingName` when nothing is left once whitespace and
    /// markup are removed, e.g. for `"<b></b>"`.
    pub fn new(name: &str) -> Result<Self, FieldError> {
        let sanitized = sanitize_name(name);

        validate_name(&sanitized)?;

        Ok(Self { name: sanitized })
    }

    /// Returns the sanitized name as a string slice
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

/// Runs normalize-then-strip up to a fixed point
fn sanitize_name(name: &str) -> String {
    // Normalize before stripping, NFKC folds fullwidth brackets into '<' and '>'
    let mut current = normalize(name);

    for _ in 0..MAX_SANITIZE_ROUNDS {
        let next = normalize(&strip_markup(&current));
        if next == current {
            return current;
        }
        current = next;
    }

    // Still unstable, escape everything that is left
    ammonia::clean_text(&current)
}

fn normalize(text: &str) -> String {
    text.trim().nfkc().collect::<String>().trim().to_owned()
}

fn strip_markup(text: &str) -> String {
    // An empty builder allows no tags at all
    ammonia::Builder::empty().clean(text).to_string()
}

impl fmt::Display for NameInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl AsRef<str> for NameInput {
    fn as_ref(&self) -> &str {
        &self.name
    }
}
