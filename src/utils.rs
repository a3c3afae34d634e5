//! Shared helpers: user-facing messages and the validation system.

pub mod error_messages;
pub mod validation;
