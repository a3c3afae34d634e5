//! Constants used throughout the validation system

/// Maximum length of an email address (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Upper bound on normalize-then-strip passes over a name
pub const MAX_SANITIZE_ROUNDS: usize = 8;
