//! Generic user-facing messages for failures that are not tied to a field

pub const VALIDATION_ERROR: &str = "Validation failed";

pub const TIMEOUT_ERROR: &str = "Request timed out";

pub const INTERNAL_ERROR: &str = "Internal error";
