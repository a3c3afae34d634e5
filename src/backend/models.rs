//! Response bodies returned by the API.

use serde::Serialize;

use crate::utils::validation::ValidationErrors;

/// Body of a `422` response: a summary and every violated rule
#[derive(Debug, Serialize)]
pub struct ValidationFailure {
    pub error: &'static str,   // Generic summary
    pub errors: ValidationErrors, // One entry per violated rule
}
