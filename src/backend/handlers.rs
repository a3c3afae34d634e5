//! Route handlers.
//! Server-side entry point of the validation pipeline.

use axum::{
    extract::{rejection::JsonRejection, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{debug, warn};

use crate::backend::models::ValidationFailure;
use crate::processing::process_user_input;
use crate::utils::error_messages::VALIDATION_ERROR;
use crate::utils::validation::UserInput;

/// Liveness probe
pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Validates and sanitizes a submitted `UserInput`.
///
/// - `200` with the sanitized record when every rule holds
/// - `422` with every violated rule otherwise
/// - `400` when the body is not a JSON object of the expected shape
pub async fn validate_user_input(payload: Result<Json<UserInput>, JsonRejection>) -> Response {
    let Json(input) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!("Rejected malformed payload: {}", rejection.body_text());
            return (StatusCode::BAD_REQUEST, VALIDATION_ERROR).into_response();
        }
    };

    match process_user_input(&input) {
        Ok(sanitized) => (StatusCode::OK, Json(sanitized)).into_response(),
        Err(errors) => {
            debug!("Returning {} validation error(s)", errors.len());
            let body = ValidationFailure {
                error: VALIDATION_ERROR,
                errors,
            };
            (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
        }
    }
}
