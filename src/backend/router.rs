//! Route configuration.
//! Declares the routes and installs the timeout and CORS middlewares.

use axum::error_handling::HandleErrorLayer;
use axum::{
    routing::{get, post},
    BoxError, Router,
};
use http::StatusCode;
use log::warn;
use tower::timeout::{error::Elapsed, TimeoutLayer};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::backend::handlers::{health, validate_user_input};
use crate::config::Config;
use crate::utils::error_messages::{INTERNAL_ERROR, TIMEOUT_ERROR};

/// Builds the main router and its middlewares
pub fn get_router(config: &Config) -> Router {
    let service = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(handle_middleware_error))
        .layer(TimeoutLayer::new(config.request_timeout));

    let router = routes().layer(service);

    // Permissive CORS for browser clients, debug builds only
    if cfg!(debug_assertions) {
        let cors = CorsLayer::new()
            .allow_methods(tower_http::cors::AllowMethods::any())
            .allow_headers(Any)
            .allow_origin(Any);
        router.layer(cors)
    } else {
        router
    }
}

fn routes() -> Router {
    Router::new()
        .route("/health", get(health)) // Liveness probe
        .route("/validate", post(validate_user_input)) // Validation of a user input record
}

async fn handle_middleware_error(error: BoxError) -> (StatusCode, &'static str) {
    if error.is::<Elapsed>() {
        (StatusCode::REQUEST_TIMEOUT, TIMEOUT_ERROR)
    } else {
        warn!("Unhandled middleware error: {}", error);
        (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
    }
}
