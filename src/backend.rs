//! HTTP surface of the service.
//! Contains the route handlers, the response models and the router.
pub mod handlers;
mod models;
pub mod router;
