//! Runtime validation of user input.
//!
//! A `UserInput` record (`name` and `email`) is validated against every rule
//! at once, sanitized, and handed back either as a clean record or as the
//! full list of field errors. The same pipeline is exposed over HTTP and as an
//! interactive terminal form.

pub mod backend;
pub mod config;
pub mod consts;
pub mod form;
pub mod processing;
pub mod utils;
