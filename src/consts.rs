//! Default values and environment variable names for the configuration.

use std::net::{IpAddr, Ipv4Addr};

pub const HTTP_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED); // Listen on every interface by default.
pub const HTTP_PORT: u16 = 8080; // Default HTTP port.
pub const REQUEST_TIMEOUT_SECS: u64 = 10; // Per-request time budget.

pub const HTTP_HOST_VAR: &str = "HTTP_HOST";
pub const HTTP_PORT_VAR: &str = "HTTP_PORT";
pub const REQUEST_TIMEOUT_VAR: &str = "REQUEST_TIMEOUT_SECS";
