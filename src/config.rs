//! Runtime configuration for the HTTP server.
//!
//! Values come from the environment (a `.env` file is loaded by the binary
//! beforehand) and fall back to the defaults in [`consts`](crate::consts).

use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::consts::{
    HTTP_HOST, HTTP_HOST_VAR, HTTP_PORT, HTTP_PORT_VAR, REQUEST_TIMEOUT_SECS, REQUEST_TIMEOUT_VAR,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(HTTP_HOST, HTTP_PORT),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    /// Unset keys take their default; malformed values are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup(HTTP_HOST_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .with_context(|| format!("Invalid {HTTP_HOST_VAR} value: {raw}"))?,
            None => HTTP_HOST,
        };

        let port = match lookup(HTTP_PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid {HTTP_PORT_VAR} value: {raw}"))?,
            None => HTTP_PORT,
        };

        let timeout_secs = match lookup(REQUEST_TIMEOUT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("Invalid {REQUEST_TIMEOUT_VAR} value: {raw}"))?,
            None => REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_values_from_environment() {
        let config = Config::from_lookup(lookup_from(&[
            ("HTTP_HOST", "127.0.0.1"),
            ("HTTP_PORT", " 3000 "),
            ("REQUEST_TIMEOUT_SECS", "2"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.request_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_malformed_values() {
        let cases = vec![
            ("HTTP_HOST", "localhost:80"),
            ("HTTP_PORT", "eighty"),
            ("HTTP_PORT", "70000"),
            ("REQUEST_TIMEOUT_SECS", "-1"),
        ];

        for (key, value) in cases {
            let result = Config::from_lookup(lookup_from(&[(key, value)]));
            let error = result.expect_err("malformed value was accepted");
            assert!(
                error.to_string().contains(key),
                "Error for {}={} should name the variable",
                key,
                value
            );
        }
    }
}
