//! Environment configuration
//!
//! Read once at process start and passed by value; nothing here is
//! consulted again after startup.

use std::env;

use crate::error::{Error, Result};

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Number of relay entries to aim for per run.
    pub relays_number: usize,
    /// Verbose logging toggle.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request_timeout_secs: 5,
            relays_number: 30,
            debug: true,
        }
    }
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    ///
    /// Recognized variables: `REQUEST_TIMEOUT`, `RELAYS_NUMBER`, `DEBUG`.
    /// Both numeric values must be positive integers.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(value) = env::var("DEBUG") {
            config.debug = value == "1" || value == "true";
        }

        if let Ok(value) = env::var("REQUEST_TIMEOUT") {
            config.request_timeout_secs = parse_positive(&value, "REQUEST_TIMEOUT")?;
        }

        if let Ok(value) = env::var("RELAYS_NUMBER") {
            config.relays_number = parse_positive(&value, "RELAYS_NUMBER")? as usize;
        }

        Ok(config)
    }
}

fn parse_positive(value: &str, name: &str) -> Result<u64> {
    match value.parse::<u64>() {
        Ok(0) | Err(_) => Err(Error::Config(format!(
            "{} must be a positive integer, got {:?}",
            name, value
        ))),
        Ok(v) => Ok(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.relays_number, 30);
        assert!(config.debug);
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("7", "X").unwrap(), 7);
        assert!(parse_positive("0", "X").is_err());
        assert!(parse_positive("soon", "X").is_err());
        assert!(parse_positive("-1", "X").is_err());
    }
}
