//! Error types for Relayscout

use thiserror::Error;

/// Main error type for Relayscout
///
/// Unreachable relays and malformed address strings are not errors; they
/// are absorbed inside the pipeline. Only directory retrieval and decoding
/// problems surface to the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// Failure to obtain or decode the relay directory.
    #[error("Fetching error, {0}")]
    Fetch(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for Relayscout
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_message() {
        let err = Error::Fetch("relays not found".to_string());
        assert_eq!(err.to_string(), "Fetching error, relays not found");
    }
}
