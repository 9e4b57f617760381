//! Error types for folio-core.
//!
//! Two failure kinds exist: the configuration could not be loaded at startup,
//! or a single search request failed. Neither is retried.

use thiserror::Error;

/// Errors that can occur while loading the search service configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The configuration resource could not be fetched
    #[error("Failed to fetch configuration: {0}")]
    Fetch(String),
    /// The payload is not valid JSON or has the wrong shape
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
    /// The payload parsed but its values are unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors that can occur during a search request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The request never produced a response (network, timeout, CORS)
    #[error("Search request failed: {0}")]
    Request(String),
    /// The service answered with a non-success status
    #[error("Search service returned {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape
    #[error("Failed to decode search response: {0}")]
    Decode(String),
}

impl From<ConfigError> for String {
    fn from(err: ConfigError) -> String {
        err.to_string()
    }
}

impl From<SearchError> for String {
    fn from(err: SearchError) -> String {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = SearchError::Status {
            status: 401,
            message: "Forbidden - a valid `x-typesense-api-key` header must be sent.".into(),
        };
        assert!(err.to_string().starts_with("Search service returned 401"));
    }

    #[test]
    fn test_config_error_into_string() {
        let message: String = ConfigError::Invalid("port must not be 0".into()).into();
        assert_eq!(message, "Invalid configuration: port must not be 0");
    }
}
