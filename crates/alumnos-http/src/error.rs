//! Transport error types.
//!
//! These errors describe what went wrong at the HTTP level and are mapped
//! to `StudentDirectoryError` at the port boundary.

use thiserror::Error;

/// Result type alias for transport operations.
pub type HttpClientResult<T> = Result<T, HttpClientError>;

/// Errors raised by an `HttpBackend`.
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// The server answered with a non-success status.
    #[error("Request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_error_message() {
        let error = HttpClientError::ApiRequestFailed {
            status: 404,
            url: "http://localhost:8080/alumnos".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("localhost:8080"));
    }

    #[test]
    fn test_json_parse_error_from_serde() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let error: HttpClientError = source.into();
        assert!(matches!(error, HttpClientError::JsonParse(_)));
    }
}
