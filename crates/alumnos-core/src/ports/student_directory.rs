//! Remote student directory port.
//!
//! The directory is a read-only view of a remote student collection.
//! The implementation lives in `alumnos-http`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Student;

/// Errors from the remote student directory.
///
/// All of these are transport failures: nothing is retried or recovered
/// on this side of the port, the caller decides what to do.
#[derive(Debug, Error)]
pub enum StudentDirectoryError {
    /// The collection answered with a non-success status.
    #[error("Request to {url} failed with HTTP status {status}")]
    Http {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The collection could not be reached.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The body could not be decoded as a list of students.
    #[error("Invalid response body: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// The client was configured with an unusable address.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

impl StudentDirectoryError {
    /// HTTP status carried by the error, if the server answered at all.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for directory operations.
pub type StudentDirectoryResult<T> = Result<T, StudentDirectoryError>;

/// Port trait for reading the remote student collection.
///
/// # Activation
///
/// Calling `fetch_all_students` only builds a future. Nothing is sent
/// until that future is awaited, and every await of a fresh call sends
/// exactly one request. Dropping the future before it resolves cancels
/// the request.
#[async_trait]
pub trait StudentDirectoryPort: Send + Sync {
    /// Fetch every student in the collection.
    ///
    /// Resolves to exactly one list on success or exactly one error;
    /// a partial list is never returned.
    async fn fetch_all_students(&self) -> StudentDirectoryResult<Vec<Student>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn StudentDirectoryPort>) {}

    #[test]
    fn test_error_display() {
        let err = StudentDirectoryError::Http {
            status: 404,
            url: "http://localhost:8080/alumnos".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("/alumnos"));
        assert_eq!(err.status(), Some(404));

        let err = StudentDirectoryError::Network {
            message: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("connection refused"));
        assert_eq!(err.status(), None);
    }
}
