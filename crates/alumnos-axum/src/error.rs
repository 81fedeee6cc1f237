//! Axum-specific error types and mappings.
//!
//! Maps `CoreError` and `RepositoryError` to HTTP status codes and JSON
//! response bodies.

use alumnos_core::{CoreError, RepositoryError};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Validation(msg) => Self::BadRequest(msg),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => Self::NotFound(msg),
            RepositoryError::Storage(msg) => Self::Internal(format!("Storage: {msg}")),
            RepositoryError::Serialization(msg) => Self::Internal(format!("Serialization: {msg}")),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let not_found: HttpError = CoreError::from(RepositoryError::NotFound("x".into())).into();
        assert!(matches!(not_found, HttpError::NotFound(_)));

        let invalid: HttpError = CoreError::Validation("blank".into()).into();
        assert!(matches!(invalid, HttpError::BadRequest(_)));

        let storage: HttpError = RepositoryError::Storage("disk".into()).into();
        assert!(matches!(storage, HttpError::Internal(m) if m == "Storage: disk"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            HttpError::NotFound(String::new()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            HttpError::BadRequest(String::new()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            HttpError::Internal(String::new()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
