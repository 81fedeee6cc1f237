//! CLI-specific error types and mappings.
//!
//! Maps core and transport errors to exit codes and user-facing messages.

use alumnos_core::{CoreError, RepositoryError, StudentDirectoryError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument or input validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The requested record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// The remote collection could not be reached or answered with an error.
    #[error("Remote error: {0}")]
    Remote(String),

    /// The remote collection answered with something that is not a student list.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,        // EX_USAGE
            Self::InvalidResponse(_) => 65, // EX_DATAERR
            Self::NotFound(_) => 66,        // EX_NOINPUT
            Self::Remote(_) => 69,          // EX_UNAVAILABLE
            Self::Database(_) => 73,        // EX_CANTCREAT (closest fit)
            Self::Config(_) => 78,          // EX_CONFIG
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(RepositoryError::NotFound(msg)) => Self::NotFound(msg),
            CoreError::Repository(repo_err) => Self::Database(repo_err.to_string()),
            CoreError::Validation(msg) => Self::Arguments(msg),
        }
    }
}

impl From<StudentDirectoryError> for CliError {
    fn from(err: StudentDirectoryError) -> Self {
        match err {
            StudentDirectoryError::Http { .. } | StudentDirectoryError::Network { .. } => {
                Self::Remote(err.to_string())
            }
            StudentDirectoryError::InvalidResponse { message } => Self::InvalidResponse(message),
            StudentDirectoryError::Configuration { message } => Self::Config(message),
        }
    }
}
