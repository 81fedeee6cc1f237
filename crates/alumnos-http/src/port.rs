//! Port trait implementation for `StudentsClient`.
//!
//! Implements the core-owned `StudentDirectoryPort` and maps transport
//! errors onto `StudentDirectoryError` without retrying or recovering.

use alumnos_core::ports::{StudentDirectoryError, StudentDirectoryPort, StudentDirectoryResult};
use alumnos_core::Student;
use async_trait::async_trait;

use crate::client::StudentsClient;
use crate::error::HttpClientError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

impl From<HttpClientError> for StudentDirectoryError {
    fn from(err: HttpClientError) -> Self {
        match err {
            HttpClientError::ApiRequestFailed { status, url } => Self::Http { status, url },
            HttpClientError::Network(e) => {
                // reqwest reports decode failures through the same error type
                if e.is_decode() {
                    Self::InvalidResponse {
                        message: e.to_string(),
                    }
                } else {
                    Self::Network {
                        message: e.to_string(),
                    }
                }
            }
            HttpClientError::InvalidUrl(e) => Self::Configuration {
                message: e.to_string(),
            },
            HttpClientError::JsonParse(e) => Self::InvalidResponse {
                message: e.to_string(),
            },
        }
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> StudentDirectoryPort for StudentsClient<B> {
    async fn fetch_all_students(&self) -> StudentDirectoryResult<Vec<Student>> {
        let students = self.get_students().await?;
        tracing::debug!(
            url = %self.collection_url(),
            count = students.len(),
            "Fetched students"
        );
        Ok(students)
    }
}
