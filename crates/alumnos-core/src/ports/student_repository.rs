//! Student repository trait definition.
//!
//! This port defines the interface for student persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewStudent, Student};

/// Repository for student persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - CRUD-only: list, get, insert, delete
/// - Validation belongs in `StudentService`, not here
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// List all students, ordered by id.
    async fn list(&self) -> Result<Vec<Student>, RepositoryError>;

    /// Get a student by id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the student doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Student, RepositoryError>;

    /// Insert a new student and return it with its assigned id.
    async fn insert(&self, student: &NewStudent) -> Result<Student, RepositoryError>;

    /// Delete a student by id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the student doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
