//! Student service - orchestrates student CRUD operations.

use crate::domain::{NewStudent, Student};
use crate::ports::{CoreError, RepositoryError, StudentRepository};
use std::sync::Arc;

/// Service for student operations.
///
/// Delegates to the injected `StudentRepository`, adding input validation
/// on insert and nothing else.
#[derive(Clone)]
pub struct StudentService {
    repo: Arc<dyn StudentRepository>,
}

impl StudentService {
    /// Create a new student service with the given repository.
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self { repo }
    }

    /// List all students.
    pub async fn list(&self) -> Result<Vec<Student>, CoreError> {
        self.repo.list().await.map_err(CoreError::from)
    }

    /// Get a student by id, `None` if it doesn't exist.
    pub async fn get(&self, id: i64) -> Result<Option<Student>, CoreError> {
        match self.repo.get_by_id(id).await {
            Ok(student) => Ok(Some(student)),
            Err(RepositoryError::NotFound(_)) => Ok(None),
            Err(e) => Err(CoreError::from(e)),
        }
    }

    /// Validate and store a new student.
    pub async fn add(&self, student: NewStudent) -> Result<Student, CoreError> {
        student.validate()?;
        let stored = self.repo.insert(&student).await?;
        tracing::info!(id = stored.id, name = %stored.name, "Student added");
        Ok(stored)
    }

    /// Remove a student by id and return the removed record.
    pub async fn remove(&self, id: i64) -> Result<Student, CoreError> {
        let student = self.repo.get_by_id(id).await?;
        self.repo.delete(id).await?;
        tracing::info!(id, "Student removed");
        Ok(student)
    }
}
