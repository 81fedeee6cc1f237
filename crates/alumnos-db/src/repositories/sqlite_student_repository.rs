//! `SQLite` implementation of the `StudentRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use alumnos_core::{NewStudent, RepositoryError, Student, StudentRepository};

use super::row_mappers::{STUDENT_SELECT_COLUMNS, row_to_student};

/// `SQLite` implementation of the `StudentRepository` trait.
///
/// Free-form attributes are stored as a JSON object in the `attributes`
/// column.
pub struct SqliteStudentRepository {
    pool: SqlitePool,
}

impl SqliteStudentRepository {
    /// Create a new `SQLite` student repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for SqliteStudentRepository {
    async fn list(&self) -> Result<Vec<Student>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {STUDENT_SELECT_COLUMNS} FROM students ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_student).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Student, RepositoryError> {
        let row = sqlx::query(&format!(
            "SELECT {STUDENT_SELECT_COLUMNS} FROM students WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?
        .ok_or_else(|| RepositoryError::NotFound(format!("student id={id}")))?;

        row_to_student(&row)
    }

    async fn insert(&self, student: &NewStudent) -> Result<Student, RepositoryError> {
        let attributes = serde_json::to_string(&student.attributes)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        let created_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let result =
            sqlx::query("INSERT INTO students (name, attributes, created_at) VALUES (?, ?, ?)")
                .bind(&student.name)
                .bind(&attributes)
                .bind(&created_at)
                .execute(&self.pool)
                .await
                .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, "Inserted student row");

        Ok(student.clone().into_student(id))
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("student id={id}")));
        }

        Ok(())
    }
}
