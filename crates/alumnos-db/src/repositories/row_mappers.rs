//! Row mapping helpers for `SQLite` queries.

use alumnos_core::{RepositoryError, Student, StudentAttributes};
use sqlx::Row;

/// Shared SELECT column list for student queries.
pub const STUDENT_SELECT_COLUMNS: &str = "id, name, attributes";

/// Parse a database row into a `Student`.
pub fn row_to_student(row: &sqlx::sqlite::SqliteRow) -> Result<Student, RepositoryError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    let name: String = row
        .try_get("name")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    let attributes_json: String = row
        .try_get("attributes")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    let attributes: StudentAttributes = serde_json::from_str(&attributes_json)
        .map_err(|e| RepositoryError::Serialization(format!("student {id}: {e}")))?;

    Ok(Student {
        id,
        name,
        attributes,
    })
}
