//! Student handlers - list, create and delete.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;

use alumnos_core::{NewStudent, Student};

use crate::error::HttpError;
use crate::state::AppState;

/// List all students.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Student>>, HttpError> {
    Ok(Json(state.students.list().await?))
}

/// Create a student and return it with its assigned id.
///
/// Body rejections are reported through `HttpError` so every failure has
/// the same JSON shape.
pub async fn create(
    State(state): State<AppState>,
    req: Result<Json<NewStudent>, JsonRejection>,
) -> Result<Json<Student>, HttpError> {
    let Json(req) = req?;
    Ok(Json(state.students.add(req).await?))
}

/// Delete a student. Responds with an empty `200`.
pub async fn remove(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, HttpError> {
    let Path(id) = id?;
    state.students.remove(id).await?;
    Ok(StatusCode::OK)
}
