//! Database path resolution.
//!
//! Provides the canonical path to the alumnos `SQLite` database file.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;
use super::platform::data_root;

/// Get the path to the alumnos database file under the data root.
///
/// The `data/` subdirectory is created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    database_path_in(&data_root()?)
}

/// Get the path to `alumnos.db` below an explicit root directory.
pub fn database_path_in(root: &Path) -> Result<PathBuf, PathError> {
    let data_dir = root.join("data");

    fs::create_dir_all(&data_dir).map_err(|e| PathError::CreateFailed {
        path: data_dir.clone(),
        reason: e.to_string(),
    })?;

    Ok(data_dir.join("alumnos.db"))
}
