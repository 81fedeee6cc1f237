//! Platform-specific data root resolution.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the data root.
const DATA_DIR_ENV: &str = "ALUMNOS_DATA_DIR";

/// Get the root directory for application data (database).
///
/// Resolution order:
/// 1. `ALUMNOS_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/alumnos`)
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(path));
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    let root = data_dir.join("alumnos");

    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}
