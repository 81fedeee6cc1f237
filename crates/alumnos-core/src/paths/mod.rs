//! Path utilities for alumnos data directories.
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately

mod database;
mod error;
mod platform;

pub use database::{database_path, database_path_in};
pub use error::PathError;
pub use platform::data_root;
