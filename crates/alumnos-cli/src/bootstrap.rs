//! CLI bootstrap - the composition root for commands that touch the local
//! database.
//!
//! `list` talks to the remote collection and `serve` composes its own
//! server context, so neither goes through here.

use std::path::{Path, PathBuf};

use anyhow::Result;

use alumnos_core::StudentService;
use alumnos_core::paths::{database_path, database_path_in};
use alumnos_db::{CoreFactory, setup_database};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
}

impl CliConfig {
    /// Create config with the default database location.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            database_path: database_path()?,
        })
    }

    /// Create config rooted at an explicit data directory.
    pub fn with_data_dir(data_dir: &Path) -> Result<Self> {
        Ok(Self {
            database_path: database_path_in(data_dir)?,
        })
    }

    /// Resolve from the `--data-dir` override, falling back to the defaults.
    pub fn resolve(data_dir: Option<&Path>) -> Result<Self> {
        data_dir.map_or_else(Self::with_defaults, Self::with_data_dir)
    }
}

/// Composed context handed to the local command handlers.
pub struct CliContext {
    /// Student CRUD over the local database.
    pub students: StudentService,
}

/// Open the local database and wire up the services.
pub async fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    let pool = setup_database(&config.database_path).await?;
    tracing::debug!(database = %config.database_path.display(), "CLI context ready");

    Ok(CliContext {
        students: CoreFactory::student_service(pool),
    })
}
