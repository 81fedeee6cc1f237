//! Composition utilities for building services with `SQLite` backends.
//!
//! Construction only; no domain logic lives here.

use sqlx::SqlitePool;
use std::sync::Arc;

use alumnos_core::StudentService;

use crate::repositories::SqliteStudentRepository;

/// Factory for creating repository and service instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Create a `SQLite` connection pool.
    ///
    /// # Arguments
    ///
    /// * `db_url` - `SQLite` connection URL (e.g., "sqlite:/var/lib/alumnos/alumnos.db")
    pub async fn create_pool(db_url: &str) -> anyhow::Result<SqlitePool> {
        let pool = SqlitePool::connect(db_url).await?;
        Ok(pool)
    }

    /// Create an in-memory `SQLite` pool with the schema applied, for testing.
    #[cfg(any(test, feature = "test-utils"))]
    pub async fn create_test_pool() -> anyhow::Result<SqlitePool> {
        crate::setup::setup_test_database().await
    }

    /// Create a student repository from a pool.
    pub fn student_repository(pool: SqlitePool) -> Arc<SqliteStudentRepository> {
        Arc::new(SqliteStudentRepository::new(pool))
    }

    /// Build a `StudentService` backed by `SQLite`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use alumnos_db::{CoreFactory, setup_database};
    ///
    /// let pool = setup_database(&db_path).await?;
    /// let students = CoreFactory::student_service(pool);
    /// ```
    pub fn student_service(pool: SqlitePool) -> StudentService {
        StudentService::new(Self::student_repository(pool))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get a reference to the pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Build a `StudentService` over this database.
    pub fn service(&self) -> StudentService {
        CoreFactory::student_service(self.pool.clone())
    }
}
