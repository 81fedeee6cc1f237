//! Axum server bootstrap - the composition root.
//!
//! The only place in this crate where infrastructure is wired together.

use std::path::PathBuf;

use anyhow::Result;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use alumnos_core::StudentService;
use alumnos_core::paths::database_path;
use alumnos_db::{CoreFactory, setup_database};

use crate::routes::create_router;

/// Default port for the HTTP server.
pub const DEFAULT_PORT: u16 = 8080;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with the default port and CORS policy over the given database.
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            port: DEFAULT_PORT,
            database_path: database_path.into(),
            cors: CorsConfig::default(),
        }
    }

    /// Create config with the default port and database location.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(database_path()?))
    }

    /// Set the listening port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the database file.
    #[must_use]
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }

    /// Set the CORS policy.
    #[must_use]
    pub fn with_cors(mut self, cors: CorsConfig) -> Self {
        self.cors = cors;
        self
    }
}

/// Services shared by all handlers.
#[derive(Clone)]
pub struct AxumContext {
    /// Student CRUD over the local database.
    pub students: StudentService,
}

impl AxumContext {
    pub const fn new(students: StudentService) -> Self {
        Self { students }
    }
}

/// Open the database and build the handler context.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let pool = setup_database(&config.database_path).await?;
    info!(database = %config.database_path.display(), "Database opened");

    Ok(AxumContext::new(CoreFactory::student_service(pool)))
}

/// Bootstrap and run the server until Ctrl+C (or SIGTERM on unix).
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config).await?;
    let app = create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("alumnos web server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("alumnos web server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Signal received, starting graceful shutdown");
}
