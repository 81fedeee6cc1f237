//! Serve command handler.

use std::path::Path;

use anyhow::Result;

use alumnos_axum::{CorsConfig, ServerConfig, start_server};
use alumnos_core::database_path_in;

/// Build the server configuration from the command arguments.
///
/// Without `--data-dir` the server uses its default database location.
pub fn server_config(
    port: u16,
    allow_origins: Vec<String>,
    data_dir: Option<&Path>,
) -> Result<ServerConfig> {
    let cors = if allow_origins.is_empty() {
        CorsConfig::AllowAll
    } else {
        CorsConfig::AllowOrigins(allow_origins)
    };

    let config = match data_dir {
        Some(dir) => ServerConfig::new(database_path_in(dir)?),
        None => ServerConfig::with_defaults()?,
    };

    Ok(config.with_port(port).with_cors(cors))
}

/// Execute the serve command. Runs until Ctrl+C.
pub async fn execute(config: ServerConfig) -> Result<()> {
    println!("Serving students on http://0.0.0.0:{}/alumnos", config.port);
    start_server(config).await
}
