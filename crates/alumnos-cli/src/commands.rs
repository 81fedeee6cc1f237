//! Subcommand definitions.

use clap::Subcommand;
use serde_json::Value;

use alumnos_axum::bootstrap::DEFAULT_PORT;

use crate::handlers::add::parse_attribute;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch and print every student from the remote collection
    List {
        /// Collection address (defaults to http://localhost:8080/alumnos)
        #[arg(long, env = "ALUMNOS_URL")]
        url: Option<String>,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout: u64,
    },
    /// Serve the local database over HTTP
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Restrict CORS to these origins (repeatable; all origins when omitted)
        #[arg(long = "allow-origin")]
        allow_origins: Vec<String>,
    },
    /// Add a student to the local database
    Add {
        /// Student name
        name: String,

        /// Extra field as key=value (repeatable; JSON values are parsed)
        #[arg(long = "attr", value_parser = parse_attribute)]
        attributes: Vec<(String, Value)>,
    },
    /// Remove a student from the local database
    Remove {
        /// Student id
        id: i64,
    },
}
