//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the student directory.
#[derive(Parser)]
#[command(name = "alumnos")]
#[command(about = "Query and manage a student directory")]
#[command(version)]
pub struct Cli {
    /// Override the data directory holding the local database
    #[arg(long = "data-dir", env = "ALUMNOS_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
