//! Command handlers.
//!
//! Each handler is a thin wrapper: it takes its dependencies explicitly,
//! calls a port or service and formats the result for the terminal.
//! Domain errors are converted to `CliError` so `main` can pick the exit
//! code.

pub mod add;
pub mod list;
pub mod remove;
pub mod serve;
