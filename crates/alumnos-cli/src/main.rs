//! CLI entry point - the composition root.
//!
//! Parses arguments, installs logging and dispatches to handlers. Errors
//! that carry a `CliError` pick the process exit code.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use alumnos_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() {
    // Load .env before parsing so clap's env fallbacks see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli).await {
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        eprintln!("Error: {err:#}");
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::List { url, timeout } => {
            let client = handlers::list::client(url, timeout)?;
            handlers::list::execute(&client).await?;
        }
        Commands::Serve {
            port,
            allow_origins,
        } => {
            let config =
                handlers::serve::server_config(port, allow_origins, cli.data_dir.as_deref())?;
            handlers::serve::execute(config).await?;
        }
        Commands::Add { name, attributes } => {
            let ctx = bootstrap(&CliConfig::resolve(cli.data_dir.as_deref())?).await?;
            handlers::add::execute(&ctx, &name, attributes).await?;
        }
        Commands::Remove { id } => {
            let ctx = bootstrap(&CliConfig::resolve(cli.data_dir.as_deref())?).await?;
            handlers::remove::execute(&ctx, id).await?;
        }
    }

    Ok(())
}
