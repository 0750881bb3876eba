//! plasma-compose CLI
//!
//! Usage: plasma-compose <COMMAND>
//!
//! Commands:
//!   build    Merge all selected packages into the output tree
//!   inspect  Show how each selected package would be read
//!   layers   List the recognised layer names

mod commands;

use anyhow::{Context, Result};
use clap::Parser;

use plasma_compose::presentation::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_level()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(2);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let project_root = cli.project_root.as_deref();

    match cli.command {
        Commands::Build { packages, no_clean } => {
            commands::build::cmd_build(project_root, packages, no_clean, cli.json)
        }
        Commands::Inspect { packages } => {
            commands::inspect::cmd_inspect(project_root, packages, cli.json)
        }
        Commands::Layers => commands::layers::cmd_layers(cli.json),
    }
}

/// Initialize tracing subscriber for logging (stderr, so stdout stays clean)
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .init();

    Ok(())
}
