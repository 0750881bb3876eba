//! CLI Argument Parsing
//!
//! Global flags (`--json`, `--verbose`, `--project-root`) are inherited by
//! all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::entities::PackageSelection;

/// plasma-compose - merge layered packages into the composed image tree
#[derive(Parser, Debug)]
#[command(name = "plasma-compose")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of log lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project root (defaults to the nearest directory with compose.toml, .compose/ or .git)
    #[arg(long, global = true)]
    pub project_root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge all selected packages into the output tree
    Build {
        /// Select a package target, overriding compose.toml (repeatable)
        #[arg(short, long = "package", value_name = "NAME=TARGET")]
        packages: Vec<PackageSelection>,

        /// Merge into the existing output instead of rebuilding it from scratch
        #[arg(long)]
        no_clean: bool,
    },

    /// Show how each selected package would be read, without writing
    Inspect {
        /// Select a package target, overriding compose.toml (repeatable)
        #[arg(short, long = "package", value_name = "NAME=TARGET")]
        packages: Vec<PackageSelection>,
    },

    /// List the recognised layer names
    Layers,
}

impl Cli {
    /// Default log filter for the given verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn,plasma_compose=info",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
