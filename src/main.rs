//! Binary entry point for census-analyser.
//!
//! This binary provides the CLI interface over the census analyser library.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

mod commands;

use census_analyser::config::AnalyserConfig;
use census_analyser::observability;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use commands::SortArgs;

/// Census analyser - sorted JSON projections of state census data.
#[derive(Parser)]
#[command(name = "census-analyser")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true, env = "CENSUS_ANALYSER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Load a dataset and print its record count.
    Load {
        /// Dataset: census, state-codes, or auto (detect from header).
        dataset: String,

        /// Input file (defaults to the configured path for the dataset).
        path: Option<PathBuf>,
    },

    /// Load, sort and print a dataset as JSON.
    Sort(SortArgs),

    /// Show the effective configuration.
    Config,
}

/// Main entry point.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AnalyserConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = observability::init_from_settings(&config.logging, cli.verbose) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let kind = e
                .chain()
                .find_map(|cause| cause.downcast_ref::<census_analyser::Error>())
                .map(census_analyser::Error::kind);
            match kind {
                Some(kind) => eprintln!("Error [{kind}]: {e:#}"),
                None => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command.
fn run_command(cli: Cli, config: AnalyserConfig) -> anyhow::Result<()> {
    match cli.command {
        Commands::Load { dataset, path } => commands::cmd_load(&config, &dataset, path),
        Commands::Sort(args) => commands::cmd_sort(config, args),
        Commands::Config => commands::cmd_config(&config),
    }
}
