//! rentroll - Command Line Rent Schedules
//!
//! This is the operational entry point for the rent_core library.
//!
//! # Commands
//!
//! - `rentroll schedule --contract <file>` - Print the month-by-month rent schedule
//! - `rentroll check --contract <file>` - Validate a contract file
//!
//! # Configuration
//!
//! Settings come from `--config` (or `rentroll.toml` in the working
//! directory), overridden by `RENTROLL_*` environment variables and flags.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{build_config, CliArgs};

/// Lease rent schedule CLI
#[derive(Parser)]
#[command(name = "rentroll")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "RENTROLL_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the rent schedule for a contract
    Schedule {
        /// Path to contract file (JSON/TOML)
        #[arg(short = 'k', long)]
        contract: String,

        /// Output format (table, json, csv)
        #[arg(short, long, env = "RENTROLL_FORMAT")]
        format: Option<String>,

        /// Only print records due inside the contract window
        #[arg(short, long)]
        window_only: bool,

        /// Proration convention for the first month (30-day, actual)
        #[arg(short, long, env = "RENTROLL_PRORATION")]
        proration: Option<String>,
    },

    /// Validate a contract file
    Check {
        /// Path to contract file (JSON/TOML)
        #[arg(short = 'k', long)]
        contract: String,
    },
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cli_args = CliArgs {
        config_file: cli.config.clone(),
        log_level: cli.log_level.clone(),
        verbose: cli.verbose,
        ..Default::default()
    };
    if let Commands::Schedule {
        format,
        window_only,
        ..
    } = &cli.command
    {
        cli_args.format = format.clone();
        cli_args.window_only = *window_only;
    }
    let config = build_config(&cli_args)?;

    init_tracing(config.log_level.as_filter_str());

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Schedule {
            contract,
            proration,
            ..
        } => commands::schedule::run(&contract, proration.as_deref(), &config),
        Commands::Check { contract } => commands::check::run(&contract).map(|_| ()),
    }
}
