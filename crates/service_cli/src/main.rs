//! Option Pricer CLI - Command Line Front End for Vanilla Option Pricing
//!
//! This is the operational entry point for the vanilla option pricer.
//!
//! # Commands
//!
//! - `option-pricer price --spot S --strike K ...` - Price a single option
//! - `option-pricer batch --input <file>` - Price every row of a CSV file
//! - `option-pricer check` - Show effective configuration and run a smoke test
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate parses and validates user
//! input, then hands validated parameters to `pricer_models`. The pricing
//! crates never print or log; all output originates here.

use std::path::Path;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::price::PriceArgs;
use config::{CliConfig, LogLevel};

/// Vanilla option pricer (Black-Scholes and binomial tree)
#[derive(Parser)]
#[command(name = "option-pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "option-pricer.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a single European or American option
    Price(PriceArgs),

    /// Price every row of a CSV file
    Batch {
        /// Path to CSV input with header spot,strike,expiry,rate,dividend_yield,volatility,style,kind
        #[arg(short, long)]
        input: String,

        /// Output format (table, json, csv)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Check configuration and pricing engines
    Check,
}

fn init_tracing(level: LogLevel) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.as_filter_str())),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::load(Path::new(&cli.config))?;

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        config.log_level
    };
    init_tracing(level);
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Price(args) => commands::price::run(&args, &config),
        Commands::Batch { input, format } => {
            commands::batch::run(&input, format.as_deref(), &config)
        }
        Commands::Check => commands::check::run(&config, &cli.config),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Command failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
