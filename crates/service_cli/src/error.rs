//! CLI error types.

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `option-pricer` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or validated
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Pricing inputs were rejected or the engine failed
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Command-line argument outside the accepted set
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading an input file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
