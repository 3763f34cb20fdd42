//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod batch;
pub mod check;
pub mod price;

use std::str::FromStr;

use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Resolve the output format from an optional `--format` flag.
pub(crate) fn resolve_format(flag: Option<&str>, config: &CliConfig) -> Result<OutputFormat> {
    match flag {
        Some(raw) => Ok(OutputFormat::from_str(raw)?),
        None => Ok(config.output_format),
    }
}
