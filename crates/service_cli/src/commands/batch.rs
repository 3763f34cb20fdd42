//! Batch command implementation
//!
//! Prices every row of a CSV file independently. Rows that fail to parse or
//! price are reported alongside the successful ones.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use pricer_core::types::PricingError;
use pricer_models::instruments::{MarketParameters, VanillaOption};
use pricer_models::pricing::{price_batch, PricerSettings, PricingMethod};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::commands::resolve_format;
use crate::config::{CliConfig, OutputFormat};
use crate::{CliError, Result};

/// One input row, before validation
#[derive(Debug, Deserialize)]
struct BatchRow {
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    dividend_yield: f64,
    volatility: f64,
    style: String,
    kind: String,
}

impl BatchRow {
    fn into_option(self) -> std::result::Result<VanillaOption, PricingError> {
        let method = PricingMethod::parse(&self.style, &self.kind)?;
        let params = MarketParameters::new(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.dividend_yield,
            self.volatility,
        )?;
        Ok(VanillaOption::new(method.style(), method.kind(), params))
    }
}

/// Result of one input row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOutcome {
    /// 1-based data row number
    pub row: usize,
    /// Formula used, if the row was valid
    pub method: Option<PricingMethod>,
    /// Option value, if pricing succeeded
    pub price: Option<f64>,
    /// Failure description, if any
    pub error: Option<String>,
}

impl BatchOutcome {
    fn failed(row: usize, method: Option<PricingMethod>, error: impl ToString) -> Self {
        Self {
            row,
            method,
            price: None,
            error: Some(error.to_string()),
        }
    }

    /// Whether the row produced a price
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Run the batch command
pub fn run(input: &str, format: Option<&str>, config: &CliConfig) -> Result<()> {
    let format = resolve_format(format, config)?;
    let path = Path::new(input);
    if !path.exists() {
        return Err(CliError::FileNotFound(input.to_string()));
    }

    info!(input, "Starting batch pricing");
    let settings = PricerSettings {
        steps_per_year: config.steps_per_year,
    };
    let outcomes = price_rows(File::open(path)?, &settings);

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    if failed > 0 {
        warn!(failed, total = outcomes.len(), "Some rows could not be priced");
    }
    info!(rows = outcomes.len(), "Batch pricing complete");

    println!("{}", render(&outcomes, format, config.precision)?);
    Ok(())
}

/// Parse and price every CSV row, keeping input order
pub fn price_rows<R: Read>(reader: R, settings: &PricerSettings) -> Vec<BatchOutcome> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let parsed: Vec<std::result::Result<VanillaOption, String>> = csv_reader
        .deserialize::<BatchRow>()
        .map(|row| match row {
            Ok(row) => row.into_option().map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        })
        .collect();

    let valid: Vec<VanillaOption> = parsed.iter().filter_map(|r| r.as_ref().ok()).copied().collect();
    debug!(rows = parsed.len(), valid = valid.len(), "Parsed batch input");

    let mut priced = price_batch(&valid, settings).into_iter().zip(valid.iter());
    parsed
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            let row_number = index + 1;
            match row {
                Err(message) => BatchOutcome::failed(row_number, None, message),
                Ok(_) => match priced.next() {
                    Some((Ok(result), _)) => BatchOutcome {
                        row: row_number,
                        method: Some(result.method),
                        price: Some(result.value),
                        error: None,
                    },
                    Some((Err(err), option)) => {
                        BatchOutcome::failed(row_number, Some(option.method()), err)
                    }
                    None => BatchOutcome::failed(row_number, None, "row was not priced"),
                },
            }
        })
        .collect()
}

/// Render outcomes in the requested format
fn render(outcomes: &[BatchOutcome], format: OutputFormat, precision: usize) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_table(outcomes, precision)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcomes)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for outcome in outcomes {
                writer.serialize(outcome)?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| CliError::Io(e.into_error()))?;
            Ok(String::from_utf8_lossy(&bytes).trim_end().to_string())
        }
    }
}

fn render_table(outcomes: &[BatchOutcome], precision: usize) -> String {
    let headers = ["Row", "Method", "Price"];
    let rows: Vec<[String; 3]> = outcomes
        .iter()
        .map(|o| {
            let method = o.method.map_or("-", |m| m.label()).to_string();
            let price = match (&o.price, &o.error) {
                (Some(value), _) => format!("{:.*}", precision, value),
                (None, Some(error)) => format!("ERROR: {}", error),
                (None, None) => "-".to_string(),
            };
            [o.row.to_string(), method, price]
        })
        .collect();

    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    };
    let line = |cells: &[String]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, w)| format!(" {:<w$} ", cell, w = *w))
            .collect();
        format!("│{}│", padded.join("│"))
    };

    let mut out = vec![
        rule("┌", "┬", "┐"),
        line(&headers.map(String::from)[..]),
        rule("├", "┼", "┤"),
    ];
    out.extend(rows.iter().map(|row| line(&row[..])));
    out.push(rule("└", "┴", "┘"));
    out.join("\n")
}
