//! Price command implementation
//!
//! Prices a single option from command-line flags.

use clap::Args;
use pricer_core::types::PricingError;
use pricer_models::instruments::{MarketParameters, VanillaOption};
use pricer_models::pricing::{PriceResult, PricerSettings, PricingMethod};
use serde::Serialize;
use tracing::{debug, info};

use crate::commands::resolve_format;
use crate::config::{CliConfig, OutputFormat};
use crate::{CliError, Result};

/// Inputs of the `price` command
#[derive(Debug, Clone, Args)]
pub struct PriceArgs {
    /// Spot price of the underlying (S > 0)
    #[arg(short, long, allow_hyphen_values = true)]
    pub spot: f64,

    /// Strike price (K > 0)
    #[arg(short = 'k', long, allow_hyphen_values = true)]
    pub strike: f64,

    /// Time to expiration in years (T > 0)
    #[arg(short = 't', long, allow_hyphen_values = true)]
    pub expiry: f64,

    /// Continuously-compounded risk-free rate, may be negative
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: f64,

    /// Continuous dividend yield (y > 0)
    #[arg(short = 'y', long, allow_hyphen_values = true)]
    pub dividend_yield: f64,

    /// Volatility of the underlying (σ > 0)
    #[arg(long, allow_hyphen_values = true)]
    pub volatility: f64,

    /// Exercise style (e, a, european, american)
    #[arg(long)]
    pub style: String,

    /// Option kind (c, p, call, put)
    #[arg(long)]
    pub kind: String,

    /// Output format (text, json, csv)
    #[arg(short, long)]
    pub format: Option<String>,
}

/// JSON/CSV record of a single price
#[derive(Debug, Serialize)]
struct PriceRecord {
    method: PricingMethod,
    label: &'static str,
    price: f64,
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    dividend_yield: f64,
    volatility: f64,
}

impl PriceRecord {
    fn new(result: &PriceResult, params: &MarketParameters) -> Self {
        Self {
            method: result.method,
            label: result.method.label(),
            price: result.value,
            spot: params.spot(),
            strike: params.strike(),
            expiry: params.expiry(),
            rate: params.rate(),
            dividend_yield: params.dividend_yield(),
            volatility: params.volatility(),
        }
    }
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &CliConfig) -> Result<()> {
    let format = resolve_format(args.format.as_deref(), config)?;
    let method = PricingMethod::parse(&args.style, &args.kind)?;
    let params = MarketParameters::new(
        args.spot,
        args.strike,
        args.expiry,
        args.rate,
        args.dividend_yield,
        args.volatility,
    )
    .map_err(PricingError::from)?;

    info!(method = %method, "Pricing option");
    debug!(?params, steps_per_year = config.steps_per_year, "Market parameters");

    let option = VanillaOption::new(method.style(), method.kind(), params);
    let settings = PricerSettings {
        steps_per_year: config.steps_per_year,
    };
    let result = option.evaluate(&settings)?;

    println!("{}", render(&result, &params, format, config.precision)?);
    Ok(())
}

/// Render one result in the requested format
fn render(
    result: &PriceResult,
    params: &MarketParameters,
    format: OutputFormat,
    precision: usize,
) -> Result<String> {
    let record = PriceRecord::new(result, params);

    match format {
        OutputFormat::Text => Ok(format!("{:.*}", precision, result)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&record)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.serialize(&record)?;
            let bytes = writer
                .into_inner()
                .map_err(|e| CliError::Io(e.into_error()))?;
            Ok(String::from_utf8_lossy(&bytes).trim_end().to_string())
        }
    }
}
