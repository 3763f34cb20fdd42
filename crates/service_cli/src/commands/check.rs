//! Check command implementation
//!
//! Prints the effective configuration and runs a smoke test of each
//! pricing formula on a reference contract.

use pricer_models::instruments::MarketParameters;
use pricer_models::pricing::{PricerSettings, PricingMethod};
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig, config_path: &str) -> Result<()> {
    info!("Checking configuration...");

    let source = if std::path::Path::new(config_path).exists() {
        config_path
    } else {
        "(defaults)"
    };

    println!("option-pricer v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Configuration: {}", source);
    println!("  log_level:      {}", config.log_level);
    println!("  precision:      {}", config.precision);
    println!("  steps_per_year: {}", config.steps_per_year);
    println!("  output_format:  {}", config.output_format);
    println!();
    println!("Engines (S=100 K=100 T=1 r=0.05 y=0.02 σ=0.2):");
    for line in smoke_test(config)? {
        println!("  {}", line);
    }

    info!("Check complete");
    Ok(())
}

/// Price the reference contract with every formula
fn smoke_test(config: &CliConfig) -> Result<Vec<String>> {
    let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.02, 0.2)
        .map_err(pricer_core::types::PricingError::from)?;
    let settings = PricerSettings {
        steps_per_year: config.steps_per_year,
    };

    PricingMethod::ALL
        .iter()
        .map(|method| -> Result<String> {
            let result = method.evaluate(&params, &settings)?;
            Ok(format!("{:.*}", config.precision, result))
        })
        .collect()
}
