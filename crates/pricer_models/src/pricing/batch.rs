//! Parallel pricing of independent requests.

use pricer_core::types::PricingError;
use rayon::prelude::*;

use super::method::PricerSettings;
use super::result::PriceResult;
use crate::instruments::VanillaOption;

/// Prices every option independently on the rayon thread pool.
///
/// Results keep the input order. A failing option yields an `Err` in its
/// own slot and does not affect the others.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{ExerciseStyle, MarketParameters, OptionKind, VanillaOption};
/// use pricer_models::pricing::{price_batch, PricerSettings};
///
/// let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.02, 0.2).unwrap();
/// let book = [
///     VanillaOption::new(ExerciseStyle::European, OptionKind::Call, params),
///     VanillaOption::new(ExerciseStyle::American, OptionKind::Put, params),
/// ];
/// let results = price_batch(&book, &PricerSettings::default());
/// assert_eq!(results.len(), 2);
/// assert!(results.iter().all(|r| r.is_ok()));
/// ```
pub fn price_batch(
    options: &[VanillaOption],
    settings: &PricerSettings,
) -> Vec<Result<PriceResult, PricingError>> {
    options
        .par_iter()
        .map(|option| option.evaluate(settings))
        .collect()
}
