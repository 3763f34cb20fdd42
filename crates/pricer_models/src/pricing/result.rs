//! Pricing output.

use std::fmt;

use super::method::PricingMethod;

/// Theoretical option value tagged with the formula that produced it.
///
/// `Display` renders `"<Style> <Kind> Option Price: <value>"` with four
/// decimal places unless the formatter specifies a precision.
///
/// # Examples
/// ```
/// use pricer_models::pricing::{PriceResult, PricingMethod};
///
/// let result = PriceResult { value: 6.33008, method: PricingMethod::EuropeanPut };
/// assert_eq!(result.to_string(), "European Put Option Price: 6.3301");
/// assert_eq!(format!("{:.2}", result), "European Put Option Price: 6.33");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PriceResult {
    /// Option value
    pub value: f64,
    /// Formula used
    pub method: PricingMethod,
}

impl PriceResult {
    /// Decimal places used when the formatter gives none.
    pub const DEFAULT_PRECISION: usize = 4;
}

impl fmt::Display for PriceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(Self::DEFAULT_PRECISION);
        write!(
            f,
            "{} Option Price: {:.*}",
            self.method.label(),
            precision,
            self.value
        )
    }
}
