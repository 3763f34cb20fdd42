//! Vanilla option definitions.
//!
//! This module combines an exercise style, an option kind and the market
//! parameters into one priceable contract.

use pricer_core::traits::priceable::Priceable;
use pricer_core::types::PricingError;

use super::exercise::ExerciseStyle;
use super::params::MarketParameters;
use super::payoff::OptionKind;
use crate::pricing::{PriceResult, PricerSettings, PricingMethod};

/// Vanilla option contract.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{ExerciseStyle, MarketParameters, OptionKind, VanillaOption};
/// use pricer_models::pricing::PricingMethod;
///
/// let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.02, 0.2).unwrap();
/// let call = VanillaOption::new(ExerciseStyle::European, OptionKind::Call, params);
/// assert_eq!(call.method(), PricingMethod::EuropeanCall);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VanillaOption {
    style: ExerciseStyle,
    kind: OptionKind,
    params: MarketParameters,
}

impl VanillaOption {
    /// Creates a new vanilla option.
    pub fn new(style: ExerciseStyle, kind: OptionKind, params: MarketParameters) -> Self {
        Self {
            style,
            kind,
            params,
        }
    }

    /// Returns the exercise style.
    #[inline]
    pub fn style(&self) -> ExerciseStyle {
        self.style
    }

    /// Returns the option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Returns a reference to the market parameters.
    #[inline]
    pub fn params(&self) -> &MarketParameters {
        &self.params
    }

    /// Formula that prices this contract.
    #[inline]
    pub fn method(&self) -> PricingMethod {
        PricingMethod::select(self.style, self.kind)
    }

    /// Prices the contract with explicit engine settings.
    ///
    /// # Errors
    /// - `PricingError::InvalidInput` if the lattice cannot be built for the expiry
    pub fn evaluate(&self, settings: &PricerSettings) -> Result<PriceResult, PricingError> {
        self.method().evaluate(&self.params, settings)
    }
}

impl Priceable<f64> for VanillaOption {
    fn price(&self) -> Result<f64, PricingError> {
        self.evaluate(&PricerSettings::default())
            .map(|result| result.value)
    }
}
