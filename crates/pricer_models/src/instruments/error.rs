//! Instrument error types.
//!
//! This module provides structured error handling for market parameter
//! validation and selector parsing.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// Each variant names the offending input so the caller can re-prompt
/// or report the exact field.
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid spot price (non-positive or non-finite).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Invalid strike price (non-positive or non-finite).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid expiry time (non-positive or non-finite).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Risk-free rate is NaN or infinite.
    #[error("Invalid risk-free rate: r = {rate}")]
    NonFiniteRate {
        /// The invalid rate value
        rate: f64,
    },

    /// Invalid dividend yield (non-positive or non-finite).
    #[error("Invalid dividend yield: y = {dividend_yield}")]
    InvalidDividendYield {
        /// The invalid yield value
        dividend_yield: f64,
    },

    /// Invalid volatility (non-positive or non-finite).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Unrecognised exercise style or option kind selector.
    #[error("Unsupported selector: '{selector}' (expected {expected})")]
    UnsupportedSelector {
        /// The raw selector text
        selector: String,
        /// Human-readable list of accepted values
        expected: &'static str,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        match err {
            InstrumentError::UnsupportedSelector { .. } => {
                PricingError::UnsupportedSelector(err.to_string())
            }
            _ => PricingError::InvalidInput(err.to_string()),
        }
    }
}
