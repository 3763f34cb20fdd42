//! Error types for lattice construction.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Lattice construction errors.
///
/// # Examples
/// ```
/// use pricer_models::lattice::LatticeError;
///
/// let err = LatticeError::InsufficientSteps { expiry: 0.001, steps_per_year: 252 };
/// assert!(format!("{}", err).contains("0.001"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LatticeError {
    /// floor(T · steps_per_year) is zero, so the tree has no time step.
    #[error(
        "Expiry T = {expiry} yields no time step at {steps_per_year} steps per year \
         (need T >= 1/{steps_per_year})"
    )]
    InsufficientSteps {
        /// Time to expiry in years
        expiry: f64,
        /// Time steps per year of expiry
        steps_per_year: u32,
    },
}

impl From<LatticeError> for PricingError {
    fn from(err: LatticeError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
