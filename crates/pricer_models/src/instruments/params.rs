//! Market parameters for a single pricing request.
//!
//! This module provides the immutable bundle of the six scalar inputs
//! consumed by both the closed-form and the lattice engines.

use super::error::InstrumentError;

/// Market inputs for pricing one option.
///
/// All values are `f64` and fixed at construction. Validation ensures
/// spot, strike, expiry, dividend yield and volatility are strictly
/// positive and finite; the rate may take any finite value.
///
/// # Examples
/// ```
/// use pricer_models::instruments::MarketParameters;
///
/// let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.02, 0.2).unwrap();
/// assert_eq!(params.spot(), 100.0);
/// assert_eq!(params.volatility(), 0.2);
///
/// // Negative rates are accepted
/// assert!(MarketParameters::new(100.0, 100.0, 1.0, -0.01, 0.02, 0.2).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MarketParameters {
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    dividend_yield: f64,
    volatility: f64,
}

#[inline]
fn is_positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}

impl MarketParameters {
    /// Creates new market parameters with validation.
    ///
    /// # Arguments
    /// * `spot` - Current underlying price S (must be positive)
    /// * `strike` - Strike price K (must be positive)
    /// * `expiry` - Time to expiry T in years (must be positive)
    /// * `rate` - Continuously-compounded risk-free rate r (any finite value)
    /// * `dividend_yield` - Continuous dividend yield y (must be positive)
    /// * `volatility` - Annualised volatility σ (must be positive)
    ///
    /// # Errors
    /// The first violated field, checked in argument order.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        dividend_yield: f64,
        volatility: f64,
    ) -> Result<Self, InstrumentError> {
        if !is_positive(spot) {
            return Err(InstrumentError::InvalidSpot { spot });
        }

        if !is_positive(strike) {
            return Err(InstrumentError::InvalidStrike { strike });
        }

        if !is_positive(expiry) {
            return Err(InstrumentError::InvalidExpiry { expiry });
        }

        if !rate.is_finite() {
            return Err(InstrumentError::NonFiniteRate { rate });
        }

        // y = 0 is outside the accepted input range even though the formulas allow it
        if !is_positive(dividend_yield) {
            return Err(InstrumentError::InvalidDividendYield { dividend_yield });
        }

        if !is_positive(volatility) {
            return Err(InstrumentError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            dividend_yield,
            volatility,
        })
    }

    /// Returns a copy with a different spot, re-validated.
    ///
    /// Handy for bumping the underlying while holding everything else fixed.
    pub fn with_spot(&self, spot: f64) -> Result<Self, InstrumentError> {
        Self::new(
            spot,
            self.strike,
            self.expiry,
            self.rate,
            self.dividend_yield,
            self.volatility,
        )
    }

    /// Returns the spot price (S).
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price (K).
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to expiry in years (T).
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the risk-free rate (r).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the dividend yield (y).
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Returns the volatility (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Cost of carry b = r - y.
    #[inline]
    pub fn carry(&self) -> f64 {
        self.rate - self.dividend_yield
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> MarketParameters {
        MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.02, 0.2).unwrap()
    }

    #[test]
    fn test_new_valid_params() {
        let params = reference();
        assert_eq!(params.spot(), 100.0);
        assert_eq!(params.strike(), 100.0);
        assert_eq!(params.expiry(), 1.0);
        assert_eq!(params.rate(), 0.05);
        assert_eq!(params.dividend_yield(), 0.02);
        assert_eq!(params.volatility(), 0.2);
        assert!((params.carry() - 0.03).abs() < 1e-15);
    }

    #[test]
    fn test_new_invalid_spot() {
        match MarketParameters::new(0.0, 100.0, 1.0, 0.05, 0.02, 0.2) {
            Err(InstrumentError::InvalidSpot { spot }) => assert_eq!(spot, 0.0),
            _ => panic!("Expected InvalidSpot error"),
        }
    }

    #[test]
    fn test_new_invalid_strike_negative() {
        match MarketParameters::new(100.0, -100.0, 1.0, 0.05, 0.02, 0.2) {
            Err(InstrumentError::InvalidStrike { strike }) => assert_eq!(strike, -100.0),
            _ => panic!("Expected InvalidStrike error"),
        }
    }

    #[test]
    fn test_new_invalid_expiry() {
        assert!(matches!(
            MarketParameters::new(100.0, 100.0, 0.0, 0.05, 0.02, 0.2),
            Err(InstrumentError::InvalidExpiry { .. })
        ));
    }

    #[test]
    fn test_new_zero_dividend_yield_rejected() {
        assert!(matches!(
            MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.0, 0.2),
            Err(InstrumentError::InvalidDividendYield { .. })
        ));
    }

    #[test]
    fn test_new_invalid_volatility() {
        assert!(matches!(
            MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.02, -0.2),
            Err(InstrumentError::InvalidVolatility { .. })
        ));
    }

    #[test]
    fn test_new_rate_any_sign() {
        assert!(MarketParameters::new(100.0, 100.0, 1.0, 0.0, 0.02, 0.2).is_ok());
        assert!(MarketParameters::new(100.0, 100.0, 1.0, -0.05, 0.02, 0.2).is_ok());
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(matches!(
            MarketParameters::new(f64::NAN, 100.0, 1.0, 0.05, 0.02, 0.2),
            Err(InstrumentError::InvalidSpot { .. })
        ));
        assert!(matches!(
            MarketParameters::new(100.0, f64::INFINITY, 1.0, 0.05, 0.02, 0.2),
            Err(InstrumentError::InvalidStrike { .. })
        ));
        assert!(matches!(
            MarketParameters::new(100.0, 100.0, 1.0, f64::NAN, 0.02, 0.2),
            Err(InstrumentError::NonFiniteRate { .. })
        ));
    }

    #[test]
    fn test_first_violation_reported() {
        // Both spot and volatility are invalid; spot is checked first
        assert!(matches!(
            MarketParameters::new(-1.0, 100.0, 1.0, 0.05, 0.02, 0.0),
            Err(InstrumentError::InvalidSpot { .. })
        ));
    }

    #[test]
    fn test_with_spot() {
        let bumped = reference().with_spot(105.0).unwrap();
        assert_eq!(bumped.spot(), 105.0);
        assert_eq!(bumped.strike(), 100.0);
        assert!(reference().with_spot(0.0).is_err());
    }
}
