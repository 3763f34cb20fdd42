//! Black-Scholes-Merton pricing model for European options.
//!
//! This module provides the closed-form price of European calls and puts
//! on an underlying paying a continuous dividend yield.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-yT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-yT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - y + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use super::distributions::norm_cdf;
use crate::instruments::{MarketParameters, OptionKind};

/// Black-Scholes model for European option pricing.
///
/// Holds its own copy of the market parameters.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::MarketParameters;
///
/// let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.02, 0.2).unwrap();
/// let bs = BlackScholes::new(&params);
/// let call_price = bs.price_call();
/// let put_price = bs.price_put();
///
/// // Put-call parity: C - P = S·e^(-yT) - K·e^(-rT)
/// let forward_gap = 100.0 * (-0.02_f64).exp() - 100.0 * (-0.05_f64).exp();
/// assert!((call_price - put_price - forward_gap).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes {
    params: MarketParameters,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model for the given market.
    ///
    /// `MarketParameters` already guarantees T > 0 and σ > 0, so d₁ and d₂
    /// are always finite.
    #[inline]
    pub fn new(params: &MarketParameters) -> Self {
        Self { params: *params }
    }

    /// Returns the market parameters the model prices against.
    #[inline]
    pub fn params(&self) -> &MarketParameters {
        &self.params
    }

    /// σ√T
    #[inline]
    fn vol_sqrt_t(&self) -> f64 {
        self.params.volatility() * self.params.expiry().sqrt()
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r - y + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self) -> f64 {
        let p = &self.params;
        let sigma = p.volatility();

        let log_moneyness = (p.spot() / p.strike()).ln();
        let drift = (p.carry() + 0.5 * sigma * sigma) * p.expiry();

        (log_moneyness + drift) / self.vol_sqrt_t()
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d1() - self.vol_sqrt_t()
    }

    /// Discount factor on the strike leg, e^(-rT).
    #[inline]
    fn rate_discount(&self) -> f64 {
        (-self.params.rate() * self.params.expiry()).exp()
    }

    /// Discount factor on the spot leg, e^(-yT).
    #[inline]
    fn dividend_discount(&self) -> f64 {
        (-self.params.dividend_yield() * self.params.expiry()).exp()
    }

    /// Computes European call option price.
    ///
    /// C = S·e^(-yT)·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::instruments::MarketParameters;
    ///
    /// let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.02, 0.2).unwrap();
    /// let price = BlackScholes::new(&params).price_call();
    /// assert!((price - 9.227).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn price_call(&self) -> f64 {
        let p = &self.params;
        let d1 = self.d1();
        let d2 = self.d2();

        self.dividend_discount() * p.spot() * norm_cdf(d1)
            - self.rate_discount() * p.strike() * norm_cdf(d2)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·e^(-yT)·N(-d₁)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::instruments::MarketParameters;
    ///
    /// let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.02, 0.2).unwrap();
    /// let price = BlackScholes::new(&params).price_put();
    /// assert!((price - 6.330).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn price_put(&self) -> f64 {
        let p = &self.params;
        let d1 = self.d1();
        let d2 = self.d2();

        self.rate_discount() * p.strike() * norm_cdf(-d2)
            - self.dividend_discount() * p.spot() * norm_cdf(-d1)
    }

    /// Prices the given option kind.
    #[inline]
    pub fn price(&self, kind: OptionKind) -> f64 {
        match kind {
            OptionKind::Call => self.price_call(),
            OptionKind::Put => self.price_put(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn market(spot: f64, strike: f64, expiry: f64, rate: f64, dy: f64, vol: f64) -> BlackScholes {
        BlackScholes::new(&MarketParameters::new(spot, strike, expiry, rate, dy, vol).unwrap())
    }

    fn reference() -> BlackScholes {
        market(100.0, 100.0, 1.0, 0.05, 0.02, 0.2)
    }

    // ==========================================================
    // d1/d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_atm() {
        // d1 = (0 + (0.05 - 0.02 + 0.02) * 1) / 0.2 = 0.25
        assert_relative_eq!(reference().d1(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_d2_atm() {
        // d2 = 0.25 - 0.2 = 0.05
        assert_relative_eq!(reference().d2(), 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_d2_relationship() {
        let bs = market(100.0, 105.0, 0.5, 0.05, 0.01, 0.3);
        let expected_d2 = bs.d1() - 0.3 * 0.5_f64.sqrt();
        assert_relative_eq!(bs.d2(), expected_d2, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_sign_tracks_moneyness() {
        assert!(market(150.0, 100.0, 1.0, 0.05, 0.02, 0.2).d1() > 1.0);
        assert!(market(50.0, 100.0, 1.0, 0.05, 0.02, 0.2).d1() < -1.0);
    }

    // ==========================================================
    // Price Tests
    // ==========================================================

    #[test]
    fn test_call_price_reference_value() {
        assert_relative_eq!(reference().price_call(), 9.227005508154036, epsilon = 1e-9);
    }

    #[test]
    fn test_put_price_reference_value() {
        assert_relative_eq!(reference().price_put(), 6.330080627549918, epsilon = 1e-9);
    }

    #[test]
    fn test_price_dispatches_on_kind() {
        let bs = reference();
        assert_eq!(bs.price(OptionKind::Call), bs.price_call());
        assert_eq!(bs.price(OptionKind::Put), bs.price_put());
    }

    #[test]
    fn test_deep_itm_call() {
        // Deep ITM call ≈ S·e^(-yT) - K·e^(-rT)
        let price = market(200.0, 100.0, 1.0, 0.05, 0.02, 0.2).price_call();
        let forward_intrinsic = 200.0 * (-0.02_f64).exp() - 100.0 * (-0.05_f64).exp();
        assert_relative_eq!(price, forward_intrinsic, epsilon = 2e-3);
    }

    #[test]
    fn test_deep_otm_call() {
        let price = market(50.0, 100.0, 1.0, 0.05, 0.02, 0.2).price_call();
        assert!(price >= 0.0);
        assert!(price < 0.01);
    }

    #[test]
    fn test_negative_rate() {
        let bs = market(100.0, 100.0, 1.0, -0.01, 0.02, 0.2);
        assert!(bs.price_call() > 0.0);
        assert!(bs.price_put() > bs.price_call());
    }

    #[test]
    fn test_higher_dividend_yield_lowers_call() {
        let low = market(100.0, 100.0, 1.0, 0.05, 0.01, 0.2).price_call();
        let high = market(100.0, 100.0, 1.0, 0.05, 0.05, 0.2).price_call();
        assert!(high < low);
    }

    // ==========================================================
    // Put-Call Parity Tests
    // ==========================================================

    #[test]
    fn test_put_call_parity_grid() {
        for &(s, k, t, r, y, v) in &[
            (100.0, 100.0, 1.0, 0.05, 0.02, 0.2),
            (80.0, 120.0, 2.5, 0.01, 0.04, 0.35),
            (130.0, 90.0, 0.25, -0.02, 0.01, 0.15),
        ] {
            let bs = market(s, k, t, r, y, v);
            let parity = s * (-y * t).exp() - k * (-r * t).exp();
            assert_relative_eq!(bs.price_call() - bs.price_put(), parity, epsilon = 1e-9);
        }
    }

    // ==========================================================
    // Limit Tests
    // ==========================================================

    #[test]
    fn test_tiny_volatility_equal_rates_approaches_intrinsic() {
        // r == y, σ → 0: prices collapse to discounted intrinsic value
        let itm_call = market(110.0, 100.0, 1.0, 0.001, 0.001, 1e-4).price_call();
        assert_relative_eq!(itm_call, 10.0, epsilon = 0.02);

        let otm_call = market(90.0, 100.0, 1.0, 0.001, 0.001, 1e-4).price_call();
        assert_relative_eq!(otm_call, 0.0, epsilon = 1e-12);

        let itm_put = market(90.0, 100.0, 1.0, 0.001, 0.001, 1e-4).price_put();
        assert_relative_eq!(itm_put, 10.0, epsilon = 0.02);
    }

    #[test]
    fn test_repeated_calls_are_bit_identical() {
        let bs = reference();
        assert_eq!(bs.price_call().to_bits(), bs.price_call().to_bits());
        assert_eq!(bs.price_put().to_bits(), bs.price_put().to_bits());
    }
}
