//! Cox-Ross-Rubinstein binomial tree for American options.
//!
//! The tree uses one time step per trading day and the CRR exact-solution
//! pairing of up and down factors:
//!
//! - N = floor(T · 252), dt = T / N
//! - u = exp((r - y)·dt + σ·√dt), d = 1/u
//! - p = (e^((r - y)·dt) - d) / (u - d)
//!
//! Values are rolled back from the terminal payoffs; at every node the
//! holder keeps the larger of the discounted continuation value and the
//! immediate exercise value.
//!
//! ## Numerical notes
//!
//! - Cost is O(N²) in time and O(N) in memory.
//! - `p` is not range-checked. Degenerate rate/volatility combinations that
//!   push it outside (0, 1) yield meaningless prices rather than an error.

use crate::instruments::{MarketParameters, OptionKind};

use super::error::LatticeError;

/// Default number of time steps per year of expiry (one per trading day).
pub const TRADING_DAYS_PER_YEAR: u32 = 252;

/// Recombining binomial tree calibrated to one set of market parameters.
///
/// Construction fixes the step count and the per-step factors; pricing
/// allocates its own node layers on every call, so a tree can be shared
/// freely between threads.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::MarketParameters;
/// use pricer_models::lattice::BinomialTree;
///
/// let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.02, 0.2).unwrap();
/// let tree = BinomialTree::new(&params).unwrap();
/// assert_eq!(tree.steps(), 252);
///
/// // Early exercise is worth something for an at-the-money put
/// let european = BlackScholes::new(&params).price_put();
/// assert!(tree.price_put() >= european);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BinomialTree {
    params: MarketParameters,
    steps: usize,
    dt: f64,
    up: f64,
    down: f64,
    probability: f64,
    discount: f64,
}

impl BinomialTree {
    /// Builds a tree with one step per trading day.
    ///
    /// # Errors
    /// - `LatticeError::InsufficientSteps` if T < 1/252
    pub fn new(params: &MarketParameters) -> Result<Self, LatticeError> {
        Self::with_steps_per_year(params, TRADING_DAYS_PER_YEAR)
    }

    /// Builds a tree with `steps_per_year` time steps per year of expiry.
    ///
    /// # Errors
    /// - `LatticeError::InsufficientSteps` if floor(T · steps_per_year) == 0
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::MarketParameters;
    /// use pricer_models::lattice::BinomialTree;
    ///
    /// let params = MarketParameters::new(100.0, 100.0, 0.5, 0.05, 0.02, 0.2).unwrap();
    /// let tree = BinomialTree::with_steps_per_year(&params, 100).unwrap();
    /// assert_eq!(tree.steps(), 50);
    /// ```
    pub fn with_steps_per_year(
        params: &MarketParameters,
        steps_per_year: u32,
    ) -> Result<Self, LatticeError> {
        let expiry = params.expiry();
        let steps = (expiry * f64::from(steps_per_year)).floor() as usize;
        if steps == 0 {
            return Err(LatticeError::InsufficientSteps {
                expiry,
                steps_per_year,
            });
        }

        let dt = expiry / steps as f64;
        let carry_dt = params.carry() * dt;
        let up = (carry_dt + params.volatility() * dt.sqrt()).exp();
        let down = 1.0 / up;
        let growth = carry_dt.exp();
        let probability = (growth - down) / (up - down);
        let discount = (-params.rate() * dt).exp();

        Ok(Self {
            params: *params,
            steps,
            dt,
            up,
            down,
            probability,
            discount,
        })
    }

    /// Number of time steps N.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Length of one time step in years.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Up factor u.
    #[inline]
    pub fn up_factor(&self) -> f64 {
        self.up
    }

    /// Down factor d = 1/u.
    #[inline]
    pub fn down_factor(&self) -> f64 {
        self.down
    }

    /// Risk-neutral probability of an up move.
    #[inline]
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Underlying price at `step` after `ups` up moves.
    #[inline]
    fn node_spot(&self, step: usize, ups: usize) -> f64 {
        self.params.spot() * self.up.powi(ups as i32) * self.down.powi((step - ups) as i32)
    }

    /// Prices an American option of the given kind by backward induction.
    pub fn price(&self, kind: OptionKind) -> f64 {
        let strike = self.params.strike();
        let p = self.probability;
        let q = 1.0 - p;

        // Node j holds the value after j up moves
        let mut layer: Vec<f64> = (0..=self.steps)
            .map(|j| kind.intrinsic(self.node_spot(self.steps, j), strike))
            .collect();

        for step in (0..self.steps).rev() {
            layer = layer
                .windows(2)
                .enumerate()
                .map(|(j, children)| {
                    let continuation = self.discount * (p * children[1] + q * children[0]);
                    let exercise = kind.intrinsic(self.node_spot(step, j), strike);
                    continuation.max(exercise)
                })
                .collect();
        }

        layer[0]
    }

    /// Prices an American call.
    #[inline]
    pub fn price_call(&self) -> f64 {
        self.price(OptionKind::Call)
    }

    /// Prices an American put.
    #[inline]
    pub fn price_put(&self) -> f64 {
        self.price(OptionKind::Put)
    }
}
