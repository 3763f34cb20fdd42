//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes-Merton model with continuous dividend yield
//! - Standard normal CDF used by the formula

pub mod black_scholes;
pub mod distributions;

// Re-export main types at module level
pub use black_scholes::BlackScholes;
pub use distributions::norm_cdf;
