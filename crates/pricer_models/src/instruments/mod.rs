//! Financial instrument definitions.
//!
//! This module provides the inputs of a pricing request:
//! - [`MarketParameters`]: validated spot, strike, expiry, rate, yield and volatility
//! - [`ExerciseStyle`]: European or American
//! - [`OptionKind`]: call or put
//! - [`VanillaOption`]: the three combined, priceable through [`Priceable`]
//!
//! [`Priceable`]: pricer_core::traits::priceable::Priceable
//!
//! # Examples
//!
//! ```
//! use pricer_core::traits::priceable::Priceable;
//! use pricer_models::instruments::{ExerciseStyle, MarketParameters, OptionKind, VanillaOption};
//!
//! let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.02, 0.2).unwrap();
//! let put = VanillaOption::new(ExerciseStyle::American, OptionKind::Put, params);
//! assert!(put.price().unwrap() > 6.33);
//! ```

mod error;
mod exercise;
mod params;
mod payoff;
mod vanilla;

// Re-export all public types
pub use error::InstrumentError;
pub use exercise::ExerciseStyle;
pub use params::MarketParameters;
pub use payoff::OptionKind;
pub use vanilla::VanillaOption;
