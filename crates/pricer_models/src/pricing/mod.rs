//! Formula selection and execution.
//!
//! This module maps an (exercise style, option kind) pair onto one of four
//! pricing functions and runs it:
//! - [`PricingMethod`]: tagged union of the four formulas
//! - [`PriceResult`]: price tagged with the formula that produced it
//! - [`PricerSettings`]: engine knobs (lattice steps per year)
//! - [`price_batch`]: independent requests priced in parallel
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{ExerciseStyle, MarketParameters, OptionKind};
//! use pricer_models::pricing::price_option;
//!
//! let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.02, 0.2).unwrap();
//! let result = price_option(ExerciseStyle::European, OptionKind::Call, &params).unwrap();
//! assert_eq!(result.to_string(), "European Call Option Price: 9.2270");
//! ```

mod batch;
mod method;
mod result;

pub use batch::price_batch;
pub use method::{price_option, PriceFn, PricerSettings, PricingMethod};
pub use result::PriceResult;
