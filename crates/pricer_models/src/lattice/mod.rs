//! Lattice pricing for early-exercise options.
//!
//! This module provides:
//! - `BinomialTree`: Cox-Ross-Rubinstein recombining tree with backward induction
//! - `LatticeError`: Construction failures (too few time steps)

pub mod binomial;
pub mod error;

pub use binomial::{BinomialTree, TRADING_DAYS_PER_YEAR};
pub use error::LatticeError;
