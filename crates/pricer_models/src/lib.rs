//! # Pricer Models (L2: Business Logic)
//!
//! Vanilla option definitions and the two pricing engines behind them.
//!
//! This crate provides:
//! - Market inputs and contract selectors ([`instruments`])
//! - Black-Scholes closed form for European exercise ([`analytical`])
//! - Cox-Ross-Rubinstein binomial lattice for American exercise ([`lattice`])
//! - Formula dispatch and batch pricing ([`pricing`])
//!
//! ## Design Principles
//!
//! - **Enum-based dispatch**: the (style, kind) product maps onto a closed
//!   set of plain functions, no trait objects
//! - **Validated construction**: every engine receives parameters that
//!   already satisfy their range invariants
//! - **Pure pricing**: no I/O, no logging, no shared mutable state
//!
//! ## Example
//!
//! ```
//! use pricer_models::instruments::{ExerciseStyle, MarketParameters, OptionKind, VanillaOption};
//! use pricer_core::traits::priceable::Priceable;
//!
//! let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.02, 0.2).unwrap();
//! let european = VanillaOption::new(ExerciseStyle::European, OptionKind::Put, params);
//! let american = VanillaOption::new(ExerciseStyle::American, OptionKind::Put, params);
//!
//! assert!(american.price().unwrap() >= european.price().unwrap());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod lattice;
pub mod pricing;
