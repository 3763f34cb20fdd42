//! # pricer_core: Foundation Layer of the Option Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Error types shared by every pricing engine: `PricingError` (`types::error`)
//! - The pricing capability contract: `Priceable` (`traits::priceable`)
//! - A generic floating-point bound: `Float` (`traits`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::traits::priceable::Priceable;
//! use pricer_core::types::PricingError;
//!
//! struct Quoted(f64);
//!
//! impl Priceable<f64> for Quoted {
//!     fn price(&self) -> Result<f64, PricingError> {
//!         Ok(self.0)
//!     }
//! }
//!
//! assert_eq!(Quoted(9.227).price().unwrap(), 9.227);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod traits;
pub mod types;
