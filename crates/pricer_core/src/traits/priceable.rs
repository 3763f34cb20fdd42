//! Traits for priceable instruments.
//!
//! This module defines the pricing capability contract (`Priceable`):
//! anything that claims to be an option must expose a `price()` operation.

use num_traits::Float;

use crate::types::PricingError;

/// Trait for entities that can be priced.
///
/// # Type Parameters
/// * `T` - Floating-point type (f32 or f64)
///
/// # Design Philosophy
///
/// Implement on `enum`s or plain structs and dispatch statically:
///
/// ```
/// use pricer_core::traits::priceable::Priceable;
/// use pricer_core::types::PricingError;
/// use num_traits::Float;
///
/// enum Contract<T: Float> {
///     Forward { spot: T, strike: T },
///     Cash { amount: T },
/// }
///
/// impl<T: Float> Priceable<T> for Contract<T> {
///     fn price(&self) -> Result<T, PricingError> {
///         match self {
///             Contract::Forward { spot, strike } => Ok(*spot - *strike),
///             Contract::Cash { amount } => Ok(*amount),
///         }
///     }
/// }
///
/// let fwd = Contract::Forward { spot: 105.0_f64, strike: 100.0 };
/// assert_eq!(fwd.price().unwrap(), 5.0);
/// ```
pub trait Priceable<T: Float> {
    /// Calculate the price of the instrument.
    ///
    /// # Returns
    /// The theoretical value, or a `PricingError` when the inputs violate
    /// a precondition of the selected engine.
    ///
    /// # Invariants
    /// - The method must be pure (no side effects, deterministic)
    fn price(&self) -> Result<T, PricingError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priceable_with_f64() {
        enum SimpleInstrument {
            FixedValue(f64),
        }

        impl Priceable<f64> for SimpleInstrument {
            fn price(&self) -> Result<f64, PricingError> {
                match self {
                    SimpleInstrument::FixedValue(val) => Ok(*val),
                }
            }
        }

        let instrument = SimpleInstrument::FixedValue(100.0);
        assert_eq!(instrument.price().unwrap(), 100.0);
    }

    #[test]
    fn test_priceable_with_f32() {
        struct Fixed(f32);

        impl Priceable<f32> for Fixed {
            fn price(&self) -> Result<f32, PricingError> {
                Ok(self.0)
            }
        }

        assert_eq!(Fixed(100.0_f32).price().unwrap(), 100.0_f32);
    }

    #[test]
    fn test_priceable_propagates_errors() {
        struct Expired;

        impl Priceable<f64> for Expired {
            fn price(&self) -> Result<f64, PricingError> {
                Err(PricingError::InvalidInput("expiry <= 0".to_string()))
            }
        }

        assert!(Expired.price().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_trait_method_has_no_side_effects() {
        struct Fixed(f64);

        impl Priceable<f64> for Fixed {
            fn price(&self) -> Result<f64, PricingError> {
                Ok(self.0 * 2.0)
            }
        }

        let instrument = Fixed(50.0);
        assert_eq!(instrument.price(), instrument.price());
    }
}
