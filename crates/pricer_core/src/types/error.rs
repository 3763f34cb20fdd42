//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors surfaced at the pricing boundary

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every engine-specific error is converted into one of these variants
/// before it leaves a pricing call.
///
/// # Variants
/// - `InvalidInput`: Market parameters violate an engine precondition
/// - `UnsupportedSelector`: Exercise style or option kind could not be recognised
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Style/kind selector outside the supported combinations
    #[error("Unsupported style/kind combination: {0}")]
    UnsupportedSelector(String),
}

impl PricingError {
    /// Returns whether the error originates from market parameter validation.
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PricingError::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = PricingError::InvalidInput("Test error".to_string());
        assert_eq!(format!("{}", err), "Invalid input: Test error");
    }

    #[test]
    fn test_unsupported_selector_display() {
        let err = PricingError::UnsupportedSelector("x".to_string());
        assert_eq!(
            format!("{}", err),
            "Unsupported style/kind combination: x"
        );
    }

    #[test]
    fn test_is_invalid_input() {
        assert!(PricingError::InvalidInput("t".to_string()).is_invalid_input());
        assert!(!PricingError::UnsupportedSelector("t".to_string()).is_invalid_input());
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidInput("Test".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::InvalidInput("Test".to_string());
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
