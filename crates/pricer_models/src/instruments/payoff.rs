//! Option kind definitions.
//!
//! This module provides the call/put distinction together with the
//! intrinsic (immediate exercise) value used by every engine.

use std::fmt;
use std::str::FromStr;

use super::error::InstrumentError;

/// Kind of option payoff.
///
/// # Variants
/// - `Call`: right to buy, intrinsic value max(S - K, 0)
/// - `Put`: right to sell, intrinsic value max(K - S, 0)
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionKind;
///
/// assert_eq!(OptionKind::Call.intrinsic(110.0, 100.0), 10.0);
/// assert_eq!(OptionKind::Put.intrinsic(110.0, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionKind {
    /// Accepted selector spellings, for error messages.
    pub const SELECTORS: &'static str = "c, p, call, put";

    /// Value of exercising immediately at `spot`.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (spot - strike).max(0.0),
            OptionKind::Put => (strike - spot).max(0.0),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionKind::Put)
    }

    /// Display name of the kind.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            OptionKind::Call => "Call",
            OptionKind::Put => "Put",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OptionKind {
    type Err = InstrumentError;

    /// Parses `c`/`p` or the full kind name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "call" => Ok(OptionKind::Call),
            "p" | "put" => Ok(OptionKind::Put),
            _ => Err(InstrumentError::UnsupportedSelector {
                selector: s.to_string(),
                expected: Self::SELECTORS,
            }),
        }
    }
}
