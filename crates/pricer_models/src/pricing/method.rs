//! Dispatch from (style, kind) to a pricing function.

use std::fmt;

use pricer_core::types::PricingError;

use crate::analytical::BlackScholes;
use crate::instruments::{ExerciseStyle, MarketParameters, OptionKind};
use crate::lattice::{BinomialTree, TRADING_DAYS_PER_YEAR};

use super::result::PriceResult;

/// Signature shared by the four pricing functions.
pub type PriceFn = fn(&MarketParameters, &PricerSettings) -> Result<f64, PricingError>;

/// Engine settings that do not belong to the market.
///
/// # Examples
/// ```
/// use pricer_models::pricing::PricerSettings;
///
/// assert_eq!(PricerSettings::default().steps_per_year, 252);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricerSettings {
    /// Lattice time steps per year of expiry.
    pub steps_per_year: u32,
}

impl Default for PricerSettings {
    fn default() -> Self {
        Self {
            steps_per_year: TRADING_DAYS_PER_YEAR,
        }
    }
}

/// One of the four supported formulas.
///
/// The (style, kind) product is closed, so selection is total and every
/// variant maps to exactly one function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PricingMethod {
    /// Black-Scholes call
    EuropeanCall,
    /// Black-Scholes put
    EuropeanPut,
    /// Binomial-tree call with early exercise
    AmericanCall,
    /// Binomial-tree put with early exercise
    AmericanPut,
}

impl PricingMethod {
    /// All methods, in table order.
    pub const ALL: [PricingMethod; 4] = [
        PricingMethod::EuropeanCall,
        PricingMethod::EuropeanPut,
        PricingMethod::AmericanCall,
        PricingMethod::AmericanPut,
    ];

    /// Selects the formula for a style and kind.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::{ExerciseStyle, OptionKind};
    /// use pricer_models::pricing::PricingMethod;
    ///
    /// let method = PricingMethod::select(ExerciseStyle::American, OptionKind::Put);
    /// assert_eq!(method, PricingMethod::AmericanPut);
    /// ```
    #[inline]
    pub fn select(style: ExerciseStyle, kind: OptionKind) -> Self {
        match (style, kind) {
            (ExerciseStyle::European, OptionKind::Call) => PricingMethod::EuropeanCall,
            (ExerciseStyle::European, OptionKind::Put) => PricingMethod::EuropeanPut,
            (ExerciseStyle::American, OptionKind::Call) => PricingMethod::AmericanCall,
            (ExerciseStyle::American, OptionKind::Put) => PricingMethod::AmericanPut,
        }
    }

    /// Parses raw style and kind selectors, e.g. `("e", "c")`.
    ///
    /// # Errors
    /// - `PricingError::UnsupportedSelector` if either selector is unknown
    pub fn parse(style: &str, kind: &str) -> Result<Self, PricingError> {
        let style: ExerciseStyle = style.parse()?;
        let kind: OptionKind = kind.parse()?;
        Ok(Self::select(style, kind))
    }

    /// Exercise style of the formula.
    #[inline]
    pub fn style(&self) -> ExerciseStyle {
        match self {
            PricingMethod::EuropeanCall | PricingMethod::EuropeanPut => ExerciseStyle::European,
            PricingMethod::AmericanCall | PricingMethod::AmericanPut => ExerciseStyle::American,
        }
    }

    /// Option kind of the formula.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        match self {
            PricingMethod::EuropeanCall | PricingMethod::AmericanCall => OptionKind::Call,
            PricingMethod::EuropeanPut | PricingMethod::AmericanPut => OptionKind::Put,
        }
    }

    /// Display label, e.g. `"European Call"`.
    pub fn label(&self) -> &'static str {
        match self {
            PricingMethod::EuropeanCall => "European Call",
            PricingMethod::EuropeanPut => "European Put",
            PricingMethod::AmericanCall => "American Call",
            PricingMethod::AmericanPut => "American Put",
        }
    }

    /// Pricing function for this formula.
    #[inline]
    pub fn price_fn(&self) -> PriceFn {
        match self {
            PricingMethod::EuropeanCall => european_call,
            PricingMethod::EuropeanPut => european_put,
            PricingMethod::AmericanCall => american_call,
            PricingMethod::AmericanPut => american_put,
        }
    }

    /// Runs the formula and tags the result.
    pub fn evaluate(
        &self,
        params: &MarketParameters,
        settings: &PricerSettings,
    ) -> Result<PriceResult, PricingError> {
        let value = (self.price_fn())(params, settings)?;
        Ok(PriceResult {
            value,
            method: *self,
        })
    }
}

impl fmt::Display for PricingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn european_call(params: &MarketParameters, _: &PricerSettings) -> Result<f64, PricingError> {
    Ok(BlackScholes::new(params).price_call())
}

fn european_put(params: &MarketParameters, _: &PricerSettings) -> Result<f64, PricingError> {
    Ok(BlackScholes::new(params).price_put())
}

fn american_call(params: &MarketParameters, settings: &PricerSettings) -> Result<f64, PricingError> {
    let tree = BinomialTree::with_steps_per_year(params, settings.steps_per_year)?;
    Ok(tree.price_call())
}

fn american_put(params: &MarketParameters, settings: &PricerSettings) -> Result<f64, PricingError> {
    let tree = BinomialTree::with_steps_per_year(params, settings.steps_per_year)?;
    Ok(tree.price_put())
}

/// Prices one option with default settings.
///
/// # Errors
/// - `PricingError::InvalidInput` if an American expiry is shorter than one time step
pub fn price_option(
    style: ExerciseStyle,
    kind: OptionKind,
    params: &MarketParameters,
) -> Result<PriceResult, PricingError> {
    PricingMethod::select(style, kind).evaluate(params, &PricerSettings::default())
}
