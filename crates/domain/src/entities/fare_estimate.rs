//! Fare estimate returned by the prediction endpoint

use serde::Serialize;
use std::fmt;

/// Estimated fare in US dollars
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FareEstimate {
    amount: f64,
}

impl FareEstimate {
    /// Currency prefix used when displaying a fare
    pub const CURRENCY_SYMBOL: &'static str = "$";

    /// Wrap a predicted amount
    #[must_use]
    pub const fn new(amount: f64) -> Self {
        Self { amount }
    }

    /// The raw predicted amount
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// Display form: currency prefix and two decimals, e.g. `$23.50`
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FareEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", Self::CURRENCY_SYMBOL, self.amount)
    }
}
