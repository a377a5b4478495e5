//! Stock quantity value: a count, or the absence of a cap.

use serde::{Deserialize, Serialize};

use ticketstock_core::ValueObject;

/// Units available for sale.
///
/// `Unlimited` is a variant of its own rather than a reserved integer, so it
/// can never leak into arithmetic. Quantities are deliberately signed:
/// whatever the caller stored (including negatives) is reported back as-is.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stock {
    #[default]
    Unlimited,
    Quantity(i64),
}

impl Stock {
    pub fn is_unlimited(self) -> bool {
        matches!(self, Stock::Unlimited)
    }

    /// The capped count, or `None` when unlimited.
    pub fn quantity(self) -> Option<i64> {
        match self {
            Stock::Unlimited => None,
            Stock::Quantity(n) => Some(n),
        }
    }

    /// The tighter of two caps. `Unlimited` is the identity.
    pub fn min(self, other: Stock) -> Stock {
        match (self, other) {
            (Stock::Unlimited, s) | (s, Stock::Unlimited) => s,
            (Stock::Quantity(a), Stock::Quantity(b)) => Stock::Quantity(a.min(b)),
        }
    }
}

impl From<i64> for Stock {
    fn from(value: i64) -> Self {
        Stock::Quantity(value)
    }
}

impl core::fmt::Display for Stock {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Stock::Unlimited => f.write_str("unlimited"),
            Stock::Quantity(n) => write!(f, "{n}"),
        }
    }
}

impl ValueObject for Stock {}
