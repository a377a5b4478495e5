//! Stock policy of a ticket.

use serde::{Deserialize, Serialize};

use ticketstock_core::ValueObject;

/// Which policy decides how many units of a ticket can still be sold.
///
/// Always derived from the `use_global`/`use_local` flags of the owning
/// [`StockAccount`](crate::StockAccount); there is no way to set it directly.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockType {
    /// No cap at all.
    #[default]
    Unlimited,
    /// Capped by the ticket's own quantity.
    Local,
    /// Drawn from a pool shared with other tickets of the event.
    Global,
    /// Drawn from a shared pool and additionally capped locally.
    GlobalLocal,
}

impl StockType {
    /// Truth table of the persisted flags.
    pub fn from_flags(use_global: bool, use_local: bool) -> Self {
        match (use_global, use_local) {
            (false, false) => StockType::Unlimited,
            (false, true) => StockType::Local,
            (true, false) => StockType::Global,
            (true, true) => StockType::GlobalLocal,
        }
    }

    pub fn is_local(self) -> bool {
        self == StockType::Local
    }

    pub fn is_global(self) -> bool {
        self == StockType::Global
    }

    pub fn is_global_and_local(self) -> bool {
        self == StockType::GlobalLocal
    }

    pub fn is_unlimited(self) -> bool {
        self == StockType::Unlimited
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StockType::Unlimited => "unlimited",
            StockType::Local => "local",
            StockType::Global => "global",
            StockType::GlobalLocal => "global_local",
        }
    }
}

impl core::fmt::Display for StockType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ValueObject for StockType {}
