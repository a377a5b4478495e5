//! Persisted stock meta and the event-level pool registry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use ticketstock_core::{DomainError, DomainResult, ValueObject};

/// Per-ticket stock settings as stored by the host platform.
///
/// Field names are the persisted schema and must not change. Missing fields
/// decode to the settings of an unconfigured ticket.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockMeta {
    pub use_global: bool,
    pub use_local: bool,
    pub local_qty: i64,
    pub global_stock_id: String,
}

impl StockMeta {
    /// Decode a stored meta record.
    ///
    /// Only the shape is checked. Values (negative quantities, unknown pool
    /// ids) are accepted as they are.
    pub fn from_json(value: &serde_json::Value) -> DomainResult<Self> {
        StockMeta::deserialize(value)
            .map_err(|e| DomainError::validation(format!("stock meta: {e}")))
    }
}

impl ValueObject for StockMeta {}

/// Remaining quantity of every global pool of an event, keyed by pool id.
///
/// Owned by the event; accounts only read from it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventStockMeta(BTreeMap<String, i64>);

impl EventStockMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pool(mut self, pool_id: impl Into<String>, quantity: i64) -> Self {
        self.insert(pool_id, quantity);
        self
    }

    pub fn insert(&mut self, pool_id: impl Into<String>, quantity: i64) -> Option<i64> {
        self.0.insert(pool_id.into(), quantity)
    }

    pub fn get(&self, pool_id: &str) -> Option<i64> {
        self.0.get(pool_id).copied()
    }

    /// Remaining quantity of a pool; pools have no unlimited state, so an
    /// unknown pool reads as empty.
    pub fn quantity(&self, pool_id: &str) -> i64 {
        self.get(pool_id).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for EventStockMeta {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Read access to the meta of the event a ticket belongs to.
pub trait TicketMeta {
    fn event_stock_meta(&self) -> &EventStockMeta;
}

impl TicketMeta for EventStockMeta {
    fn event_stock_meta(&self) -> &EventStockMeta {
        self
    }
}

impl<T: TicketMeta + ?Sized> TicketMeta for &T {
    fn event_stock_meta(&self) -> &EventStockMeta {
        (**self).event_stock_meta()
    }
}

impl<T: TicketMeta + ?Sized> TicketMeta for std::rc::Rc<T> {
    fn event_stock_meta(&self) -> &EventStockMeta {
        (**self).event_stock_meta()
    }
}

impl<T: TicketMeta + ?Sized> TicketMeta for std::sync::Arc<T> {
    fn event_stock_meta(&self) -> &EventStockMeta {
        (**self).event_stock_meta()
    }
}
