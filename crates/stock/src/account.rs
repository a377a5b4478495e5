//! Stock account of a single ticket.

use serde::{Deserialize, Serialize};

use ticketstock_core::{Entity, TicketId};

use crate::meta::{StockMeta, TicketMeta};
use crate::quantity::Stock;
use crate::stock_type::StockType;

/// How many units of one ticket are left, under whichever policy is active.
///
/// Built fresh for each request from the ticket id and the event meta, then
/// configured from the persisted [`StockMeta`]. The policy is never stored on
/// its own: [`StockAccount::stock_type`] always reads it off the flags, so it
/// cannot drift from the fields that justify it.
#[derive(Debug, Clone)]
pub struct StockAccount<M> {
    ticket: TicketId,
    meta: M,
    use_global: bool,
    use_local: bool,
    local_qty: Stock,
    global_stock_id: String,
}

impl<M: TicketMeta> StockAccount<M> {
    /// An unconfigured account: unlimited, no pool bound.
    pub fn new(ticket: TicketId, meta: M) -> Self {
        Self {
            ticket,
            meta,
            use_global: false,
            use_local: false,
            local_qty: Stock::Unlimited,
            global_stock_id: String::new(),
        }
    }

    pub fn ticket(&self) -> TicketId {
        self.ticket
    }

    pub fn stock_type(&self) -> StockType {
        StockType::from_flags(self.use_global, self.use_local)
    }

    /// Units that can still be sold.
    pub fn get_stock(&self) -> Stock {
        match self.stock_type() {
            StockType::Unlimited => Stock::Unlimited,
            StockType::Local => self.local_qty,
            StockType::Global => Stock::Quantity(self.get_global_qty()),
            StockType::GlobalLocal => self.local_qty.min(Stock::Quantity(self.get_global_qty())),
        }
    }

    /// The ticket's own cap, whether or not it is in effect.
    pub fn get_local_qty(&self) -> Stock {
        self.local_qty
    }

    /// Remaining quantity of the bound pool; 0 when no pool is bound or the
    /// event does not know it.
    pub fn get_global_qty(&self) -> i64 {
        if self.global_stock_id.is_empty() {
            return 0;
        }
        let pools = self.meta.event_stock_meta();
        match pools.get(&self.global_stock_id) {
            Some(qty) => qty,
            None => {
                tracing::trace!(
                    ticket_id = %self.ticket,
                    global_stock_id = %self.global_stock_id,
                    "global stock pool not found; reading as empty"
                );
                0
            }
        }
    }

    pub fn get_global_stock_id(&self) -> &str {
        &self.global_stock_id
    }

    /// Cap the ticket locally at `qty`.
    ///
    /// Always switches to local accounting. The pool id is kept but has no
    /// effect until a later `set_stock_meta` turns global stock back on.
    pub fn set_stock(&mut self, qty: i64) {
        let from = self.stock_type();
        self.use_local = true;
        self.use_global = false;
        self.local_qty = Stock::Quantity(qty);
        self.log_transition(from);
    }

    /// Replace all stock settings with a persisted record.
    pub fn set_stock_meta(&mut self, meta: StockMeta) {
        let from = self.stock_type();
        let StockMeta {
            use_global,
            use_local,
            local_qty,
            global_stock_id,
        } = meta;
        self.use_global = use_global;
        self.use_local = use_local;
        self.local_qty = Stock::Quantity(local_qty);
        self.global_stock_id = global_stock_id;
        self.log_transition(from);
    }

    /// Current settings in their persisted form.
    ///
    /// An unconfigured account has no local cap to store; it is written as
    /// `local_qty: 0` with `use_local: false`.
    pub fn stock_meta(&self) -> StockMeta {
        StockMeta {
            use_global: self.use_global,
            use_local: self.use_local,
            local_qty: self.local_qty.quantity().unwrap_or(0),
            global_stock_id: self.global_stock_id.clone(),
        }
    }

    pub fn snapshot(&self) -> StockSnapshot {
        StockSnapshot {
            ticket_id: self.ticket,
            stock_type: self.stock_type(),
            stock: self.get_stock(),
            local_qty: self.local_qty,
            global_qty: self.get_global_qty(),
            global_stock_id: self.global_stock_id.clone(),
        }
    }

    fn log_transition(&self, from: StockType) {
        tracing::debug!(
            ticket_id = %self.ticket,
            from = %from,
            to = %self.stock_type(),
            local_qty = %self.local_qty,
            global_stock_id = %self.global_stock_id,
            "stock settings updated"
        );
    }
}

impl<M> Entity for StockAccount<M> {
    type Id = TicketId;

    fn id(&self) -> &Self::Id {
        &self.ticket
    }
}

/// Read model handed to rendering/administration layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSnapshot {
    pub ticket_id: TicketId,
    pub stock_type: StockType,
    pub stock: Stock,
    pub local_qty: Stock,
    pub global_qty: i64,
    pub global_stock_id: String,
}
