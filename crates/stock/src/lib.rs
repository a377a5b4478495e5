//! Ticket stock accounting.
//!
//! Resolves how many units of an event ticket can still be sold under one of
//! four policies: unlimited, a local per-ticket cap, a global pool shared by
//! several tickets, or both at once. Pure in-memory domain logic; the pool
//! registry is owned by the caller and only read here.

pub mod account;
pub mod meta;
pub mod quantity;
pub mod stock_type;

pub use account::{StockAccount, StockSnapshot};
pub use meta::{EventStockMeta, StockMeta, TicketMeta};
pub use quantity::Stock;
pub use stock_type::StockType;
