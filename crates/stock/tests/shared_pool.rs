//! Several tickets of one event configured from stored meta records.

use std::rc::Rc;

use serde_json::json;
use ticketstock_core::TicketId;
use ticketstock_stock::{EventStockMeta, Stock, StockAccount, StockMeta, StockType};

fn event_pools() -> Rc<EventStockMeta> {
    let pools: EventStockMeta = serde_json::from_value(json!({ "default": 12, "vip": 2 })).unwrap();
    Rc::new(pools)
}

fn account_from_record(
    pools: &Rc<EventStockMeta>,
    record: serde_json::Value,
) -> StockAccount<Rc<EventStockMeta>> {
    let meta = StockMeta::from_json(&record).unwrap();
    let mut account = StockAccount::new(TicketId::new(), Rc::clone(pools));
    account.set_stock_meta(meta);
    account
}

#[test]
fn tickets_of_one_event_resolve_their_own_policy() {
    ticketstock_observability::init();
    let pools = event_pools();

    let general = account_from_record(
        &pools,
        json!({ "use_global": true, "use_local": false, "local_qty": 0, "global_stock_id": "default" }),
    );
    let early_bird = account_from_record(
        &pools,
        json!({ "use_global": true, "use_local": true, "local_qty": 5, "global_stock_id": "default" }),
    );
    let backstage = account_from_record(
        &pools,
        json!({ "use_global": true, "use_local": true, "local_qty": 10, "global_stock_id": "vip" }),
    );
    let merch = account_from_record(
        &pools,
        json!({ "use_global": false, "use_local": true, "local_qty": 100, "global_stock_id": "" }),
    );
    let free_entry = account_from_record(&pools, json!({}));

    assert_eq!(general.stock_type(), StockType::Global);
    assert_eq!(general.get_stock(), Stock::Quantity(12));

    assert_eq!(early_bird.stock_type(), StockType::GlobalLocal);
    assert_eq!(early_bird.get_stock(), Stock::Quantity(5));

    assert_eq!(backstage.get_stock(), Stock::Quantity(2));
    assert_eq!(backstage.get_global_qty(), 2);

    assert_eq!(merch.stock_type(), StockType::Local);
    assert_eq!(merch.get_stock(), Stock::Quantity(100));

    assert!(free_entry.stock_type().is_unlimited());
    assert_eq!(free_entry.get_stock(), Stock::Unlimited);
}

#[test]
fn snapshot_serializes_for_rendering() {
    ticketstock_observability::init();
    let pools = event_pools();
    let account = account_from_record(
        &pools,
        json!({ "use_global": true, "use_local": true, "local_qty": 23, "global_stock_id": "default" }),
    );

    let rendered = serde_json::to_value(account.snapshot()).unwrap();

    assert_eq!(rendered["stock_type"], json!("global_local"));
    assert_eq!(rendered["stock"], json!({ "quantity": 12 }));
    assert_eq!(rendered["local_qty"], json!({ "quantity": 23 }));
    assert_eq!(rendered["global_qty"], json!(12));
    assert_eq!(rendered["global_stock_id"], json!("default"));
    assert_eq!(rendered["ticket_id"], json!(account.ticket().to_string()));
}

#[test]
fn admin_override_persists_as_local_stock() {
    ticketstock_observability::init();
    let pools = event_pools();
    let mut account = account_from_record(
        &pools,
        json!({ "use_global": true, "use_local": false, "local_qty": 0, "global_stock_id": "vip" }),
    );

    account.set_stock(7);
    let stored = serde_json::to_value(account.stock_meta()).unwrap();

    assert_eq!(
        stored,
        json!({ "use_global": false, "use_local": true, "local_qty": 7, "global_stock_id": "vip" })
    );

    let reloaded = account_from_record(&pools, stored);
    assert_eq!(reloaded.get_stock(), Stock::Quantity(7));
    assert_eq!(reloaded.get_global_stock_id(), "vip");
}
