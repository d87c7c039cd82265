//! Correlation table tests

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use shirasu_domain::Error;
use shirasu_infrastructure::CorrelationTable;

#[tokio::test]
async fn test_get_times_out_and_discards_slot() {
    let table = CorrelationTable::<Value>::new();
    let id = table.register();

    let result = table.get(id, Duration::from_millis(50)).await;
    assert!(matches!(result, Err(Error::Timeout { .. })));
    assert!(!table.contains(id));

    // A late response is ignored.
    assert!(!table.set(id, json!({ "late": true })));
    assert!(table.is_empty());
}

#[tokio::test]
async fn test_set_resolves_waiter() {
    let table = Arc::new(CorrelationTable::<Value>::new());
    let id = table.register();

    let responder = {
        let table = Arc::clone(&table);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            table.set(id, json!({ "message_id": 7 }))
        })
    };

    let value = table.get(id, Duration::from_secs(1)).await.unwrap();
    assert_eq!(value["message_id"], 7);
    assert!(responder.await.unwrap());
    assert!(table.is_empty());
}

#[tokio::test]
async fn test_second_get_fails() {
    let table = CorrelationTable::<Value>::new();
    let id = table.register();
    table.set(id, Value::Null);

    assert!(table.get(id, Duration::from_millis(10)).await.is_ok());
    assert!(table.get(id, Duration::from_millis(10)).await.is_err());
}

#[tokio::test]
async fn test_unknown_id_is_noop() {
    let table = CorrelationTable::<Value>::new();
    assert!(!table.set(42, Value::Null));
    assert!(table.is_empty());
}

#[tokio::test]
async fn test_ids_are_unique_across_tasks() {
    let table = Arc::new(CorrelationTable::<Value>::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let table = Arc::clone(&table);
            tokio::spawn(async move { (0..100).map(|_| table.register()).collect::<Vec<_>>() })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.extend(handle.await.unwrap());
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 800);
    assert_eq!(table.len(), 800);
}

#[tokio::test]
async fn test_cancelled_waiter_discards_slot() {
    let table = Arc::new(CorrelationTable::<Value>::new());
    let id = table.register();

    let waiter = {
        let table = Arc::clone(&table);
        tokio::spawn(async move { table.get(id, Duration::from_secs(30)).await })
    };
    tokio::time::sleep(Duration::from_millis(10)).await;
    waiter.abort();
    assert!(waiter.await.unwrap_err().is_cancelled());

    assert!(!table.contains(id));
    assert!(table.is_empty());
}

#[tokio::test]
async fn test_get_dropped_by_outer_timeout_discards_slot() {
    let table = CorrelationTable::<Value>::new();
    let id = table.register();

    let outer = tokio::time::timeout(
        Duration::from_millis(10),
        table.get(id, Duration::from_secs(30)),
    )
    .await;
    assert!(outer.is_err());
    assert!(table.is_empty());
}
