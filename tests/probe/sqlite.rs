//! The same end-to-end scenarios against a real on-disk SQLite database.

use tempfile::TempDir;

use crate::common;
use crate::common::NoDelay;
use volley::{run_bursts, run_loop_transaction, seed_items, sql, SqlClient, SqliteClient, SqlValue};

fn value(client: &SqliteClient, id: &str) -> Option<i64> {
    client
        .execute(sql::SELECT_VALUE, &[SqlValue::text(id)])
        .unwrap()
        .first()
        .and_then(|r| r.integer(0))
}

#[test]
fn full_run_counts_and_persists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("probe.db");
    let config = common::burst_config(2, 3);

    let mut client = SqliteClient::open(&path).unwrap();
    seed_items(&client, &config);
    let report = run_bursts(&mut client, &config, &NoDelay);

    assert_eq!(report.committed, 6);
    assert_eq!(report.failed, 0);
    assert_eq!(value(&client, "item_m_0"), Some(6));
    assert_eq!(value(&client, "item_m_1"), Some(6));
    client.close().unwrap();

    // Counters survive the connection.
    let reopened = SqliteClient::open(&path).unwrap();
    assert_eq!(value(&reopened, "item_m_0"), Some(6));
    reopened.close().unwrap();
}

#[test]
fn missing_target_is_tolerated_on_sqlite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("probe.db");
    let config = common::burst_config(1, 1);

    let mut client = SqliteClient::open(&path).unwrap();
    seed_items(&client, &config);

    let ids: Vec<String> = ["item_m_0", "item_m_404", "item_m_1"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert!(run_loop_transaction(&mut client, &ids, "b1-t1"));

    assert_eq!(value(&client, "item_m_0"), Some(1));
    assert_eq!(value(&client, "item_m_1"), Some(1));
    assert_eq!(value(&client, "item_m_404"), None);
    client.close().unwrap();
}

#[test]
fn setup_resets_a_database_left_by_a_previous_run() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("probe.db");
    let config = common::burst_config(1, 5);

    let mut client = SqliteClient::open(&path).unwrap();
    seed_items(&client, &config);
    run_bursts(&mut client, &config, &NoDelay);
    assert_eq!(value(&client, "item_m_0"), Some(5));

    seed_items(&client, &config);
    assert_eq!(value(&client, "item_m_0"), Some(0));
    assert_eq!(value(&client, "item_m_1"), Some(0));
    client.close().unwrap();
}
