//! Setup semantics: seeding, reset, idempotence.

use crate::common;
use volley::{seed_id, seed_items, ProbeConfig};

#[test]
fn seeded_rows_start_at_zero() {
    let config = ProbeConfig {
        seed_count: 5,
        ..ProbeConfig::default()
    };
    let client = common::seeded_memory_client(&config);
    let handle = client.handle();

    assert_eq!(handle.row_count(), 5);
    for i in 0..5 {
        assert_eq!(handle.value(&seed_id(i)), Some(0), "row {i} not zeroed");
    }
}

#[test]
fn setup_twice_equals_setup_once() {
    let config = ProbeConfig::default();
    let client = common::seeded_memory_client(&config);
    let handle = client.handle();

    seed_items(&client, &config);

    assert_eq!(handle.row_count(), config.seed_count);
    assert_eq!(handle.value("item_m_0"), Some(0));
    assert_eq!(handle.value("item_m_1"), Some(0));
}

#[test]
fn setup_resets_counters_left_by_a_previous_run() {
    let config = common::burst_config(1, 3);
    let mut client = common::seeded_memory_client(&config);
    let handle = client.handle();

    let report = volley::run_bursts(&mut client, &config, &common::NoDelay);
    assert_eq!(report.committed, 3);
    assert_eq!(handle.value("item_m_0"), Some(3));

    seed_items(&client, &config);
    assert_eq!(handle.value("item_m_0"), Some(0));
    assert_eq!(handle.value("item_m_1"), Some(0));
    assert_eq!(handle.row_count(), config.seed_count);
}
