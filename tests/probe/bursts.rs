//! Full burst-schedule scenarios: counting, pacing, cleanup.

use crate::common;
use crate::common::{NoDelay, RecordingClock};
use std::time::Duration;
use volley::{policy, run_bursts, FaultPlan, MemoryClient, ProbeConfig, SqlClient};

#[test]
fn one_burst_of_one_transaction() {
    let config = common::burst_config(1, 1);
    let mut client = common::seeded_memory_client(&config);
    let handle = client.handle();

    let report = run_bursts(&mut client, &config, &NoDelay);

    assert_eq!(report.committed, 1);
    assert_eq!(report.failed, 0);
    assert_eq!(handle.value("item_m_0"), Some(1));
    assert_eq!(handle.value("item_m_1"), Some(1));
}

#[test]
fn four_bursts_of_ten_reach_forty() {
    let config = common::burst_config(4, 10);
    let mut client = common::seeded_memory_client(&config);
    let handle = client.handle();

    let report = run_bursts(&mut client, &config, &NoDelay);

    assert_eq!(report.total(), 40);
    assert_eq!(report.committed, 40);
    assert_eq!(handle.value("item_m_0"), Some(40));
    assert_eq!(handle.value("item_m_1"), Some(40));
}

#[test]
fn commit_failures_reduce_the_final_value_by_exactly_their_count() {
    let plan = FaultPlan::none()
        .fail_nth_commit(3)
        .fail_nth_commit(17)
        .fail_nth_commit(40);
    let mut client = MemoryClient::with_faults(plan);
    let handle = client.handle();
    let config = common::burst_config(4, 10);
    volley::seed_items(&client, &config);

    let report = run_bursts(&mut client, &config, &NoDelay);

    assert_eq!(report.committed + report.failed, 40);
    assert_eq!(report.failed, 3);
    assert_eq!(handle.value("item_m_0"), Some(37));
    assert_eq!(handle.value("item_m_1"), Some(37));
}

#[test]
fn pacing_short_within_bursts_long_between_them() {
    let config = ProbeConfig {
        bursts: 3,
        txns_per_burst: 4,
        txn_delay_ms: 5,
        burst_delay_ms: 70,
        ..ProbeConfig::default()
    };
    let mut client = common::seeded_memory_client(&config);
    let clock = RecordingClock::new();

    run_bursts(&mut client, &config, &clock);

    let short = Duration::from_millis(5);
    let long = Duration::from_millis(70);
    let expected = vec![
        short, short, short, long, // burst 1: no delay after the last txn
        short, short, short, long, // burst 2
        short, short, short, // burst 3: no delay after the last burst
    ];
    assert_eq!(clock.sleeps(), expected);
}

#[test]
fn connection_is_closed_exactly_once_even_after_failures() {
    // Mirror the binary's flow: seed, run with faults, close via policy.
    let plan = FaultPlan::none().fail_nth_begin(1).fail_nth_commit(2);
    let mut client = MemoryClient::with_faults(plan);
    let handle = client.handle();
    let config = common::burst_config(2, 2);
    volley::seed_items(&client, &config);

    let report = run_bursts(&mut client, &config, &NoDelay);
    assert_eq!(report.total(), 4);
    assert_eq!(report.failed, 2);

    policy::ignore_and_log("close connection", client.close());
    assert_eq!(handle.closes(), 1);
}
