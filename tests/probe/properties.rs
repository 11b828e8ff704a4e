//! Conservation property: no transaction is lost or double-counted.

use proptest::prelude::*;

use crate::common;
use volley::{run_bursts, FaultPlan, MemoryClient};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// For any burst shape and any set of scripted commit failures:
    /// committed + failed equals the scheduled transaction count, and each
    /// seeded target row's final counter equals the committed count.
    #[test]
    fn committed_plus_failed_is_conserved(
        bursts in 1u32..=4,
        txns_per_burst in 1u32..=8,
        fault_ordinals in proptest::collection::hash_set(1u64..=32, 0..=5),
    ) {
        let mut plan = FaultPlan::none();
        for ordinal in &fault_ordinals {
            plan = plan.fail_nth_commit(*ordinal);
        }
        let mut client = MemoryClient::with_faults(plan);
        let handle = client.handle();
        let config = common::burst_config(bursts, txns_per_burst);
        volley::seed_items(&client, &config);

        let report = run_bursts(&mut client, &config, &common::NoDelay);

        let scheduled = bursts * txns_per_burst;
        let expected_failures =
            fault_ordinals.iter().filter(|&&o| o <= u64::from(scheduled)).count() as u32;

        prop_assert_eq!(report.committed + report.failed, scheduled);
        prop_assert_eq!(report.failed, expected_failures);
        prop_assert_eq!(handle.value("item_m_0"), Some(i64::from(report.committed)));
        prop_assert_eq!(handle.value("item_m_1"), Some(i64::from(report.committed)));
    }
}
