//! The burst driver
//!
//! Runs `bursts` batches of `txns_per_burst` sequential transactions with
//! a short delay between transactions and a long delay between bursts.
//! Transactions are never issued in parallel: the point is per-transaction
//! internal-loop behavior under load timing, not concurrent writers.

use tracing::info;
use volley_core::{Clock, ProbeConfig, SqlClient};

use crate::txn::run_loop_transaction;

/// Tally of one probe run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Transactions whose commit succeeded.
    pub committed: u32,
    /// Transactions that failed anywhere from begin through commit.
    pub failed: u32,
}

impl RunReport {
    /// Total transactions attempted.
    pub fn total(&self) -> u32 {
        self.committed + self.failed
    }

    fn record(&mut self, committed: bool) {
        if committed {
            self.committed += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Run the full burst schedule against `client`, pacing with `clock`.
///
/// Every per-transaction failure is absorbed into the report; the driver
/// itself never fails. Labels are 1-indexed for display: `b2-t7` is the
/// seventh transaction of the second burst.
pub fn run_bursts<C: SqlClient>(
    client: &mut C,
    config: &ProbeConfig,
    clock: &dyn Clock,
) -> RunReport {
    let mut report = RunReport::default();

    for burst in 0..config.bursts {
        for slot in 0..config.txns_per_burst {
            let label = format!("b{}-t{}", burst + 1, slot + 1);
            let committed = run_loop_transaction(client, &config.target_ids, &label);
            report.record(committed);

            if slot + 1 < config.txns_per_burst {
                clock.sleep(config.txn_delay());
            }
        }
        if burst + 1 < config.bursts {
            clock.sleep(config.burst_delay());
        }
    }

    info!(
        committed = report.committed,
        failed = report.failed,
        "probe complete"
    );
    report
}
