//! Best-effort table setup and seeding
//!
//! Setup never fails the run. The table may already exist with a
//! compatible schema, a previous run may have left rows behind, and a
//! single bad insert should not abort the remaining ones; each failure is
//! logged and skipped.

use tracing::{debug, warn};
use volley_core::{sql, ProbeConfig, SqlClient, SqlValue};

use crate::policy;

/// Seeded row id for index `i`.
pub fn seed_id(i: usize) -> String {
    format!("item_m_{i}")
}

/// Create the probe table, clear it, and seed `config.seed_count` rows
/// with counter 0.
pub fn seed_items<C: SqlClient>(client: &C, config: &ProbeConfig) {
    policy::ignore_and_log(
        "create items_minimal",
        client.execute(sql::CREATE_TABLE, &[]).map(drop),
    );
    policy::ignore_and_log(
        "clear items_minimal",
        client.execute(sql::CLEAR, &[]).map(drop),
    );

    for i in 0..config.seed_count {
        let id = seed_id(i);
        match client.execute(sql::INSERT, &[SqlValue::text(&id), SqlValue::Integer(0)]) {
            Ok(_) => debug!(id = %id, "seeded"),
            Err(error) => warn!(id = %id, %error, "seed insert failed, skipping"),
        }
    }
    debug!(count = config.seed_count, "setup complete");
}
