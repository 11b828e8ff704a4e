//! The transactional read-modify-write routine
//!
//! One write transaction per call: read each target row's counter inside
//! the transaction, write back counter + 1, commit. This is deliberately
//! the worst-case client pattern for an embedded engine (read-then-write
//! on several rows in one transaction), which is what makes it a useful
//! contention probe.

use tracing::{debug, info, warn};
use volley_core::{sql, Error, Result, SqlClient, SqlTransaction, SqlValue, TxnMode};

use crate::policy;

/// Run one read-modify-write transaction over `ids`.
///
/// Returns true only if the commit succeeded. A missing target row is
/// skipped, not an error; whether a missing row signals a real business
/// case or a seeding bug upstream is an open question, so the tolerance is
/// preserved as observed behavior rather than tightened.
///
/// Exactly one commit or rollback is issued per call, except when the
/// transaction cannot be opened at all (nothing to roll back). Rollback
/// failures are suppressed so they never mask the error that caused them.
pub fn run_loop_transaction<C: SqlClient>(client: &mut C, ids: &[String], label: &str) -> bool {
    let txn = match client.begin(TxnMode::Write) {
        Ok(txn) => txn,
        Err(error) => {
            warn!(label, %error, "could not open write transaction");
            return false;
        }
    };

    run_in_txn(txn, ids, label)
}

fn run_in_txn<T: SqlTransaction>(mut txn: T, ids: &[String], label: &str) -> bool {
    if let Err(error) = increment_each(&mut txn, ids) {
        policy::ignore_silently("rollback", txn.rollback());
        warn!(label, %error, "transaction failed, rolled back");
        return false;
    }

    match txn.commit() {
        Ok(()) => {
            info!(label, "committed");
            true
        }
        Err(error) => {
            // The handle is consumed by the failed commit; the engine
            // discards the writes on its abort path.
            warn!(label, %error, "commit rejected");
            false
        }
    }
}

fn increment_each<T: SqlTransaction>(txn: &mut T, ids: &[String]) -> Result<()> {
    for id in ids {
        let rows = txn.execute(sql::SELECT_VALUE, &[SqlValue::text(id)])?;
        let Some(row) = rows.first() else {
            debug!(id = %id, "row missing, skipped");
            continue;
        };
        let current = row
            .integer(0)
            .ok_or_else(|| Error::Decode(format!("value column for {id} was not an integer")))?;
        txn.execute(
            sql::UPDATE_VALUE,
            &[SqlValue::Integer(current + 1), SqlValue::text(id)],
        )?;
    }
    Ok(())
}
