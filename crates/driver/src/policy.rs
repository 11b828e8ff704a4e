//! Explicit ignore-and-log error policies
//!
//! The probe swallows certain failures on purpose: setup is idempotent
//! best-effort initialization, and rollback is cleanup whose failure must
//! never mask the error that triggered it. Routing the swallowing through
//! these functions keeps the policy visible and testable instead of hiding
//! it in discarded `Result`s.

use tracing::{debug, warn};
use volley_core::Result;

/// Log a failure at warn level and drop it.
///
/// Used where the run must continue regardless: setup statements and the
/// final connection close.
pub fn ignore_and_log(context: &str, result: Result<()>) {
    if let Err(error) = result {
        warn!(context, %error, "ignoring failure");
    }
}

/// Drop a failure with only a debug-level trace.
///
/// Used for rollback, where the original transaction error is the
/// actionable one and the cleanup outcome is noise.
pub fn ignore_silently(context: &str, result: Result<()>) {
    if let Err(error) = result {
        debug!(context, %error, "suppressed failure");
    }
}
