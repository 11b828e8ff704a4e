//! The probe itself: setup, transaction routine, burst driver
//!
//! Control flow is a single cooperative thread: driver -> setup (once) ->
//! burst loop -> transaction routine -> client. Exactly one transaction is
//! open at any time; the next one starts only after the previous commit or
//! rollback fully resolves and the configured delay elapses. All outcomes
//! are reported as log lines; the run's purpose is a log stream a human
//! reads for contention symptoms.

pub mod burst;
pub mod policy;
pub mod setup;
pub mod txn;

pub use burst::{run_bursts, RunReport};
pub use setup::{seed_id, seed_items};
pub use txn::run_loop_transaction;
