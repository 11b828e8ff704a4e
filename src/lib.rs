//! volley - write-transaction burst probe for embedded SQL databases
//!
//! volley hammers a single table with bursts of sequential read-modify-write
//! transactions to surface locking and isolation symptoms under load. It is
//! deliberately a worst-case client, not a reusable transaction abstraction.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use volley::{run_bursts, seed_items, ProbeConfig, SqliteClient, SystemClock};
//!
//! # fn main() -> volley::Result<()> {
//! let config = ProbeConfig::default();
//! let mut client = SqliteClient::open(Path::new("volley.db"))?;
//!
//! seed_items(&client, &config);
//! let report = run_bursts(&mut client, &config, &SystemClock);
//! println!("committed {} / failed {}", report.committed, report.failed);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! The database engine sits behind the [`SqlClient`] seam; the probe never
//! sees locking or isolation internals. [`SqliteClient`] is the real
//! collaborator, [`MemoryClient`] the scripted one for tests and benches.

// Re-export the public API from the member crates
pub use volley_client::{FaultPlan, MemoryClient, MemoryHandle, SqliteClient};
pub use volley_core::{
    sql, Clock, Error, ProbeConfig, Result, Row, Rows, SqlClient, SqlTransaction, SqlValue,
    SystemClock, TxnMode, CONFIG_FILE_NAME,
};
pub use volley_driver::{policy, run_bursts, run_loop_transaction, seed_id, seed_items, RunReport};
