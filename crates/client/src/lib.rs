//! Database clients for the volley probe
//!
//! Two implementations of the `volley-core` client seam:
//! - [`SqliteClient`]: the real collaborator, an embedded SQLite database
//!   via rusqlite with the probe's pragma posture applied on open.
//! - [`MemoryClient`]: an in-memory table with buffered transactions and
//!   scripted fault injection, used by tests and benches.

pub mod memory;
pub mod sqlite;

pub use memory::{FaultPlan, MemoryClient, MemoryHandle, MemoryTransaction};
pub use sqlite::{SqliteClient, SqliteTransaction};
