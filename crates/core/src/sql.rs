//! Statement text for the probe schema
//!
//! One table, fixed schema. Rows are seeded at setup and mutated only by
//! increment-by-one inside a write transaction.

/// Creates the probe table when it does not already exist.
pub const CREATE_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS items_minimal (id TEXT PRIMARY KEY, value INTEGER NOT NULL DEFAULT 0)";

/// Removes every row, resetting state between runs.
pub const CLEAR: &str = "DELETE FROM items_minimal";

/// Inserts one seeded row.
pub const INSERT: &str = "INSERT INTO items_minimal (id, value) VALUES (?1, ?2)";

/// Reads the counter for one row inside a transaction.
pub const SELECT_VALUE: &str = "SELECT value FROM items_minimal WHERE id = ?1";

/// Writes an incremented counter back inside the same transaction.
pub const UPDATE_VALUE: &str = "UPDATE items_minimal SET value = ?1 WHERE id = ?2";
