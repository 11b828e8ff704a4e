//! SQLite-backed client
//!
//! Wraps a `rusqlite::Connection`. Write-mode transactions map to
//! `BEGIN IMMEDIATE`, so the write lock is taken when the transaction
//! opens rather than at the first write. The pragma posture below is the
//! standard one for probing lock contention: WAL journaling with a busy
//! timeout so lock waits surface as delayed statements instead of
//! immediate `SQLITE_BUSY` failures.

use std::path::Path;

use rusqlite::types::{Value as NativeValue, ValueRef};
use rusqlite::{Connection, TransactionBehavior};
use tracing::debug;

use volley_core::{Error, Result, Row, Rows, SqlClient, SqlTransaction, SqlValue, TxnMode};

// journal_mode and busy_timeout report their new value as a result row, so
// they run through the probe's own statement path rather than a batch.
const PRAGMAS: [&str; 3] = [
    "PRAGMA busy_timeout = 10000",
    "PRAGMA journal_mode = WAL",
    "PRAGMA synchronous = NORMAL",
];

/// Client over an embedded SQLite database file.
pub struct SqliteClient {
    conn: Connection,
}

impl SqliteClient {
    /// Open (or create) the database at `path` and apply the probe pragmas.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or a pragma fails.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| Error::Statement(e.to_string()))?;
        for pragma in PRAGMAS {
            run_statement(&conn, pragma, &[])?;
        }
        debug!(path = %path.display(), "opened sqlite database");
        Ok(SqliteClient { conn })
    }

    /// Open an ephemeral in-memory database. Used by tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot create the database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| Error::Statement(e.to_string()))?;
        Ok(SqliteClient { conn })
    }
}

impl SqlClient for SqliteClient {
    type Txn<'c> = SqliteTransaction<'c>;

    fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<Rows> {
        run_statement(&self.conn, sql, params)
    }

    fn begin(&mut self, mode: TxnMode) -> Result<SqliteTransaction<'_>> {
        let behavior = match mode {
            TxnMode::Deferred => TransactionBehavior::Deferred,
            TxnMode::Write => TransactionBehavior::Immediate,
        };
        let txn = self
            .conn
            .transaction_with_behavior(behavior)
            .map_err(|e| Error::Begin(e.to_string()))?;
        Ok(SqliteTransaction { txn })
    }

    fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_conn, e)| Error::Close(e.to_string()))
    }
}

/// An open SQLite transaction.
///
/// Dropping without commit rolls back, per rusqlite's default drop
/// behavior, which is exactly the discard-on-failure contract the probe
/// relies on.
pub struct SqliteTransaction<'c> {
    txn: rusqlite::Transaction<'c>,
}

impl SqlTransaction for SqliteTransaction<'_> {
    fn execute(&mut self, sql: &str, params: &[SqlValue]) -> Result<Rows> {
        run_statement(&self.txn, sql, params)
    }

    fn commit(self) -> Result<()> {
        self.txn.commit().map_err(|e| Error::Commit(e.to_string()))
    }

    fn rollback(self) -> Result<()> {
        self.txn
            .rollback()
            .map_err(|e| Error::Rollback(e.to_string()))
    }
}

/// Run one statement, returning rows for queries and an empty set for
/// mutations. Statements are dispatched on their prepared column count,
/// so callers never declare whether a statement reads or writes.
fn run_statement(conn: &Connection, sql: &str, params: &[SqlValue]) -> Result<Rows> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| Error::Statement(e.to_string()))?;
    let columns = stmt.column_count();
    let params = rusqlite::params_from_iter(params.iter().map(to_native));

    if columns == 0 {
        stmt.execute(params)
            .map_err(|e| Error::Statement(e.to_string()))?;
        return Ok(Rows::empty());
    }

    let mut native_rows = stmt
        .query(params)
        .map_err(|e| Error::Statement(e.to_string()))?;
    let mut out = Vec::new();
    while let Some(row) = native_rows
        .next()
        .map_err(|e| Error::Statement(e.to_string()))?
    {
        let mut values = Vec::with_capacity(columns);
        for index in 0..columns {
            let value = row
                .get_ref(index)
                .map_err(|e| Error::Decode(e.to_string()))?;
            values.push(from_native(value));
        }
        out.push(Row::new(values));
    }
    Ok(Rows::new(out))
}

fn to_native(value: &SqlValue) -> NativeValue {
    match value {
        SqlValue::Null => NativeValue::Null,
        SqlValue::Integer(i) => NativeValue::Integer(*i),
        SqlValue::Real(r) => NativeValue::Real(*r),
        SqlValue::Text(t) => NativeValue::Text(t.clone()),
        SqlValue::Blob(b) => NativeValue::Blob(b.clone()),
    }
}

fn from_native(value: ValueRef<'_>) -> SqlValue {
    match value {
        ValueRef::Null => SqlValue::Null,
        ValueRef::Integer(i) => SqlValue::Integer(i),
        ValueRef::Real(r) => SqlValue::Real(r),
        ValueRef::Text(t) => SqlValue::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => SqlValue::Blob(b.to_vec()),
    }
}
