//! Client traits for the database collaborator
//!
//! The probe deliberately knows nothing about the engine behind these
//! traits: locking, isolation, and statement execution all belong to the
//! implementor. Swapping implementations (on-disk engine, in-memory fake)
//! must not change anything above this seam.

use crate::error::Result;
use crate::value::{Rows, SqlValue};

/// Transaction mode requested from the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnMode {
    /// Take locks lazily, on first read or write.
    Deferred,
    /// Reserve the write lock up front. The probe always uses this mode.
    Write,
}

/// A database connection capable of autocommit statements and transactions.
pub trait SqlClient {
    /// Transaction handle tied to the connection's lifetime.
    type Txn<'c>: SqlTransaction
    where
        Self: 'c;

    /// Execute one autocommit statement with positional parameters.
    ///
    /// Used for schema setup, seeding, and cleanup. Mutating statements
    /// return an empty result set.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the statement.
    fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<Rows>;

    /// Open a transaction in the given mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot grant a transaction, e.g.
    /// because another connection holds the write lock.
    fn begin(&mut self, mode: TxnMode) -> Result<Self::Txn<'_>>;

    /// Release the connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine fails to release cleanly; callers
    /// treat this as log-and-continue.
    fn close(self) -> Result<()>;
}

/// An open transaction.
///
/// Dropping a handle without calling either `commit` or `rollback` must
/// discard the uncommitted writes, matching embedded-engine semantics.
pub trait SqlTransaction {
    /// Execute one statement scoped to this transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the statement.
    fn execute(&mut self, sql: &str, params: &[SqlValue]) -> Result<Rows>;

    /// Commit the transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the commit (conflict, lock
    /// timeout, corruption). The handle is consumed either way; on failure
    /// the engine discards the writes.
    fn commit(self) -> Result<()>;

    /// Roll the transaction back.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine fails the rollback. Callers treat
    /// rollback as best-effort cleanup and suppress this error so it never
    /// masks the failure that triggered it.
    fn rollback(self) -> Result<()>;
}
