//! Error types for the volley probe
//!
//! This module defines all error types used throughout the probe.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for probe operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the volley probe
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (config file reads, database file access)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// A statement failed outside or inside a transaction
    #[error("Statement failed: {0}")]
    Statement(String),

    /// The engine refused to open a transaction
    #[error("Could not open transaction: {0}")]
    Begin(String),

    /// The engine rejected a commit (conflict, lock timeout, corruption)
    #[error("Commit failed: {0}")]
    Commit(String),

    /// Rollback failed; callers treat this as best-effort cleanup
    #[error("Rollback failed: {0}")]
    Rollback(String),

    /// The connection could not be released
    #[error("Close failed: {0}")]
    Close(String),

    /// A result row did not have the expected column shape
    #[error("Row decode error: {0}")]
    Decode(String),

    /// Operation attempted on a connection that was already closed
    #[error("Connection already closed")]
    AlreadyClosed,
}
