//! Core types and traits for volley
//!
//! This crate defines the foundational pieces used throughout the probe:
//! - SqlValue, Row, Rows: the shape of data crossing the client boundary
//! - SqlClient, SqlTransaction: the collaborator seam for the database engine
//! - ProbeConfig: burst shape, target rows, and pacing, loaded from `volley.toml`
//! - Clock: injectable delay source so tests run without wall-clock sleeps
//! - Error: error type hierarchy
//! - sql: statement text for the probe schema

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod clock;
pub mod config;
pub mod error;
pub mod sql;
pub mod value;

// Re-export commonly used types and traits
pub use client::{SqlClient, SqlTransaction, TxnMode};
pub use clock::{Clock, SystemClock};
pub use config::{ProbeConfig, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use value::{Row, Rows, SqlValue};
