//! Probe configuration via `volley.toml`
//!
//! The burst shape, target rows, and pacing are an immutable configuration
//! structure handed to the driver, not module-level constants. On startup
//! the binary loads `volley.toml` from the working directory when present;
//! otherwise the reference defaults below apply. To change a run, edit the
//! file and rerun.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "volley.toml";

/// Configuration for one probe run.
///
/// # Example
///
/// ```toml
/// seed_count = 2
/// target_ids = ["item_m_0", "item_m_1"]
/// bursts = 4
/// txns_per_burst = 10
/// txn_delay_ms = 50
/// burst_delay_ms = 1000
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Number of rows seeded at setup, ids `item_m_0 .. item_m_<n-1>`.
    #[serde(default = "default_seed_count")]
    pub seed_count: usize,
    /// Ordered row ids each transaction reads, increments, and writes back.
    #[serde(default = "default_target_ids")]
    pub target_ids: Vec<String>,
    /// Number of bursts in the run.
    #[serde(default = "default_bursts")]
    pub bursts: u32,
    /// Number of sequential transactions per burst.
    #[serde(default = "default_txns_per_burst")]
    pub txns_per_burst: u32,
    /// Delay between transactions within a burst, in milliseconds.
    #[serde(default = "default_txn_delay_ms")]
    pub txn_delay_ms: u64,
    /// Delay between bursts, in milliseconds.
    #[serde(default = "default_burst_delay_ms")]
    pub burst_delay_ms: u64,
}

fn default_seed_count() -> usize {
    2
}

fn default_target_ids() -> Vec<String> {
    vec!["item_m_0".to_string(), "item_m_1".to_string()]
}

fn default_bursts() -> u32 {
    4
}

fn default_txns_per_burst() -> u32 {
    10
}

fn default_txn_delay_ms() -> u64 {
    50
}

fn default_burst_delay_ms() -> u64 {
    1000
}

impl Default for ProbeConfig {
    fn default() -> Self {
        ProbeConfig {
            seed_count: default_seed_count(),
            target_ids: default_target_ids(),
            bursts: default_bursts(),
            txns_per_burst: default_txns_per_burst(),
            txn_delay_ms: default_txn_delay_ms(),
            burst_delay_ms: default_burst_delay_ms(),
        }
    }
}

impl ProbeConfig {
    /// Load configuration from a TOML file.
    ///
    /// Missing fields fall back to the reference defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Delay between transactions within a burst.
    pub fn txn_delay(&self) -> Duration {
        Duration::from_millis(self.txn_delay_ms)
    }

    /// Delay between bursts.
    pub fn burst_delay(&self) -> Duration {
        Duration::from_millis(self.burst_delay_ms)
    }

    /// Total number of transactions scheduled for the run.
    pub fn scheduled_txns(&self) -> u32 {
        self.bursts.saturating_mul(self.txns_per_burst)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# volley probe configuration
#
# Rows seeded at setup (ids item_m_0 .. item_m_<n-1>), all counters 0.
seed_count = 2

# Ordered row ids each transaction reads, increments, and writes back.
target_ids = ["item_m_0", "item_m_1"]

# Burst shape: bursts x txns_per_burst sequential write transactions.
bursts = 4
txns_per_burst = 10

# Pacing: short delay between transactions, long delay between bursts.
txn_delay_ms = 50
burst_delay_ms = 1000
"#
    }
}
