//! Shared test utilities for the integration suites.
//!
//! Import via `mod common;` from a suite's main.rs.

#![allow(dead_code)]

use std::time::Duration;

use parking_lot::Mutex;
use volley::{Clock, MemoryClient, ProbeConfig};

/// Clock that returns immediately, for running full burst schedules fast.
pub struct NoDelay;

impl Clock for NoDelay {
    fn sleep(&self, _duration: Duration) {}
}

/// Clock that records every requested sleep, for pacing assertions.
#[derive(Default)]
pub struct RecordingClock {
    sleeps: Mutex<Vec<Duration>>,
}

impl RecordingClock {
    pub fn new() -> Self {
        RecordingClock::default()
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().clone()
    }
}

impl Clock for RecordingClock {
    fn sleep(&self, duration: Duration) {
        self.sleeps.lock().push(duration);
    }
}

/// Reference config with the given burst shape and no other changes.
pub fn burst_config(bursts: u32, txns_per_burst: u32) -> ProbeConfig {
    ProbeConfig {
        bursts,
        txns_per_burst,
        ..ProbeConfig::default()
    }
}

/// A seeded in-memory client with the reference two rows.
pub fn seeded_memory_client(config: &ProbeConfig) -> MemoryClient {
    let client = MemoryClient::new();
    volley::seed_items(&client, config);
    client
}
