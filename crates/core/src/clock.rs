//! Injectable delay source
//!
//! The burst driver paces itself with short and long delays. Routing them
//! through a trait lets tests drive the full sequence without wall-clock
//! sleeps and assert on the exact pacing the driver requested.

use std::thread;
use std::time::Duration;

/// Source of delays for the burst driver.
pub trait Clock {
    /// Suspend the calling flow for `duration`.
    fn sleep(&self, duration: Duration);
}

/// Clock backed by `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}
