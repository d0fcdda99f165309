//! Monotonic tick source
//!
//! Document ids carry an elapsed-time component so that they sort by
//! recency. Rather than reading ambient process state, the store takes
//! its time source as an explicit dependency at construction, which lets
//! tests substitute a deterministic clock.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Source of monotonically non-decreasing elapsed nanoseconds.
///
/// Implementations must never go backwards. They do not need to be
/// strictly increasing: the store adds a per-insertion sequence number
/// on top, so equal readings from consecutive calls are fine.
pub trait TickSource: Send + Sync {
    /// Nanoseconds elapsed since some fixed origin (typically store
    /// construction).
    fn elapsed_nanos(&self) -> u64;
}

/// Real clock backed by [`std::time::Instant`].
///
/// The origin is the moment the clock is created.
#[derive(Debug)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    /// Create a clock whose origin is now.
    pub fn new() -> Self {
        MonotonicClock {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for MonotonicClock {
    fn elapsed_nanos(&self) -> u64 {
        // u64 nanoseconds saturate after ~584 years of uptime.
        u64::try_from(self.start.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// Deterministic clock for tests.
///
/// Starts at zero and only moves when [`ManualClock::advance`] is called,
/// so tests can pin the elapsed-time component of minted document ids.
#[derive(Debug, Default)]
pub struct ManualClock {
    nanos: AtomicU64,
}

impl ManualClock {
    /// Create a clock pinned at zero elapsed nanoseconds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `nanos`.
    pub fn advance(&self, nanos: u64) {
        self.nanos.fetch_add(nanos, Ordering::SeqCst);
    }
}

impl TickSource for ManualClock {
    fn elapsed_nanos(&self) -> u64 {
        self.nanos.load(Ordering::SeqCst)
    }
}
