//! Time sources for timestamp reconciliation.
//!
//! Sample timestamps come from the pipeline's monotonic clock. The tracker
//! compares them against a [`Clock`] that must tick in the same domain.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Monotonic nanosecond time source.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Current time in nanoseconds.
    fn now_ns(&self) -> u64;
}

/// [`Clock`] backed by [`Instant`].
///
/// Reads `origin_ns` at construction and advances with real time from there.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    anchor: Instant,
    origin_ns: u64,
}

impl MonotonicClock {
    /// Clock reading 0 at construction.
    #[must_use]
    pub fn new() -> Self {
        Self::with_origin_ns(0)
    }

    /// Clock reading `origin_ns` at construction.
    ///
    /// Used to line the clock up with the pipeline's timestamp domain.
    #[must_use]
    pub fn with_origin_ns(origin_ns: u64) -> Self {
        Self {
            anchor: Instant::now(),
            origin_ns,
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ns(&self) -> u64 {
        let elapsed = u64::try_from(self.anchor.elapsed().as_nanos()).unwrap_or(u64::MAX);
        self.origin_ns.saturating_add(elapsed)
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ns: AtomicU64,
}

impl ManualClock {
    /// Clock reading `now_ns`.
    #[must_use]
    pub const fn new(now_ns: u64) -> Self {
        Self {
            now_ns: AtomicU64::new(now_ns),
        }
    }

    /// Jump to `now_ns`.
    pub fn set_ns(&self, now_ns: u64) {
        self.now_ns.store(now_ns, Ordering::Relaxed);
    }

    /// Move forward by `delta_ns`.
    pub fn advance_ns(&self, delta_ns: u64) {
        let _previous = self
            .now_ns
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |now| {
                Some(now.saturating_add(delta_ns))
            });
    }

    /// Move forward by `delta_ms` milliseconds.
    pub fn advance_ms(&self, delta_ms: u64) {
        self.advance_ns(delta_ms.saturating_mul(1_000_000));
    }
}

impl Clock for ManualClock {
    fn now_ns(&self) -> u64 {
        self.now_ns.load(Ordering::Relaxed)
    }
}
