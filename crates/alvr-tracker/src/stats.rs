//! Tracker counters.
//!
//! Counters are relaxed atomics; a snapshot is a consistent view of each
//! counter, not of all counters at one instant.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Live counters owned by a tracker.
#[derive(Debug, Default)]
pub struct TrackerCounters {
    pose_queries: AtomicU64,
    updates_accepted: AtomicU64,
    updates_dropped: AtomicU64,
    out_of_order_updates: AtomicU64,
    stale_reads: AtomicU64,
    host_pushes: AtomicU64,
    activations: AtomicU64,
    activation_failures: AtomicU64,
    deactivations: AtomicU64,
}

fn bump(counter: &AtomicU64) {
    counter.fetch_add(1, Ordering::Relaxed);
}

impl TrackerCounters {
    pub(crate) fn record_query(&self, stale: bool) {
        bump(&self.pose_queries);
        if stale {
            bump(&self.stale_reads);
        }
    }

    pub(crate) fn record_update(&self, out_of_order: bool) {
        bump(&self.updates_accepted);
        if out_of_order {
            bump(&self.out_of_order_updates);
        }
    }

    pub(crate) fn record_dropped(&self) {
        bump(&self.updates_dropped);
    }

    pub(crate) fn record_push(&self) {
        bump(&self.host_pushes);
    }

    pub(crate) fn record_activation(&self, ok: bool) {
        if ok {
            bump(&self.activations);
        } else {
            bump(&self.activation_failures);
        }
    }

    pub(crate) fn record_deactivation(&self) {
        bump(&self.deactivations);
    }

    /// Current counter values.
    #[must_use]
    pub fn snapshot(&self) -> TrackerStatsSnapshot {
        TrackerStatsSnapshot {
            pose_queries: self.pose_queries.load(Ordering::Relaxed),
            updates_accepted: self.updates_accepted.load(Ordering::Relaxed),
            updates_dropped: self.updates_dropped.load(Ordering::Relaxed),
            out_of_order_updates: self.out_of_order_updates.load(Ordering::Relaxed),
            stale_reads: self.stale_reads.load(Ordering::Relaxed),
            host_pushes: self.host_pushes.load(Ordering::Relaxed),
            activations: self.activations.load(Ordering::Relaxed),
            activation_failures: self.activation_failures.load(Ordering::Relaxed),
            deactivations: self.deactivations.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`TrackerCounters`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerStatsSnapshot {
    /// `get_pose` calls.
    pub pose_queries: u64,
    /// Updates written to the pose record.
    pub updates_accepted: u64,
    /// Updates discarded because the tracker was inactive.
    pub updates_dropped: u64,
    /// Accepted updates older than the record they replaced.
    pub out_of_order_updates: u64,
    /// Queries that returned a stale-degraded pose.
    pub stale_reads: u64,
    /// Poses pushed to the host.
    pub host_pushes: u64,
    /// Successful activations.
    pub activations: u64,
    /// Rejected activations.
    pub activation_failures: u64,
    /// Deactivations, including repeated ones.
    pub deactivations: u64,
}
