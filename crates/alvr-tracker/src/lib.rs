//! # alvr-tracker
//!
//! Simulated Vive body tracker for the ALVR driver.
//!
//! One [`FakeViveTracker`] represents one tracked body point. The body-tracking
//! pipeline pushes samples into it, and the VR host activates it, polls its
//! pose and tears it down. The tracker sits between the two and owns the
//! pose state machine.
//!
//! ## Architecture
//!
//! - [`tracker`] - The adapter and its builder
//! - [`pose_state`] - Pose record cell, sample conversion, time offsets, staleness
//! - [`properties`] - Properties registered with the host on activation
//! - [`naming`] - Serial number and device path derivation
//! - [`config`] - Hardware profile and lifecycle policy
//! - [`clock`] - Time sources for timestamp reconciliation
//! - [`stats`] - Relaxed atomic counters
//! - [`error`] - Tracker error types
//!
//! ## Hot paths
//!
//! `get_pose()` and `on_pose_updated()` never allocate and never wait on host
//! property registration. The pose lock is held only for a copy. A host push
//! from `on_pose_updated()` runs after the pose lock is released, under a
//! read lock on the device index that `deactivate()` waits for.
//!
//! ## Example
//!
//! ```rust
//! use alvr_tracker::prelude::*;
//! use std::sync::Arc;
//!
//! let clock = Arc::new(ManualClock::new(2_000_000_000));
//! let config = TrackerConfig::builder().stale_pose_timeout_ms(100).build()?;
//! let tracker = FakeViveTracker::builder("left_foot")
//!     .config(config)
//!     .clock(clock.clone())
//!     .build()?;
//!
//! tracker.on_pose_updated(
//!     1_990_000_000,
//!     BodyTrackerSample::new(0, [0.1, 0.0, 0.2], SampleQuat::IDENTITY, true),
//! );
//! assert!(tracker.get_pose().is_tracked());
//!
//! clock.advance_ms(500);
//! assert_eq!(tracker.get_pose().result, TrackingResult::RunningOutOfRange);
//! # Ok::<(), TrackerError>(())
//! ```

#![deny(
    unsafe_op_in_unsafe_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    missing_debug_implementations
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod clock;
pub mod config;
pub mod error;
pub mod naming;
pub mod pose_state;
pub mod properties;
pub mod stats;
pub mod tracker;

pub mod prelude;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::{TrackerConfig, TrackerConfigBuilder, TrackerProfile};
pub use error::{TrackerError, TrackerResult};
pub use naming::TrackerNames;
pub use pose_state::PoseCell;
pub use stats::{TrackerCounters, TrackerStatsSnapshot};
pub use tracker::{FakeViveTracker, FakeViveTrackerBuilder};
