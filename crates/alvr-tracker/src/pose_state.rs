//! Pose state of a tracker.
//!
//! [`PoseCell`] holds the single [`DriverPose`] record. Writers replace it
//! whole and readers copy it out, each under one short lock, so a reader
//! sees either the previous record or the next one and never a mix.

use alvr_driver_abi::constants::NANOS_PER_SECOND;
use alvr_driver_abi::{BodyTrackerSample, DriverPose, HmdVector3, TrackingResult};
use parking_lot::Mutex;

/// Build the pose record for `sample` produced at `timestamp_ns`.
///
/// Tracked samples become valid `RunningOk` poses. Untracked samples keep
/// their position and orientation but are reported `RunningOutOfRange` and
/// not valid. Both count as connected. Velocities are zero because a single
/// sample carries none.
#[must_use]
pub fn pose_from_sample(timestamp_ns: u64, sample: &BodyTrackerSample) -> DriverPose {
    let tracking = sample.is_tracking();
    DriverPose {
        position: sample.host_position(),
        orientation: sample.host_orientation(),
        velocity: HmdVector3::ZERO,
        angular_velocity: HmdVector3::ZERO,
        result: if tracking {
            TrackingResult::RunningOk
        } else {
            TrackingResult::RunningOutOfRange
        },
        pose_is_valid: tracking,
        device_is_connected: true,
        timestamp_ns,
        ..DriverPose::UNTRACKED
    }
}

/// Seconds from `now_ns` back to `timestamp_ns`, plus `extra_s`.
///
/// Negative for timestamps in the past. Records without a timestamp yield 0.
#[must_use]
pub fn time_offset_s(timestamp_ns: u64, now_ns: u64, extra_s: f64) -> f64 {
    if timestamp_ns == 0 {
        return 0.0;
    }
    let delta_ns = i128::from(timestamp_ns) - i128::from(now_ns);
    #[expect(
        clippy::cast_precision_loss,
        reason = "sub-nanosecond precision is irrelevant for extrapolation"
    )]
    let delta_s = delta_ns as f64 / NANOS_PER_SECOND;
    delta_s + extra_s
}

/// Whether a record taken at `timestamp_ns` is older than `timeout_ns` at `now_ns`.
///
/// Records without a timestamp are never stale; they are already reported
/// as uninitialized.
#[must_use]
pub fn is_stale(timestamp_ns: u64, now_ns: u64, timeout_ns: u64) -> bool {
    timestamp_ns != 0 && now_ns.saturating_sub(timestamp_ns) > timeout_ns
}

/// Mark `pose` as out of range without touching position or orientation.
pub fn degrade_stale(pose: &mut DriverPose) {
    pose.result = TrackingResult::RunningOutOfRange;
    pose.pose_is_valid = false;
}

/// Lock-protected pose record.
#[derive(Debug, Default)]
pub struct PoseCell {
    pose: Mutex<DriverPose>,
}

impl PoseCell {
    /// Cell holding the default pose.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current record.
    #[must_use]
    pub fn load(&self) -> DriverPose {
        *self.pose.lock()
    }

    /// Replace the record, returning the timestamp of the one it replaced.
    pub fn store(&self, pose: DriverPose) -> u64 {
        let mut guard = self.pose.lock();
        let previous = guard.timestamp_ns;
        *guard = pose;
        previous
    }

    /// Put the default record back.
    pub fn reset(&self) {
        *self.pose.lock() = DriverPose::default();
    }
}
