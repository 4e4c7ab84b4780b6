//! Sample fixtures.
//!
//! Marker samples encode a single integer into every field of a
//! [`BodyTrackerSample`] and its timestamp. A pose read back from a tracker
//! either decodes to one marker or it was assembled from two different
//! updates.

use alvr_driver_abi::{BodyTrackerSample, DriverPose, SampleQuat};

/// Body points a pipeline typically drives.
pub const BODY_POINT_NAMES: [&str; 8] = [
    "waist",
    "chest",
    "left_foot",
    "right_foot",
    "left_knee",
    "right_knee",
    "left_elbow",
    "right_elbow",
];

/// Largest marker whose fields all survive the `f32` round trip exactly.
pub const MAX_MARKER: u32 = 1 << 20;

/// Timestamp carried by marker `marker`.
#[must_use]
pub const fn marker_timestamp_ns(marker: u32) -> u64 {
    (marker as u64) * 1_000 + 1
}

/// Tracked sample whose every field is derived from `marker`.
///
/// Markers must stay below [`MAX_MARKER`].
#[must_use]
pub fn marker_sample(marker: u32) -> BodyTrackerSample {
    debug_assert!(marker < MAX_MARKER);
    #[allow(clippy::cast_precision_loss)]
    let m = marker as f32;
    BodyTrackerSample::new(
        marker,
        [m, m + 0.5, -m],
        SampleQuat::new(m, m + 0.25, m + 0.75, m + 1.0),
        true,
    )
}

/// Decode the marker a pose was produced from.
///
/// Returns `None` if the fields do not all agree on one marker, including for
/// the default pose.
#[must_use]
pub fn marker_of(pose: &DriverPose) -> Option<u32> {
    let m = pose.position.x;
    if !(m.is_finite() && m >= 0.0 && m < f64::from(MAX_MARKER)) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let marker = m as u32;
    let consistent = pose.position.y == m + 0.5
        && pose.position.z == -m
        && pose.orientation.x == m
        && pose.orientation.y == m + 0.25
        && pose.orientation.z == m + 0.75
        && pose.orientation.w == m + 1.0
        && pose.timestamp_ns == marker_timestamp_ns(marker);
    consistent.then_some(marker)
}

/// Tracked sample at `position` with identity orientation.
#[must_use]
pub fn tracked_sample(position: [f32; 3]) -> BodyTrackerSample {
    BodyTrackerSample::new(0, position, SampleQuat::IDENTITY, true)
}

/// Untracked sample at `position` with identity orientation.
#[must_use]
pub fn untracked_sample(position: [f32; 3]) -> BodyTrackerSample {
    BodyTrackerSample::new(0, position, SampleQuat::IDENTITY, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pose_from(sample: &BodyTrackerSample, timestamp_ns: u64) -> DriverPose {
        let mut pose = DriverPose::default();
        pose.position = sample.host_position();
        pose.orientation = sample.host_orientation();
        pose.timestamp_ns = timestamp_ns;
        pose
    }

    #[test]
    fn test_marker_decodes() {
        for marker in [0, 1, 17, 4_096, MAX_MARKER - 1] {
            let pose = pose_from(&marker_sample(marker), marker_timestamp_ns(marker));
            assert_eq!(marker_of(&pose), Some(marker));
        }
    }

    #[test]
    fn test_default_pose_has_no_marker() {
        assert_eq!(marker_of(&DriverPose::default()), None);
    }

    #[test]
    fn test_mixed_pose_has_no_marker() {
        let mut pose = pose_from(&marker_sample(3), marker_timestamp_ns(3));
        pose.orientation = marker_sample(4).host_orientation();
        assert_eq!(marker_of(&pose), None);

        let pose = pose_from(&marker_sample(3), marker_timestamp_ns(4));
        assert_eq!(marker_of(&pose), None);
    }

    #[test]
    fn test_body_point_names_unique() {
        for (i, a) in BODY_POINT_NAMES.iter().enumerate() {
            for b in BODY_POINT_NAMES.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
