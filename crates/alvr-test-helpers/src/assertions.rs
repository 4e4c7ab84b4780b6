//! Float and pose assertions.

use alvr_driver_abi::{BodyTrackerSample, DriverPose, HmdQuaternion, HmdVector3, TrackingResult};

/// Assert that two floating-point values are within `tolerance`.
///
/// ```rust
/// use alvr_test_helpers::assert_approx_eq;
///
/// assert_approx_eq!(0.016_f64, 0.0161_f64, 0.001_f64);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if !(diff <= tolerance) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`",
                left, right, diff, tolerance
            );
        }
    };
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if !(diff <= tolerance) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`: {}",
                left, right, diff, tolerance, format_args!($($arg)+)
            );
        }
    };
}

/// Assert that a string contains a substring.
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr $(,)?) => {
        let haystack = $haystack;
        let needle = $needle;
        if !haystack.contains(needle) {
            panic!(
                "assertion failed: `{:?}` does not contain `{:?}`",
                haystack, needle
            );
        }
    };
}

/// Assert that `pose` is the never-tracked default.
///
/// The time offset is ignored; it is derived at read time.
///
/// # Panics
///
/// Panics on the first field that differs from the default.
#[track_caller]
pub fn assert_default_pose(pose: &DriverPose) {
    assert_eq!(pose.position, HmdVector3::ZERO, "position");
    assert_eq!(pose.orientation, HmdQuaternion::IDENTITY, "orientation");
    assert_eq!(pose.velocity, HmdVector3::ZERO, "velocity");
    assert_eq!(pose.angular_velocity, HmdVector3::ZERO, "angular velocity");
    assert_eq!(pose.result, TrackingResult::Uninitialized, "tracking result");
    assert!(!pose.pose_is_valid, "default pose must not be valid");
    assert!(!pose.device_is_connected, "default pose must not be connected");
    assert_eq!(pose.timestamp_ns, 0, "timestamp");
}

/// Assert that `pose` carries exactly the values of `sample` taken at `timestamp_ns`.
///
/// Position and orientation are compared bit-for-bit after widening, so NaN
/// samples compare equal to themselves.
///
/// # Panics
///
/// Panics on the first mismatching field.
#[track_caller]
pub fn assert_pose_matches_sample(pose: &DriverPose, sample: &BodyTrackerSample, timestamp_ns: u64) {
    let expected_position = sample.host_position();
    let expected_orientation = sample.host_orientation();

    assert_eq!(
        bits3(pose.position),
        bits3(expected_position),
        "position {:?} != {:?}",
        pose.position,
        expected_position
    );
    assert_eq!(
        bits4(pose.orientation),
        bits4(expected_orientation),
        "orientation {:?} != {:?}",
        pose.orientation,
        expected_orientation
    );
    assert_eq!(pose.timestamp_ns, timestamp_ns, "timestamp");
    assert_eq!(pose.velocity, HmdVector3::ZERO, "velocity");
    assert_eq!(pose.angular_velocity, HmdVector3::ZERO, "angular velocity");
    assert!(pose.device_is_connected, "updated pose must be connected");

    if sample.is_tracking() {
        assert_eq!(pose.result, TrackingResult::RunningOk, "tracking result");
        assert!(pose.pose_is_valid, "tracked sample must be valid");
    } else {
        assert_eq!(pose.result, TrackingResult::RunningOutOfRange, "tracking result");
        assert!(!pose.pose_is_valid, "untracked sample must not be valid");
    }
}

fn bits3(v: HmdVector3) -> [u64; 3] {
    [v.x.to_bits(), v.y.to_bits(), v.z.to_bits()]
}

fn bits4(q: HmdQuaternion) -> [u64; 4] {
    [q.w.to_bits(), q.x.to_bits(), q.y.to_bits(), q.z.to_bits()]
}
