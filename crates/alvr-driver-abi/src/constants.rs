//! Naming conventions and sentinel values shared by driver and host.

/// Raw value of the host's "no device assigned" index.
///
/// A driver holds this value before activation and after deactivation.
pub const TRACKED_DEVICE_INDEX_INVALID: u32 = 0xFFFF_FFFF;

/// Prefix of a tracker's serial number: `"ALVR Tracker " + name`.
pub const SERIAL_NUMBER_PREFIX: &str = "ALVR Tracker ";

/// Prefix of a tracker's device path: `"ALVR/tracker/" + name`.
///
/// The device path doubles as the registered device type reported to the host.
pub const DEVICE_PATH_PREFIX: &str = "ALVR/tracker/";

/// Size in bytes of [`crate::BodyTrackerSample`] as laid out by the pipeline.
pub const BODY_TRACKER_SAMPLE_SIZE: usize = 36;

/// Nanoseconds per second, for converting sample timestamps to pose offsets.
pub const NANOS_PER_SECOND: f64 = 1_000_000_000.0;
