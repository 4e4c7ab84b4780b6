//! Pose record exchanged with the host runtime.
//!
//! [`DriverPose`] is the single value a driver hands the host when polled or
//! when pushing an update. It is `Copy` so that it can be moved in and out of
//! a lock without allocation.

/// Three-component vector in meters (position) or meters/second (velocity).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HmdVector3 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl HmdVector3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Components as `[x, y, z]`.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Whether every component is finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f32; 3]> for HmdVector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(f64::from(x), f64::from(y), f64::from(z))
    }
}

/// Orientation quaternion in host component order (`w` first).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HmdQuaternion {
    /// Scalar part
    pub w: f64,
    /// X of the vector part
    pub x: f64,
    /// Y of the vector part
    pub y: f64,
    /// Z of the vector part
    pub z: f64,
}

impl HmdQuaternion {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Create a quaternion from `w, x, y, z`.
    #[must_use]
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Squared norm; 1.0 for a unit quaternion.
    #[must_use]
    pub fn norm_squared(self) -> f64 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }
}

impl Default for HmdQuaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Tracking state reported alongside a pose.
///
/// Discriminants match the host's numeric tracking-result codes.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackingResult {
    /// No pose has ever been produced
    #[default]
    Uninitialized = 1,
    /// Calibration in progress
    CalibratingInProgress = 100,
    /// Calibration failed because the device is out of range
    CalibratingOutOfRange = 101,
    /// Tracking normally
    RunningOk = 200,
    /// Device known but currently not tracked
    RunningOutOfRange = 201,
    /// Only rotation is tracked
    FallbackRotationOnly = 300,
}

impl TrackingResult {
    /// Numeric code understood by the host.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Parse a host tracking-result code.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Uninitialized),
            100 => Some(Self::CalibratingInProgress),
            101 => Some(Self::CalibratingOutOfRange),
            200 => Some(Self::RunningOk),
            201 => Some(Self::RunningOutOfRange),
            300 => Some(Self::FallbackRotationOnly),
            _ => None,
        }
    }

    /// Whether the device is in a running (post-calibration) state.
    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, Self::RunningOk | Self::RunningOutOfRange)
    }
}

/// Pose of one tracked device as presented to the host.
///
/// The default value is the "never tracked" pose: identity orientation, zero
/// position and velocities, [`TrackingResult::Uninitialized`], not valid, not
/// connected, timestamp 0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriverPose {
    /// Seconds between the pose timestamp and the moment the host receives it.
    ///
    /// Negative when the pose lies in the past; the host extrapolates with it.
    pub pose_time_offset_s: f64,
    /// Rotation from driver space to world space
    pub world_from_driver_rotation: HmdQuaternion,
    /// Translation from driver space to world space
    pub world_from_driver_translation: HmdVector3,
    /// Rotation from head space to driver space
    pub driver_from_head_rotation: HmdQuaternion,
    /// Translation from head space to driver space
    pub driver_from_head_translation: HmdVector3,
    /// Position in driver space (meters)
    pub position: HmdVector3,
    /// Orientation in driver space
    pub orientation: HmdQuaternion,
    /// Linear velocity (m/s)
    pub velocity: HmdVector3,
    /// Linear acceleration (m/s²)
    pub acceleration: HmdVector3,
    /// Angular velocity (rad/s)
    pub angular_velocity: HmdVector3,
    /// Angular acceleration (rad/s²)
    pub angular_acceleration: HmdVector3,
    /// Tracking status
    pub result: TrackingResult,
    /// Whether position and orientation may be used
    pub pose_is_valid: bool,
    /// Whether the host should expect yaw drift
    pub will_drift_in_yaw: bool,
    /// Whether the host should apply its head model
    pub should_apply_head_model: bool,
    /// Whether the physical source of this device is connected
    pub device_is_connected: bool,
    /// Source monotonic time the values were produced at (ns), 0 if never set
    pub timestamp_ns: u64,
}

impl DriverPose {
    /// The "never tracked" pose.
    pub const UNTRACKED: Self = Self {
        pose_time_offset_s: 0.0,
        world_from_driver_rotation: HmdQuaternion::IDENTITY,
        world_from_driver_translation: HmdVector3::ZERO,
        driver_from_head_rotation: HmdQuaternion::IDENTITY,
        driver_from_head_translation: HmdVector3::ZERO,
        position: HmdVector3::ZERO,
        orientation: HmdQuaternion::IDENTITY,
        velocity: HmdVector3::ZERO,
        acceleration: HmdVector3::ZERO,
        angular_velocity: HmdVector3::ZERO,
        angular_acceleration: HmdVector3::ZERO,
        result: TrackingResult::Uninitialized,
        pose_is_valid: false,
        will_drift_in_yaw: false,
        should_apply_head_model: false,
        device_is_connected: false,
        timestamp_ns: 0,
    };

    /// Whether the host may use this pose for rendering.
    #[must_use]
    pub const fn is_tracked(&self) -> bool {
        self.pose_is_valid && matches!(self.result, TrackingResult::RunningOk)
    }

    /// Whether this record was ever written by an update.
    #[must_use]
    pub const fn has_timestamp(&self) -> bool {
        self.timestamp_ns != 0
    }

    /// Copy of this pose with a different time offset.
    #[must_use]
    pub const fn with_time_offset(mut self, pose_time_offset_s: f64) -> Self {
        self.pose_time_offset_s = pose_time_offset_s;
        self
    }
}

impl Default for DriverPose {
    fn default() -> Self {
        Self::UNTRACKED
    }
}
