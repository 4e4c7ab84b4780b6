//! Body tracker sample produced by the tracking pipeline.
//!
//! The pipeline owns this layout; the driver only copies it by value.
//!
//! # Memory Layout
//!
//! | Offset | Size | Field       |
//! |--------|------|-------------|
//! | 0      | 4    | tracker_id  |
//! | 4      | 16   | orientation |
//! | 20     | 12   | position    |
//! | 32     | 4    | tracking    |

use crate::constants::BODY_TRACKER_SAMPLE_SIZE;
use crate::pose::{HmdQuaternion, HmdVector3};

/// Orientation quaternion in pipeline component order (`w` last).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleQuat {
    /// X of the vector part
    pub x: f32,
    /// Y of the vector part
    pub y: f32,
    /// Z of the vector part
    pub z: f32,
    /// Scalar part
    pub w: f32,
}

impl SampleQuat {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a quaternion from `x, y, z, w`.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

impl Default for SampleQuat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<SampleQuat> for HmdQuaternion {
    fn from(q: SampleQuat) -> Self {
        Self::new(
            f64::from(q.w),
            f64::from(q.x),
            f64::from(q.y),
            f64::from(q.z),
        )
    }
}

/// One pose sample for one tracked body point.
///
/// Samples are never validated: NaNs, non-unit quaternions and arbitrary
/// `tracker_id` values pass through unchanged.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyTrackerSample {
    /// Pipeline-side tracker identifier
    pub tracker_id: u32,
    /// Orientation of the tracked point
    pub orientation: SampleQuat,
    /// Position of the tracked point (meters)
    pub position: [f32; 3],
    /// Non-zero when the pipeline currently tracks this point
    pub tracking: u32,
}

impl BodyTrackerSample {
    /// Create a sample.
    #[must_use]
    pub const fn new(
        tracker_id: u32,
        position: [f32; 3],
        orientation: SampleQuat,
        tracking: bool,
    ) -> Self {
        Self {
            tracker_id,
            orientation,
            position,
            tracking: tracking as u32,
        }
    }

    /// Whether the pipeline flagged this sample as tracked.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.tracking != 0
    }

    /// Position widened to host precision.
    #[must_use]
    pub fn host_position(&self) -> HmdVector3 {
        HmdVector3::from(self.position)
    }

    /// Orientation converted to host component order.
    #[must_use]
    pub fn host_orientation(&self) -> HmdQuaternion {
        HmdQuaternion::from(self.orientation)
    }
}

impl Default for BodyTrackerSample {
    fn default() -> Self {
        Self::new(0, [0.0; 3], SampleQuat::IDENTITY, false)
    }
}

static_assertions::const_assert_eq!(
    std::mem::size_of::<BodyTrackerSample>(),
    BODY_TRACKER_SAMPLE_SIZE
);
static_assertions::const_assert_eq!(std::mem::align_of::<BodyTrackerSample>(), 4);
static_assertions::const_assert_eq!(std::mem::size_of::<SampleQuat>(), 16);
