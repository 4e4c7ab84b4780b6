//! Convenience re-exports.
//!
//! ```rust,ignore
//! use alvr_test_helpers::prelude::*;
//! ```

pub use crate::assertions::{assert_default_pose, assert_pose_matches_sample};
pub use crate::must::{must, must_err, must_some, must_with};

#[cfg(feature = "tracking")]
pub use crate::tracking::{AllocationGuard, track};

#[cfg(feature = "fixtures")]
pub use crate::fixtures::{
    BODY_POINT_NAMES, MAX_MARKER, marker_of, marker_sample, marker_timestamp_ns, tracked_sample,
    untracked_sample,
};

#[cfg(feature = "mock")]
pub use crate::mock::{PosePush, RecordingHost};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
