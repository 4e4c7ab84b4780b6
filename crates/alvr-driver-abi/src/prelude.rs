//! Prelude for driver crates.
//!
//! ```
//! use alvr_driver_abi::prelude::*;
//! ```

pub use crate::constants::{DEVICE_PATH_PREFIX, SERIAL_NUMBER_PREFIX, TRACKED_DEVICE_INDEX_INVALID};
pub use crate::debug::write_empty_response;
pub use crate::device::{
    BodyTrackerSink, ComponentHandle, DriverHost, NullHost, TrackedDeviceDriver,
    TrackedDeviceIndex,
};
pub use crate::error::{HostInitError, HostInitResult, PropertyError};
pub use crate::pose::{DriverPose, HmdQuaternion, HmdVector3, TrackingResult};
pub use crate::property::{
    ControllerRole, DeviceProperty, PropertyKey, PropertyKind, PropertyValue, TrackedDeviceClass,
};
pub use crate::sample::{BodyTrackerSample, SampleQuat};
