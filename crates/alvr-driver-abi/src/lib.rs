//! Tracked device driver contract for ALVR body trackers.
//!
//! This crate describes the boundary between a tracked-device driver and the
//! VR host runtime that polls it, independent of any concrete plugin ABI:
//!
//! - [`pose`] - The pose record the host consumes ([`DriverPose`])
//! - [`sample`] - The fixed-layout sample produced by the body-tracking pipeline
//! - [`device`] - Device identity handles and the driver/host/pipeline traits
//! - [`property`] - Device properties registered with the host on activation
//! - [`error`] - Host failure vocabulary with stable numeric codes
//! - [`debug`] - Bounded debug-request response writer
//!
//! # Threading
//!
//! The host calls [`TrackedDeviceDriver`] methods from its own thread while the
//! pipeline calls [`BodyTrackerSink::on_pose_updated`] from another. Every trait
//! method takes `&self`; implementations synchronize internally.
//!
//! # Example
//!
//! ```
//! use alvr_driver_abi::prelude::*;
//!
//! let mut response = [0xAAu8; 4];
//! write_empty_response(&mut response);
//! assert_eq!(response[0], 0);
//!
//! let pose = DriverPose::default();
//! assert_eq!(pose.result, TrackingResult::Uninitialized);
//! assert!(!TrackedDeviceIndex::INVALID.is_valid());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod constants;
pub mod debug;
pub mod device;
pub mod error;
pub mod pose;
pub mod prelude;
pub mod property;
pub mod sample;

pub use constants::{
    BODY_TRACKER_SAMPLE_SIZE, DEVICE_PATH_PREFIX, SERIAL_NUMBER_PREFIX,
    TRACKED_DEVICE_INDEX_INVALID,
};
pub use debug::write_empty_response;
pub use device::{
    BodyTrackerSink, ComponentHandle, DriverHost, NullHost, TrackedDeviceDriver,
    TrackedDeviceIndex,
};
pub use error::{HostInitError, HostInitResult, PropertyError};
pub use pose::{DriverPose, HmdQuaternion, HmdVector3, TrackingResult};
pub use property::{
    ControllerRole, DeviceProperty, PropertyKey, PropertyKind, PropertyValue, TrackedDeviceClass,
};
pub use sample::{BodyTrackerSample, SampleQuat};
