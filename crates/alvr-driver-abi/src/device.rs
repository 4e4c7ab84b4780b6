//! Device identity and the driver/host seams.
//!
//! [`TrackedDeviceDriver`] is what the host calls on a device;
//! [`DriverHost`] is what a device calls back on the host;
//! [`BodyTrackerSink`] is what the tracking pipeline calls with new samples.
//! All three are `Send + Sync` because each side runs on its own threads.

use std::fmt;
use std::num::NonZeroUsize;

use crate::constants::TRACKED_DEVICE_INDEX_INVALID;
use crate::error::{HostInitResult, PropertyError};
use crate::pose::DriverPose;
use crate::property::DeviceProperty;
use crate::sample::BodyTrackerSample;

/// Host-assigned identifier of an activated device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TrackedDeviceIndex(u32);

impl TrackedDeviceIndex {
    /// Sentinel meaning "not activated".
    pub const INVALID: Self = Self(TRACKED_DEVICE_INDEX_INVALID);

    /// Wrap a raw host index.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw host index.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Whether this is a real host-assigned index.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != TRACKED_DEVICE_INDEX_INVALID
    }
}

impl Default for TrackedDeviceIndex {
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<u32> for TrackedDeviceIndex {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TrackedDeviceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}", self.0)
        } else {
            f.write_str("invalid")
        }
    }
}

/// Opaque handle to an optional device component.
///
/// Devices without components never construct one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentHandle(NonZeroUsize);

impl ComponentHandle {
    /// Wrap a non-zero handle value.
    #[must_use]
    pub const fn new(raw: NonZeroUsize) -> Self {
        Self(raw)
    }

    /// The raw handle value.
    #[must_use]
    pub const fn raw(self) -> NonZeroUsize {
        self.0
    }
}

/// Lifecycle and query surface the host drives on a device.
pub trait TrackedDeviceDriver: Send + Sync {
    /// Host assigned `device` to this driver; register properties.
    ///
    /// # Errors
    ///
    /// Returns an error if `device` is unusable or the host rejects a
    /// property. The device is not considered active in that case.
    fn activate(&self, device: TrackedDeviceIndex) -> HostInitResult<()>;

    /// Host is tearing the device down.
    fn deactivate(&self);

    /// Host is entering standby.
    fn enter_standby(&self);

    /// Look up a named component.
    fn get_component(&self, component_name: &str) -> Option<ComponentHandle>;

    /// Handle a vendor debug request, writing a NUL-terminated reply.
    fn debug_request(&self, request: &str, response: &mut [u8]);

    /// Current pose snapshot.
    fn get_pose(&self) -> DriverPose;
}

/// Callbacks a device makes into the host.
pub trait DriverHost: Send + Sync {
    /// Write one device property.
    ///
    /// # Errors
    ///
    /// Returns the host's property error if the write is refused.
    fn set_property(
        &self,
        device: TrackedDeviceIndex,
        property: &DeviceProperty,
    ) -> Result<(), PropertyError>;

    /// Push a fresh pose for `device`.
    fn tracked_device_pose_updated(&self, device: TrackedDeviceIndex, pose: &DriverPose);
}

/// Host that accepts every property and discards pose pushes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl DriverHost for NullHost {
    fn set_property(
        &self,
        _device: TrackedDeviceIndex,
        _property: &DeviceProperty,
    ) -> Result<(), PropertyError> {
        Ok(())
    }

    fn tracked_device_pose_updated(&self, _device: TrackedDeviceIndex, _pose: &DriverPose) {}
}

/// Entry point the tracking pipeline uses to deliver samples.
pub trait BodyTrackerSink: Send + Sync {
    /// Deliver `sample`, produced at source time `target_timestamp_ns`.
    fn on_pose_updated(&self, target_timestamp_ns: u64, sample: BodyTrackerSample);
}
