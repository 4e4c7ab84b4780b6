//! Properties registered with the host on activation.

use alvr_driver_abi::{ControllerRole, DeviceProperty, PropertyKey, TrackedDeviceClass};

use crate::config::TrackerProfile;
use crate::naming::TrackerNames;

/// Number of properties written by [`activation_properties`].
pub const ACTIVATION_PROPERTY_COUNT: usize = 11;

/// Properties a tracker writes to the host, in registration order.
///
/// Identity comes first so that a host rejecting the serial number fails
/// before any profile data is written.
#[must_use]
pub fn activation_properties(
    names: &TrackerNames,
    profile: &TrackerProfile,
) -> [DeviceProperty; ACTIVATION_PROPERTY_COUNT] {
    [
        DeviceProperty::string(PropertyKey::SerialNumber, names.serial_number()),
        DeviceProperty::string(PropertyKey::RegisteredDeviceType, names.device_path()),
        DeviceProperty::string(
            PropertyKey::TrackingSystemName,
            profile.tracking_system_name.as_str(),
        ),
        DeviceProperty::string(PropertyKey::ModelNumber, profile.model_number.as_str()),
        DeviceProperty::string(
            PropertyKey::ManufacturerName,
            profile.manufacturer_name.as_str(),
        ),
        DeviceProperty::string(
            PropertyKey::RenderModelName,
            profile.render_model_name.as_str(),
        ),
        DeviceProperty::string(PropertyKey::ControllerType, profile.controller_type.as_str()),
        DeviceProperty::string(
            PropertyKey::InputProfilePath,
            profile.input_profile_path.as_str(),
        ),
        DeviceProperty::int32(
            PropertyKey::DeviceClass,
            TrackedDeviceClass::GenericTracker as i32,
        ),
        DeviceProperty::int32(PropertyKey::ControllerRoleHint, ControllerRole::OptOut as i32),
        DeviceProperty::bool(PropertyKey::WillDriftInYaw, false),
    ]
}
