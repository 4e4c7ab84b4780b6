//! Device properties registered with the host during activation.

use std::fmt;

/// Host-defined class of a tracked device.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackedDeviceClass {
    /// No device
    #[default]
    Invalid = 0,
    /// Head-mounted display
    Hmd = 1,
    /// Hand controller
    Controller = 2,
    /// Generic tracker (body trackers)
    GenericTracker = 3,
    /// Tracking base station or camera
    TrackingReference = 4,
    /// Display redirect device
    DisplayRedirect = 5,
}

/// Host-defined role hint for controller-like devices.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControllerRole {
    /// No role
    #[default]
    Invalid = 0,
    /// Left hand
    LeftHand = 1,
    /// Right hand
    RightHand = 2,
    /// Device takes no hand role
    OptOut = 3,
    /// Treadmill
    Treadmill = 4,
    /// Stylus
    Stylus = 5,
}

/// Value type a property expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// UTF-8 string
    String,
    /// Boolean
    Bool,
    /// 32-bit signed integer
    Int32,
}

/// Properties a body tracker registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyKey {
    /// Tracking system the device belongs to
    TrackingSystemName,
    /// Hardware model
    ModelNumber,
    /// Unique serial number
    SerialNumber,
    /// Render model shown by the host
    RenderModelName,
    /// Whether yaw drifts over time
    WillDriftInYaw,
    /// Manufacturer
    ManufacturerName,
    /// Device class
    DeviceClass,
    /// Controller type used for input bindings
    ControllerType,
    /// Input profile resource path
    InputProfilePath,
    /// Controller role hint
    ControllerRoleHint,
    /// Registered device type (device path)
    RegisteredDeviceType,
}

impl PropertyKey {
    /// Host-side property name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TrackingSystemName => "Prop_TrackingSystemName_String",
            Self::ModelNumber => "Prop_ModelNumber_String",
            Self::SerialNumber => "Prop_SerialNumber_String",
            Self::RenderModelName => "Prop_RenderModelName_String",
            Self::WillDriftInYaw => "Prop_WillDriftInYaw_Bool",
            Self::ManufacturerName => "Prop_ManufacturerName_String",
            Self::DeviceClass => "Prop_DeviceClass_Int32",
            Self::ControllerType => "Prop_ControllerType_String",
            Self::InputProfilePath => "Prop_InputProfilePath_String",
            Self::ControllerRoleHint => "Prop_ControllerRoleHint_Int32",
            Self::RegisteredDeviceType => "Prop_RegisteredDeviceType_String",
        }
    }

    /// Value type the host expects for this property.
    #[must_use]
    pub const fn kind(self) -> PropertyKind {
        match self {
            Self::WillDriftInYaw => PropertyKind::Bool,
            Self::DeviceClass | Self::ControllerRoleHint => PropertyKind::Int32,
            _ => PropertyKind::String,
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Property value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyValue {
    /// String value
    String(String),
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int32(i32),
}

impl PropertyValue {
    /// Value type of this value.
    #[must_use]
    pub const fn kind(&self) -> PropertyKind {
        match self {
            Self::String(_) => PropertyKind::String,
            Self::Bool(_) => PropertyKind::Bool,
            Self::Int32(_) => PropertyKind::Int32,
        }
    }

    /// String content, if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

/// A property/value pair written to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceProperty {
    /// Property being written
    pub key: PropertyKey,
    /// Value to write
    pub value: PropertyValue,
}

impl DeviceProperty {
    /// String property.
    #[must_use]
    pub fn string(key: PropertyKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: PropertyValue::String(value.into()),
        }
    }

    /// Boolean property.
    #[must_use]
    pub const fn bool(key: PropertyKey, value: bool) -> Self {
        Self {
            key,
            value: PropertyValue::Bool(value),
        }
    }

    /// Integer property.
    #[must_use]
    pub const fn int32(key: PropertyKey, value: i32) -> Self {
        Self {
            key,
            value: PropertyValue::Int32(value),
        }
    }

    /// Whether the value type matches what the host expects for the key.
    #[must_use]
    pub fn is_well_typed(&self) -> bool {
        self.key.kind() == self.value.kind()
    }
}
