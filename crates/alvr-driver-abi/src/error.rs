//! Host failure vocabulary.
//!
//! The host reports failures as plain integer codes. These enums give them
//! names while keeping the codes recoverable through `code()` / `from_code()`.

use crate::property::PropertyKey;
use thiserror::Error;

/// Failure writing a device property to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum PropertyError {
    /// Value type does not match the property's declared type
    #[error("wrong data type")]
    WrongDataType,
    /// Property does not apply to this device class
    #[error("wrong device class")]
    WrongDeviceClass,
    /// Host-side buffer too small for the value
    #[error("buffer too small")]
    BufferTooSmall,
    /// Property unknown to the host
    #[error("unknown property")]
    UnknownProperty,
    /// Device index not known to the host
    #[error("invalid device")]
    InvalidDevice,
    /// Host server unreachable
    #[error("could not contact server")]
    CouldNotContactServer,
    /// Device does not provide this value
    #[error("value not provided by device")]
    ValueNotProvidedByDevice,
    /// String value exceeds the host maximum
    #[error("string exceeds maximum length")]
    StringExceedsMaximumLength,
    /// Value not yet available
    #[error("not yet available")]
    NotYetAvailable,
    /// Caller may not write this property
    #[error("permission denied")]
    PermissionDenied,
    /// Operation not valid for this property
    #[error("invalid operation")]
    InvalidOperation,
}

impl PropertyError {
    /// Numeric code understood by the host.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::WrongDataType => 1,
            Self::WrongDeviceClass => 2,
            Self::BufferTooSmall => 3,
            Self::UnknownProperty => 4,
            Self::InvalidDevice => 5,
            Self::CouldNotContactServer => 6,
            Self::ValueNotProvidedByDevice => 7,
            Self::StringExceedsMaximumLength => 8,
            Self::NotYetAvailable => 9,
            Self::PermissionDenied => 10,
            Self::InvalidOperation => 11,
        }
    }

    /// Parse a host property-error code. `0` (success) and unknown codes yield `None`.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::WrongDataType),
            2 => Some(Self::WrongDeviceClass),
            3 => Some(Self::BufferTooSmall),
            4 => Some(Self::UnknownProperty),
            5 => Some(Self::InvalidDevice),
            6 => Some(Self::CouldNotContactServer),
            7 => Some(Self::ValueNotProvidedByDevice),
            8 => Some(Self::StringExceedsMaximumLength),
            9 => Some(Self::NotYetAvailable),
            10 => Some(Self::PermissionDenied),
            11 => Some(Self::InvalidOperation),
            _ => None,
        }
    }
}

/// Activation failure returned to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HostInitError {
    /// Unclassified host failure
    #[error("unknown host error")]
    Unknown,

    /// Driver failed to initialize
    #[error("driver failed")]
    DriverFailed,

    /// Driver not recognized by the host
    #[error("driver unknown")]
    DriverUnknown,

    /// Driver not loaded
    #[error("driver not loaded")]
    DriverNotLoaded,

    /// Host asked for activation with the invalid index
    #[error("invalid device index {0:#010x}")]
    InvalidDeviceIndex(u32),

    /// Host refused a device property during registration
    #[error("host rejected property {property}: {error}")]
    PropertyRejected {
        /// Property being written
        property: PropertyKey,
        /// Host failure
        #[source]
        error: PropertyError,
    },

    /// Host code without a named variant
    #[error("host error code {0}")]
    Other(i32),
}

impl HostInitError {
    /// Numeric code understood by the host.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Unknown => 1,
            Self::DriverFailed | Self::InvalidDeviceIndex(_) | Self::PropertyRejected { .. } => {
                200
            }
            Self::DriverUnknown => 201,
            Self::DriverNotLoaded => 203,
            Self::Other(code) => code,
        }
    }

    /// Map a host code to an error. `0` means success and yields `None`.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => None,
            1 => Some(Self::Unknown),
            200 => Some(Self::DriverFailed),
            201 => Some(Self::DriverUnknown),
            203 => Some(Self::DriverNotLoaded),
            other => Some(Self::Other(other)),
        }
    }

    /// Create a property-rejected error.
    #[must_use]
    pub const fn property_rejected(property: PropertyKey, error: PropertyError) -> Self {
        Self::PropertyRejected { property, error }
    }
}

/// A specialized `Result` for host-facing driver calls.
pub type HostInitResult<T = ()> = std::result::Result<T, HostInitError>;
