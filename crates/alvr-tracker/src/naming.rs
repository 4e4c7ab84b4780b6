//! Tracker naming.

use alvr_driver_abi::{DEVICE_PATH_PREFIX, SERIAL_NUMBER_PREFIX};

/// Name, serial number and device path of one tracker.
///
/// All three strings are built once and owned for the tracker's lifetime, so
/// accessors hand out stable borrows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerNames {
    name: String,
    serial_number: String,
    device_path: String,
}

impl TrackerNames {
    /// Derive the names for the body point `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let serial_number = format!("{SERIAL_NUMBER_PREFIX}{name}");
        let device_path = format!("{DEVICE_PATH_PREFIX}{name}");
        Self {
            name,
            serial_number,
            device_path,
        }
    }

    /// Label given at construction.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `"ALVR Tracker " + name`.
    #[must_use]
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    /// `"ALVR/tracker/" + name`.
    #[must_use]
    pub fn device_path(&self) -> &str {
        &self.device_path
    }
}
