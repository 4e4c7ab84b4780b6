//! Mock hosts.

use alvr_driver_abi::{
    DeviceProperty, DriverHost, DriverPose, PropertyError, PropertyKey, PropertyValue,
    TrackedDeviceIndex,
};
use parking_lot::Mutex;

/// A pose push observed by [`RecordingHost`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PosePush {
    /// Device the pose was pushed for
    pub device: TrackedDeviceIndex,
    /// Pushed pose
    pub pose: DriverPose,
}

/// Host that records every property write and pose push.
///
/// Optionally rejects one property key with a chosen error.
#[derive(Debug, Default)]
pub struct RecordingHost {
    properties: Mutex<Vec<(TrackedDeviceIndex, DeviceProperty)>>,
    pushes: Mutex<Vec<PosePush>>,
    reject: Mutex<Option<(PropertyKey, PropertyError)>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host that refuses `key` with `error`. Writes before it are recorded.
    pub fn rejecting(key: PropertyKey, error: PropertyError) -> Self {
        let host = Self::new();
        host.reject_property(key, error);
        host
    }

    pub fn reject_property(&self, key: PropertyKey, error: PropertyError) {
        *self.reject.lock() = Some((key, error));
    }

    pub fn accept_all(&self) {
        *self.reject.lock() = None;
    }

    pub fn properties(&self) -> Vec<(TrackedDeviceIndex, DeviceProperty)> {
        self.properties.lock().clone()
    }

    /// Last value written for `key`, if any.
    pub fn property(&self, key: PropertyKey) -> Option<PropertyValue> {
        self.properties
            .lock()
            .iter()
            .rev()
            .find(|(_, p)| p.key == key)
            .map(|(_, p)| p.value.clone())
    }

    pub fn property_count(&self) -> usize {
        self.properties.lock().len()
    }

    pub fn pushes(&self) -> Vec<PosePush> {
        self.pushes.lock().clone()
    }

    pub fn push_count(&self) -> usize {
        self.pushes.lock().len()
    }

    pub fn last_push(&self) -> Option<PosePush> {
        self.pushes.lock().last().copied()
    }

    pub fn clear(&self) {
        self.properties.lock().clear();
        self.pushes.lock().clear();
    }
}

impl DriverHost for RecordingHost {
    fn set_property(
        &self,
        device: TrackedDeviceIndex,
        property: &DeviceProperty,
    ) -> Result<(), PropertyError> {
        if let Some((key, error)) = *self.reject.lock()
            && key == property.key
        {
            return Err(error);
        }
        self.properties.lock().push((device, property.clone()));
        Ok(())
    }

    fn tracked_device_pose_updated(&self, device: TrackedDeviceIndex, pose: &DriverPose) {
        self.pushes.lock().push(PosePush {
            device,
            pose: *pose,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_properties() {
        let host = RecordingHost::new();
        let device = TrackedDeviceIndex::new(4);
        let prop = DeviceProperty::string(PropertyKey::SerialNumber, "ALVR Tracker waist");
        assert_eq!(host.set_property(device, &prop), Ok(()));
        assert_eq!(host.property_count(), 1);
        assert_eq!(
            host.property(PropertyKey::SerialNumber),
            Some(PropertyValue::String("ALVR Tracker waist".to_string()))
        );
        assert_eq!(host.property(PropertyKey::ModelNumber), None);
    }

    #[test]
    fn test_rejects_configured_key() {
        let host = RecordingHost::rejecting(PropertyKey::ModelNumber, PropertyError::PermissionDenied);
        let device = TrackedDeviceIndex::new(1);
        let ok = DeviceProperty::string(PropertyKey::SerialNumber, "s");
        let bad = DeviceProperty::string(PropertyKey::ModelNumber, "m");
        assert_eq!(host.set_property(device, &ok), Ok(()));
        assert_eq!(
            host.set_property(device, &bad),
            Err(PropertyError::PermissionDenied)
        );
        assert_eq!(host.property_count(), 1);

        host.accept_all();
        assert_eq!(host.set_property(device, &bad), Ok(()));
    }

    #[test]
    fn test_records_pushes() {
        let host = RecordingHost::new();
        let device = TrackedDeviceIndex::new(2);
        host.tracked_device_pose_updated(device, &DriverPose::default());
        assert_eq!(host.push_count(), 1);
        let last = host.last_push().unwrap();
        assert_eq!(last.device, device);
        host.clear();
        assert_eq!(host.push_count(), 0);
    }
}
