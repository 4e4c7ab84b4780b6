//! Snapshot tests for host-visible names, messages and serialized records.

use alvr_driver_abi::prelude::*;
use insta::assert_snapshot;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn test_snapshot_property_names() {
    let keys = [
        PropertyKey::TrackingSystemName,
        PropertyKey::ModelNumber,
        PropertyKey::SerialNumber,
        PropertyKey::RenderModelName,
        PropertyKey::WillDriftInYaw,
        PropertyKey::ManufacturerName,
        PropertyKey::DeviceClass,
        PropertyKey::ControllerType,
        PropertyKey::InputProfilePath,
        PropertyKey::ControllerRoleHint,
        PropertyKey::RegisteredDeviceType,
    ];
    let lines: Vec<String> = keys
        .iter()
        .map(|k| format!("{k} {:?}", k.kind()))
        .collect();
    assert_snapshot!(lines.join("\n"), @r"
    Prop_TrackingSystemName_String String
    Prop_ModelNumber_String String
    Prop_SerialNumber_String String
    Prop_RenderModelName_String String
    Prop_WillDriftInYaw_Bool Bool
    Prop_ManufacturerName_String String
    Prop_DeviceClass_Int32 Int32
    Prop_ControllerType_String String
    Prop_InputProfilePath_String String
    Prop_ControllerRoleHint_Int32 Int32
    Prop_RegisteredDeviceType_String String
    ");
}

#[test]
fn test_snapshot_host_init_errors() {
    let lines = [
        HostInitError::Unknown,
        HostInitError::DriverFailed,
        HostInitError::DriverNotLoaded,
        HostInitError::InvalidDeviceIndex(TRACKED_DEVICE_INDEX_INVALID),
        HostInitError::property_rejected(PropertyKey::ModelNumber, PropertyError::BufferTooSmall),
        HostInitError::Other(108),
    ]
    .iter()
    .map(|e| format!("{} {e}", e.code()))
    .collect::<Vec<_>>();
    assert_snapshot!(lines.join("\n"), @r"
    1 unknown host error
    200 driver failed
    203 driver not loaded
    200 invalid device index 0xffffffff
    200 host rejected property Prop_ModelNumber_String: buffer too small
    108 host error code 108
    ");
}

#[test]
fn test_snapshot_default_sample_json() -> TestResult {
    let json = serde_json::to_string(&BodyTrackerSample::default())?;
    assert_snapshot!(json, @r#"{"tracker_id":0,"orientation":{"x":0.0,"y":0.0,"z":0.0,"w":1.0},"position":[0.0,0.0,0.0],"tracking":0}"#);
    Ok(())
}

#[test]
fn test_snapshot_property_values_json() -> TestResult {
    let props = [
        DeviceProperty::string(PropertyKey::SerialNumber, "ALVR Tracker waist"),
        DeviceProperty::int32(PropertyKey::DeviceClass, TrackedDeviceClass::GenericTracker as i32),
        DeviceProperty::bool(PropertyKey::WillDriftInYaw, false),
    ];
    let json = serde_json::to_string(&props)?;
    assert_snapshot!(json, @r#"[{"key":"SerialNumber","value":{"String":"ALVR Tracker waist"}},{"key":"DeviceClass","value":{"Int32":3}},{"key":"WillDriftInYaw","value":{"Bool":false}}]"#);
    Ok(())
}
