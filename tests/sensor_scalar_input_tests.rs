use fieldlabel::sensor::*;
use fieldlabel::{DecodeError, Envelope};

fn sample_spec() -> ScalarInputSpec {
    ScalarInputSpec::new(
        "Thermocouple",
        "com.example.sensors/TempService",
        "probe-2",
        Some(SensorBehavior {
            logging_id: Some("thermo".to_string()),
            should_show_settings_on_connect: true,
            expected_samples_per_second: 12.5,
        }),
        Some(SensorAppearanceResources {
            icon_id: 17,
            units: Some("°C".to_string()),
            short_description: None,
        }),
        "usb-1",
        1,
    )
}

#[test]
fn test_addresses_join_service_id() {
    let spec = sample_spec();
    assert_eq!(spec.address(), "com.example.sensors/TempService&probe-2");
    assert_eq!(spec.device_address(), "com.example.sensors/TempService&usb-1");
    assert_eq!(spec.logging_id(), "com.example.sensors/TempService&thermo");
    assert_eq!(spec.package_id(), "com.example.sensors");
}

#[test]
fn test_behavior_and_resources_are_stored() {
    let spec = sample_spec();
    assert_eq!(spec.name(), "Thermocouple");
    assert_eq!(spec.sensor_type(), "ScalarInput");
    assert_eq!(spec.service_id(), "com.example.sensors/TempService");
    assert_eq!(spec.device_id(), "usb-1");
    assert_eq!(spec.sensor_address_in_service(), "probe-2");
    assert_eq!(spec.expected_samples_per_second(), 12.5);
    assert!(spec.should_show_options_on_connect());
    assert_eq!(spec.icon_id(), 17);
    assert_eq!(spec.units(), "°C");
    assert_eq!(spec.short_description(), "");
}

#[test]
fn test_config_round_trip() {
    let spec = sample_spec();
    let restored = ScalarInputSpec::from_config("Thermocouple", &spec.encode()).unwrap();
    assert_eq!(restored, spec);
}

#[test]
fn test_config_length_delimited() {
    let config = sample_spec().config().clone();
    let framed = config.encode_length_delimited();
    let restored = ScalarInputConfig::decode_length_delimited(&framed).unwrap();
    assert_eq!(restored, config);
}

#[test]
fn test_corrupt_config_is_error() {
    // Field 1 (service_id) claims 50 bytes but only 1 follows
    let err = ScalarInputSpec::from_config("broken", &[0x0a, 0x32, b'x']).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::Malformed {
            schema: "ScalarInputConfig",
            ..
        }
    ));
}

#[test]
fn test_reindexed_changes_only_order() {
    let spec = sample_spec();
    let moved = spec.reindexed(5);

    assert_eq!(moved.order_in_experiment(), 5);
    assert_eq!(spec.order_in_experiment(), 1);

    let mut expected = spec.config().clone();
    expected.order_in_experiment_api_sensors = 5;
    assert_eq!(moved.config(), &expected);
    assert_eq!(moved.name(), spec.name());
}

#[test]
fn test_reindexed_same_order_is_equal() {
    let spec = sample_spec();
    assert_eq!(spec.reindexed(1), spec);
}

#[test]
fn test_missing_logging_id_keeps_default() {
    let spec = ScalarInputSpec::new(
        "Light",
        "svc",
        "lux",
        Some(SensorBehavior::default()),
        None,
        "dev",
        0,
    );
    assert_eq!(spec.logging_id(), "svc&");
}
