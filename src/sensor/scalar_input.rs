use prost::Message;
use serde::{Deserialize, Serialize};

use super::address::join_addresses;
use crate::codec::{decode_message, Envelope};
use crate::error::DecodeError;

/// Persisted configuration of a sensor exposed by a third-party scalar input service
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScalarInputConfig {
    #[prost(string, tag = "1")]
    pub service_id: String,
    #[prost(string, tag = "2")]
    pub address: String,
    #[prost(string, tag = "3")]
    pub device_id: String,
    #[prost(string, tag = "4")]
    pub logging_id: String,
    #[prost(bool, tag = "5")]
    pub should_show_options_on_connect: bool,
    #[prost(float, tag = "6")]
    pub expected_samples_per_second: f32,
    #[prost(int32, tag = "7")]
    pub icon_id: i32,
    #[prost(string, tag = "8")]
    pub units: String,
    #[prost(string, tag = "9")]
    pub short_description: String,
    #[prost(int32, tag = "10")]
    pub order_in_experiment_api_sensors: i32,
}

impl Envelope for ScalarInputConfig {
    const SCHEMA: &'static str = "ScalarInputConfig";

    fn to_envelope(&self) -> Vec<u8> {
        self.encode_to_vec()
    }

    fn from_envelope_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        decode_message(Self::SCHEMA, bytes)
    }
}

/// Runtime behavior reported by the service for a sensor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorBehavior {
    pub logging_id: Option<String>,
    pub should_show_settings_on_connect: bool,
    pub expected_samples_per_second: f32,
}

/// Display resources reported by the service for a sensor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorAppearanceResources {
    /// Icon resource id inside the service's package, `<= 0` for none
    pub icon_id: i32,
    pub units: Option<String>,
    pub short_description: Option<String>,
}

/// A named scalar input sensor and its serialized configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarInputSpec {
    name: String,
    config: ScalarInputConfig,
}

impl ScalarInputSpec {
    pub const TYPE: &'static str = "ScalarInput";

    pub fn new(
        sensor_name: impl Into<String>,
        service_id: impl Into<String>,
        address: impl Into<String>,
        behavior: Option<SensorBehavior>,
        resources: Option<SensorAppearanceResources>,
        device_id: impl Into<String>,
        order_in_experiment: i32,
    ) -> Self {
        let mut config = ScalarInputConfig {
            service_id: service_id.into(),
            address: address.into(),
            device_id: device_id.into(),
            order_in_experiment_api_sensors: order_in_experiment,
            ..Default::default()
        };

        if let Some(behavior) = behavior {
            if let Some(logging_id) = behavior.logging_id {
                config.logging_id = logging_id;
            }
            config.should_show_options_on_connect = behavior.should_show_settings_on_connect;
            config.expected_samples_per_second = behavior.expected_samples_per_second;
        }

        if let Some(resources) = resources {
            config.icon_id = resources.icon_id;
            config.units = resources.units.unwrap_or_default();
            config.short_description = resources.short_description.unwrap_or_default();
        }

        Self {
            name: sensor_name.into(),
            config,
        }
    }

    /// Rebuild a spec from its name and stored config bytes
    pub fn from_config(
        sensor_name: impl Into<String>,
        config: &[u8],
    ) -> Result<Self, DecodeError> {
        let config = ScalarInputConfig::from_envelope_bytes(config).inspect_err(|e| {
            log::error!("error parsing config: {}", e);
        })?;

        Ok(Self {
            name: sensor_name.into(),
            config,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        self.config.to_envelope()
    }

    pub fn config(&self) -> &ScalarInputConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sensor_type(&self) -> &'static str {
        Self::TYPE
    }

    /// Globally unique sensor address: service id joined with the in-service address
    pub fn address(&self) -> String {
        join_addresses(self.service_id(), self.sensor_address_in_service())
    }

    pub fn sensor_address_in_service(&self) -> &str {
        &self.config.address
    }

    pub fn service_id(&self) -> &str {
        &self.config.service_id
    }

    pub fn device_id(&self) -> &str {
        &self.config.device_id
    }

    pub fn device_address(&self) -> String {
        make_api_device_address(self.service_id(), self.device_id())
    }

    pub fn logging_id(&self) -> String {
        join_addresses(self.service_id(), &self.config.logging_id)
    }

    /// Package that hosts the service: the service id up to the first `/`
    pub fn package_id(&self) -> &str {
        package_id(self.service_id())
    }

    pub fn expected_samples_per_second(&self) -> f32 {
        self.config.expected_samples_per_second
    }

    pub fn should_show_options_on_connect(&self) -> bool {
        self.config.should_show_options_on_connect
    }

    pub fn icon_id(&self) -> i32 {
        self.config.icon_id
    }

    pub fn units(&self) -> &str {
        &self.config.units
    }

    pub fn short_description(&self) -> &str {
        &self.config.short_description
    }

    pub fn order_in_experiment(&self) -> i32 {
        self.config.order_in_experiment_api_sensors
    }

    /// Which of the four stock icons to show when the service provides none
    pub fn default_icon_index(&self) -> usize {
        self.config.order_in_experiment_api_sensors.rem_euclid(4) as usize
    }

    /// Copy placed at `new_order` among the experiment's paired API sensors
    pub fn reindexed(&self, new_order: i32) -> Self {
        let mut copy = self.clone();
        if new_order != self.order_in_experiment() {
            copy.config.order_in_experiment_api_sensors = new_order;
        }
        copy
    }
}

pub fn make_api_device_address(service_id: &str, device_id: &str) -> String {
    join_addresses(service_id, device_id)
}

fn package_id(service_id: &str) -> &str {
    service_id.split('/').next().unwrap_or(service_id)
}
