//! Payload messages carried inside a label's `proto_data`, one per [`ValueType`].
//!
//! Field numbers follow the wire schema used by existing recordings, so
//! payloads written elsewhere decode here unchanged.
//!
//! [`ValueType`]: super::ValueType

use serde::{Deserialize, Serialize};

/// Free-text note attached to a label, timestamped on each edit
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct Caption {
    #[prost(string, tag = "1")]
    pub text: String,
    #[prost(int64, tag = "2")]
    pub last_edited_timestamp: i64,
}

impl Caption {
    pub fn new(text: impl Into<String>, last_edited_timestamp: i64) -> Self {
        Self {
            text: text.into(),
            last_edited_timestamp,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct TextValue {
    #[prost(string, tag = "1")]
    pub text: String,
}

impl TextValue {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A captured picture. `file_path` is relative to the experiment's asset directory.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct PictureValue {
    #[prost(string, tag = "1")]
    pub file_path: String,
    #[prost(message, optional, tag = "2")]
    #[serde(default)]
    pub caption: Option<Caption>,
}

impl PictureValue {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            caption: None,
        }
    }
}

/// Condition under which a sensor trigger fires
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TriggerWhen {
    At = 0,
    Above = 1,
    Below = 2,
    DropsBelow = 3,
    RisesAbove = 4,
}

/// What the app did when the trigger fired
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TriggerAction {
    StartRecording = 0,
    StopRecording = 1,
    Note = 2,
    Alert = 3,
}

/// Record of a sensor trigger rule firing
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SensorTriggerValue {
    #[prost(string, tag = "1")]
    pub sensor_id: String,
    #[prost(string, tag = "2")]
    pub trigger_id: String,
    #[prost(enumeration = "TriggerWhen", tag = "3")]
    pub trigger_when: i32,
    #[prost(enumeration = "TriggerAction", tag = "4")]
    pub trigger_action: i32,
    #[prost(double, tag = "5")]
    pub value_to_trigger: f64,
    #[prost(string, tag = "6")]
    pub note: String,
}

impl SensorTriggerValue {
    pub fn new(
        sensor_id: impl Into<String>,
        trigger_id: impl Into<String>,
        when: TriggerWhen,
        action: TriggerAction,
        value_to_trigger: f64,
    ) -> Self {
        Self {
            sensor_id: sensor_id.into(),
            trigger_id: trigger_id.into(),
            trigger_when: when.into(),
            trigger_action: action.into(),
            value_to_trigger,
            note: String::new(),
        }
    }
}

/// One sensor reading captured into a snapshot
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SensorSnapshot {
    #[prost(string, tag = "1")]
    pub sensor_id: String,
    #[prost(string, tag = "2")]
    pub sensor_name: String,
    #[prost(string, tag = "3")]
    pub units: String,
    #[prost(double, tag = "4")]
    pub value: f64,
    #[prost(int64, tag = "5")]
    pub timestamp_ms: i64,
}

/// Readings captured together when a snapshot label is made.
///
/// Normally holds one or more readings, but an empty list is a valid value:
/// it encodes to zero bytes, the same as a snapshot label that never had a
/// payload, so both read back as an empty `SnapshotValue`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SnapshotValue {
    #[prost(message, repeated, tag = "1")]
    pub snapshots: Vec<SensorSnapshot>,
}

impl SnapshotValue {
    pub fn new(snapshots: Vec<SensorSnapshot>) -> Self {
        Self { snapshots }
    }
}
