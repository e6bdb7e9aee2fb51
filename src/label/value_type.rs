use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant selecting which payload schema a label's bytes follow
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ::prost::Enumeration)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum ValueType {
    Text = 0,
    Picture = 1,
    SensorTrigger = 2,
    Snapshot = 3,
}

impl ValueType {
    pub const ALL: [ValueType; 4] = [
        ValueType::Text,
        ValueType::Picture,
        ValueType::SensorTrigger,
        ValueType::Snapshot,
    ];

    /// Name as written in the wire schema
    pub fn as_str_name(&self) -> &'static str {
        match self {
            ValueType::Text => "TEXT",
            ValueType::Picture => "PICTURE",
            ValueType::SensorTrigger => "SENSOR_TRIGGER",
            ValueType::Snapshot => "SNAPSHOT",
        }
    }

    /// Short tag used in debug output
    pub fn debug_tag(&self) -> &'static str {
        match self {
            ValueType::SensorTrigger => "TRIGGER",
            other => other.as_str_name(),
        }
    }

    /// Trigger and snapshot timestamps come from the triggering event and stay pinned to it
    pub fn has_editable_timestamp(&self) -> bool {
        !matches!(self, ValueType::SensorTrigger | ValueType::Snapshot)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str_name())
    }
}
