use prost::Message;
use serde::{Deserialize, Serialize};

use super::values::{PictureValue, SensorTriggerValue, SnapshotValue, TextValue};
use super::ValueType;
use crate::codec::decode_message;
use crate::error::DecodeError;

/// Per-variant payload codec.
///
/// Each payload message knows the [`ValueType`] it belongs to; encoding is
/// total and decoding fails only on bytes that do not parse under `SCHEMA`.
pub trait LabelPayload: Message + Default + Sized {
    const VALUE_TYPE: ValueType;
    const SCHEMA: &'static str;

    fn encode_payload(&self) -> Vec<u8> {
        self.encode_to_vec()
    }

    fn decode_payload(bytes: &[u8]) -> Result<Self, DecodeError> {
        decode_message(Self::SCHEMA, bytes)
    }

    fn into_value(self) -> LabelValue;
}

impl LabelPayload for TextValue {
    const VALUE_TYPE: ValueType = ValueType::Text;
    const SCHEMA: &'static str = "TextLabelValue";

    fn into_value(self) -> LabelValue {
        LabelValue::Text(self)
    }
}

impl LabelPayload for PictureValue {
    const VALUE_TYPE: ValueType = ValueType::Picture;
    const SCHEMA: &'static str = "PictureLabelValue";

    fn into_value(self) -> LabelValue {
        LabelValue::Picture(self)
    }
}

impl LabelPayload for SensorTriggerValue {
    const VALUE_TYPE: ValueType = ValueType::SensorTrigger;
    const SCHEMA: &'static str = "SensorTriggerLabelValue";

    fn into_value(self) -> LabelValue {
        LabelValue::SensorTrigger(self)
    }
}

impl LabelPayload for SnapshotValue {
    const VALUE_TYPE: ValueType = ValueType::Snapshot;
    const SCHEMA: &'static str = "SnapshotLabelValue";

    fn into_value(self) -> LabelValue {
        LabelValue::Snapshot(self)
    }
}

/// Decoded label payload, tagged by variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LabelValue {
    Text(TextValue),
    Picture(PictureValue),
    SensorTrigger(SensorTriggerValue),
    Snapshot(SnapshotValue),
}

impl LabelValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Text(_) => ValueType::Text,
            Self::Picture(_) => ValueType::Picture,
            Self::SensorTrigger(_) => ValueType::SensorTrigger,
            Self::Snapshot(_) => ValueType::Snapshot,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Text(v) => v.encode_payload(),
            Self::Picture(v) => v.encode_payload(),
            Self::SensorTrigger(v) => v.encode_payload(),
            Self::Snapshot(v) => v.encode_payload(),
        }
    }

    /// Decode `bytes` under the schema selected by `value_type`
    pub fn decode(value_type: ValueType, bytes: &[u8]) -> Result<Self, DecodeError> {
        match value_type {
            ValueType::Text => TextValue::decode_payload(bytes).map(Self::Text),
            ValueType::Picture => PictureValue::decode_payload(bytes).map(Self::Picture),
            ValueType::SensorTrigger => {
                SensorTriggerValue::decode_payload(bytes).map(Self::SensorTrigger)
            }
            ValueType::Snapshot => SnapshotValue::decode_payload(bytes).map(Self::Snapshot),
        }
    }
}

impl From<TextValue> for LabelValue {
    fn from(value: TextValue) -> Self {
        value.into_value()
    }
}

impl From<PictureValue> for LabelValue {
    fn from(value: PictureValue) -> Self {
        value.into_value()
    }
}

impl From<SensorTriggerValue> for LabelValue {
    fn from(value: SensorTriggerValue) -> Self {
        value.into_value()
    }
}

impl From<SnapshotValue> for LabelValue {
    fn from(value: SnapshotValue) -> Self {
        value.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_dispatches_on_value_type() {
        let bytes = TextValue::new("hello").encode_payload();
        let value = LabelValue::decode(ValueType::Text, &bytes).unwrap();
        assert_eq!(value, LabelValue::Text(TextValue::new("hello")));
    }

    #[test]
    fn test_empty_bytes_decode_to_default() {
        let value = LabelValue::decode(ValueType::Picture, &[]).unwrap();
        assert_eq!(value, LabelValue::Picture(PictureValue::default()));
    }

    #[test]
    fn test_truncated_bytes_fail() {
        let mut bytes = TextValue::new("a longer piece of text").encode_payload();
        bytes.truncate(4);
        let err = LabelValue::decode(ValueType::Text, &bytes).unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { schema: "TextLabelValue", .. }));
    }
}
