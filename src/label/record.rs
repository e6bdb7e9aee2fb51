use prost::Message;
use std::cmp::Ordering;
use std::fmt;

use super::identity::{Clock, IdGenerator, SystemClock, UuidGenerator};
use super::payload::{LabelPayload, LabelValue};
use super::values::{Caption, PictureValue, SensorTriggerValue, SnapshotValue, TextValue};
use super::ValueType;
use crate::assets::{self, AssetCleanup, AssetStore, ExperimentLocation};
use crate::codec::{decode_message, Envelope};
use crate::error::{DecodeError, LabelError, Result};

const ENVELOPE_SCHEMA: &str = "Label";

/// Wire form of a whole label
#[derive(Clone, PartialEq, ::prost::Message)]
struct LabelMessage {
    #[prost(int64, tag = "1")]
    timestamp_ms: i64,
    #[prost(string, tag = "2")]
    label_id: String,
    #[prost(int64, tag = "3")]
    creation_time_ms: i64,
    #[prost(enumeration = "ValueType", tag = "4")]
    value_type: i32,
    #[prost(bytes = "vec", tag = "5")]
    proto_data: Vec<u8>,
    #[prost(message, optional, tag = "6")]
    caption: Option<Caption>,
}

/// A timestamped annotation on a recording session.
///
/// Identity, value type and creation time are fixed once the record exists.
/// The payload is held in its encoded form and is only reachable through the
/// typed accessors, which check the record's own [`ValueType`] before decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRecord {
    label_id: String,
    value_type: ValueType,
    creation_time_ms: i64,
    timestamp_ms: i64,
    proto_data: Vec<u8>,
    caption: Option<Caption>,
}

impl LabelRecord {
    fn blank(label_id: String, creation_time_ms: i64, value_type: ValueType) -> Self {
        Self {
            label_id,
            value_type,
            creation_time_ms,
            timestamp_ms: creation_time_ms,
            proto_data: Vec::new(),
            caption: None,
        }
    }

    /// New label with no payload and a random identity
    pub fn new_empty(creation_time_ms: i64, value_type: ValueType) -> Self {
        Self::new_empty_with(&UuidGenerator, creation_time_ms, value_type)
    }

    pub fn new_empty_with(
        ids: &dyn IdGenerator,
        creation_time_ms: i64,
        value_type: ValueType,
    ) -> Self {
        Self::blank(ids.next_id(), creation_time_ms, value_type)
    }

    /// New label carrying `value`, which must match `value_type`
    pub fn new_with_value(
        creation_time_ms: i64,
        value_type: ValueType,
        value: impl Into<LabelValue>,
        caption: Option<Caption>,
    ) -> Result<Self> {
        Self::new_with_value_using(&UuidGenerator, creation_time_ms, value_type, value, caption)
    }

    pub fn new_with_value_using(
        ids: &dyn IdGenerator,
        creation_time_ms: i64,
        value_type: ValueType,
        value: impl Into<LabelValue>,
        caption: Option<Caption>,
    ) -> Result<Self> {
        let mut label = Self::blank(ids.next_id(), creation_time_ms, value_type);
        label.set_value(value)?;
        label.caption = caption;
        Ok(label)
    }

    /// Like [`new_with_value`](Self::new_with_value) but keeps a caller-supplied identity
    pub fn from_uuid_and_value(
        creation_time_ms: i64,
        label_id: impl Into<String>,
        value_type: ValueType,
        value: impl Into<LabelValue>,
    ) -> Result<Self> {
        let mut label = Self::blank(label_id.into(), creation_time_ms, value_type);
        label.set_value(value)?;
        Ok(label)
    }

    /// Load a label from its whole-record envelope. The envelope must carry a
    /// known value type and a non-empty label id.
    pub fn from_envelope(bytes: &[u8]) -> std::result::Result<Self, DecodeError> {
        let message: LabelMessage = decode_message(ENVELOPE_SCHEMA, bytes).inspect_err(|e| {
            log::error!("Couldn't parse label envelope: {}", e);
        })?;

        let value_type = ValueType::try_from(message.value_type)
            .map_err(|_| DecodeError::UnknownValueType(message.value_type))?;
        if message.label_id.is_empty() {
            log::error!("Label envelope of type {} has no label id", value_type);
            return Err(DecodeError::MissingLabelId);
        }

        Ok(Self {
            label_id: message.label_id,
            value_type,
            creation_time_ms: message.creation_time_ms,
            timestamp_ms: message.timestamp_ms,
            proto_data: message.proto_data,
            caption: message.caption,
        })
    }

    /// Load a label from a varint length-prefixed envelope frame
    pub fn from_length_delimited(bytes: &[u8]) -> std::result::Result<Self, DecodeError> {
        <Self as Envelope>::decode_length_delimited(bytes)
    }

    pub fn encode(&self) -> Vec<u8> {
        LabelMessage {
            timestamp_ms: self.timestamp_ms,
            label_id: self.label_id.clone(),
            creation_time_ms: self.creation_time_ms,
            value_type: self.value_type.into(),
            proto_data: self.proto_data.clone(),
            caption: self.caption.clone(),
        }
        .encode_to_vec()
    }

    pub fn encode_length_delimited(&self) -> Vec<u8> {
        <Self as Envelope>::encode_length_delimited(self)
    }

    /// Deep copy with a new identity and creation time.
    ///
    /// Goes through the envelope so the copy shares nothing with `self`. The
    /// annotated timestamp, value type and payload are kept; a caption keeps
    /// its text but is marked as edited now.
    pub fn duplicate(&self) -> std::result::Result<Self, DecodeError> {
        self.duplicate_with(&UuidGenerator, &SystemClock)
    }

    pub fn duplicate_with(
        &self,
        ids: &dyn IdGenerator,
        clock: &dyn Clock,
    ) -> std::result::Result<Self, DecodeError> {
        let mut copy = Self::from_envelope(&self.encode())?;
        let now = clock.now_ms();

        copy.creation_time_ms = now;
        copy.label_id = ids.next_id();
        if let Some(caption) = copy.caption.as_mut() {
            caption.last_edited_timestamp = now;
        }

        Ok(copy)
    }

    pub fn label_id(&self) -> &str {
        &self.label_id
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn creation_time_ms(&self) -> i64 {
        self.creation_time_ms
    }

    pub fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }

    pub fn caption(&self) -> Option<&Caption> {
        self.caption.as_ref()
    }

    /// Caption text, or an empty string when there is no caption
    pub fn caption_text(&self) -> &str {
        self.caption.as_ref().map_or("", |c| c.text.as_str())
    }

    pub fn has_payload(&self) -> bool {
        !self.proto_data.is_empty()
    }

    pub fn can_edit_timestamp(&self) -> bool {
        self.value_type.has_editable_timestamp()
    }

    pub fn set_timestamp(&mut self, timestamp_ms: i64) -> Result<()> {
        if !self.can_edit_timestamp() {
            return Err(LabelError::ImmutableField {
                field: "timestamp",
                value_type: self.value_type,
            });
        }
        self.timestamp_ms = timestamp_ms;
        Ok(())
    }

    pub fn set_caption(&mut self, caption: Option<Caption>) {
        self.caption = caption;
    }

    /// Replace the payload. The value's variant must match the record's type.
    pub fn set_value(&mut self, value: impl Into<LabelValue>) -> Result<()> {
        let value = value.into();
        if value.value_type() != self.value_type {
            return Err(LabelError::TypeMismatch {
                expected: self.value_type,
                actual: value.value_type(),
            });
        }
        self.proto_data = value.encode();
        Ok(())
    }

    pub fn with_timestamp(mut self, timestamp_ms: i64) -> Result<Self> {
        self.set_timestamp(timestamp_ms)?;
        Ok(self)
    }

    pub fn with_caption(mut self, caption: Option<Caption>) -> Self {
        self.set_caption(caption);
        self
    }

    pub fn with_value(mut self, value: impl Into<LabelValue>) -> Result<Self> {
        self.set_value(value)?;
        Ok(self)
    }

    /// Decode the payload as `P`, failing if the record holds another variant
    pub fn value_as<P: LabelPayload>(&self) -> Result<P> {
        if self.value_type != P::VALUE_TYPE {
            return Err(LabelError::WrongVariantAccess {
                requested: P::VALUE_TYPE,
                actual: self.value_type,
            });
        }

        P::decode_payload(&self.proto_data)
            .inspect_err(|e| log::warn!("Label {}: {}", self.label_id, e))
            .map_err(LabelError::from)
    }

    pub fn as_text(&self) -> Result<TextValue> {
        self.value_as()
    }

    pub fn as_picture(&self) -> Result<PictureValue> {
        self.value_as()
    }

    pub fn as_sensor_trigger(&self) -> Result<SensorTriggerValue> {
        self.value_as()
    }

    pub fn as_snapshot(&self) -> Result<SnapshotValue> {
        self.value_as()
    }

    /// Decode the payload under whichever variant the record carries
    pub fn value(&self) -> Result<LabelValue> {
        LabelValue::decode(self.value_type, &self.proto_data).map_err(LabelError::from)
    }

    /// Remove external files this label references. Only pictures have any.
    pub async fn delete_assets<S>(&self, store: &S, experiment: &ExperimentLocation) -> AssetCleanup
    where
        S: AssetStore + ?Sized,
    {
        assets::delete_label_assets(self, store, experiment).await
    }

    /// One-line rendering for logs; falls back to a placeholder if the payload is corrupt
    pub fn describe(&self) -> String {
        let data = match self.value() {
            Ok(value) => format!("{:?}", value),
            Err(_) => "unknown".to_string(),
        };
        format!(
            "{}: time: {}, type:{}, data: {}",
            self.label_id,
            self.timestamp_ms,
            self.value_type.debug_tag(),
            data
        )
    }

    pub fn compare_by_timestamp(a: &LabelRecord, b: &LabelRecord) -> Ordering {
        a.timestamp_ms.cmp(&b.timestamp_ms)
    }
}

impl fmt::Display for LabelRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl Envelope for LabelRecord {
    const SCHEMA: &'static str = ENVELOPE_SCHEMA;

    fn to_envelope(&self) -> Vec<u8> {
        self.encode()
    }

    fn from_envelope_bytes(bytes: &[u8]) -> std::result::Result<Self, DecodeError> {
        Self::from_envelope(bytes)
    }
}

/// Stable ascending sort on the annotated timestamp
pub fn sort_by_timestamp(labels: &mut [LabelRecord]) {
    labels.sort_by(LabelRecord::compare_by_timestamp);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_label_defaults() {
        let label = LabelRecord::new_empty(42, ValueType::Text);
        assert_eq!(label.creation_time_ms(), 42);
        assert_eq!(label.timestamp_ms(), 42);
        assert!(!label.has_payload());
        assert!(label.caption().is_none());
        assert_eq!(label.caption_text(), "");
    }

    #[test]
    fn test_unknown_value_type_rejected() {
        let bytes = LabelMessage {
            label_id: "x".to_string(),
            value_type: 17,
            ..Default::default()
        }
        .encode_to_vec();

        let err = LabelRecord::from_envelope(&bytes).unwrap_err();
        assert_eq!(err, DecodeError::UnknownValueType(17));
    }

    #[test]
    fn test_sort_by_timestamp_is_stable() {
        let a = LabelRecord::new_empty(30, ValueType::Text);
        let b = LabelRecord::new_empty(10, ValueType::Text);
        let c = LabelRecord::new_empty(30, ValueType::Picture);
        let mut labels = vec![a.clone(), b.clone(), c.clone()];

        sort_by_timestamp(&mut labels);

        assert_eq!(labels, vec![b, a, c]);
    }
}
