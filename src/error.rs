use thiserror::Error;

use crate::label::ValueType;

/// Bytes that could not be read under the schema the caller expected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed {schema} bytes: {source}")]
    Malformed {
        schema: &'static str,
        source: prost::DecodeError,
    },

    #[error("unknown label value type {0}")]
    UnknownValueType(i32),

    #[error("label envelope has no label id")]
    MissingLabelId,

    #[error("{schema} frame declares {declared} bytes but {available} follow the length prefix")]
    FrameLength {
        schema: &'static str,
        declared: u64,
        available: usize,
    },
}

/// Errors raised by label construction, mutation and typed access
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    /// Payload bytes are corrupt for the record's own value type
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Caller asked for a variant the record does not carry
    #[error("cannot read {requested} value from label of type {actual}")]
    WrongVariantAccess {
        requested: ValueType,
        actual: ValueType,
    },

    #[error("{field} cannot be edited on {value_type} labels")]
    ImmutableField {
        field: &'static str,
        value_type: ValueType,
    },

    #[error("cannot attach {actual} value to label of type {expected}")]
    TypeMismatch {
        expected: ValueType,
        actual: ValueType,
    },
}

impl LabelError {
    /// True for errors caused by stored data rather than by the caller
    pub fn is_data_error(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

pub type Result<T> = std::result::Result<T, LabelError>;
