//! Typed-variant label records for time-series recording sessions.
//!
//! A [`LabelRecord`](label::LabelRecord) tags a moment in a recording with
//! text, a picture, a sensor trigger or a snapshot of sensor readings. The
//! payload is stored as encoded bytes keyed by the record's
//! [`ValueType`](label::ValueType) and is only readable through accessors
//! that check that type first.

pub mod assets;
pub mod codec;
pub mod error;
pub mod label;
pub mod resilience;
pub mod sensor;

pub use codec::Envelope;
pub use error::{DecodeError, LabelError};
