use prost::encoding::{decode_varint, encode_varint};
use prost::Message;

use crate::error::DecodeError;

/// Decode a protobuf message, tagging failures with the schema name
pub(crate) fn decode_message<M>(schema: &'static str, bytes: &[u8]) -> Result<M, DecodeError>
where
    M: Message + Default,
{
    M::decode(bytes).map_err(|source| DecodeError::Malformed { schema, source })
}

/// Whole-object binary form shared by label records and device configs.
///
/// `encode_length_delimited` prefixes the body with its varint length so the
/// envelope can be written into a byte stream and read back as one frame.
pub trait Envelope: Sized {
    /// Schema name used in decode errors
    const SCHEMA: &'static str;

    fn to_envelope(&self) -> Vec<u8>;

    fn from_envelope_bytes(bytes: &[u8]) -> Result<Self, DecodeError>;

    fn encode_length_delimited(&self) -> Vec<u8> {
        let body = self.to_envelope();
        let mut framed = Vec::with_capacity(body.len() + 10);
        encode_varint(body.len() as u64, &mut framed);
        framed.extend_from_slice(&body);
        framed
    }

    /// Decode exactly one length-prefixed frame
    fn decode_length_delimited(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut cursor = bytes;
        let declared = decode_varint(&mut cursor).map_err(|source| DecodeError::Malformed {
            schema: Self::SCHEMA,
            source,
        })?;

        if declared != cursor.len() as u64 {
            return Err(DecodeError::FrameLength {
                schema: Self::SCHEMA,
                declared,
                available: cursor.len(),
            });
        }

        Self::from_envelope_bytes(cursor)
    }
}
