//! # JSON Record Codec
//!
//! Default `RecordCodec` producing field-tagged JSON. The stored form is
//! self-describing and human-diffable; no other system depends on a
//! byte-identical encoding.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::errors::CodecError;
use crate::ports::outbound::RecordCodec;

/// Record codec backed by serde_json.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRecordCodec;

impl RecordCodec for JsonRecordCodec {
    fn encode<T: Serialize>(&self, record: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(record).map_err(|e| CodecError::Malformed {
            message: e.to_string(),
        })
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        if bytes.is_empty() {
            return Err(CodecError::EmptyPayload);
        }
        serde_json::from_slice(bytes).map_err(|e| CodecError::Malformed {
            message: e.to_string(),
        })
    }
}
