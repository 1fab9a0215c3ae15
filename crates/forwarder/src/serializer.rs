//! Serializer - EnrichedMessage -> wire bytes

use bytes::Bytes;
use contracts::EnrichedMessage;

use crate::error::ForwarderError;

/// Wire encoder
pub trait Encoder: Send {
    /// Encode one message
    ///
    /// # Errors
    /// Returns `ForwarderError::Serialization`; the caller drops the record.
    fn encode(&self, message: &EnrichedMessage) -> Result<Bytes, ForwarderError>;
}

/// Compact JSON, the Logstash `json` codec format
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl Encoder for JsonEncoder {
    fn encode(&self, message: &EnrichedMessage) -> Result<Bytes, ForwarderError> {
        serde_json::to_vec(message)
            .map(Bytes::from)
            .map_err(|e| ForwarderError::serialization(format!("json error: {}", e)))
    }
}

/// Encode with the default JSON encoder
pub fn serialize(message: &EnrichedMessage) -> Result<Bytes, ForwarderError> {
    JsonEncoder.encode(message)
}
