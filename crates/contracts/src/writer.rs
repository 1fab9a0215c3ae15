//! ByteWriter trait - collector connection
//!
//! The connection is acquired by the host and handed to a forwarder, which
//! writes to it and never closes, resets or replaces it.

use crate::ContractError;

/// Writable connection to the collector
#[trait_variant::make(ByteWriter: Send)]
pub trait LocalByteWriter {
    /// Connection label (used for logging), e.g. `udp://collector:5000`
    fn name(&self) -> &str;

    /// Write one serialized record in a single call
    ///
    /// # Errors
    /// Returns `ContractError::ConnectionWrite` if the transport rejects the write.
    async fn write(&mut self, payload: &[u8]) -> Result<(), ContractError>;
}
