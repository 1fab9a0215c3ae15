//! Metadata client errors

use contracts::ContractError;
use thiserror::Error;

/// Metadata client errors
#[derive(Debug, Error)]
pub enum MetadataError {
    /// Request could not be sent or the body could not be read
    #[error("metadata request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("metadata service returned status {status}")]
    Status { status: u16 },

    /// Response body is not a container list
    #[error("malformed metadata response: {message}")]
    Decode { message: String },

    /// No container with this name
    #[error("container '{name}' not found in metadata")]
    ContainerNotFound { name: String },
}

impl MetadataError {
    /// Convert into the contract error for `container`
    pub fn into_contract(self, container: &str) -> ContractError {
        ContractError::metadata_lookup(container, self.to_string())
    }
}
