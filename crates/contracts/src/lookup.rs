//! MetadataLookup trait - orchestration metadata input
//!
//! Resolves the stack that owns a container. Implementations must not cache
//! results: the sticky fallback policy belongs to the caller.

use crate::ContractError;

/// Stack name lookup
#[trait_variant::make(MetadataLookup: Send)]
pub trait LocalMetadataLookup {
    /// Return the name of the stack that owns `container_name`
    ///
    /// # Errors
    /// Returns `ContractError::MetadataLookup` when the service is unreachable,
    /// the container is unknown or the response cannot be decoded.
    async fn stack_name(&self, container_name: &str) -> Result<String, ContractError>;
}
