//! Forwarder error types

use contracts::ContractError;
use thiserror::Error;

/// Forwarder errors
///
/// Per-record variants never stop the forwarding loop. Lookup failures are
/// not errors here: they resolve to the cached stack name.
#[derive(Debug, Error)]
pub enum ForwarderError {
    /// Enriched message could not be encoded
    #[error("serialization failed: {message}")]
    Serialization { message: String },

    /// Connection rejected the write
    #[error("write failed: {0}")]
    Write(#[source] ContractError),

    /// Adapter could not be created for a route
    #[error("failed to create adapter '{route}': {message}")]
    AdapterCreation { route: String, message: String },
}

impl ForwarderError {
    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an adapter creation error
    pub fn adapter_creation(route: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AdapterCreation {
            route: route.into(),
            message: message.into(),
        }
    }

    /// Short label used as a metric dimension
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Serialization { .. } => "serialization_failed",
            Self::Write(_) => "write_failed",
            Self::AdapterCreation { .. } => "adapter_creation_failed",
        }
    }
}
