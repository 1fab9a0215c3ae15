//! Layered error definitions
//!
//! Categorized by source: config / metadata / connection

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum ContractError {
    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== Metadata Errors =====
    /// Stack name lookup failed
    #[error("metadata lookup failed for container '{container}': {message}")]
    MetadataLookup { container: String, message: String },

    // ===== Connection Errors =====
    /// Connection could not be established
    #[error("connection to '{target}' failed: {message}")]
    Connect { target: String, message: String },

    /// Connection rejected a write
    #[error("write to '{target}' failed: {message}")]
    ConnectionWrite { target: String, message: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl ContractError {
    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create metadata lookup error
    pub fn metadata_lookup(container: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MetadataLookup {
            container: container.into(),
            message: message.into(),
        }
    }

    /// Create connection error
    pub fn connect(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Connect {
            target: target.into(),
            message: message.into(),
        }
    }

    /// Create connection write error
    pub fn connection_write(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConnectionWrite {
            target: target.into(),
            message: message.into(),
        }
    }
}
