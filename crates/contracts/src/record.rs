//! LogRecord - host log pipeline output
//!
//! One captured log line plus the identity of the container that emitted it.

use serde::{Deserialize, Serialize};

/// Identity of the emitting container
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerInfo {
    /// Container name (docker may prefix it with `/`)
    pub name: String,
    /// Container ID
    pub id: String,
    /// Image reference, e.g. `nginx:latest`
    pub image: String,
    /// Hostname configured inside the container
    pub hostname: String,
}

/// A single captured log line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Raw message text
    pub message: String,

    /// Emitting container
    pub container: ContainerInfo,

    /// Output stream (`stdout` / `stderr`), informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl LogRecord {
    /// Create a record without a source stream label
    pub fn new(message: impl Into<String>, container: ContainerInfo) -> Self {
        Self {
            message: message.into(),
            container,
            source: None,
        }
    }
}
