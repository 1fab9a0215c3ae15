//! AdapterBlueprint - Config Loader output
//!
//! Describes the pipeline settings and the routes (one adapter each).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Adapter name accepted in routes
pub const LOGSTASH_ADAPTER: &str = "logstash";

/// Config version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfigVersion {
    #[default]
    V1,
}

/// Complete adapter configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdapterBlueprint {
    /// Config version
    #[serde(default)]
    pub version: ConfigVersion,

    /// Pipeline settings
    #[serde(default)]
    pub pipeline: PipelineSettings,

    /// Output routes
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

/// Pipeline settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSettings {
    /// Input channel capacity
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
        }
    }
}

fn default_buffer_size() -> usize {
    100
}

/// One route: adapter + transport + collector address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Route name
    pub name: String,

    /// Adapter name
    #[serde(default = "default_adapter")]
    pub adapter: String,

    /// Transport kind
    #[serde(default)]
    pub transport: TransportKind,

    /// Collector address (`host:port`)
    pub address: String,

    /// Per-route queue capacity
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

fn default_adapter() -> String {
    LOGSTASH_ADAPTER.to_string()
}

fn default_queue_capacity() -> usize {
    100
}

impl RouteConfig {
    /// Create a logstash route with default capacity
    pub fn new(
        name: impl Into<String>,
        transport: TransportKind,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            adapter: default_adapter(),
            transport,
            address: address.into(),
            queue_capacity: default_queue_capacity(),
        }
    }

    /// Route URI, e.g. `logstash+tcp://collector:5000`
    pub fn uri(&self) -> String {
        format!("{}+{}://{}", self.adapter, self.transport, self.address)
    }
}

/// Transport kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    /// One datagram per record
    #[default]
    Udp,
    /// Newline-delimited stream
    Tcp,
}

impl TransportKind {
    /// Parse a transport name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "udp" => Some(Self::Udp),
            "tcp" => Some(Self::Tcp),
            _ => None,
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Udp => f.write_str("udp"),
            Self::Tcp => f.write_str("tcp"),
        }
    }
}
