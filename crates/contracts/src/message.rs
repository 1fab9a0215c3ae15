//! EnrichedMessage - the wire model sent to the collector
//!
//! Field names and nesting are consumed by downstream Logstash pipelines and
//! must not change.

use serde::{Deserialize, Serialize};

/// Docker identity block, copied verbatim from the source record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockerInfo {
    pub name: String,
    pub id: String,
    pub image: String,
    pub hostname: String,
}

/// Rancher orchestration block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RancherInfo {
    #[serde(rename = "stackname")]
    pub stack_name: String,
}

/// Enriched log record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedMessage {
    pub message: String,
    pub docker: DockerInfo,
    pub rancher: RancherInfo,
}
