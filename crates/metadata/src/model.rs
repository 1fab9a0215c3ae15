//! Metadata response model

use serde::Deserialize;

/// Container entry from `GET /containers`
///
/// Only the fields used for stack resolution are decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RancherContainer {
    pub name: String,

    #[serde(default)]
    pub stack_name: String,

    #[serde(default)]
    pub service_name: String,

    /// Docker container ID
    #[serde(default)]
    pub external_id: String,
}

impl RancherContainer {
    /// Whether this entry describes the docker container `name`
    ///
    /// Docker prefixes container names with `/`; metadata does not.
    pub fn matches(&self, name: &str) -> bool {
        self.name == name.trim_start_matches('/')
    }
}
