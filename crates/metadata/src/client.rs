//! RancherMetadataClient - HTTP lookup against the Rancher metadata service

use contracts::{ContractError, MetadataLookup};
use reqwest::header::ACCEPT;
use tracing::{debug, instrument};

use crate::error::MetadataError;
use crate::model::RancherContainer;

/// Well-known metadata endpoint reachable from every Rancher-managed container
pub const DEFAULT_METADATA_URL: &str = "http://rancher-metadata/2015-07-25";

/// Rancher metadata client
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RancherMetadataClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for RancherMetadataClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RancherMetadataClient {
    /// Create a client for the well-known metadata endpoint
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_METADATA_URL)
    }

    /// Create a client for a custom endpoint
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every container known to the metadata service
    #[instrument(name = "metadata_containers", skip(self), fields(base_url = %self.base_url))]
    pub async fn containers(&self) -> Result<Vec<RancherContainer>, MetadataError> {
        let url = format!("{}/containers", self.base_url);

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetadataError::Status {
                status: status.as_u16(),
            });
        }

        let containers: Vec<RancherContainer> = response.json().await.map_err(|e| {
            if e.is_decode() {
                MetadataError::Decode {
                    message: e.to_string(),
                }
            } else {
                MetadataError::Request(e)
            }
        })?;

        debug!(count = containers.len(), "Fetched metadata containers");
        Ok(containers)
    }

    /// Resolve the stack that owns the container `name`
    pub async fn stack_name_by_container_name(&self, name: &str) -> Result<String, MetadataError> {
        self.containers()
            .await?
            .into_iter()
            .find(|c| c.matches(name))
            .map(|c| c.stack_name)
            .ok_or_else(|| MetadataError::ContainerNotFound {
                name: name.to_string(),
            })
    }
}

impl MetadataLookup for RancherMetadataClient {
    async fn stack_name(&self, container_name: &str) -> Result<String, ContractError> {
        self.stack_name_by_container_name(container_name)
            .await
            .map_err(|e| e.into_contract(container_name))
    }
}
