//! Pipeline orchestrator - connects the input, the metadata client and the routes.

use std::future::Future;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use contracts::{AdapterBlueprint, LogRecord};
use metadata::RancherMetadataClient;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::info;

use super::source::{read_records, SourceStats};
use super::PipelineStats;
use crate::error::CliError;

/// Where records come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` selects stdin, anything else is a path
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Validated adapter blueprint
    pub blueprint: AdapterBlueprint,

    /// Record input
    pub input: InputSource,
}

/// Main pipeline orchestrator
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a new pipeline with the given configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run until the input is exhausted or `shutdown` fires
    ///
    /// Either way the input is closed first and every route drains its queue
    /// before the stats are returned.
    pub async fn run<S>(self, shutdown: S) -> Result<PipelineStats>
    where
        S: Future<Output = ()>,
    {
        let start_time = Instant::now();
        let blueprint = &self.config.blueprint;

        let (input_tx, input_rx) = mpsc::channel::<LogRecord>(blueprint.pipeline.buffer_size);

        let lookup = RancherMetadataClient::new();
        info!(metadata_url = %lookup.base_url(), "Using Rancher metadata service");

        let router = forwarder::create_router(&blueprint.routes, lookup, input_rx)
            .await
            .context("Failed to create routes")?;

        info!(routes = ?router.route_names(), "Routes connected");
        let router_handle = router.spawn();

        let source = self.read_input(input_tx, shutdown).await?;

        let routes = router_handle.await.context("Router task failed")?;

        let stats = PipelineStats {
            source,
            routes,
            duration: start_time.elapsed(),
        };

        info!(
            records = stats.source.records,
            dropped = stats.total_dropped(),
            duration_secs = stats.duration.as_secs_f64(),
            "Pipeline finished"
        );

        Ok(stats)
    }

    async fn read_input<S>(&self, tx: mpsc::Sender<LogRecord>, shutdown: S) -> Result<SourceStats>
    where
        S: Future<Output = ()>,
    {
        match &self.config.input {
            InputSource::Stdin => {
                info!("Reading records from stdin");
                Ok(read_records(BufReader::new(tokio::io::stdin()), tx, shutdown).await)
            }
            InputSource::File(path) => {
                info!(path = %path.display(), "Reading records from file");
                let file = tokio::fs::File::open(path)
                    .await
                    .map_err(|e| CliError::input(path.display().to_string(), e.to_string()))?;
                Ok(read_records(BufReader::new(file), tx, shutdown).await)
            }
        }
    }
}
