//! AdapterHandle - runs a StreamForwarder on its own task and queue

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, instrument};

use contracts::{ByteWriter, LogRecord, MetadataLookup};

use crate::forwarder::StreamForwarder;
use crate::serializer::Encoder;
use crate::stats::ForwarderStats;

/// Handle to a running adapter task
pub struct AdapterHandle {
    /// Route name
    name: String,
    /// Channel feeding the forwarder
    tx: mpsc::Sender<LogRecord>,
    /// Forwarder task handle
    worker_handle: JoinHandle<ForwarderStats>,
}

impl AdapterHandle {
    /// Spawn `forwarder` with a bounded queue of `queue_capacity` records
    pub fn spawn<L, W, E>(forwarder: StreamForwarder<L, W, E>, queue_capacity: usize) -> Self
    where
        L: MetadataLookup + Sync + 'static,
        W: ByteWriter + 'static,
        E: Encoder + 'static,
    {
        let name = forwarder.name().to_string();
        let (tx, rx) = mpsc::channel(queue_capacity);

        let worker_handle = tokio::spawn(forwarder.run(rx));

        Self {
            name,
            tx,
            worker_handle,
        }
    }

    /// Get route name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Queue a record, waiting while the queue is full
    ///
    /// Returns false if the forwarder task is gone.
    pub async fn send(&self, record: LogRecord) -> bool {
        if self.tx.send(record).await.is_err() {
            error!(route = %self.name, "Forwarder task closed unexpectedly");
            return false;
        }
        true
    }

    /// Close the queue and wait for the forwarder to drain it
    #[instrument(name = "adapter_handle_shutdown", skip(self), fields(route = %self.name))]
    pub async fn shutdown(self) -> ForwarderStats {
        drop(self.tx);
        match self.worker_handle.await {
            Ok(stats) => {
                debug!(route = %self.name, "AdapterHandle shutdown complete");
                stats
            }
            Err(e) => {
                error!(route = %self.name, error = ?e, "Forwarder task panicked");
                ForwarderStats::default()
            }
        }
    }
}
