//! StreamForwarder - per-route record loop
//!
//! Owns its connection and stack name cache exclusively. Records are handled
//! strictly one at a time, in arrival order.

use contracts::{ByteWriter, LogRecord, MetadataLookup};
use observability::{record_lookup_failure, record_outcome};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

use crate::enricher::enrich;
use crate::error::ForwarderError;
use crate::resolver::{Resolution, StickyStackName};
use crate::serializer::{Encoder, JsonEncoder};
use crate::stats::ForwarderStats;

/// Enriches records and forwards them to one collector connection
pub struct StreamForwarder<L, W, E = JsonEncoder> {
    name: String,
    lookup: L,
    writer: W,
    encoder: E,
    stack_name: StickyStackName,
    stats: ForwarderStats,
}

impl<L, W> StreamForwarder<L, W, JsonEncoder>
where
    L: MetadataLookup,
    W: ByteWriter,
{
    /// Create a forwarder using the JSON wire format
    pub fn new(name: impl Into<String>, lookup: L, writer: W) -> Self {
        Self {
            name: name.into(),
            lookup,
            writer,
            encoder: JsonEncoder,
            stack_name: StickyStackName::new(),
            stats: ForwarderStats::default(),
        }
    }
}

impl<L, W, E> StreamForwarder<L, W, E>
where
    L: MetadataLookup,
    W: ByteWriter,
    E: Encoder,
{
    /// Replace the encoder
    pub fn with_encoder<E2: Encoder>(self, encoder: E2) -> StreamForwarder<L, W, E2> {
        StreamForwarder {
            name: self.name,
            lookup: self.lookup,
            writer: self.writer,
            encoder,
            stack_name: self.stack_name,
            stats: self.stats,
        }
    }

    /// Route name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Counters so far
    pub fn stats(&self) -> &ForwarderStats {
        &self.stats
    }

    /// Last successfully resolved stack name
    pub fn cached_stack_name(&self) -> &str {
        self.stack_name.current()
    }

    /// Process one record: resolve, enrich, serialize, write
    ///
    /// A failed lookup is absorbed here (logged, cached value used).
    ///
    /// # Errors
    /// `Serialization` or `Write`; the record is lost, the forwarder stays usable.
    pub async fn process(&mut self, record: &LogRecord) -> Result<(), ForwarderError> {
        let container = &record.container.name;
        let resolution = self.stack_name.resolve(&self.lookup, container).await;

        if let Resolution::Fallback { stack_name, error } = &resolution {
            self.stats.lookup_failures += 1;
            record_lookup_failure(&self.name);
            warn!(
                route = %self.name,
                container = %container,
                fallback = %stack_name,
                error = %error,
                "Stack name lookup failed, using last known value"
            );
        }

        let message = enrich(record, resolution.stack_name());
        let payload = self.encoder.encode(&message)?;

        self.writer
            .write(&payload)
            .await
            .map_err(ForwarderError::Write)?;

        debug!(
            route = %self.name,
            container = %container,
            bytes = payload.len(),
            "Forwarded"
        );
        Ok(())
    }

    /// Consume records until the input is closed
    ///
    /// Per-record failures are logged and skipped; the loop only ends when
    /// every sender is dropped and the queue is drained.
    #[instrument(
        name = "stream_forwarder_run",
        skip(self, records),
        fields(route = %self.name, endpoint = %self.writer.name())
    )]
    pub async fn run(mut self, mut records: mpsc::Receiver<LogRecord>) -> ForwarderStats {
        info!(route = %self.name, endpoint = %self.writer.name(), "Forwarder started");

        while let Some(record) = records.recv().await {
            self.stats.received += 1;

            match self.process(&record).await {
                Ok(()) => {
                    self.stats.forwarded += 1;
                    record_outcome(&self.name, "forwarded");
                }
                Err(e) => {
                    self.stats.record_failure(&e);
                    record_outcome(&self.name, e.kind());
                    error!(
                        route = %self.name,
                        container = %record.container.name,
                        error = %e,
                        "Record dropped"
                    );
                }
            }
        }

        info!(
            route = %self.name,
            received = self.stats.received,
            forwarded = self.stats.forwarded,
            dropped = self.stats.dropped(),
            "Forwarder input closed"
        );

        self.stats
    }
}
