//! Router - fans input records out to one adapter per route

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use contracts::{LogRecord, MetadataLookup, RouteConfig};

use crate::error::ForwarderError;
use crate::forwarder::StreamForwarder;
use crate::handle::AdapterHandle;
use crate::stats::ForwarderStats;
use crate::transport::RouteWriter;

/// Fans out records to every route
pub struct Router {
    handles: Vec<AdapterHandle>,
    input_rx: mpsc::Receiver<LogRecord>,
}

impl Router {
    /// Create a router over existing adapter handles
    pub fn with_handles(handles: Vec<AdapterHandle>, input_rx: mpsc::Receiver<LogRecord>) -> Self {
        Self { handles, input_rx }
    }

    /// Route names, in configuration order
    pub fn route_names(&self) -> Vec<&str> {
        self.handles.iter().map(|h| h.name()).collect()
    }

    /// Run until the input closes, then drain every adapter
    ///
    /// Returns the stats of every route.
    #[instrument(name = "router_run", skip(self), fields(routes = self.handles.len()))]
    pub async fn run(mut self) -> Vec<(String, ForwarderStats)> {
        info!(routes = self.handles.len(), "Router started");

        let mut record_count: u64 = 0;

        while let Some(record) = self.input_rx.recv().await {
            record_count += 1;
            self.route_record(record).await;

            if record_count.is_multiple_of(1000) {
                debug!(records = record_count, "Router progress");
            }
        }

        info!(records = record_count, "Router input closed, shutting down");

        let mut results = Vec::with_capacity(self.handles.len());
        for handle in self.handles {
            let name = handle.name().to_string();
            results.push((name, handle.shutdown().await));
        }

        info!("Router shutdown complete");
        results
    }

    /// Spawn the router as a background task
    pub fn spawn(self) -> JoinHandle<Vec<(String, ForwarderStats)>> {
        tokio::spawn(self.run())
    }

    async fn route_record(&self, record: LogRecord) {
        let Some((last, rest)) = self.handles.split_last() else {
            return;
        };
        for handle in rest {
            if !handle.send(record.clone()).await {
                warn!(route = %handle.name(), "Record not delivered to route");
            }
        }
        if !last.send(record).await {
            warn!(route = %last.name(), "Record not delivered to route");
        }
    }
}

/// Connect one adapter per route and build a router over them
///
/// Every adapter receives its own clone of `lookup`.
#[instrument(name = "router_create", skip(routes, lookup, input_rx), fields(routes = routes.len()))]
pub async fn create_router<L>(
    routes: &[RouteConfig],
    lookup: L,
    input_rx: mpsc::Receiver<LogRecord>,
) -> Result<Router, ForwarderError>
where
    L: MetadataLookup + Clone + Sync + 'static,
{
    let mut handles = Vec::with_capacity(routes.len());
    for route in routes {
        handles.push(create_adapter_handle(route, lookup.clone()).await?);
    }
    Ok(Router::with_handles(handles, input_rx))
}

#[instrument(
    name = "router_create_adapter_handle",
    skip(route, lookup),
    fields(route = %route.name, uri = %route.uri())
)]
async fn create_adapter_handle<L>(route: &RouteConfig, lookup: L) -> Result<AdapterHandle, ForwarderError>
where
    L: MetadataLookup + Sync + 'static,
{
    let writer = RouteWriter::connect(route)
        .await
        .map_err(|e| ForwarderError::adapter_creation(&route.name, e.to_string()))?;

    let forwarder = StreamForwarder::new(&route.name, lookup, writer);
    Ok(AdapterHandle::spawn(forwarder, route.queue_capacity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{record, FixedLookup, MemoryWriter};
    use contracts::{EnrichedMessage, TransportKind};
    use tokio::net::UdpSocket;

    #[tokio::test]
    async fn test_router_fanout() {
        let (input_tx, input_rx) = mpsc::channel(10);

        let (writer1, log1) = MemoryWriter::new();
        let (writer2, log2) = MemoryWriter::new();
        let handles = vec![
            AdapterHandle::spawn(StreamForwarder::new("one", FixedLookup("a"), writer1), 10),
            AdapterHandle::spawn(StreamForwarder::new("two", FixedLookup("b"), writer2), 10),
        ];

        let router = Router::with_handles(handles, input_rx);
        assert_eq!(router.route_names(), ["one", "two"]);
        let handle = router.spawn();

        for i in 0..5 {
            input_tx.send(record(&i.to_string(), "web1")).await.unwrap();
        }
        drop(input_tx);

        let results = handle.await.unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|(_, stats)| stats.forwarded == 5));

        assert!(log1.messages().iter().all(|m| m.rancher.stack_name == "a"));
        assert!(log2.messages().iter().all(|m| m.rancher.stack_name == "b"));
        assert_eq!(log1.messages().len(), 5);
        assert_eq!(log2.messages().len(), 5);
    }

    #[tokio::test]
    async fn test_create_router_from_routes() {
        let receiver = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let address = receiver.local_addr().unwrap().to_string();

        let (input_tx, input_rx) = mpsc::channel(10);
        let routes = vec![RouteConfig::new("udp", TransportKind::Udp, address)];

        let router = create_router(&routes, FixedLookup("shop"), input_rx)
            .await
            .unwrap();
        let handle = router.spawn();

        input_tx.send(record("hello", "web1")).await.unwrap();

        let mut buf = vec![0u8; 2048];
        let n = receiver.recv(&mut buf).await.unwrap();
        let msg: EnrichedMessage = serde_json::from_slice(&buf[..n]).unwrap();
        assert_eq!(msg.message, "hello");
        assert_eq!(msg.rancher.stack_name, "shop");

        drop(input_tx);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_create_router_unreachable_tcp_route() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap().to_string();
        drop(listener);

        let (_input_tx, input_rx) = mpsc::channel(10);
        let routes = vec![RouteConfig::new("tcp", TransportKind::Tcp, address)];

        let result = create_router(&routes, FixedLookup("shop"), input_rx).await;
        assert!(matches!(
            result,
            Err(ForwarderError::AdapterCreation { ref route, .. }) if route == "tcp"
        ));
    }
}
