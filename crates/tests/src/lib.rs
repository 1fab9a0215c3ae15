//! # Integration Tests
//!
//! End-to-end tests across crates.
//!
//! Covers:
//! - Wire format snapshot
//! - Config file to live UDP/TCP receivers, with the metadata service mocked over HTTP
//! - Sticky stack name fallback when the metadata service degrades

#[cfg(test)]
mod contract_tests {
    use contracts::{ContainerInfo, LogRecord};

    #[test]
    fn test_wire_format_snapshot() {
        let record = LogRecord::new(
            "hello",
            ContainerInfo {
                name: "web1".to_string(),
                id: "abc123".to_string(),
                image: "nginx:latest".to_string(),
                hostname: "host-a".to_string(),
            },
        );
        let message = forwarder::enrich(&record, "shop");
        let bytes = forwarder::serialize(&message).unwrap();

        assert_eq!(
            std::str::from_utf8(&bytes).unwrap(),
            r#"{"message":"hello","docker":{"name":"web1","id":"abc123","image":"nginx:latest","hostname":"host-a"},"rancher":{"stackname":"shop"}}"#
        );
    }
}

#[cfg(test)]
mod e2e_tests {
    use config_loader::{ConfigFormat, ConfigLoader};
    use contracts::{ContainerInfo, EnrichedMessage, LogRecord};
    use forwarder::create_router;
    use metadata::RancherMetadataClient;
    use mockito::Server;
    use tokio::io::{AsyncBufReadExt, BufReader};
    use tokio::net::{TcpListener, UdpSocket};
    use tokio::sync::mpsc;

    const CONTAINERS: &str = r#"[
        {"name": "web1", "stack_name": "shop", "service_name": "web"},
        {"name": "db1", "stack_name": "storage", "service_name": "db"}
    ]"#;

    fn record(message: &str, container: &str) -> LogRecord {
        LogRecord::new(
            message,
            ContainerInfo {
                name: container.to_string(),
                id: format!("{container}-id"),
                image: "nginx:latest".to_string(),
                hostname: "host-a".to_string(),
            },
        )
    }

    async fn recv_udp(socket: &UdpSocket) -> EnrichedMessage {
        let mut buf = vec![0u8; 4096];
        let n = socket.recv(&mut buf).await.unwrap();
        serde_json::from_slice(&buf[..n]).unwrap()
    }

    /// Config file -> router -> UDP and TCP receivers
    #[tokio::test]
    async fn test_e2e_config_to_udp_and_tcp() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/containers")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(CONTAINERS)
            .create_async()
            .await;

        let udp_receiver = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let tcp_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();

        let config = format!(
            r#"
[pipeline]
buffer_size = 8

[[routes]]
name = "udp_main"
address = "{}"

[[routes]]
name = "tcp_backup"
transport = "tcp"
address = "{}"
"#,
            udp_receiver.local_addr().unwrap(),
            tcp_listener.local_addr().unwrap()
        );
        let blueprint = ConfigLoader::load_from_str(&config, ConfigFormat::Toml).unwrap();

        let (input_tx, input_rx) = mpsc::channel(blueprint.pipeline.buffer_size);
        let lookup = RancherMetadataClient::with_base_url(server.url());

        let (router, accepted) = tokio::join!(
            create_router(&blueprint.routes, lookup, input_rx),
            tcp_listener.accept()
        );
        let router = router.unwrap();
        let (tcp_stream, _) = accepted.unwrap();
        let router_handle = router.spawn();

        input_tx.send(record("first", "web1")).await.unwrap();
        input_tx.send(record("second", "db1")).await.unwrap();
        drop(input_tx);

        let first = recv_udp(&udp_receiver).await;
        let second = recv_udp(&udp_receiver).await;
        assert_eq!(first.message, "first");
        assert_eq!(first.rancher.stack_name, "shop");
        assert_eq!(first.docker.id, "web1-id");
        assert_eq!(second.message, "second");
        assert_eq!(second.rancher.stack_name, "storage");

        let mut lines = BufReader::new(tcp_stream).lines();
        let mut tcp_messages = Vec::new();
        while let Some(line) = lines.next_line().await.unwrap() {
            let msg: EnrichedMessage = serde_json::from_str(&line).unwrap();
            tcp_messages.push(msg);
            if tcp_messages.len() == 2 {
                break;
            }
        }
        assert_eq!(tcp_messages[0].message, "first");
        assert_eq!(tcp_messages[1].rancher.stack_name, "storage");

        let results = router_handle.await.unwrap();
        assert_eq!(results.len(), 2);
        for (name, stats) in results {
            assert_eq!(stats.received, 2, "route {name}");
            assert_eq!(stats.forwarded, 2, "route {name}");
            assert_eq!(stats.dropped(), 0, "route {name}");
        }
    }

    /// Metadata service goes away after the first record; the last known stack name sticks
    #[tokio::test]
    async fn test_e2e_sticky_stack_name_when_metadata_degrades() {
        let mut server = Server::new_async().await;
        let healthy = server
            .mock("GET", "/containers")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(CONTAINERS)
            .create_async()
            .await;

        let receiver = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let uri = format!("logstash://{}", receiver.local_addr().unwrap());
        let route = config_loader::parse_route_uri("route1", &uri).unwrap();

        let (input_tx, input_rx) = mpsc::channel(8);
        let lookup = RancherMetadataClient::with_base_url(server.url());
        let router = create_router(&[route], lookup, input_rx).await.unwrap();
        let router_handle = router.spawn();

        input_tx.send(record("before", "web1")).await.unwrap();
        let before = recv_udp(&receiver).await;
        assert_eq!(before.rancher.stack_name, "shop");

        healthy.remove_async().await;
        let _degraded = server
            .mock("GET", "/containers")
            .with_status(503)
            .create_async()
            .await;

        input_tx.send(record("during", "web1")).await.unwrap();
        input_tx.send(record("unknown", "db1")).await.unwrap();
        drop(input_tx);

        let during = recv_udp(&receiver).await;
        let unknown = recv_udp(&receiver).await;
        assert_eq!(during.message, "during");
        assert_eq!(during.rancher.stack_name, "shop");
        assert_eq!(unknown.message, "unknown");
        assert_eq!(unknown.rancher.stack_name, "shop");

        let results = router_handle.await.unwrap();
        let (_, stats) = &results[0];
        assert_eq!(stats.forwarded, 3);
        assert_eq!(stats.lookup_failures, 2);
    }

    /// Metadata service never answers; records still flow with an empty stack name
    #[tokio::test]
    async fn test_e2e_unreachable_metadata_yields_empty_stack_name() {
        let receiver = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let uri = format!("logstash+udp://{}", receiver.local_addr().unwrap());
        let route = config_loader::parse_route_uri("route1", &uri).unwrap();

        let (input_tx, input_rx) = mpsc::channel(8);
        let lookup = RancherMetadataClient::with_base_url("http://127.0.0.1:9");
        let router = create_router(&[route], lookup, input_rx).await.unwrap();
        let router_handle = router.spawn();

        input_tx.send(record("orphan", "web1")).await.unwrap();
        drop(input_tx);

        let msg = recv_udp(&receiver).await;
        assert_eq!(msg.message, "orphan");
        assert_eq!(msg.rancher.stack_name, "");

        router_handle.await.unwrap();
    }
}
