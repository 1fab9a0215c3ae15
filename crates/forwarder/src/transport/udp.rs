//! UdpWriter - one datagram per record

use contracts::{ByteWriter, ContractError};
use std::net::SocketAddr;
use tokio::net::{lookup_host, UdpSocket};
use tracing::{debug, warn};

/// Largest UDP payload over IPv4
const MAX_DATAGRAM_SIZE: usize = 65507;

/// Connected UDP socket
pub struct UdpWriter {
    name: String,
    socket: UdpSocket,
}

impl UdpWriter {
    /// Resolve `address` and connect a socket of the matching family
    pub async fn connect(address: &str) -> Result<Self, ContractError> {
        let name = format!("udp://{}", address);

        let target = lookup_host(address)
            .await
            .map_err(|e| ContractError::connect(&name, e.to_string()))?
            .next()
            .ok_or_else(|| ContractError::connect(&name, "address resolved to nothing"))?;

        let bind_addr: SocketAddr = if target.is_ipv4() {
            ([0u8; 4], 0).into()
        } else {
            ([0u16; 8], 0).into()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| ContractError::connect(&name, e.to_string()))?;
        socket
            .connect(target)
            .await
            .map_err(|e| ContractError::connect(&name, e.to_string()))?;

        debug!(endpoint = %name, peer = %target, "UDP socket connected");

        Ok(Self { name, socket })
    }
}

impl ByteWriter for UdpWriter {
    fn name(&self) -> &str {
        &self.name
    }

    async fn write(&mut self, payload: &[u8]) -> Result<(), ContractError> {
        if payload.len() > MAX_DATAGRAM_SIZE {
            warn!(
                endpoint = %self.name,
                size = payload.len(),
                max = MAX_DATAGRAM_SIZE,
                "Payload exceeds datagram size"
            );
        }

        self.socket
            .send(payload)
            .await
            .map(|_| ())
            .map_err(|e| ContractError::connection_write(&self.name, e.to_string()))
    }
}
