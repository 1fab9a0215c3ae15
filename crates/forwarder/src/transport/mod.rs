//! Collector transports
//!
//! Contains UdpWriter and TcpWriter, selected per route.

mod tcp;
mod udp;

pub use self::tcp::TcpWriter;
pub use self::udp::UdpWriter;

use contracts::{ByteWriter, ContractError, RouteConfig, TransportKind};
use tracing::instrument;

/// Connection selected by a route's transport kind
pub enum RouteWriter {
    Udp(UdpWriter),
    Tcp(TcpWriter),
}

impl RouteWriter {
    /// Open the connection described by `route`
    #[instrument(
        name = "route_writer_connect",
        skip(route),
        fields(route = %route.name, transport = %route.transport, address = %route.address)
    )]
    pub async fn connect(route: &RouteConfig) -> Result<Self, ContractError> {
        match route.transport {
            TransportKind::Udp => Ok(Self::Udp(UdpWriter::connect(&route.address).await?)),
            TransportKind::Tcp => Ok(Self::Tcp(TcpWriter::connect(&route.address).await?)),
        }
    }
}

impl ByteWriter for RouteWriter {
    fn name(&self) -> &str {
        match self {
            Self::Udp(w) => w.name(),
            Self::Tcp(w) => w.name(),
        }
    }

    async fn write(&mut self, payload: &[u8]) -> Result<(), ContractError> {
        match self {
            Self::Udp(w) => w.write(payload).await,
            Self::Tcp(w) => w.write(payload).await,
        }
    }
}
