//! TcpWriter - newline-delimited records over one stream

use contracts::{ByteWriter, ContractError};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{debug, warn};

/// Connected TCP stream
///
/// A failed `write_all` may leave part of a frame on the stream. The writer
/// then refuses every later write so no record is appended to a torn line.
pub struct TcpWriter {
    name: String,
    stream: TcpStream,
    /// Reused frame buffer
    frame: Vec<u8>,
    failed: bool,
}

impl TcpWriter {
    /// Connect to `address`
    pub async fn connect(address: &str) -> Result<Self, ContractError> {
        let name = format!("tcp://{}", address);
        let stream = TcpStream::connect(address)
            .await
            .map_err(|e| ContractError::connect(&name, e.to_string()))?;

        debug!(endpoint = %name, "TCP stream connected");

        Ok(Self {
            name,
            stream,
            frame: Vec::new(),
            failed: false,
        })
    }
}

impl ByteWriter for TcpWriter {
    fn name(&self) -> &str {
        &self.name
    }

    async fn write(&mut self, payload: &[u8]) -> Result<(), ContractError> {
        if self.failed {
            return Err(ContractError::connection_write(
                &self.name,
                "stream unusable after an earlier failed write",
            ));
        }

        self.frame.clear();
        self.frame.extend_from_slice(payload);
        self.frame.push(b'\n');

        if let Err(e) = self.stream.write_all(&self.frame).await {
            self.failed = true;
            warn!(endpoint = %self.name, error = %e, "TCP write failed, stream closed for writes");
            return Err(ContractError::connection_write(&self.name, e.to_string()));
        }
        Ok(())
    }
}
