//! # Forwarder
//!
//! 按 route 转发日志。
//!
//! 负责：
//! - 解析每条记录所属的 stack，失败时沿用上次成功的值
//! - 补全并序列化为 Logstash 报文
//! - 每条记录向 route 连接写入一次，失败只记录日志并继续
//! - Fan-out 到每个 route 独立的 adapter 任务

pub mod enricher;
pub mod error;
pub mod forwarder;
pub mod handle;
pub mod resolver;
pub mod router;
pub mod serializer;
pub mod stats;
pub mod transport;

pub use contracts::{ByteWriter, EnrichedMessage, LogRecord, MetadataLookup};
pub use enricher::enrich;
pub use error::ForwarderError;
pub use forwarder::StreamForwarder;
pub use handle::AdapterHandle;
pub use resolver::{Resolution, StickyStackName};
pub use router::{create_router, Router};
pub use serializer::{serialize, Encoder, JsonEncoder};
pub use stats::ForwarderStats;
pub use transport::{RouteWriter, TcpWriter, UdpWriter};

#[cfg(test)]
mod test_support;
