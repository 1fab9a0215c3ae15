//! # Contracts
//!
//! 接口契约：工作区内所有 crate 共享的类型与 trait。
//! 业务 crate 只依赖本 crate，禁止反向依赖。
//!
//! ## 数据流
//! `LogRecord` (from the host) -> `EnrichedMessage` (wire model) -> bytes written
//! through a `ByteWriter`. Stack names come from a `MetadataLookup`.

mod blueprint;
mod error;
mod lookup;
mod message;
mod record;
mod writer;

pub use blueprint::*;
pub use error::*;
pub use lookup::{LocalMetadataLookup, MetadataLookup};
pub use message::*;
pub use record::*;
pub use writer::{ByteWriter, LocalByteWriter};
