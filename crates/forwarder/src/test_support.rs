//! Test doubles for the forwarder capabilities

use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use contracts::{
    ByteWriter, ContainerInfo, ContractError, EnrichedMessage, LogRecord, MetadataLookup,
};

use crate::error::ForwarderError;
use crate::serializer::{Encoder, JsonEncoder};

pub fn record(message: &str, container: &str) -> LogRecord {
    LogRecord::new(
        message,
        ContainerInfo {
            name: container.to_string(),
            id: format!("{container}-id"),
            image: "nginx:latest".to_string(),
            hostname: format!("{container}-host"),
        },
    )
}

/// Lookup returning scripted outcomes in order; `None` and exhaustion fail
#[derive(Default)]
pub struct ScriptedLookup {
    outcomes: Mutex<VecDeque<Option<String>>>,
    calls: AtomicUsize,
}

impl ScriptedLookup {
    pub fn new(outcomes: &[Option<&str>]) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.iter().map(|o| o.map(str::to_string)).collect()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MetadataLookup for ScriptedLookup {
    async fn stack_name(&self, container_name: &str) -> Result<String, ContractError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.outcomes.lock().unwrap().pop_front().flatten();
        next.ok_or_else(|| ContractError::metadata_lookup(container_name, "scripted failure"))
    }
}

/// Lookup that always answers with the same stack
#[derive(Clone)]
pub struct FixedLookup(pub &'static str);

impl MetadataLookup for FixedLookup {
    async fn stack_name(&self, _container_name: &str) -> Result<String, ContractError> {
        Ok(self.0.to_string())
    }
}

/// Shared view of what a MemoryWriter received
#[derive(Clone, Default)]
pub struct WriteLog {
    pub payloads: Arc<Mutex<Vec<Vec<u8>>>>,
    pub attempts: Arc<AtomicUsize>,
}

impl WriteLog {
    pub fn messages(&self) -> Vec<EnrichedMessage> {
        self.payloads
            .lock()
            .unwrap()
            .iter()
            .map(|p| serde_json::from_slice(p).unwrap())
            .collect()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

/// In-memory connection; fails the attempts listed in `fail_on` (1-based)
pub struct MemoryWriter {
    log: WriteLog,
    fail_on: HashSet<usize>,
}

impl MemoryWriter {
    pub fn new() -> (Self, WriteLog) {
        Self::failing_on(&[])
    }

    pub fn failing_on(attempts: &[usize]) -> (Self, WriteLog) {
        let log = WriteLog::default();
        let writer = Self {
            log: log.clone(),
            fail_on: attempts.iter().copied().collect(),
        };
        (writer, log)
    }
}

impl ByteWriter for MemoryWriter {
    fn name(&self) -> &str {
        "memory"
    }

    async fn write(&mut self, payload: &[u8]) -> Result<(), ContractError> {
        let attempt = self.log.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on.contains(&attempt) {
            return Err(ContractError::connection_write("memory", "connection refused"));
        }
        self.log.payloads.lock().unwrap().push(payload.to_vec());
        Ok(())
    }
}

/// JSON encoder that refuses messages whose text equals `poison`
pub struct PoisonEncoder {
    pub poison: &'static str,
}

impl Encoder for PoisonEncoder {
    fn encode(&self, message: &EnrichedMessage) -> Result<Bytes, ForwarderError> {
        if message.message == self.poison {
            return Err(ForwarderError::serialization("poisoned message"));
        }
        JsonEncoder.encode(message)
    }
}
