//! Enricher - LogRecord + stack name -> EnrichedMessage

use contracts::{DockerInfo, EnrichedMessage, LogRecord, RancherInfo};

/// Build the wire message for `record`
///
/// Docker fields are copied verbatim.
pub fn enrich(record: &LogRecord, stack_name: &str) -> EnrichedMessage {
    let container = &record.container;
    EnrichedMessage {
        message: record.message.clone(),
        docker: DockerInfo {
            name: container.name.clone(),
            id: container.id.clone(),
            image: container.image.clone(),
            hostname: container.hostname.clone(),
        },
        rancher: RancherInfo {
            stack_name: stack_name.to_string(),
        },
    }
}
