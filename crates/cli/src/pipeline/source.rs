//! Newline-delimited JSON record source.

use std::future::Future;

use contracts::LogRecord;
use observability::{record_input_parse_failure, record_input_record};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Counters for one input pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceStats {
    /// Non-blank lines read
    pub lines: u64,
    /// Lines parsed into records and queued
    pub records: u64,
    /// Lines that were not valid records
    pub parse_failures: u64,
}

/// Read records from `reader` into `tx` until end of input or `shutdown`
///
/// Blank lines are skipped, malformed lines are logged and skipped. The
/// sender is dropped on return, which closes the stream for the consumers
/// so they drain what is already queued. A record that was already parsed
/// when `shutdown` fires is still queued.
pub async fn read_records<R, S>(reader: R, tx: mpsc::Sender<LogRecord>, shutdown: S) -> SourceStats
where
    R: AsyncBufRead + Unpin,
    S: Future<Output = ()>,
{
    let mut stats = SourceStats::default();
    let mut lines = reader.lines();
    tokio::pin!(shutdown);

    loop {
        let next = tokio::select! {
            biased;
            _ = &mut shutdown => {
                info!(records = stats.records, "Shutdown requested, closing input");
                break;
            }
            next = lines.next_line() => next,
        };

        let line = match next {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!(error = %e, "Input read failed, closing stream");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }
        stats.lines += 1;

        let record: LogRecord = match serde_json::from_str(&line) {
            Ok(record) => record,
            Err(e) => {
                stats.parse_failures += 1;
                record_input_parse_failure();
                warn!(line = stats.lines, error = %e, "Skipping malformed input line");
                continue;
            }
        };

        stats.records += 1;
        record_input_record();

        if tx.send(record).await.is_err() {
            warn!("Router channel closed, stopping input");
            break;
        }
    }

    debug!(
        lines = stats.lines,
        records = stats.records,
        parse_failures = stats.parse_failures,
        "Input exhausted"
    );
    stats
}
