//! Forwarder statistics

use crate::error::ForwarderError;

/// Counters for one forwarder run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwarderStats {
    /// Records taken from the input
    pub received: u64,
    /// Records written to the connection
    pub forwarded: u64,
    /// Lookups that fell back to the cached stack name
    pub lookup_failures: u64,
    /// Records dropped because they could not be encoded
    pub serialization_failures: u64,
    /// Records dropped because the connection rejected the write
    pub write_failures: u64,
}

impl ForwarderStats {
    /// Count a dropped record
    pub fn record_failure(&mut self, error: &ForwarderError) {
        match error {
            ForwarderError::Serialization { .. } => self.serialization_failures += 1,
            ForwarderError::Write(_) => self.write_failures += 1,
            ForwarderError::AdapterCreation { .. } => {}
        }
    }

    /// Records dropped for any reason
    pub fn dropped(&self) -> u64 {
        self.serialization_failures + self.write_failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::ContractError;

    #[test]
    fn test_failures_counted_by_kind() {
        let mut stats = ForwarderStats::default();
        stats.record_failure(&ForwarderError::serialization("bad"));
        stats.record_failure(&ForwarderError::Write(ContractError::connection_write(
            "tcp://collector:5000",
            "broken pipe",
        )));
        stats.record_failure(&ForwarderError::Write(ContractError::connection_write(
            "tcp://collector:5000",
            "broken pipe",
        )));

        assert_eq!(stats.serialization_failures, 1);
        assert_eq!(stats.write_failures, 2);
        assert_eq!(stats.dropped(), 3);
    }

    #[test]
    fn test_lookup_fallbacks_are_not_drops() {
        let stats = ForwarderStats {
            received: 4,
            forwarded: 4,
            lookup_failures: 4,
            ..Default::default()
        };
        assert_eq!(stats.dropped(), 0);
    }
}
