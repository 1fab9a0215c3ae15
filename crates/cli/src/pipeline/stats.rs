//! Pipeline statistics.

use std::time::Duration;

use forwarder::ForwarderStats;

use super::source::SourceStats;

/// Statistics from a pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    /// Input counters
    pub source: SourceStats,

    /// Per-route forwarder counters, in route order
    pub routes: Vec<(String, ForwarderStats)>,

    /// Total duration of the run
    pub duration: Duration,
}

impl PipelineStats {
    /// Records read per second
    pub fn records_per_sec(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.source.records as f64 / secs
        } else {
            0.0
        }
    }

    /// Records dropped across all routes
    pub fn total_dropped(&self) -> u64 {
        self.routes.iter().map(|(_, s)| s.dropped()).sum()
    }

    /// Print a human-readable summary
    pub fn print_summary(&self) {
        println!("\n=== Forwarding Summary ===\n");
        println!("Input:");
        println!("  Lines:          {}", self.source.lines);
        println!("  Records:        {}", self.source.records);
        println!("  Parse failures: {}", self.source.parse_failures);
        println!("  Duration:       {:.2}s", self.duration.as_secs_f64());
        println!("  Rate:           {:.2} records/s", self.records_per_sec());

        println!("\nRoutes ({}):", self.routes.len());
        for (name, stats) in &self.routes {
            println!(
                "  - {}: forwarded={} lookup_failures={} serialization_failures={} write_failures={}",
                name,
                stats.forwarded,
                stats.lookup_failures,
                stats.serialization_failures,
                stats.write_failures
            );
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_with_zero_duration() {
        let stats = PipelineStats::default();
        assert_eq!(stats.records_per_sec(), 0.0);
    }

    #[test]
    fn test_total_dropped() {
        let stats = PipelineStats {
            routes: vec![
                (
                    "a".to_string(),
                    ForwarderStats {
                        write_failures: 2,
                        ..Default::default()
                    },
                ),
                (
                    "b".to_string(),
                    ForwarderStats {
                        serialization_failures: 1,
                        ..Default::default()
                    },
                ),
            ],
            ..Default::default()
        };
        assert_eq!(stats.total_dropped(), 3);
    }
}
