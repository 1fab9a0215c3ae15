//! Forwarding metrics
//!
//! Metric names:
//! - `rancher_logstash_records_total{route, outcome}`
//! - `rancher_logstash_metadata_lookup_failures_total{route}`
//! - `rancher_logstash_input_records_total`
//! - `rancher_logstash_input_parse_failures_total`

use metrics::counter;

/// Count a record leaving a forwarder
///
/// `outcome` is `forwarded` or the failure kind.
pub fn record_outcome(route: &str, outcome: &'static str) {
    counter!(
        "rancher_logstash_records_total",
        "route" => route.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}

/// Count a lookup that fell back to the cached stack name
pub fn record_lookup_failure(route: &str) {
    counter!(
        "rancher_logstash_metadata_lookup_failures_total",
        "route" => route.to_string()
    )
    .increment(1);
}

/// Count a record read from the input
pub fn record_input_record() {
    counter!("rancher_logstash_input_records_total").increment(1);
}

/// Count an input line that could not be parsed
pub fn record_input_parse_failure() {
    counter!("rancher_logstash_input_parse_failures_total").increment(1);
}
