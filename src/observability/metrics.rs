//! Metrics collection.
//!
//! # Metrics
//! - `header_transform_requests_total` (counter): requests processed, by instance
//! - `header_transform_headers_total` (counter): headers changed, by instance and op
//!
//! # Design Decisions
//! - Emits through the `metrics` facade only; the host installs the recorder
//! - Zero counts are not recorded

use crate::transform::TransformStats;

pub const REQUESTS_TOTAL: &str = "header_transform_requests_total";
pub const HEADERS_TOTAL: &str = "header_transform_headers_total";

/// Record one processed request and the header changes it saw.
pub fn record_request(instance: &str, stats: &TransformStats) {
    metrics::counter!(REQUESTS_TOTAL, "instance" => instance.to_owned()).increment(1);

    for (op, count) in [
        ("rename", stats.renamed),
        ("set", stats.set),
        ("delete", stats.deleted),
    ] {
        if count > 0 {
            metrics::counter!(HEADERS_TOTAL, "instance" => instance.to_owned(), "op" => op)
                .increment(count as u64);
        }
    }
}
