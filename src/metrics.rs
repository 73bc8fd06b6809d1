//! Prometheus metrics for the item service.
//!
//! Counters track store mutations and rejected submissions; a histogram
//! tracks HTTP request latency per matched route.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::debug;

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// Items created counter metric name.
pub const METRIC_ITEMS_CREATED: &str = "items_created_total";
/// Items updated counter metric name.
pub const METRIC_ITEMS_UPDATED: &str = "items_updated_total";
/// Items deleted counter metric name.
pub const METRIC_ITEMS_DELETED: &str = "items_deleted_total";
/// Rejected submissions counter metric name.
pub const METRIC_VALIDATION_FAILURES: &str = "item_validation_failures_total";

/// Install the Prometheus recorder and return a handle for rendering.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    init_metrics();
    Ok(handle)
}

/// Initialize all metric descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );

    describe_counter!(METRIC_ITEMS_CREATED, "Total number of items created");
    describe_counter!(METRIC_ITEMS_UPDATED, "Total number of items updated");
    describe_counter!(METRIC_ITEMS_DELETED, "Total number of items deleted");
    describe_counter!(
        METRIC_VALIDATION_FAILURES,
        "Total number of item submissions rejected by validation"
    );

    debug!("Metrics initialized");
}

/// Record HTTP request latency.
pub fn record_http_latency(start: Instant, endpoint: &str, method: &str, status: u16) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "endpoint" => endpoint.to_string(),
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .record(latency_ms);
}

/// Increment items created counter.
pub fn inc_items_created() {
    counter!(METRIC_ITEMS_CREATED).increment(1);
}

/// Increment items updated counter.
pub fn inc_items_updated() {
    counter!(METRIC_ITEMS_UPDATED).increment(1);
}

/// Increment items deleted counter.
pub fn inc_items_deleted() {
    counter!(METRIC_ITEMS_DELETED).increment(1);
}

/// Increment validation failures counter.
pub fn inc_validation_failures() {
    counter!(METRIC_VALIDATION_FAILURES).increment(1);
}
