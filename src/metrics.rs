//! Prometheus metrics for request counting and latency tracking.

use std::net::SocketAddr;
use std::time::Duration;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{debug, info};

use crate::error::Result;

// === Metric Name Constants ===

/// Requests served counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// Request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_HTTP_REQUESTS,
        "Total number of HTTP requests served, by method and status"
    );
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );

    debug!("Metrics initialized");
}

/// Install the Prometheus exporter on its own listener.
///
/// Must run inside the Tokio runtime. The API router is left untouched.
pub fn install_exporter(port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    info!("Prometheus exporter listening on {}", addr);
    Ok(())
}

/// Record one served request.
pub fn record_request(method: &str, status: u16, latency: Duration) {
    counter!(
        METRIC_HTTP_REQUESTS,
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    let latency_ms = latency.as_secs_f64() * 1000.0;
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "method" => method.to_string()).record(latency_ms);
}
