//! Metrics collection and exposition.
//!
//! # Metrics
//! - `lead_submissions_total` (counter): submissions by outcome
//!   (accepted, invalid)
//! - `lead_sink_deliveries_total` (counter): deliveries by sink and outcome
//! - `lead_rate_limited_total` (counter): requests rejected by the limiter

use std::net::SocketAddr;

use metrics::counter;
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(error) => tracing::error!(error = %error, "Failed to install metrics exporter"),
    }
}

/// Count a submission by outcome.
pub fn record_submission(outcome: &'static str) {
    counter!("lead_submissions_total", "outcome" => outcome).increment(1);
}

/// Count a sink delivery attempt.
pub fn record_sink_delivery(sink: &'static str, delivered: bool) {
    let outcome = if delivered { "delivered" } else { "failed" };
    counter!("lead_sink_deliveries_total", "sink" => sink, "outcome" => outcome).increment(1);
}

/// Count a rate-limited request.
pub fn record_rate_limited() {
    counter!("lead_rate_limited_total").increment(1);
}
