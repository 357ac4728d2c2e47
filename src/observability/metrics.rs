//! Metrics collection and exposition.
//!
//! # Metrics
//! - `whitelist_requests_total` (counter): requests by action, status
//! - `whitelist_request_duration_seconds` (histogram): handler latency
//! - `whitelist_panel_commands_total` (counter): panel calls by action, outcome
//!
//! Recording is a no-op until [`init_metrics`] installs the exporter.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::panel::WhitelistAction;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a handled whitelist request.
pub fn record_request(action: WhitelistAction, status: u16, start: Instant) {
    ::metrics::counter!(
        "whitelist_requests_total",
        "action" => action.as_str(),
        "status" => status.to_string()
    )
    .increment(1);

    ::metrics::histogram!(
        "whitelist_request_duration_seconds",
        "action" => action.as_str()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record the outcome of one panel command.
pub fn record_panel_command(action: WhitelistAction, outcome: &str, start: Instant) {
    ::metrics::counter!(
        "whitelist_panel_commands_total",
        "action" => action.as_str(),
        "outcome" => outcome.to_string()
    )
    .increment(1);

    tracing::trace!(
        action = %action,
        outcome = outcome,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Panel command recorded"
    );
}
