//! Metrics collection and exposition.
//!
//! # Metrics
//! - `site_requests_total` (counter): requests by status code
//! - `site_request_duration_seconds` (histogram): latency distribution
//! - `site_locale_actions_total` (counter): locale routing decisions by action
//! - `site_contact_submissions_total` (counter): submissions by outcome
//! - `site_rate_limited_total` (counter): rejected by the rate limiter
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade; without an installed
//!   recorder every call is a no-op
//! - The Prometheus exporter is opt-in (`observability.metrics_enabled`)

use std::net::SocketAddr;
use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_request(status: u16, start: Instant) {
    let status = status.to_string();
    ::metrics::counter!("site_requests_total", "status" => status).increment(1);
    ::metrics::histogram!("site_request_duration_seconds").record(start.elapsed().as_secs_f64());
}

pub fn record_locale_action(action: &'static str) {
    ::metrics::counter!("site_locale_actions_total", "action" => action).increment(1);
}

pub fn record_contact(outcome: &'static str) {
    ::metrics::counter!("site_contact_submissions_total", "outcome" => outcome).increment(1);
}

pub fn record_rate_limited(scope: &'static str) {
    ::metrics::counter!("site_rate_limited_total", "scope" => scope).increment(1);
}

/// Middleware recording request count and latency.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let response = next.run(request).await;
    record_request(response.status().as_u16(), start);
    response
}
