//! Request spans.
//!
//! # Responsibilities
//! - Create one span per request carrying method, path and request id
//!
//! # Design Decisions
//! - The request id is set by the HTTP layer before the trace layer runs
//! - The span records the public path, before any locale rewrite

use axum::body::Body;
use axum::http::Request;
use tracing::Span;

use crate::http::RequestIdExt;

/// Span constructor for `tower_http::trace::TraceLayer::make_span_with`.
pub fn make_request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request.request_id().unwrap_or("unknown"),
    )
}
