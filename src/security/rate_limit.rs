//! Per-client rate limiting for form submissions.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use dashmap::DashMap;
use serde_json::json;

use crate::config::ContactConfig;
use crate::observability::metrics;

/// A simple token bucket rate limiter.
struct TokenBucket {
    tokens: f64,
    last_update: Instant,
}

impl TokenBucket {
    fn new(capacity: f64, now: Instant) -> Self {
        Self {
            tokens: capacity,
            last_update: now,
        }
    }

    fn is_full_at(&self, capacity: f64, refill_per_sec: f64, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.last_update).as_secs_f64();
        self.tokens + elapsed * refill_per_sec >= capacity
    }

    fn try_acquire(&mut self, capacity: f64, refill_per_sec: f64, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.last_update).as_secs_f64();

        // Refill tokens
        self.tokens = (self.tokens + elapsed * refill_per_sec).min(capacity);
        self.last_update = now;

        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

/// Bucket count above which idle buckets are swept on the next check.
const SWEEP_THRESHOLD: usize = 1024;

/// Shared limiter state, one bucket per client key.
pub struct RateLimiterState {
    buckets: DashMap<String, TokenBucket>,
    enabled: bool,
    refill_per_sec: f64,
    burst: f64,
}

impl RateLimiterState {
    pub fn new(config: &ContactConfig) -> Self {
        Self {
            buckets: DashMap::new(),
            enabled: config.rate_limit_enabled,
            refill_per_sec: config.submissions_per_minute as f64 / 60.0,
            burst: config.burst_size as f64,
        }
    }

    /// Take one token for `key`. Always succeeds when limiting is disabled.
    pub fn check(&self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> bool {
        if !self.enabled {
            return true;
        }
        if self.buckets.len() >= SWEEP_THRESHOLD {
            self.sweep(now);
        }
        let mut bucket = self
            .buckets
            .entry(key.to_string())
            .or_insert_with(|| TokenBucket::new(self.burst, now));
        bucket.try_acquire(self.burst, self.refill_per_sec, now)
    }

    /// Drop buckets that have refilled to capacity. A full bucket behaves
    /// exactly like a new one, so removing it changes no decision.
    fn sweep(&self, now: Instant) {
        let before = self.buckets.len();
        self.buckets
            .retain(|_, bucket| !bucket.is_full_at(self.burst, self.refill_per_sec, now));
        tracing::debug!(
            removed = before.saturating_sub(self.buckets.len()),
            remaining = self.buckets.len(),
            "Swept idle rate limit buckets"
        );
    }

    /// Number of clients currently tracked.
    pub fn tracked_clients(&self) -> usize {
        self.buckets.len()
    }
}

/// Middleware rejecting clients that exceed their submission budget.
///
/// Clients are keyed by peer IP; requests without connection info (e.g. in
/// tests driving the router directly) share a single bucket.
pub async fn rate_limit_middleware(
    State(state): State<Arc<RateLimiterState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let key = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    if state.check(&key) {
        next.run(request).await
    } else {
        tracing::warn!(client = %key, "Rate limit exceeded");
        metrics::record_rate_limited("contact");
        (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "error": "Too many requests", "success": false })),
        )
            .into_response()
    }
}
