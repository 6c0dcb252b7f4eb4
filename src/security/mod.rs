//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → rate_limit.rs (per-IP budget on form submissions)
//!     → handler
//! Outgoing response:
//!     → headers.rs (nosniff, frame, referrer, permissions policy)
//! ```
//!
//! # Design Decisions
//! - Fail closed: a client over budget gets 429, never a silent drop
//! - Body size limits are enforced by the HTTP layer before handlers run

pub mod headers;
pub mod rate_limit;

pub use headers::{security_headers, with_security_headers};
pub use rate_limit::{rate_limit_middleware, RateLimiterState};
