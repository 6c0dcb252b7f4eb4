//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → plain: tokio::net::TcpListener (axum::serve)
//!     → TLS: tls.rs (rustls config) → axum_server::bind_rustls
//!     → Hand off to HTTP layer
//! ```
//!
//! # Design Decisions
//! - TLS is optional and enabled by the presence of `[listener.tls]`
//! - Certificates are read once at startup

pub mod tls;

pub use tls::load_tls_config;
