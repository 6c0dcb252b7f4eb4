//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, layers)
//!     → request.rs (request ID)
//!     → middleware/locale.rs (bypass | redirect | rewrite)
//!     → /api/contact | /el/* and /en/* pages | public/ assets
//!     → response.rs (HTML and JSON helpers)
//!     → Send to client
//! ```

pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdExt, X_REQUEST_ID};
pub use server::{build_app, AppState, SiteServer};
