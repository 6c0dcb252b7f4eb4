//! Contact form endpoint.
//!
//! # Data Flow
//! ```text
//! POST /api/contact (JSON)
//!     → security::rate_limit (per client IP)
//!     → handler.rs (parse body)
//!     → form.rs (validate: required, name, phone, message, email)
//!     → structured log of the submission
//!     → 200 {"success": true} | 400 {"error": ...} | 500
//! ```

pub mod form;
pub mod handler;

pub use form::{normalize_phone, ContactError, ContactForm};
