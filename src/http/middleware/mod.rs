//! HTTP middleware.
//!
//! - `locale`: locale routing applied before route matching

pub mod locale;

pub use locale::{LocaleLayer, LocaleService};
