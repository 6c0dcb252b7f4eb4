//! Internationalization subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     messages/<code>.json (or embedded copies)
//!     → catalog.rs (parse, validate shape)
//!     → Catalog (immutable, shared via Arc)
//!
//! Per request:
//!     Locale (from the rewritten /el or /en prefix)
//!     → Catalog::translator(locale)
//!     → t("dotted.key") → Option<&Value>
//! ```
//!
//! # Design Decisions
//! - Locales are a closed enum; there is no runtime registration
//! - The default locale dictionary is treated as complete
//! - Missing secondary keys are reported at startup, never fatal

pub mod catalog;
pub mod locale;

pub use catalog::{Catalog, CatalogError, Translator};
pub use locale::{is_valid_locale, Locale, UnknownLocale};
