//! RentRibAthens bilingual site server.
//!
//! Every request passes through the locale resolver, which bypasses
//! assets and API calls, redirects explicit default-locale URLs to their
//! unprefixed form, and rewrites everything else onto an internal
//! `/el` or `/en` page path. Pages read their text from a per-locale JSON
//! catalog that falls back to Greek for missing English keys.

// Core subsystems
pub mod config;
pub mod http;
pub mod net;
pub mod routing;

// Site
pub mod contact;
pub mod i18n;
pub mod pages;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::SiteConfig;
pub use http::{build_app, AppState, SiteServer};
pub use i18n::{Catalog, Locale};
pub use lifecycle::Shutdown;
pub use routing::{resolve, Action, LocaleResolver};
