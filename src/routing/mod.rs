//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → matcher.rs (bypass conditions: API, assets, files)
//!     → resolver.rs (locale decision)
//!     → Return: Bypass | Redirect(public path) | Rewrite(internal path)
//!
//! Resolver construction (at startup):
//!     routing.bypass_prefixes
//!     → Compile prefix matchers
//!     → Freeze as immutable LocaleResolver
//! ```
//!
//! # Design Decisions
//! - Rules compiled at startup, immutable at runtime
//! - No regex in hot path (prefix matching only)
//! - Deterministic: same path always yields the same action

pub mod matcher;
pub mod resolver;

pub use resolver::{resolve, Action, LocaleResolver, DEFAULT_BYPASS_PREFIXES};
