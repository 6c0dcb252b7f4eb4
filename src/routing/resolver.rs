//! Locale routing decision for an inbound request path.
//!
//! # Responsibilities
//! - Let asset, API and file requests through untouched
//! - Redirect explicit default-locale URLs to their unprefixed form
//! - Pass secondary-locale URLs through as-is
//! - Rewrite everything else onto the default-locale prefix internally
//!
//! # Design Decisions
//! - Pure and total: every path yields exactly one `Action`, no errors
//! - Rules are checked in a fixed order: bypass, default prefix,
//!   secondary prefix, fallback rewrite
//! - The secondary check is a plain prefix test (`/en`), so `/enquiry`
//!   passes through unchanged and is left for page routing to reject
//! - Immutable after construction (thread-safe without locks)

use std::sync::OnceLock;

use crate::i18n::Locale;
use crate::routing::matcher::{AnyMatcher, ExactMatcher, ExtensionMatcher, Matcher, PathPrefixMatcher};

/// Prefixes that never receive locale handling.
pub const DEFAULT_BYPASS_PREFIXES: [&str; 4] = ["/api/", "/_next/", "/images/", "/rib/"];

/// What to do with a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Forward unchanged, skipping locale handling.
    Bypass,
    /// Send the client to a different public URL.
    Redirect(String),
    /// Serve the request from this internal path; the public URL is unchanged.
    Rewrite(String),
}

impl Action {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Bypass => "bypass",
            Action::Redirect(_) => "redirect",
            Action::Rewrite(_) => "rewrite",
        }
    }
}

/// Classifies request paths into routing actions.
#[derive(Debug)]
pub struct LocaleResolver {
    bypass: AnyMatcher,
    default_prefix: String,
}

impl LocaleResolver {
    /// Create a resolver that bypasses the given path prefixes, plus
    /// `/favicon.ico` and any path containing a dot.
    pub fn new<I, S>(bypass_prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut matchers: Vec<Box<dyn Matcher>> = bypass_prefixes
            .into_iter()
            .map(|prefix| Box::new(PathPrefixMatcher::new(prefix)) as Box<dyn Matcher>)
            .collect();
        matchers.push(Box::new(ExtensionMatcher));
        matchers.push(Box::new(ExactMatcher::new("/favicon.ico")));

        Self {
            bypass: AnyMatcher::new(matchers),
            default_prefix: format!("/{}", Locale::DEFAULT.code()),
        }
    }

    /// Decide how to route `path`.
    pub fn resolve(&self, path: &str) -> Action {
        if self.bypass.matches(path) {
            return Action::Bypass;
        }

        if let Some(rest) = path.strip_prefix(self.default_prefix.as_str()) {
            if rest.is_empty() {
                return Action::Redirect("/".to_string());
            }
            if rest.starts_with('/') {
                return Action::Redirect(rest.to_string());
            }
        }

        let secondary = Locale::ALL
            .iter()
            .filter(|locale| !locale.is_default())
            .any(|locale| path.starts_with(&format!("/{}", locale.code())));
        if secondary {
            return Action::Rewrite(path.to_string());
        }

        if path == "/" {
            Action::Rewrite(self.default_prefix.clone())
        } else {
            Action::Rewrite(format!("{}{}", self.default_prefix, path))
        }
    }
}

impl Default for LocaleResolver {
    fn default() -> Self {
        Self::new(DEFAULT_BYPASS_PREFIXES)
    }
}

/// Resolve `path` with the default bypass rules.
pub fn resolve(path: &str) -> Action {
    static RESOLVER: OnceLock<LocaleResolver> = OnceLock::new();
    RESOLVER.get_or_init(LocaleResolver::default).resolve(path)
}
