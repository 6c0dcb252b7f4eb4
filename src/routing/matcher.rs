//! Path matching for requests that skip locale handling.
//!
//! # Responsibilities
//! - Match path prefix (case-sensitive)
//! - Match exact paths
//! - Match any path that looks like a file (contains a dot)
//! - Combine conditions with OR semantics
//!
//! # Design Decisions
//! - Matchers see only the path, never the query string
//! - No regex to guarantee O(n) matching

/// Trait for matching request paths against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches the request path prefix.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Matcher for PathPrefixMatcher {
    fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.prefix)
    }
}

/// Matches one path exactly.
#[derive(Debug, Clone)]
pub struct ExactMatcher {
    path: String,
}

impl ExactMatcher {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Matcher for ExactMatcher {
    fn matches(&self, path: &str) -> bool {
        path == self.path
    }
}

/// Matches any path containing a `.`, i.e. anything with a file extension.
///
/// This deliberately looks at the whole path, not only the last segment:
/// `/v1.2/fleet` is treated as a file request too.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionMatcher;

impl Matcher for ExtensionMatcher {
    fn matches(&self, path: &str) -> bool {
        path.contains('.')
    }
}

/// Combines multiple matchers with OR semantics.
#[derive(Debug)]
pub struct AnyMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AnyMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }
}

impl Matcher for AnyMatcher {
    fn matches(&self, path: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_matcher() {
        let matcher = PathPrefixMatcher::new("/api/");
        assert!(matcher.matches("/api/contact"));
        assert!(!matcher.matches("/api"));
        assert!(!matcher.matches("/API/contact")); // Case sensitive
        assert!(!matcher.matches("/fleet"));
    }

    #[test]
    fn test_exact_matcher() {
        let matcher = ExactMatcher::new("/favicon.ico");
        assert!(matcher.matches("/favicon.ico"));
        assert!(!matcher.matches("/favicon.ico/x"));
    }

    #[test]
    fn test_extension_matcher() {
        assert!(ExtensionMatcher.matches("/robots.txt"));
        assert!(ExtensionMatcher.matches("/en/sitemap.xml"));
        assert!(ExtensionMatcher.matches("/v1.2/fleet"));
        assert!(!ExtensionMatcher.matches("/en/fleet"));
    }

    #[test]
    fn test_any_matcher() {
        let matcher = AnyMatcher::new(vec![
            Box::new(PathPrefixMatcher::new("/images/")),
            Box::new(ExtensionMatcher),
        ]);
        assert!(matcher.matches("/images/boat"));
        assert!(matcher.matches("/logo.svg"));
        assert!(!matcher.matches("/services"));

        let empty = AnyMatcher::new(Vec::new());
        assert!(!empty.matches("/anything"));
    }
}
