//! Supported site locales.
//!
//! # Responsibilities
//! - Closed set of locales the site is published in
//! - Parse locale codes from URL segments and CLI input
//! - Build externally visible URLs for a locale
//!
//! # Design Decisions
//! - Greek is the default locale and is served at the root (`/fleet`)
//! - English is served under an explicit prefix (`/en/fleet`)
//! - Parsing is exact and case-sensitive: `/EN` is not a locale prefix

use std::fmt;
use std::str::FromStr;

/// A locale the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    /// Greek, the primary (default) locale.
    El,
    /// English, the secondary locale.
    En,
}

/// Error returned when a string is not a supported locale code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale code: '{0}'")]
pub struct UnknownLocale(pub String);

impl Locale {
    /// The locale used when a request carries no locale indicator.
    pub const DEFAULT: Locale = Locale::El;

    /// All locales, default first.
    pub const ALL: [Locale; 2] = [Locale::El, Locale::En];

    /// Parse a locale code (`"el"` or `"en"`).
    pub fn parse(code: &str) -> Option<Locale> {
        match code {
            "el" => Some(Locale::El),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Two-letter code, also used as the URL prefix segment.
    pub fn code(self) -> &'static str {
        match self {
            Locale::El => "el",
            Locale::En => "en",
        }
    }

    pub fn is_default(self) -> bool {
        self == Locale::DEFAULT
    }

    /// Value for the `lang` attribute of the rendered document.
    pub fn html_lang(self) -> &'static str {
        self.code()
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Locale::El => "Ελληνικά",
            Locale::En => "English",
        }
    }

    /// The other locale, used for the language switch link.
    pub fn alternate(self) -> Locale {
        match self {
            Locale::El => Locale::En,
            Locale::En => Locale::El,
        }
    }

    /// Public URL path for an unprefixed page path in this locale.
    ///
    /// The default locale lives at the root, so its paths are returned
    /// unchanged. Other locales get their code as a leading segment, with
    /// the root page mapping to the bare prefix (`/en`, not `/en/`).
    pub fn localized_path(self, path: &str) -> String {
        if self.is_default() {
            return path.to_string();
        }
        if path.is_empty() || path == "/" {
            format!("/{}", self.code())
        } else {
            format!("/{}{}", self.code(), path)
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

/// Returns true if `code` names a supported locale.
pub fn is_valid_locale(code: &str) -> bool {
    Locale::parse(code).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!(Locale::parse("el"), Some(Locale::El));
        assert_eq!(Locale::parse("en"), Some(Locale::En));
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(Locale::parse("EN"), None);
        assert_eq!(Locale::parse("en-US"), None);
        assert_eq!(Locale::parse(""), None);
        assert!(!is_valid_locale("fr"));
    }

    #[test]
    fn test_default_is_greek() {
        assert_eq!(Locale::DEFAULT, Locale::El);
        assert!(Locale::El.is_default());
        assert!(!Locale::En.is_default());
        assert_eq!(Locale::ALL[0], Locale::DEFAULT);
    }

    #[test]
    fn test_from_str_error() {
        let err = "de".parse::<Locale>().unwrap_err();
        assert!(err.to_string().contains("'de'"));
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
    }

    #[test]
    fn test_localized_path() {
        assert_eq!(Locale::El.localized_path("/"), "/");
        assert_eq!(Locale::El.localized_path("/fleet"), "/fleet");
        assert_eq!(Locale::En.localized_path("/"), "/en");
        assert_eq!(Locale::En.localized_path("/fleet"), "/en/fleet");
        assert_eq!(
            Locale::En.localized_path("/boats/lobster-23"),
            "/en/boats/lobster-23"
        );
    }

    #[test]
    fn test_alternate_round_trips() {
        for locale in Locale::ALL {
            assert_ne!(locale.alternate(), locale);
            assert_eq!(locale.alternate().alternate(), locale);
        }
    }
}
