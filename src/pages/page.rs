//! Site pages and their paths.

use crate::i18n::{Locale, Translator};

/// A page of the site, addressed by its unprefixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Fleet,
    Services,
    Contact,
    Destinations,
    PrivacyPolicy,
    TermsOfService,
    CookiePolicy,
    Boat(String),
    Destination(String),
}

impl Page {
    /// Pages linked from the navigation bar, in display order.
    pub const NAV: [Page; 5] = [
        Page::Home,
        Page::Fleet,
        Page::Services,
        Page::Destinations,
        Page::Contact,
    ];

    /// Match a path below the locale prefix (`""`, `"fleet"`, `"boats/lobster23"`).
    ///
    /// Surrounding slashes are ignored. Slugs must be non-empty and contain
    /// only lowercase ASCII letters, digits and `-`.
    pub fn from_path(path: &str) -> Option<Page> {
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return Some(Page::Home);
        }

        let segments: Vec<&str> = trimmed.split('/').collect();
        match segments.as_slice() {
            ["fleet"] => Some(Page::Fleet),
            ["services"] => Some(Page::Services),
            ["contact"] => Some(Page::Contact),
            ["destinations"] => Some(Page::Destinations),
            ["privacy-policy"] => Some(Page::PrivacyPolicy),
            ["terms-of-service"] => Some(Page::TermsOfService),
            ["cookie-policy"] => Some(Page::CookiePolicy),
            ["boats", slug] if is_slug(slug) => Some(Page::Boat(slug.to_string())),
            ["destinations", slug] if is_slug(slug) => Some(Page::Destination(slug.to_string())),
            _ => None,
        }
    }

    /// Unprefixed path of the page.
    pub fn path(&self) -> String {
        match self {
            Page::Home => "/".to_string(),
            Page::Fleet => "/fleet".to_string(),
            Page::Services => "/services".to_string(),
            Page::Contact => "/contact".to_string(),
            Page::Destinations => "/destinations".to_string(),
            Page::PrivacyPolicy => "/privacy-policy".to_string(),
            Page::TermsOfService => "/terms-of-service".to_string(),
            Page::CookiePolicy => "/cookie-policy".to_string(),
            Page::Boat(slug) => format!("/boats/{slug}"),
            Page::Destination(slug) => format!("/destinations/{slug}"),
        }
    }

    /// Catalog key holding the page title.
    pub fn title_key(&self) -> String {
        match self {
            Page::Home => "home.hero.title".to_string(),
            Page::Fleet => "fleet.title".to_string(),
            Page::Services => "services.title".to_string(),
            Page::Contact => "contact.title".to_string(),
            Page::Destinations => "nav.destinations".to_string(),
            Page::PrivacyPolicy => "legal.privacyPolicy.title".to_string(),
            Page::TermsOfService => "legal.termsOfService.title".to_string(),
            Page::CookiePolicy => "legal.cookiePolicy.title".to_string(),
            Page::Boat(slug) => format!("boats.{slug}.name"),
            Page::Destination(slug) => format!("destinations.{slug}.name"),
        }
    }

    /// Catalog key holding the lead paragraph, if the page has one.
    pub fn description_key(&self) -> Option<String> {
        match self {
            Page::Home => Some("home.hero.subtitle".to_string()),
            Page::Fleet => Some("fleet.description".to_string()),
            Page::Services => Some("services.description".to_string()),
            Page::Contact => Some("contact.description".to_string()),
            Page::Boat(slug) => Some(format!("boats.{slug}.shortDescription")),
            Page::Destination(slug) => Some(format!("destinations.{slug}.description")),
            _ => None,
        }
    }

    /// Key naming the page in the navigation bar.
    pub fn nav_key(&self) -> Option<&'static str> {
        match self {
            Page::Home => Some("nav.home"),
            Page::Fleet => Some("nav.fleet"),
            Page::Services => Some("nav.services"),
            Page::Destinations => Some("nav.destinations"),
            Page::Contact => Some("nav.contact"),
            _ => None,
        }
    }

    /// Whether the catalog knows the entity behind a slug page.
    ///
    /// Fixed pages always exist.
    pub fn exists(&self, t: &Translator<'_>) -> bool {
        match self {
            Page::Boat(_) | Page::Destination(_) => t.t(&self.title_key()).is_some(),
            _ => true,
        }
    }

    /// Page title, falling back to a literal when the catalog has none.
    pub fn title(&self, t: &Translator<'_>) -> String {
        t.text(&self.title_key(), &self.fallback_title(t.locale()))
    }

    fn fallback_title(&self, locale: Locale) -> String {
        let (el, en) = match self {
            Page::Home => ("Ενοικίαση φουσκωτών σκαφών", "RIB boat rental"),
            Page::Fleet => ("Στόλος", "Fleet"),
            Page::Services => ("Υπηρεσίες", "Services"),
            Page::Contact => ("Επικοινωνία", "Contact"),
            Page::Destinations => ("Προορισμοί", "Destinations"),
            Page::PrivacyPolicy => ("Πολιτική απορρήτου", "Privacy policy"),
            Page::TermsOfService => ("Όροι χρήσης", "Terms of service"),
            Page::CookiePolicy => ("Πολιτική cookies", "Cookie policy"),
            Page::Boat(slug) | Page::Destination(slug) => return slug.clone(),
        };
        match locale {
            Locale::El => el.to_string(),
            Locale::En => en.to_string(),
        }
    }
}

fn is_slug(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use serde_json::json;

    #[test]
    fn test_from_path() {
        assert_eq!(Page::from_path(""), Some(Page::Home));
        assert_eq!(Page::from_path("/"), Some(Page::Home));
        assert_eq!(Page::from_path("fleet"), Some(Page::Fleet));
        assert_eq!(Page::from_path("fleet/"), Some(Page::Fleet));
        assert_eq!(
            Page::from_path("boats/lobster23"),
            Some(Page::Boat("lobster23".into()))
        );
        assert_eq!(
            Page::from_path("destinations/aegina"),
            Some(Page::Destination("aegina".into()))
        );
        assert_eq!(Page::from_path("destinations"), Some(Page::Destinations));
    }

    #[test]
    fn test_from_path_rejects_unknown() {
        assert_eq!(Page::from_path("english"), None);
        assert_eq!(Page::from_path("boats"), None);
        assert_eq!(Page::from_path("boats/Lobster"), None);
        assert_eq!(Page::from_path("boats/a/b"), None);
        assert_eq!(Page::from_path("fleet.html"), None);
    }

    #[test]
    fn test_path_round_trips_through_from_path() {
        for page in [
            Page::PrivacyPolicy,
            Page::Boat("marlin790".into()),
            Page::Destination("agistri".into()),
        ] {
            assert_eq!(Page::from_path(&page.path()), Some(page));
        }
    }

    #[test]
    fn test_title_uses_catalog_then_literal() {
        let catalog = Catalog::from_values([
            (Locale::El, json!({"fleet": {"title": "Ο στόλος μας"}})),
            (Locale::En, json!({})),
        ])
        .unwrap();

        assert_eq!(Page::Fleet.title(&catalog.translator(Locale::El)), "Ο στόλος μας");
        // en falls back to the Greek dictionary, then to the English literal
        assert_eq!(Page::Fleet.title(&catalog.translator(Locale::En)), "Ο στόλος μας");
        assert_eq!(Page::Services.title(&catalog.translator(Locale::En)), "Services");
    }

    #[test]
    fn test_slug_pages_exist_only_when_named() {
        let catalog = Catalog::from_values([
            (Locale::El, json!({"boats": {"lobster23": {"name": "Lobster 23"}}})),
            (Locale::En, json!({})),
        ])
        .unwrap();
        let t = catalog.translator(Locale::En);

        assert!(Page::Boat("lobster23".into()).exists(&t));
        assert!(!Page::Boat("titanic".into()).exists(&t));
        assert!(Page::Fleet.exists(&t));
    }
}
