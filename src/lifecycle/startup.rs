//! Startup orchestration.
//!
//! # Responsibilities
//! - Load the translation catalog (directory or embedded)
//! - Report secondary-locale keys that will fall back to the default
//! - Assemble the shared `AppState`
//!
//! # Design Decisions
//! - Missing translations are a warning, not an error: lookup falls back
//!   to the default locale at request time

use std::path::Path;

use crate::config::SiteConfig;
use crate::http::AppState;
use crate::i18n::{Catalog, CatalogError, Locale};

/// Load dictionaries from `messages_dir`, or the embedded copies when unset.
pub fn load_catalog(messages_dir: Option<&str>) -> Result<Catalog, CatalogError> {
    match messages_dir {
        Some(dir) => {
            tracing::info!(dir = %dir, "Loading translations from directory");
            Catalog::load(Path::new(dir))
        }
        None => {
            tracing::info!("Using embedded translations");
            Catalog::embedded()
        }
    }
}

/// Build the application state from a validated configuration.
pub fn bootstrap(config: SiteConfig) -> Result<AppState, CatalogError> {
    let catalog = load_catalog(config.i18n.messages_dir.as_deref())?;

    for locale in Locale::ALL.into_iter().filter(|l| !l.is_default()) {
        let missing = catalog.missing_keys(locale);
        if missing.is_empty() {
            tracing::info!(locale = %locale, "Translations complete");
        } else {
            tracing::warn!(
                locale = %locale,
                count = missing.len(),
                keys = %missing.join(", "),
                "Missing translations will fall back to {}",
                Locale::DEFAULT
            );
        }
    }

    let state = AppState::new(config, catalog);
    tracing::info!(
        bypass_prefixes = ?state.config.routing.bypass_prefixes,
        rate_limit_enabled = state.config.contact.rate_limit_enabled,
        "Application state ready"
    );
    Ok(state)
}
