//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::SiteConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Environment variables that override file settings.
const ENV_OVERRIDES: [&str; 5] = [
    "BIND_ADDRESS",
    "SITE_URL",
    "BUSINESS_PHONE",
    "CONTACT_EMAIL",
    "MESSAGES_DIR",
];

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: SiteConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load configuration for the server binary.
///
/// Reads the file when one is given (defaults otherwise), applies
/// environment overrides, then validates the result.
pub fn load(path: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
        None => SiteConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply overrides from `lookup`, which maps variable names to values.
/// Empty values are ignored.
pub fn apply_env_overrides<F>(config: &mut SiteConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    for key in ENV_OVERRIDES {
        let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) else {
            continue;
        };
        tracing::debug!(variable = key, "Applying environment override");
        match key {
            "BIND_ADDRESS" => config.listener.bind_address = value,
            "SITE_URL" => config.site.url = value,
            "BUSINESS_PHONE" => config.site.business_phone = value,
            "CONTACT_EMAIL" => config.site.contact_email = value,
            "MESSAGES_DIR" => config.i18n.messages_dir = Some(value),
            _ => {}
        }
    }
}
