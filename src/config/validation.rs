//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, limits > 0)
//! - Check addresses and URLs parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::SiteConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("site.url '{0}' is not an http(s) URL")]
    SiteUrl(String),

    #[error("site.business_phone must not be empty")]
    EmptyPhone,

    #[error("routing.bypass_prefixes entry '{0}' must start with '/'")]
    BypassPrefix(String),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("observability.log_format '{0}' must be \"pretty\" or \"json\"")]
    LogFormat(String),

    #[error("observability.metrics_address '{0}' is not a socket address")]
    MetricsAddress(String),
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    match Url::parse(&config.site.url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        _ => errors.push(ValidationError::SiteUrl(config.site.url.clone())),
    }

    if config.site.business_phone.trim().is_empty() {
        errors.push(ValidationError::EmptyPhone);
    }

    for prefix in &config.routing.bypass_prefixes {
        if !prefix.starts_with('/') {
            errors.push(ValidationError::BypassPrefix(prefix.clone()));
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::Zero("timeouts.request_secs"));
    }
    if config.security.max_body_size == 0 {
        errors.push(ValidationError::Zero("security.max_body_size"));
    }
    if config.contact.rate_limit_enabled {
        if config.contact.submissions_per_minute == 0 {
            errors.push(ValidationError::Zero("contact.submissions_per_minute"));
        }
        if config.contact.burst_size == 0 {
            errors.push(ValidationError::Zero("contact.burst_size"));
        }
    }

    if !matches!(config.observability.log_format.as_str(), "pretty" | "json") {
        errors.push(ValidationError::LogFormat(config.observability.log_format.clone()));
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
