//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the site
//! server. All types derive Serde traits for deserialization from config
//! files.

use serde::{Deserialize, Serialize};

use crate::routing::DEFAULT_BYPASS_PREFIXES;

/// Root configuration for the site server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener configuration (bind address, TLS).
    pub listener: ListenerConfig,

    /// Translation dictionary location.
    pub i18n: I18nConfig,

    /// Locale routing rules.
    pub routing: RoutingConfig,

    /// Business details shown on pages.
    pub site: SiteDetails,

    /// Contact form endpoint settings.
    pub contact: ContactConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    #[serde(default)]
    pub security: SecurityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,

    /// Optional TLS configuration.
    pub tls: Option<TlsConfig>,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            tls: None,
        }
    }
}

/// TLS configuration for the listener.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TlsConfig {
    /// Path to certificate file (PEM).
    pub cert_path: String,

    /// Path to private key file (PEM).
    pub key_path: String,
}

/// Where translation dictionaries come from.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct I18nConfig {
    /// Directory holding `el.json` and `en.json`.
    /// When unset, the dictionaries compiled into the binary are used.
    pub messages_dir: Option<String>,
}

/// Locale routing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Path prefixes that skip locale handling entirely.
    pub bypass_prefixes: Vec<String>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            bypass_prefixes: DEFAULT_BYPASS_PREFIXES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Public business details.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteDetails {
    /// Brand name used in page titles.
    pub name: String,

    /// Canonical public URL of the site.
    pub url: String,

    /// Phone number shown on every page.
    pub business_phone: String,

    /// Address contact notifications would be sent to.
    pub contact_email: String,

    /// Directory served for bypassed asset paths.
    pub public_dir: String,
}

impl Default for SiteDetails {
    fn default() -> Self {
        Self {
            name: "RentRibAthens".to_string(),
            url: "https://rentribathens.gr".to_string(),
            business_phone: "+306978277120".to_string(),
            contact_email: "info@rentribathens.gr".to_string(),
            public_dir: "public".to_string(),
        }
    }
}

/// Contact endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Enable per-IP rate limiting of submissions.
    pub rate_limit_enabled: bool,

    /// Sustained submissions allowed per client per minute.
    pub submissions_per_minute: u32,

    /// Burst capacity.
    pub burst_size: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            rate_limit_enabled: true,
            submissions_per_minute: 5,
            burst_size: 3,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,

    /// Grace period for in-flight requests on shutdown, in seconds.
    pub shutdown_grace_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: 30,
            shutdown_grace_secs: 10,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format ("pretty" or "json").
    pub log_format: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Enable security headers.
    pub enable_headers: bool,
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
            max_body_size: 64 * 1024, // 64KB, contact form only
        }
    }
}
