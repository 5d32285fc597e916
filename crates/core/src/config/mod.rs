//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (ADVISOR_*)
//! 2. TOML config file (if ADVISOR_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::{ConfigError, MAX_CACHE_TTL_SECS};

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (ADVISOR_*)
/// 2. TOML config file (if ADVISOR_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the GitHub-compatible contents API.
    ///
    /// Set via ADVISOR_API_BASE_URL environment variable.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Repository holding the playbooks, as `owner/name`.
    ///
    /// Set via ADVISOR_REPOSITORY environment variable.
    #[serde(default = "default_repository")]
    pub repository: String,

    /// Directory inside the repository that contains the playbook files.
    ///
    /// Set via ADVISOR_DOCS_PATH environment variable.
    #[serde(default = "default_docs_path")]
    pub docs_path: String,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via ADVISOR_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Optional HTTP request timeout in milliseconds.
    ///
    /// Unset means outbound requests are never cut short.
    /// Set via ADVISOR_TIMEOUT_MS environment variable.
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    /// How long a fetched playbook body stays valid in the cache.
    ///
    /// Set via ADVISOR_CACHE_TTL_SECS environment variable.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Port for the REST API.
    ///
    /// Set via ADVISOR_PORT environment variable.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_api_base_url() -> String {
    "https://api.github.com".into()
}

fn default_repository() -> String {
    "aws-samples/aws-customer-playbook-framework".into()
}

fn default_docs_path() -> String {
    "docs".into()
}

fn default_user_agent() -> String {
    "playbook-advisor/0.1".into()
}

fn default_cache_ttl_secs() -> u64 {
    300 // 5 minutes
}

fn default_port() -> u16 {
    3000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            repository: default_repository(),
            docs_path: default_docs_path(),
            user_agent: default_user_agent(),
            timeout_ms: None,
            cache_ttl_secs: default_cache_ttl_secs(),
            port: default_port(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Cache time-to-live as a chrono duration.
    ///
    /// Values above [`MAX_CACHE_TTL_SECS`] saturate to that bound.
    pub fn cache_ttl(&self) -> chrono::Duration {
        let secs = self.cache_ttl_secs.min(MAX_CACHE_TTL_SECS);
        i64::try_from(secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or_else(|| chrono::Duration::days(1))
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `ADVISOR_`
    /// 2. TOML file from `ADVISOR_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment()
            .extract()
            .map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("ADVISOR_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment.merge(
            Env::prefixed("ADVISOR_")
                .ignore(&["CONFIG_FILE"])
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        )
    }
}
