//! Adapter configuration
//!
//! Loaded from YAML, with every field optional:
//!
//! ```yaml
//! base_url: "https://dab.yeet.su/api/"
//! share_base_url: "https://www.qobuz.com/us-en/"
//! timeout_secs: 30
//! rate_limit:
//!   requests_per_second: 5
//!   burst_size: 5
//! ```
//!
//! `DAB_BASE_URL` and `DAB_TIMEOUT_SECS` override the file values when
//! [`DabConfig::with_env_overrides`] is applied.

use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default root of generated share links
pub const DEFAULT_SHARE_BASE_URL: &str = "https://www.qobuz.com/us-en/";

/// Environment variable overriding `base_url`
pub const ENV_BASE_URL: &str = "DAB_BASE_URL";

/// Environment variable overriding `timeout_secs`
pub const ENV_TIMEOUT_SECS: &str = "DAB_TIMEOUT_SECS";

// ============================================================================
// Config
// ============================================================================

/// Adapter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DabConfig {
    /// Root of the catalog API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Root of generated share links
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Client-side rate limit; none when absent
    #[serde(default)]
    pub rate_limit: Option<RateLimiterConfig>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_share_base_url() -> String {
    DEFAULT_SHARE_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for DabConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            share_base_url: default_share_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            rate_limit: None,
        }
    }
}

impl DabConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // an empty document means "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `DAB_BASE_URL` / `DAB_TIMEOUT_SECS` from the process environment
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.base_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = raw.trim().parse().map_err(|_| {
                Error::config(format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'"))
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)
            .map_err(|e| Error::config(format!("Invalid base_url '{}': {e}", self.base_url)))?;
        url::Url::parse(&self.share_base_url).map_err(|e| {
            Error::config(format!("Invalid share_base_url '{}': {e}", self.share_base_url))
        })?;
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Share link root, always ending in `/`
    pub fn share_root(&self) -> String {
        if self.share_base_url.ends_with('/') {
            self.share_base_url.clone()
        } else {
            format!("{}/", self.share_base_url)
        }
    }

    /// HTTP client configuration derived from this config
    pub fn to_http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .timeout(self.timeout());
        builder = match &self.rate_limit {
            Some(limit) => builder.rate_limit(limit.clone()),
            None => builder.no_rate_limit(),
        };
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        builder.build()
    }
}
