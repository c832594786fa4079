//! API Configuration
//!
//! Where the workout API lives and how patient the client is with it.

use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

/// Environment variable holding the API base URL
pub const ENV_API_URL: &str = "WORKOUT_API_URL";

/// Environment variable holding the request timeout in seconds
pub const ENV_HTTP_TIMEOUT_SECS: &str = "WORKOUT_HTTP_TIMEOUT_SECS";

const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid API URL {value:?}: {reason}")]
    InvalidUrl { value: String, reason: String },

    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL; endpoint paths are appended to it
    pub base_url: Url,
    /// Whole-request timeout
    pub request_timeout: Duration,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            request_timeout: Duration::from_secs(10),
            user_agent: concat!("workout-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ApiConfig {
    /// Create config for a given base URL
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            ..Default::default()
        })
    }

    /// Create config for development (local server, short timeout)
    pub fn development() -> Self {
        Self {
            request_timeout: Duration::from_secs(3),
            ..Default::default()
        }
    }

    /// Load from process environment, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            config.base_url = parse_base_url(&url)?;
        }

        if let Some(secs) = lookup(ENV_HTTP_TIMEOUT_SECS) {
            let parsed = secs
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or(ConfigError::InvalidValue {
                    name: ENV_HTTP_TIMEOUT_SECS,
                    value: secs.clone(),
                })?;
            config.request_timeout = Duration::from_secs(parsed);
        }

        Ok(config)
    }

    /// Resolve an endpoint path (e.g. `/templates/3`) against the base URL
    pub fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ConfigError::InvalidUrl {
                value: path.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Parse a base URL, forcing a trailing slash so that `join` appends
/// instead of replacing the last segment
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    let url = Url::parse(&with_slash).map_err(|e| ConfigError::InvalidUrl {
        value: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidUrl {
            value: raw.to_string(),
            reason: format!("unsupported scheme {other}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("workout-client/"));
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ApiConfig::from_lookup(lookup(&[
            (ENV_API_URL, "https://api.example.com/v1"),
            (ENV_HTTP_TIMEOUT_SECS, "30"),
        ]))
        .unwrap();
        assert_eq!(config.base_url.as_str(), "https://api.example.com/v1/");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_from_lookup_empty_uses_defaults() {
        let config = ApiConfig::from_lookup(lookup(&[(ENV_API_URL, "  ")])).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8000/");
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            ApiConfig::from_lookup(lookup(&[(ENV_API_URL, "ftp://host")])),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            ApiConfig::from_lookup(lookup(&[(ENV_HTTP_TIMEOUT_SECS, "0")])),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            ApiConfig::from_lookup(lookup(&[(ENV_HTTP_TIMEOUT_SECS, "soon")])),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let config = ApiConfig::new("https://api.example.com/v1").unwrap();
        assert_eq!(
            config.endpoint("/templates/3").unwrap().as_str(),
            "https://api.example.com/v1/templates/3"
        );
        assert_eq!(
            config.endpoint("submit").unwrap().as_str(),
            "https://api.example.com/v1/submit"
        );
    }

    #[test]
    fn test_development_config() {
        let config = ApiConfig::development();
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }
}
