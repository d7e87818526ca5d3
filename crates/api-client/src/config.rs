//! Configuration for the restroom API client
//!
//! The base URL is resolved once, in this order: explicit override (CLI flag),
//! `RESTROOM_API_URL`, the `[api]` table of the config file, then the default.

use crate::error::{ApiError, ApiResult};
use restroom_core::config::ApiConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default backend URL (local development server)
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

const API_URL_VAR: &str = "RESTROOM_API_URL";
const TIMEOUT_VAR: &str = "RESTROOM_TIMEOUT_SECS";
const ENV_VAR: &str = "RESTROOM_ENV";

/// Environment types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development server
    Development,
    /// Deployed backend
    #[default]
    Production,
}

impl Environment {
    /// Parse from `RESTROOM_ENV`
    #[must_use]
    pub fn from_env() -> Self {
        Self::parse(&env::var(ENV_VAR).unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "development" | "dev" | "local" => Self::Development,
            _ => Self::Production,
        }
    }

    /// Default request timeout for this environment
    #[must_use]
    pub fn default_timeout(self) -> Duration {
        match self {
            Self::Development => Duration::from_secs(10),
            Self::Production => Duration::from_secs(30),
        }
    }
}

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL, e.g. `http://192.168.1.87:5000/api`
    pub base_url: String,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    /// Current environment
    pub environment: Environment,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Environment::Production.default_timeout(),
            environment: Environment::default(),
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `RESTROOM_API_URL`: backend base URL
    /// - `RESTROOM_TIMEOUT_SECS`: request timeout in seconds
    /// - `RESTROOM_ENV`: environment (development/production)
    pub fn from_env() -> ApiResult<Self> {
        Self::from_sources(None, &ApiConfig::default())
    }

    /// Resolve configuration from a CLI override, the environment and the file
    pub fn from_sources(url_override: Option<&str>, file: &ApiConfig) -> ApiResult<Self> {
        let environment = Environment::from_env();
        let config = resolve(
            url_override,
            env::var(API_URL_VAR).ok(),
            env::var(TIMEOUT_VAR).ok(),
            file,
            environment,
        );
        config.validate()?;
        Ok(config)
    }

    /// Create development configuration (local backend)
    #[must_use]
    pub fn development() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Environment::Development.default_timeout(),
            environment: Environment::Development,
        }
    }

    /// Builder-style method to set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL for an endpoint path
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config("base_url must start with http:// or https://"));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}

fn resolve(
    url_override: Option<&str>,
    env_url: Option<String>,
    env_timeout: Option<String>,
    file: &ApiConfig,
    environment: Environment,
) -> ClientConfig {
    let base_url = url_override
        .map(str::to_string)
        .or(env_url)
        .or_else(|| file.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let timeout = env_timeout
        .and_then(|s| s.trim().parse().ok())
        .or(file.timeout_secs)
        .map_or_else(|| environment.default_timeout(), Duration::from_secs);

    ClientConfig {
        base_url,
        timeout,
        environment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000/api");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_development_config() {
        let config = ClientConfig::development();
        assert!(config.base_url.contains("localhost"));
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("DEV"), Environment::Development);
        assert_eq!(Environment::parse(""), Environment::Production);
    }

    #[test]
    fn test_endpoint_joining() {
        let config = ClientConfig::default().with_base_url("http://192.168.1.87:5000/api/");
        assert_eq!(
            config.endpoint("/top-bathrooms"),
            "http://192.168.1.87:5000/api/top-bathrooms"
        );
    }

    #[test]
    fn test_resolution_precedence() {
        let file = ApiConfig {
            base_url: Some("http://file:5000/api".into()),
            timeout_secs: Some(12),
        };

        let from_cli = resolve(
            Some("http://cli:5000/api"),
            Some("http://env:5000/api".into()),
            None,
            &file,
            Environment::Production,
        );
        assert_eq!(from_cli.base_url, "http://cli:5000/api");
        assert_eq!(from_cli.timeout, Duration::from_secs(12));

        let from_env = resolve(
            None,
            Some("http://env:5000/api".into()),
            Some("3".into()),
            &file,
            Environment::Production,
        );
        assert_eq!(from_env.base_url, "http://env:5000/api");
        assert_eq!(from_env.timeout, Duration::from_secs(3));

        let from_file = resolve(None, None, None, &file, Environment::Production);
        assert_eq!(from_file.base_url, "http://file:5000/api");

        let fallback = resolve(None, None, None, &ApiConfig::default(), Environment::Development);
        assert_eq!(fallback.base_url, DEFAULT_BASE_URL);
        assert_eq!(fallback.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_explicit_file_timeout_beats_environment_default() {
        let file = ApiConfig {
            base_url: None,
            timeout_secs: Some(30),
        };
        let config = resolve(None, None, None, &file, Environment::Development);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_validation() {
        assert!(ClientConfig::default().with_base_url("").validate().is_err());
        assert!(ClientConfig::default()
            .with_base_url("ftp://example.com")
            .validate()
            .is_err());
        assert!(ClientConfig::default()
            .with_timeout(Duration::ZERO)
            .validate()
            .is_err());
    }
}
