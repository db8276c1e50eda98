//! Provider configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

/// Default provider base URL.
pub const DEFAULT_BASE_URL: &str = "https://api-ugi2pflmha-ew.a.run.app";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// How a path identifier is turned into a provider city id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionStrategy {
    /// The path identifier is the provider's city id.
    #[default]
    Direct,
    /// Search with the identifier as free text and use the first hit's id.
    Search,
}

impl FromStr for ResolutionStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(ResolutionStrategy::Direct),
            "search" => Ok(ResolutionStrategy::Search),
            _ => Err(ConfigError::InvalidValue {
                name: "CITY_RESOLUTION".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// City/weather provider configuration.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// API key sent as the `apiKey` query parameter.
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
    pub resolution: ResolutionStrategy,
}

impl ProviderConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `CITY_API_KEY`: provider API key
    ///
    /// Optional:
    /// - `CITY_API_BASE_URL`: provider base URL (default: "https://api-ugi2pflmha-ew.a.run.app")
    /// - `CITY_API_TIMEOUT_MS`: per-request timeout (default: 5000)
    /// - `CITY_RESOLUTION`: "direct" (default) or "search"
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Same as [`ProviderConfig::from_env`], reading values through `lookup`.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("CITY_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("CITY_API_KEY".to_string()))?;

        let base_url = lookup("CITY_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_ms = match lookup("CITY_API_TIMEOUT_MS") {
            Some(value) => value.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                name: "CITY_API_TIMEOUT_MS".to_string(),
                value,
            })?,
            None => DEFAULT_TIMEOUT_MS,
        };

        let resolution = match lookup("CITY_RESOLUTION") {
            Some(value) => value.parse::<ResolutionStrategy>()?,
            None => ResolutionStrategy::default(),
        };

        Ok(Self {
            api_key,
            base_url,
            timeout: Duration::from_millis(timeout_ms),
            resolution,
        })
    }
}
