//! Listen address configuration from environment variables.

use std::env;

use cityinfo_core::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "localhost";

/// Host used when running behind Render, which routes external traffic to the container.
pub const PUBLIC_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// - `PORT`: listen port (default: 3000)
    /// - `HOST`: bind host (default: "localhost")
    /// - `RENDER_EXTERNAL_URL`: when set, forces the bind host to "0.0.0.0"
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let host = if lookup("RENDER_EXTERNAL_URL").is_some() {
            PUBLIC_HOST.to_string()
        } else {
            lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string())
        };

        Ok(Self { host, port })
    }
}
