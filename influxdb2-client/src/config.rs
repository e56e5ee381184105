//! Client configuration for the InfluxDB2 API.
//!
//! Provides the server URL, API token, and timeout settings used by
//! [`OrganizationsClient`](crate::OrganizationsClient). Configuration is loaded
//! from environment variables with defaults suitable for a local InfluxDB2.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default InfluxDB2 server URL.
pub const DEFAULT_URL: &str = "http://localhost:8086";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required environment variable.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Error message.
        message: String,
    },
}

/// Connection settings for an InfluxDB2 server.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the InfluxDB2 server (e.g., "http://localhost:8086").
    pub url: String,

    /// API token sent as `Authorization: Token <token>`.
    pub token: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Whether to verify TLS certificates (disable only for testing).
    pub verify_tls: bool,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("verify_tls", &self.verify_tls)
            .finish()
    }
}

impl Default for ClientConfig {
    /// Returns default configuration pointing at a local InfluxDB2.
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            token: None,
            timeout_secs: 30,
            verify_tls: true,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given URL and token.
    pub fn new(url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            url: url.into(),
            token,
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `INFLUXDB_V2_URL`: server URL (default: http://localhost:8086)
    /// - `INFLUXDB_V2_TOKEN`: API token
    /// - `INFLUXDB_V2_TIMEOUT_SECS`: request timeout in seconds (default: 30)
    /// - `INFLUXDB_V2_SKIP_SSL_VERIFY`: skip TLS verification (default: false)
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            url: std::env::var("INFLUXDB_V2_URL").unwrap_or(default.url),
            token: std::env::var("INFLUXDB_V2_TOKEN").ok(),
            timeout_secs: std::env::var("INFLUXDB_V2_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default.timeout_secs),
            verify_tls: std::env::var("INFLUXDB_V2_SKIP_SSL_VERIFY")
                .map(|s| s != "true" && s != "1")
                .unwrap_or(default.verify_tls),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build a full URL by appending a path to the base URL.
    pub fn url(&self, path: &str) -> String {
        let base = self.url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Check if token authentication is available.
    pub fn has_auth(&self) -> bool {
        self.token.is_some()
    }

    /// Validate that the configuration can reach a server.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::MissingEnvVar("INFLUXDB_V2_URL".to_string()));
        }
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                key: "url".to_string(),
                message: format!("expected an http(s) URL, got '{}'", self.url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "timeout_secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
