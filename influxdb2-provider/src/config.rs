//! Provider block configuration.
//!
//! Every setting is optional in the provider block; unset settings fall back
//! to the `INFLUXDB_V2_*` environment variables read by
//! [`ClientConfig::from_env`].

use crate::schema::{Attribute, Schema};
use influxdb2_client::ClientConfig;
use serde::{Deserialize, Serialize};

/// Settings from the `provider "influxdb2"` block.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// InfluxDB2 server URL
    #[serde(default)]
    pub url: Option<String>,

    /// API token
    #[serde(default)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Skip TLS certificate verification
    #[serde(default)]
    pub skip_ssl_verify: Option<bool>,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("url", &self.url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("skip_ssl_verify", &self.skip_ssl_verify)
            .finish()
    }
}

impl ProviderConfig {
    /// Schema of the provider block.
    pub fn schema() -> Schema {
        Schema::new("Provider for managing InfluxDB2 resources.")
            .with_attribute(
                "url",
                Attribute::optional_string().with_description(
                    "The InfluxDB2 server URL. May also be set with INFLUXDB_V2_URL.",
                ),
            )
            .with_attribute(
                "token",
                Attribute::optional_string()
                    .with_description(
                        "The InfluxDB2 API token. May also be set with INFLUXDB_V2_TOKEN.",
                    )
                    .sensitive(),
            )
            .with_attribute(
                "timeout_secs",
                Attribute::optional_int().with_description("Request timeout in seconds."),
            )
            .with_attribute(
                "skip_ssl_verify",
                Attribute::optional_bool()
                    .with_description("Skip TLS certificate verification (testing only)."),
            )
    }

    /// Resolve against the environment.
    pub fn into_client_config(self) -> ClientConfig {
        self.overlay(ClientConfig::from_env())
    }

    /// Apply the block's settings on top of `base`.
    pub fn overlay(self, base: ClientConfig) -> ClientConfig {
        ClientConfig {
            url: self.url.unwrap_or(base.url),
            token: self.token.or(base.token),
            timeout_secs: self.timeout_secs.unwrap_or(base.timeout_secs),
            verify_tls: self
                .skip_ssl_verify
                .map(|skip| !skip)
                .unwrap_or(base.verify_tls),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::decode;

    #[test]
    fn test_overlay_keeps_base_when_unset() {
        let base = ClientConfig::new("https://influx.example.com", Some("env-token".to_string()));
        let config = ProviderConfig::default().overlay(base.clone());

        assert_eq!(config.url, base.url);
        assert_eq!(config.token, base.token);
        assert_eq!(config.timeout_secs, base.timeout_secs);
        assert!(config.verify_tls);
    }

    #[test]
    fn test_overlay_block_wins() {
        let base = ClientConfig::new("https://influx.example.com", Some("env-token".to_string()));
        let block = ProviderConfig {
            url: Some("http://localhost:9999".to_string()),
            token: Some("block-token".to_string()),
            timeout_secs: Some(5),
            skip_ssl_verify: Some(true),
        };

        let config = block.overlay(base);
        assert_eq!(config.url, "http://localhost:9999");
        assert_eq!(config.token.as_deref(), Some("block-token"));
        assert_eq!(config.timeout_secs, 5);
        assert!(!config.verify_tls);
    }

    #[test]
    fn test_debug_redacts_token() {
        let block = ProviderConfig {
            url: Some("http://localhost:8086".to_string()),
            token: Some("block-s3cr3t".to_string()),
            ..ProviderConfig::default()
        };
        let debug = format!("{:?}", block);
        assert!(!debug.contains("block-s3cr3t"));
        assert!(debug.contains("<redacted>"));

        // The resolved client config must not leak it either.
        let resolved = block.overlay(ClientConfig::default());
        assert!(!format!("{:?}", resolved).contains("block-s3cr3t"));
    }

    #[test]
    fn test_decode_provider_block() {
        let block: ProviderConfig = decode(
            &ProviderConfig::schema(),
            &serde_json::json!({ "url": "http://localhost:8086", "token": "t" }),
        )
        .unwrap();
        assert_eq!(block.url.as_deref(), Some("http://localhost:8086"));

        let err = decode::<ProviderConfig>(
            &ProviderConfig::schema(),
            &serde_json::json!({ "timeout_secs": "soon" }),
        )
        .unwrap_err();
        assert!(err.has_error());
        assert!(ProviderConfig::schema().attributes["token"].sensitive);
    }
}
