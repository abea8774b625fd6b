//! Runtime configuration.

use serde::Deserialize;
use url::Url;

/// Circle's hosted testnet attestation service.
pub const DEFAULT_GATEWAY_API_URL: &str = "https://gateway-api-testnet.circle.com/v1";

/// Environment override for the attestation service base URL.
pub const GATEWAY_API_URL_ENV: &str = "SENDLY_GATEWAY_API_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid Gateway API URL {raw:?}")]
    InvalidUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewaySettings {
    pub api_url: Url,
}

impl GatewaySettings {
    /// Settings from the environment, falling back to the hosted
    /// testnet endpoint.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(GATEWAY_API_URL_ENV)
            .unwrap_or_else(|_| DEFAULT_GATEWAY_API_URL.to_string());
        let api_url = Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl { raw, source })?;
        Ok(Self { api_url })
    }
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_GATEWAY_API_URL).expect("literal URL parses"),
        }
    }
}
