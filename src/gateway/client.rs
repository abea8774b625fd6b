//! Typed HTTP client for the attestation service API.

use alloy::primitives::{Address, Bytes, U256};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::config::GatewaySettings;

use super::{SignedBurnIntent, decimal_u64};

#[derive(Debug, thiserror::Error)]
pub enum GatewayClientError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("Attestation service error (status {status}): {message}")]
    Api { status: StatusCode, message: String },
}

/// One supported chain as reported by the `info` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    pub domain: u32,
    #[serde(with = "decimal_u64")]
    pub chain_id: u64,
    pub name: String,
    pub gateway_wallet: Address,
    pub gateway_minter: Address,
    pub usdc: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    pub supported_chains: Vec<ChainInfo>,
}

/// One (depositor, domain) pair a balance is queried for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSource {
    pub depositor: Address,
    pub domain: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct BalancesRequest {
    token: String,
    sources: Vec<BalanceSource>,
}

/// Unified balance available on one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainBalance {
    pub domain: u32,
    #[serde(with = "super::decimal_u256")]
    pub balance: U256,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BalancesResponse {
    balances: Vec<DomainBalance>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct TransferRequest {
    burn_intents: Vec<SignedBurnIntent>,
}

/// Raw response of the `transfer` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub attestation: Option<Bytes>,
    #[serde(default)]
    pub signature: Option<Bytes>,
}

/// Attestation and companion signature authorizing the destination mint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferAcceptance {
    pub attestation: Bytes,
    pub signature: Bytes,
}

impl TransferResponse {
    /// Splits the response into an acceptance or a rejection message.
    ///
    /// A success flag without both the attestation and its signature is
    /// still a rejection; the mint cannot proceed without either.
    pub fn into_acceptance(self) -> Result<TransferAcceptance, String> {
        if !self.success {
            return Err(self
                .message
                .unwrap_or_else(|| "transfer rejected without a message".to_string()));
        }

        match (self.attestation, self.signature) {
            (Some(attestation), Some(signature)) => Ok(TransferAcceptance {
                attestation,
                signature,
            }),
            _ => Err("transfer response is missing the attestation or its signature".to_string()),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Thin typed client over the attestation service's three endpoints.
pub struct GatewayClient {
    client: Client,
    base_url: Url,
}

impl GatewayClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Client pointed at the configured attestation service.
    pub fn from_settings(settings: &GatewaySettings) -> Self {
        Self::new(settings.api_url.clone())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    /// Supported chains with their domains and contract addresses.
    pub async fn info(&self) -> Result<InfoResponse, GatewayClientError> {
        let response = self.client.get(self.endpoint("info")).send().await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Unified balances of `depositor` for `token`.
    ///
    /// Without an explicit source list, one source per chain reported by
    /// [`Self::info`] is queried, which costs a second round trip.
    pub async fn balances(
        &self,
        token: &str,
        depositor: Address,
        sources: Option<Vec<BalanceSource>>,
    ) -> Result<Vec<DomainBalance>, GatewayClientError> {
        let sources = match sources {
            Some(sources) => sources,
            None => self
                .info()
                .await?
                .supported_chains
                .iter()
                .map(|chain| BalanceSource {
                    depositor,
                    domain: chain.domain,
                })
                .collect(),
        };

        debug!(token, source_count = sources.len(), "Querying unified balances");

        let request = BalancesRequest {
            token: token.to_string(),
            sources,
        };
        let response = self
            .client
            .post(self.endpoint("balances"))
            .json(&request)
            .send()
            .await?;
        let response = Self::check(response).await?;
        let parsed: BalancesResponse = response.json().await?;

        Ok(parsed.balances)
    }

    /// Submits signed burn intents for attestation.
    pub async fn transfer(
        &self,
        burn_intents: Vec<SignedBurnIntent>,
    ) -> Result<TransferResponse, GatewayClientError> {
        let request = TransferRequest { burn_intents };
        let response = self
            .client
            .post(self.endpoint("transfer"))
            .json(&request)
            .send()
            .await?;
        let response = Self::check(response).await?;

        Ok(response.json().await?)
    }

    /// Converts a non-2xx response into an error, taking the message from
    /// a JSON `{ message }` body when present and the HTTP status line
    /// otherwise.
    async fn check(response: Response) -> Result<Response, GatewayClientError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|parsed| parsed.message)
            .unwrap_or_else(|_| status.to_string());

        Err(GatewayClientError::Api { status, message })
    }
}
