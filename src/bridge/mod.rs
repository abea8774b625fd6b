//! Bridge orchestration over an external bridging SDK.
//!
//! The orchestrator validates the route, hands execution to a
//! [`BridgeAdapter`] bound to the connected wallet, and translates the
//! adapter's step results into one normalized outcome. The underlying SDK
//! executes as a sequence of named steps: the source-chain burn is the
//! step named `depositForBurn`, the destination-chain mint is `mint`. A
//! missing transaction hash on either step means that leg is still
//! pending, not that it failed.
//!
//! The SDK exposes no structured error codes, so adapter failures are
//! classified by message substring into a tagged enum with an explicit
//! catch-all variant. The classification is best effort and may drift as
//! the SDK's wording evolves; the original message is always preserved.

use std::sync::Arc;

use alloy::primitives::{Address, TxHash};
use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

use crate::amount::{AmountError, TokenAmount};
use crate::error::ErrorCode;
use crate::registry::Registry;
use crate::route::{RouteError, validate_by_address};

/// Step name of the source-chain burn/lock transaction.
pub const DEPOSIT_FOR_BURN_STEP: &str = "depositForBurn";

/// Step name of the destination-chain mint transaction.
pub const MINT_STEP: &str = "mint";

/// The browser-injected wallet provider a bridge call runs against.
///
/// The transfer is signed by the connecting wallet, not a custodial key;
/// the orchestrator only needs the wallet's address for the recipient
/// default, everything else stays inside the adapter.
pub trait WalletProvider: Send + Sync {
    fn address(&self) -> Address;
}

/// Inputs to one bridge attempt, as they arrive from the UI.
#[derive(Debug, Clone)]
pub struct BridgeRequest {
    pub from_chain_id: u64,
    pub to_chain_id: u64,
    pub from_token_address: String,
    pub to_token_address: String,
    /// Decimal string in token display units.
    pub amount: String,
    /// Defaults to the sender's own address when omitted.
    pub recipient: Option<Address>,
}

/// Route-resolved parameters handed to the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeParams {
    /// Source chain in the bridging SDK's own naming scheme.
    pub source_key: &'static str,
    /// Destination chain in the bridging SDK's own naming scheme.
    pub destination_key: &'static str,
    pub token_symbol: &'static str,
    pub amount: TokenAmount,
    pub recipient: Address,
}

/// One named step of the underlying protocol's execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeStep {
    pub name: String,
    /// Absent while the step has not completed or the SDK does not
    /// expose the hash.
    pub tx_hash: Option<TxHash>,
}

/// Raw result of an adapter execution.
#[derive(Debug, Clone, Default)]
pub struct BridgeExecution {
    pub steps: Vec<BridgeStep>,
    pub tracking_url: Option<Url>,
}

impl BridgeExecution {
    fn step_tx(&self, name: &str) -> Option<TxHash> {
        self.steps
            .iter()
            .find(|step| step.name == name)
            .and_then(|step| step.tx_hash)
    }
}

/// Failure reported by the bridging SDK. Only a message is available.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct AdapterError {
    pub message: String,
}

impl AdapterError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Seam for the external bridging SDK.
#[async_trait]
pub trait BridgeAdapter: Send + Sync {
    async fn execute(
        &self,
        wallet: &dyn WalletProvider,
        params: BridgeParams,
    ) -> Result<BridgeExecution, AdapterError>;
}

/// Normalized result of one bridge attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeOutcome {
    pub source_tx: Option<TxHash>,
    /// Absent while the destination mint is pending. Callers must treat
    /// this as "pending", not "failed".
    pub destination_tx: Option<TxHash>,
    pub tracking_url: Option<Url>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BridgeError {
    #[error("No wallet provider is connected")]
    WalletNotConnected,
    #[error("Route not available: {0}")]
    RouteNotAvailable(#[from] RouteError),
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),
    #[error("Insufficient balance: {message}")]
    InsufficientBalance { message: String },
    #[error("Request rejected in the wallet: {message}")]
    UserRejected { message: String },
    /// Unclassified adapter failure; the original message is preserved.
    #[error("Bridge execution failed: {message}")]
    Failed { message: String },
}

impl BridgeError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::WalletNotConnected => ErrorCode::WalletNotConnected,
            Self::RouteNotAvailable(_) => ErrorCode::RouteNotAvailable,
            Self::InvalidAmount(_) => ErrorCode::InvalidAmount,
            Self::InsufficientBalance { .. } => ErrorCode::InsufficientBalance,
            Self::UserRejected { .. } => ErrorCode::UserRejected,
            Self::Failed { .. } => ErrorCode::BridgeFailed,
        }
    }
}

/// Best-effort classification of an SDK failure message.
fn classify(error: AdapterError) -> BridgeError {
    let lowered = error.message.to_ascii_lowercase();

    if lowered.contains("insufficient") || lowered.contains("balance") {
        return BridgeError::InsufficientBalance {
            message: error.message,
        };
    }
    if lowered.contains("user rejected") || lowered.contains("denied") {
        return BridgeError::UserRejected {
            message: error.message,
        };
    }

    BridgeError::Failed {
        message: error.message,
    }
}

/// Drives a single bridge operation end to end.
pub struct BridgeOrchestrator<A> {
    registry: Arc<Registry>,
    adapter: A,
}

impl<A: BridgeAdapter> BridgeOrchestrator<A> {
    pub fn new(registry: Arc<Registry>, adapter: A) -> Self {
        Self { registry, adapter }
    }

    /// Validates and executes one bridge transfer.
    ///
    /// Wallet presence and amount validity are checked before the route,
    /// and the route before any adapter call, so input errors never cost
    /// a network round trip.
    pub async fn bridge(
        &self,
        wallet: Option<&dyn WalletProvider>,
        request: &BridgeRequest,
    ) -> Result<BridgeOutcome, BridgeError> {
        let wallet = wallet.ok_or(BridgeError::WalletNotConnected)?;

        let amount: TokenAmount = request.amount.parse()?;

        let route = validate_by_address(
            &self.registry,
            request.from_chain_id,
            request.to_chain_id,
            &request.from_token_address,
            &request.to_token_address,
        )?;

        let recipient = request.recipient.unwrap_or_else(|| wallet.address());

        info!(
            from = route.source.slug,
            to = route.destination.slug,
            token = route.token.symbol,
            %amount,
            %recipient,
            "Executing bridge transfer"
        );

        let params = BridgeParams {
            source_key: route.source.bridge_key,
            destination_key: route.destination.bridge_key,
            token_symbol: route.token.symbol,
            amount,
            recipient,
        };

        let execution = self.adapter.execute(wallet, params).await.map_err(classify)?;

        let source_tx = execution.step_tx(DEPOSIT_FOR_BURN_STEP);
        let destination_tx = execution.step_tx(MINT_STEP);

        if destination_tx.is_none() {
            debug!("Mint step has no transaction hash yet; destination leg pending");
        }

        Ok(BridgeOutcome {
            source_tx,
            destination_tx,
            tracking_url: execution.tracking_url,
        })
    }
}
