//! Gateway unified-balance protocol.
//!
//! Gateway lets a single deposited stablecoin balance be spent on any
//! supported chain: value is burned on the source chain under a signed,
//! time-bounded authorization (the burn intent) and minted on the
//! destination chain once the off-chain attestation service countersigns.
//! This module holds the typed HTTP client for the attestation service,
//! the per-chain contract-config resolver, the EIP-712 intent types, the
//! wallet seam, and the service that drives deposits and transfers.

mod client;
mod config;
mod intent;
mod service;
mod wallet;

pub use client::{
    BalanceSource, ChainInfo, DomainBalance, GatewayClient, GatewayClientError, InfoResponse,
    TransferAcceptance, TransferResponse,
};
pub use config::{CONFIG_TTL, GatewayChainConfig, GatewayConfigResolver};
pub use intent::{
    BurnIntent, BurnIntentBody, SignedBurnIntent, TransferSpec, TransferSpecBody, signing_domain,
};
pub use service::{
    GatewayError, GatewayService, MAX_INTENT_FEE, Operation, PendingMint, TransferReceipt,
};
pub use wallet::{EvmWallet, WalletClient, WalletError};

/// EIP-712 domain name the attestation service verifies against.
pub const EIP712_DOMAIN_NAME: &str = "Circle Gateway";

/// EIP-712 domain version.
pub const EIP712_DOMAIN_VERSION: &str = "1";

/// Blocks added to the current source-chain height to bound an intent's
/// lifetime. Fixed window, roughly several hours on typical block times.
pub const INTENT_BLOCK_WINDOW: u64 = 1000;

/// Serde adapters for the attestation API's integer encoding: every field
/// that may exceed 2^53 travels as a decimal string, never a JSON number.
pub(crate) mod decimal_u64 {
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

pub(crate) mod decimal_u256 {
    use alloy::primitives::U256;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
