//! Per-chain Gateway contract configuration.
//!
//! Contract addresses come from the attestation service's `info`
//! endpoint and are cached per chain with an independent TTL per entry,
//! so one chain's refresh never masks another's staleness. When the
//! service is unreachable the resolver falls back to a static table that
//! is known to be incomplete: entries with zero addresses resolve but
//! count as unsupported.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use alloy::primitives::{Address, address};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::client::{ChainInfo, GatewayClient};

/// How long a fetched config stays fresh.
pub const CONFIG_TTL: Duration = Duration::from_secs(60 * 60);

/// Addresses of the Gateway protocol's contracts on one chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayChainConfig {
    pub chain_id: u64,
    pub domain: u32,
    /// Escrow contract deposits are made to.
    pub gateway_wallet: Address,
    /// Contract the attested mint is submitted to.
    pub gateway_minter: Address,
    pub usdc: Address,
}

impl GatewayChainConfig {
    /// False for fallback entries whose addresses are not yet known;
    /// such a config is equivalent to "not supported".
    pub fn is_complete(&self) -> bool {
        !self.gateway_wallet.is_zero()
            && !self.gateway_minter.is_zero()
            && !self.usdc.is_zero()
    }
}

impl From<&ChainInfo> for GatewayChainConfig {
    fn from(chain: &ChainInfo) -> Self {
        Self {
            chain_id: chain.chain_id,
            domain: chain.domain,
            gateway_wallet: chain.gateway_wallet,
            gateway_minter: chain.gateway_minter,
            usdc: chain.usdc,
        }
    }
}

const GATEWAY_WALLET_TESTNET: Address = address!("0x0077777d7EBA4688BDeF3E311b846F25870A19B9");
const GATEWAY_MINTER_TESTNET: Address = address!("0x0022222ABE238Cc2C7Bb1f21003F0a260052475B");

/// Hand-maintained fallback used when the service cannot be reached.
/// Entries with zero addresses are chains the protocol has announced but
/// not yet deployed to.
const STATIC_FALLBACK: &[GatewayChainConfig] = &[
    GatewayChainConfig {
        chain_id: 11155111,
        domain: 0,
        gateway_wallet: GATEWAY_WALLET_TESTNET,
        gateway_minter: GATEWAY_MINTER_TESTNET,
        usdc: address!("0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7238"),
    },
    GatewayChainConfig {
        chain_id: 43113,
        domain: 1,
        gateway_wallet: GATEWAY_WALLET_TESTNET,
        gateway_minter: GATEWAY_MINTER_TESTNET,
        usdc: address!("0x5425890298aed601595a70AB815c96711a31Bc65"),
    },
    GatewayChainConfig {
        chain_id: 84532,
        domain: 6,
        gateway_wallet: GATEWAY_WALLET_TESTNET,
        gateway_minter: GATEWAY_MINTER_TESTNET,
        usdc: address!("0x036CbD53842c5426634e7929541eC2318f3dCF7e"),
    },
    GatewayChainConfig {
        chain_id: 5042002,
        domain: 26,
        gateway_wallet: GATEWAY_WALLET_TESTNET,
        gateway_minter: GATEWAY_MINTER_TESTNET,
        usdc: address!("0x3600D4f2d2A45dAeED8A20d1b6Edc58Ba7aE2c95"),
    },
    GatewayChainConfig {
        chain_id: 11155420,
        domain: 2,
        gateway_wallet: Address::ZERO,
        gateway_minter: Address::ZERO,
        usdc: Address::ZERO,
    },
    GatewayChainConfig {
        chain_id: 421614,
        domain: 3,
        gateway_wallet: Address::ZERO,
        gateway_minter: Address::ZERO,
        usdc: Address::ZERO,
    },
    GatewayChainConfig {
        chain_id: 80002,
        domain: 7,
        gateway_wallet: Address::ZERO,
        gateway_minter: Address::ZERO,
        usdc: Address::ZERO,
    },
];

struct CacheEntry {
    config: GatewayChainConfig,
    fetched_at: Instant,
}

/// Resolves Gateway contract addresses with a time-bounded cache.
///
/// Concurrent fetches for the same chain are not deduplicated; the last
/// write wins, which is acceptable because writes are rare and identical.
pub struct GatewayConfigResolver {
    client: Arc<GatewayClient>,
    cache: RwLock<HashMap<u64, CacheEntry>>,
    ttl: Duration,
}

impl GatewayConfigResolver {
    pub fn new(client: Arc<GatewayClient>) -> Self {
        Self::with_ttl(client, CONFIG_TTL)
    }

    pub fn with_ttl(client: Arc<GatewayClient>, ttl: Duration) -> Self {
        Self {
            client,
            cache: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Gateway config for `chain_id`, if the service (or the fallback
    /// table) knows the chain.
    ///
    /// The returned config may be incomplete when it came from the
    /// fallback table; check [`GatewayChainConfig::is_complete`] or use
    /// [`Self::is_supported`].
    pub async fn config(&self, chain_id: u64) -> Option<GatewayChainConfig> {
        {
            let cache = self.cache.read().await;
            if let Some(entry) = cache.get(&chain_id) {
                if entry.fetched_at.elapsed() < self.ttl {
                    return Some(entry.config.clone());
                }
            }
        }

        match self.client.info().await {
            Ok(info) => {
                let fetched_at = Instant::now();
                let mut cache = self.cache.write().await;
                let mut found = None;

                for chain in &info.supported_chains {
                    let config = GatewayChainConfig::from(chain);
                    if config.chain_id == chain_id {
                        found = Some(config.clone());
                    }
                    cache.insert(config.chain_id, CacheEntry { config, fetched_at });
                }

                debug!(
                    chain_count = info.supported_chains.len(),
                    requested = chain_id,
                    hit = found.is_some(),
                    "Refreshed Gateway chain configs"
                );
                found
            }
            Err(error) => {
                warn!(
                    chain_id,
                    %error,
                    "Gateway info fetch failed; using static fallback config"
                );
                STATIC_FALLBACK
                    .iter()
                    .find(|config| config.chain_id == chain_id)
                    .cloned()
            }
        }
    }

    /// True iff a complete config resolves for `chain_id`.
    pub async fn is_supported(&self, chain_id: u64) -> bool {
        self.config(chain_id)
            .await
            .is_some_and(|config| config.is_complete())
    }
}
