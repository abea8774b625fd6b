//! Static registries of supported chains and stablecoins.
//!
//! Both registries are populated once from the builtin tables in
//! [`chains`] and [`tokens`] and are immutable afterwards. They are the
//! configuration surface an operator edits to add a chain or token; every
//! invariant on that data (unique chain ids and slugs, known deployment
//! chains, no zero deployment addresses) is checked at load time by
//! [`Registry::new`] instead of being tolerated downstream.
//!
//! All lookups return `Option` and never panic: "not found" is a normal
//! answer the caller must handle, not an error.

mod chains;
mod tokens;

use std::collections::BTreeMap;

use alloy::primitives::Address;

/// Sentinel address string used by wallet UIs for a chain's native asset.
///
/// Native assets are not bridgeable; the token registry treats this value
/// (and the zero address) as "not a supported token".
pub const NATIVE_SENTINEL: &str = "native";

/// Native-currency descriptor for a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeCurrency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

/// One supported blockchain network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRecord {
    /// Public chain identifier (EIP-155), unique across the registry.
    pub chain_id: u64,
    pub name: &'static str,
    /// URL-safe slug, unique across the registry.
    pub slug: &'static str,
    /// Domain id in the cross-chain messaging protocol's addressing
    /// scheme. Several chain ids may share one domain when they are the
    /// same logical network behind different RPC endpoints.
    pub domain: u32,
    /// Identifier for this chain in the external bridging SDK's own
    /// chain-naming scheme.
    pub bridge_key: &'static str,
    pub rpc_url: Option<&'static str>,
    pub explorer_url: Option<&'static str>,
    pub testnet: bool,
    pub native_currency: NativeCurrency,
}

/// One supported stablecoin across every chain it is deployed on.
///
/// The set of supported chains *is* the key set of `deployments`: a chain
/// cannot be "supported" without a recorded contract address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    /// Symbol, matched case-insensitively everywhere.
    pub symbol: &'static str,
    pub name: &'static str,
    /// Decimal count, fixed per symbol across all chains. Amount math
    /// relies on this holding uniformly.
    pub decimals: u8,
    /// Chain id to contract address, only for chains the token is
    /// deployed on.
    pub deployments: BTreeMap<u64, Address>,
}

impl TokenRecord {
    /// Contract address of this token on `chain_id`, if deployed there.
    pub fn address_on(&self, chain_id: u64) -> Option<Address> {
        self.deployments.get(&chain_id).copied()
    }

    /// Chain ids this token is deployed on.
    pub fn supported_chains(&self) -> impl Iterator<Item = u64> + '_ {
        self.deployments.keys().copied()
    }
}

/// Registry configuration rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Duplicate chain id {chain_id} in chain table")]
    DuplicateChainId { chain_id: u64 },
    #[error("Duplicate chain slug {slug:?} in chain table")]
    DuplicateSlug { slug: &'static str },
    #[error("Duplicate bridge key {bridge_key:?} in chain table")]
    DuplicateBridgeKey { bridge_key: &'static str },
    #[error("Duplicate token symbol {symbol:?} in token table")]
    DuplicateSymbol { symbol: &'static str },
    #[error("Token {symbol} is deployed on unknown chain id {chain_id}")]
    UnknownDeploymentChain { symbol: &'static str, chain_id: u64 },
    #[error("Token {symbol} has a zero deployment address on chain {chain_id}")]
    ZeroDeploymentAddress { symbol: &'static str, chain_id: u64 },
}

/// In-process lookup tables for chains and tokens.
#[derive(Debug, Clone)]
pub struct Registry {
    chains: Vec<ChainRecord>,
    tokens: Vec<TokenRecord>,
}

impl Registry {
    /// Builds a registry, validating the configuration.
    pub fn new(chains: Vec<ChainRecord>, tokens: Vec<TokenRecord>) -> Result<Self, RegistryError> {
        for (index, chain) in chains.iter().enumerate() {
            let earlier = &chains[..index];
            if earlier.iter().any(|c| c.chain_id == chain.chain_id) {
                return Err(RegistryError::DuplicateChainId {
                    chain_id: chain.chain_id,
                });
            }
            if earlier.iter().any(|c| c.slug == chain.slug) {
                return Err(RegistryError::DuplicateSlug { slug: chain.slug });
            }
            if earlier.iter().any(|c| c.bridge_key == chain.bridge_key) {
                return Err(RegistryError::DuplicateBridgeKey {
                    bridge_key: chain.bridge_key,
                });
            }
        }

        for (index, token) in tokens.iter().enumerate() {
            if tokens[..index]
                .iter()
                .any(|t| t.symbol.eq_ignore_ascii_case(token.symbol))
            {
                return Err(RegistryError::DuplicateSymbol {
                    symbol: token.symbol,
                });
            }

            for (&chain_id, address) in &token.deployments {
                if !chains.iter().any(|c| c.chain_id == chain_id) {
                    return Err(RegistryError::UnknownDeploymentChain {
                        symbol: token.symbol,
                        chain_id,
                    });
                }
                if address.is_zero() {
                    return Err(RegistryError::ZeroDeploymentAddress {
                        symbol: token.symbol,
                        chain_id,
                    });
                }
            }
        }

        Ok(Self { chains, tokens })
    }

    /// Loads the builtin chain and token tables.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(chains::builtin(), tokens::builtin())
    }

    pub fn chains(&self) -> &[ChainRecord] {
        &self.chains
    }

    pub fn tokens(&self) -> &[TokenRecord] {
        &self.tokens
    }

    pub fn chain(&self, chain_id: u64) -> Option<&ChainRecord> {
        self.chains.iter().find(|c| c.chain_id == chain_id)
    }

    pub fn chain_by_slug(&self, slug: &str) -> Option<&ChainRecord> {
        self.chains.iter().find(|c| c.slug == slug)
    }

    /// First chain carrying the given protocol domain id. Domains are not
    /// necessarily unique per chain id.
    pub fn chain_by_domain(&self, domain: u32) -> Option<&ChainRecord> {
        self.chains.iter().find(|c| c.domain == domain)
    }

    pub fn chain_by_bridge_key(&self, bridge_key: &str) -> Option<&ChainRecord> {
        self.chains.iter().find(|c| c.bridge_key == bridge_key)
    }

    /// Token by symbol, case-insensitive.
    pub fn token(&self, symbol: &str) -> Option<&TokenRecord> {
        self.tokens
            .iter()
            .find(|t| t.symbol.eq_ignore_ascii_case(symbol))
    }

    /// Token deployed at `address` on `chain_id`.
    ///
    /// The address is normalized to lowercase before comparison. The zero
    /// address and the literal `"native"` are never a supported token.
    pub fn token_by_address(&self, address: &str, chain_id: u64) -> Option<&TokenRecord> {
        let normalized = address.trim().to_ascii_lowercase();
        if normalized == NATIVE_SENTINEL {
            return None;
        }

        let parsed: Address = normalized.parse().ok()?;
        if parsed.is_zero() {
            return None;
        }

        self.tokens
            .iter()
            .find(|t| t.address_on(chain_id) == Some(parsed))
    }

    /// Every token deployed on `chain_id`, possibly empty.
    pub fn supported_tokens(&self, chain_id: u64) -> Vec<&TokenRecord> {
        self.tokens
            .iter()
            .filter(|t| t.deployments.contains_key(&chain_id))
            .collect()
    }

    pub fn is_token_supported(&self, symbol: &str, chain_id: u64) -> bool {
        self.token(symbol)
            .is_some_and(|t| t.deployments.contains_key(&chain_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    fn registry() -> Registry {
        Registry::builtin().expect("builtin tables are valid")
    }

    #[test]
    fn builtin_tables_load() {
        let registry = registry();
        assert!(registry.chains().len() >= 30);
        assert_eq!(registry.tokens().len(), 2);
    }

    #[test]
    fn unknown_lookups_return_none() {
        let registry = registry();
        assert!(registry.chain(999_999_999).is_none());
        assert!(registry.chain_by_slug("no-such-chain").is_none());
        assert!(registry.chain_by_domain(u32::MAX).is_none());
        assert!(registry.chain_by_bridge_key("NoSuchChain").is_none());
        assert!(registry.token("DOGE").is_none());
        assert!(registry.supported_tokens(999_999_999).is_empty());
    }

    #[test]
    fn chain_lookup_resolves_builtin_entries() {
        let registry = registry();
        let base_sepolia = registry.chain(84532).expect("Base Sepolia registered");
        assert_eq!(base_sepolia.name, "Base Sepolia");
        assert_eq!(base_sepolia.slug, "base-sepolia");
        assert_eq!(base_sepolia.domain, 6);
        assert!(base_sepolia.testnet);

        let arc = registry.chain(5042002).expect("Arc Testnet registered");
        assert_eq!(arc.name, "Arc Testnet");
        assert_eq!(
            registry.chain_by_slug("arc-testnet").map(|c| c.chain_id),
            Some(5042002)
        );
    }

    #[test]
    fn token_symbol_lookup_is_case_insensitive() {
        let registry = registry();
        assert!(registry.token("usdc").is_some());
        assert!(registry.token("Usdc").is_some());
        assert!(registry.token("EURC").is_some());
    }

    #[test]
    fn is_token_supported_mirrors_deployment_set() {
        let registry = registry();
        for token in registry.tokens() {
            for chain in registry.chains() {
                assert_eq!(
                    registry.is_token_supported(token.symbol, chain.chain_id),
                    token.deployments.contains_key(&chain.chain_id),
                );
            }
        }
    }

    #[test]
    fn token_by_address_rejects_sentinels() {
        let registry = registry();
        assert!(registry.token_by_address(NATIVE_SENTINEL, 84532).is_none());
        assert!(registry.token_by_address("Native", 84532).is_none());
        assert!(
            registry
                .token_by_address("0x0000000000000000000000000000000000000000", 84532)
                .is_none()
        );
        assert!(registry.token_by_address("not-an-address", 84532).is_none());
    }

    #[test]
    fn token_by_address_normalizes_case() {
        let registry = registry();
        let usdc = registry.token("USDC").expect("USDC registered");
        let deployment = usdc.address_on(84532).expect("deployed on Base Sepolia");

        let lower = format!("{deployment:?}").to_ascii_lowercase();
        let upper = lower.to_ascii_uppercase().replace("0X", "0x");

        assert!(registry.token_by_address(&lower, 84532).is_some());
        assert!(registry.token_by_address(&upper, 84532).is_some());
        // Right address, wrong chain.
        assert!(registry.token_by_address(&lower, 11155111).is_none());
    }

    #[test]
    fn rejects_zero_deployment_address() {
        let chains = chains::builtin();
        let tokens = vec![TokenRecord {
            symbol: "BAD",
            name: "Bad Token",
            decimals: 6,
            deployments: BTreeMap::from([(84532, Address::ZERO)]),
        }];

        let error = Registry::new(chains, tokens).err();
        assert_eq!(
            error,
            Some(RegistryError::ZeroDeploymentAddress {
                symbol: "BAD",
                chain_id: 84532
            })
        );
    }

    #[test]
    fn rejects_deployment_on_unknown_chain() {
        let chains = chains::builtin();
        let tokens = vec![TokenRecord {
            symbol: "BAD",
            name: "Bad Token",
            decimals: 6,
            deployments: BTreeMap::from([(
                424242,
                address!("0x036CbD53842c5426634e7929541eC2318f3dCF7e"),
            )]),
        }];

        let error = Registry::new(chains, tokens).err();
        assert_eq!(
            error,
            Some(RegistryError::UnknownDeploymentChain {
                symbol: "BAD",
                chain_id: 424242
            })
        );
    }

    #[test]
    fn rejects_duplicate_chain_id() {
        let mut chains = chains::builtin();
        let first = chains[0].clone();
        chains.push(ChainRecord {
            slug: "duplicate",
            bridge_key: "Duplicate",
            ..first
        });

        let error = Registry::new(chains, tokens::builtin()).err();
        assert!(matches!(
            error,
            Some(RegistryError::DuplicateChainId { .. })
        ));
    }
}
