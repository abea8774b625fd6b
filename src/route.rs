//! Bridge route validation.
//!
//! Pure functions over the in-memory registries, no I/O and no side
//! effects. A route is a (source chain, destination chain, token) triple;
//! validation either resolves all three records or fails with the first
//! violated rule, in a fixed order.

use crate::registry::{ChainRecord, NATIVE_SENTINEL, Registry, TokenRecord};

/// A route that passed validation, with all three records resolved.
///
/// Constructed only by the validators, so holding a `ValidRoute` implies
/// every rule held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidRoute<'a> {
    pub source: &'a ChainRecord,
    pub destination: &'a ChainRecord,
    pub token: &'a TokenRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("Source and destination are the same chain ({chain_id})")]
    SameChain { chain_id: u64 },
    #[error("Unknown source chain id {chain_id}")]
    UnknownSourceChain { chain_id: u64 },
    #[error("Unknown destination chain id {chain_id}")]
    UnknownDestinationChain { chain_id: u64 },
    #[error("Native currency is not bridgeable")]
    NativeCurrency,
    #[error("Source token address {address} is not a supported token on chain {chain_id}")]
    UnknownSourceToken { address: String, chain_id: u64 },
    #[error("Destination token address {address} is not a supported token on chain {chain_id}")]
    UnknownDestinationToken { address: String, chain_id: u64 },
    #[error("Token symbols do not match: {from_symbol} on source, {to_symbol} on destination")]
    SymbolMismatch {
        from_symbol: &'static str,
        to_symbol: &'static str,
    },
    #[error("Unknown token symbol {symbol:?}")]
    UnknownToken { symbol: String },
    #[error("{symbol} is not supported on chain {chain_id} ({chain})")]
    NotSupportedOnChain {
        symbol: &'static str,
        chain_id: u64,
        chain: &'static str,
    },
}

fn resolve_chains(
    registry: &Registry,
    from_chain_id: u64,
    to_chain_id: u64,
) -> Result<(&ChainRecord, &ChainRecord), RouteError> {
    if from_chain_id == to_chain_id {
        return Err(RouteError::SameChain {
            chain_id: from_chain_id,
        });
    }

    let source = registry
        .chain(from_chain_id)
        .ok_or(RouteError::UnknownSourceChain {
            chain_id: from_chain_id,
        })?;
    let destination = registry
        .chain(to_chain_id)
        .ok_or(RouteError::UnknownDestinationChain {
            chain_id: to_chain_id,
        })?;

    Ok((source, destination))
}

fn ensure_deployed<'a>(
    token: &'a TokenRecord,
    chain: &ChainRecord,
) -> Result<(), RouteError> {
    // With load-time registry validation, a supported chain always has a
    // deployment address, so one check covers both rules.
    if token.address_on(chain.chain_id).is_none() {
        return Err(RouteError::NotSupportedOnChain {
            symbol: token.symbol,
            chain_id: chain.chain_id,
            chain: chain.name,
        });
    }
    Ok(())
}

/// Validates a route given a token symbol.
pub fn validate_by_symbol<'a>(
    registry: &'a Registry,
    from_chain_id: u64,
    to_chain_id: u64,
    symbol: &str,
) -> Result<ValidRoute<'a>, RouteError> {
    let (source, destination) = resolve_chains(registry, from_chain_id, to_chain_id)?;

    let token = registry.token(symbol).ok_or_else(|| RouteError::UnknownToken {
        symbol: symbol.to_string(),
    })?;

    ensure_deployed(token, source)?;
    ensure_deployed(token, destination)?;

    Ok(ValidRoute {
        source,
        destination,
        token,
    })
}

/// Validates a route given raw token addresses on each chain.
///
/// Both addresses must resolve to registered tokens and the resolved
/// symbols must match. This rejects superficially plausible routes such as
/// USDC on the source paired with EURC on the destination.
pub fn validate_by_address<'a>(
    registry: &'a Registry,
    from_chain_id: u64,
    to_chain_id: u64,
    from_token_address: &str,
    to_token_address: &str,
) -> Result<ValidRoute<'a>, RouteError> {
    let (source, destination) = resolve_chains(registry, from_chain_id, to_chain_id)?;

    if is_native(from_token_address) || is_native(to_token_address) {
        return Err(RouteError::NativeCurrency);
    }

    let from_token = registry
        .token_by_address(from_token_address, from_chain_id)
        .ok_or_else(|| RouteError::UnknownSourceToken {
            address: from_token_address.to_string(),
            chain_id: from_chain_id,
        })?;
    let to_token = registry
        .token_by_address(to_token_address, to_chain_id)
        .ok_or_else(|| RouteError::UnknownDestinationToken {
            address: to_token_address.to_string(),
            chain_id: to_chain_id,
        })?;

    if !from_token.symbol.eq_ignore_ascii_case(to_token.symbol) {
        return Err(RouteError::SymbolMismatch {
            from_symbol: from_token.symbol,
            to_symbol: to_token.symbol,
        });
    }

    Ok(ValidRoute {
        source,
        destination,
        token: from_token,
    })
}

fn is_native(address: &str) -> bool {
    address.trim().eq_ignore_ascii_case(NATIVE_SENTINEL)
}
