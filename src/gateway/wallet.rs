//! On-chain wallet operations behind a trait seam.
//!
//! [`WalletClient`] is the surface the Gateway service drives: balance
//! and allowance reads, approvals, deposits, mint submission, and
//! EIP-712 burn intent signing. [`EvmWallet`] is the production
//! implementation over alloy providers; tests substitute a mock.

use std::collections::HashMap;

use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::providers::{PendingTransactionError, Provider};
use alloy::signers::Signer;
use alloy::sol_types::SolStruct;
use alloy::transports::{RpcError, TransportErrorKind};
use async_trait::async_trait;
use tracing::debug;

use crate::bindings::{IERC20, IGatewayMinter, IGatewayWallet};

use super::intent::{BurnIntent, signing_domain};

#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("no provider configured for chain {chain_id}")]
    UnsupportedChain { chain_id: u64 },
    #[error(transparent)]
    Contract(#[from] alloy::contract::Error),
    #[error(transparent)]
    Transaction(#[from] PendingTransactionError),
    #[error(transparent)]
    Rpc(#[from] RpcError<TransportErrorKind>),
    #[error(transparent)]
    Signer(#[from] alloy::signers::Error),
    #[error("{0}")]
    Other(String),
}

/// The wallet operations the Gateway flows need, keyed by chain id so a
/// single wallet can act on both legs of a transfer.
#[async_trait]
pub trait WalletClient: Send + Sync {
    fn address(&self) -> Address;

    async fn block_number(&self, chain_id: u64) -> Result<u64, WalletError>;

    async fn token_balance(&self, chain_id: u64, token: Address) -> Result<U256, WalletError>;

    async fn token_allowance(
        &self,
        chain_id: u64,
        token: Address,
        spender: Address,
    ) -> Result<U256, WalletError>;

    /// Approves `spender` for exactly `amount` and waits for the
    /// transaction to confirm.
    async fn approve(
        &self,
        chain_id: u64,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> Result<TxHash, WalletError>;

    /// Deposits `amount` of `token` into the Gateway wallet contract.
    async fn deposit(
        &self,
        chain_id: u64,
        gateway_wallet: Address,
        token: Address,
        amount: U256,
    ) -> Result<TxHash, WalletError>;

    /// Submits an attested mint to the Gateway minter contract.
    async fn gateway_mint(
        &self,
        chain_id: u64,
        gateway_minter: Address,
        attestation: Bytes,
        signature: Bytes,
    ) -> Result<TxHash, WalletError>;

    /// Signs the EIP-712 hash of `intent` under the Gateway domain for
    /// `chain_id`.
    async fn sign_burn_intent(
        &self,
        chain_id: u64,
        intent: &BurnIntent,
    ) -> Result<Bytes, WalletError>;
}

/// [`WalletClient`] over one alloy provider per chain and a single
/// signing key.
///
/// Providers are expected to fill transactions (nonce, gas, fees) and to
/// send from `owner`; a `ProviderBuilder` with a wallet layer satisfies
/// both.
pub struct EvmWallet<P, S> {
    providers: HashMap<u64, P>,
    signer: S,
    owner: Address,
}

impl<P, S> EvmWallet<P, S>
where
    P: Provider + Clone,
    S: Signer + Send + Sync,
{
    pub fn new(providers: HashMap<u64, P>, signer: S) -> Self {
        let owner = signer.address();
        Self {
            providers,
            signer,
            owner,
        }
    }

    fn provider(&self, chain_id: u64) -> Result<&P, WalletError> {
        self.providers
            .get(&chain_id)
            .ok_or(WalletError::UnsupportedChain { chain_id })
    }
}

#[async_trait]
impl<P, S> WalletClient for EvmWallet<P, S>
where
    P: Provider + Clone,
    S: Signer + Send + Sync,
{
    fn address(&self) -> Address {
        self.owner
    }

    async fn block_number(&self, chain_id: u64) -> Result<u64, WalletError> {
        Ok(self.provider(chain_id)?.get_block_number().await?)
    }

    async fn token_balance(&self, chain_id: u64, token: Address) -> Result<U256, WalletError> {
        let erc20 = IERC20::new(token, self.provider(chain_id)?.clone());
        Ok(erc20.balanceOf(self.owner).call().await?)
    }

    async fn token_allowance(
        &self,
        chain_id: u64,
        token: Address,
        spender: Address,
    ) -> Result<U256, WalletError> {
        let erc20 = IERC20::new(token, self.provider(chain_id)?.clone());
        Ok(erc20.allowance(self.owner, spender).call().await?)
    }

    async fn approve(
        &self,
        chain_id: u64,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> Result<TxHash, WalletError> {
        let erc20 = IERC20::new(token, self.provider(chain_id)?.clone());
        let receipt = erc20
            .approve(spender, amount)
            .send()
            .await?
            .get_receipt()
            .await?;
        debug!(chain_id, %token, %spender, %amount, tx = %receipt.transaction_hash, "Approved token spend");
        Ok(receipt.transaction_hash)
    }

    async fn deposit(
        &self,
        chain_id: u64,
        gateway_wallet: Address,
        token: Address,
        amount: U256,
    ) -> Result<TxHash, WalletError> {
        let wallet = IGatewayWallet::new(gateway_wallet, self.provider(chain_id)?.clone());
        let receipt = wallet
            .deposit(token, amount)
            .send()
            .await?
            .get_receipt()
            .await?;
        debug!(chain_id, %token, %amount, tx = %receipt.transaction_hash, "Deposited into Gateway wallet");
        Ok(receipt.transaction_hash)
    }

    async fn gateway_mint(
        &self,
        chain_id: u64,
        gateway_minter: Address,
        attestation: Bytes,
        signature: Bytes,
    ) -> Result<TxHash, WalletError> {
        let minter = IGatewayMinter::new(gateway_minter, self.provider(chain_id)?.clone());
        let receipt = minter
            .gatewayMint(attestation, signature)
            .send()
            .await?
            .get_receipt()
            .await?;
        debug!(chain_id, tx = %receipt.transaction_hash, "Submitted Gateway mint");
        Ok(receipt.transaction_hash)
    }

    async fn sign_burn_intent(
        &self,
        chain_id: u64,
        intent: &BurnIntent,
    ) -> Result<Bytes, WalletError> {
        let domain = signing_domain(chain_id);
        let hash = intent.eip712_signing_hash(&domain);
        let signature = self.signer.sign_hash(&hash).await?;
        Ok(Bytes::from(signature.as_bytes().to_vec()))
    }
}
