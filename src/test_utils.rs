//! Shared test doubles.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use alloy::primitives::{Address, Bytes, TxHash, U256, address};
use async_trait::async_trait;

use crate::gateway::{BurnIntent, WalletClient, WalletError};

/// State-changing calls a [`MockWallet`] received, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WalletCall {
    Approve { spender: Address, amount: U256 },
    Deposit { amount: U256 },
    Mint,
}

/// [`WalletClient`] double with a fixed balance, allowance, and block
/// height. Records every write so tests can assert ordering.
pub(crate) struct MockWallet {
    address: Address,
    balance: U256,
    allowance: U256,
    block_height: u64,
    fail_next_mint: AtomicBool,
    mint_count: AtomicUsize,
    calls: Mutex<Vec<WalletCall>>,
    signed: Mutex<Vec<(u64, BurnIntent)>>,
}

impl MockWallet {
    pub(crate) fn new(balance: U256, allowance: U256, block_height: u64) -> Self {
        Self {
            address: address!("0x1111111111111111111111111111111111111111"),
            balance,
            allowance,
            block_height,
            fail_next_mint: AtomicBool::new(false),
            mint_count: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
            signed: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn fail_next_mint(&self) {
        self.fail_next_mint.store(true, Ordering::SeqCst);
    }

    pub(crate) fn calls(&self) -> Vec<WalletCall> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn signed_intents(&self) -> Vec<(u64, BurnIntent)> {
        self.signed.lock().unwrap().clone()
    }

    pub(crate) fn mint_count(&self) -> usize {
        self.mint_count.load(Ordering::SeqCst)
    }

    fn record(&self, call: WalletCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl WalletClient for MockWallet {
    fn address(&self) -> Address {
        self.address
    }

    async fn block_number(&self, _chain_id: u64) -> Result<u64, WalletError> {
        Ok(self.block_height)
    }

    async fn token_balance(&self, _chain_id: u64, _token: Address) -> Result<U256, WalletError> {
        Ok(self.balance)
    }

    async fn token_allowance(
        &self,
        _chain_id: u64,
        _token: Address,
        _spender: Address,
    ) -> Result<U256, WalletError> {
        Ok(self.allowance)
    }

    async fn approve(
        &self,
        _chain_id: u64,
        _token: Address,
        spender: Address,
        amount: U256,
    ) -> Result<TxHash, WalletError> {
        self.record(WalletCall::Approve { spender, amount });
        Ok(TxHash::with_last_byte(0xa1))
    }

    async fn deposit(
        &self,
        _chain_id: u64,
        _gateway_wallet: Address,
        _token: Address,
        amount: U256,
    ) -> Result<TxHash, WalletError> {
        self.record(WalletCall::Deposit { amount });
        Ok(TxHash::with_last_byte(0xd1))
    }

    async fn gateway_mint(
        &self,
        _chain_id: u64,
        _gateway_minter: Address,
        _attestation: Bytes,
        _signature: Bytes,
    ) -> Result<TxHash, WalletError> {
        self.mint_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_next_mint.swap(false, Ordering::SeqCst) {
            return Err(WalletError::Other("mint transaction reverted".to_string()));
        }
        self.record(WalletCall::Mint);
        Ok(TxHash::with_last_byte(0xf1))
    }

    async fn sign_burn_intent(
        &self,
        chain_id: u64,
        intent: &BurnIntent,
    ) -> Result<Bytes, WalletError> {
        self.signed.lock().unwrap().push((chain_id, intent.clone()));
        Ok(Bytes::from_static(&[0x51, 0x67]))
    }
}
