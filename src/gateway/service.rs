//! Deposit and transfer flows over the Gateway protocol.
//!
//! [`GatewayService`] owns the sequencing: it resolves contract
//! configs, validates balances before any state-changing call, keeps
//! approvals exact, and splits a transfer into the burn-intent
//! submission and the destination mint so a failed mint can be retried
//! from persisted state without burning again.

use std::collections::HashSet;
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};

use alloy::primitives::{Address, Bytes, TxHash, U256};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::amount::{AmountError, STABLECOIN_DECIMALS, TokenAmount};

use super::client::{GatewayClient, GatewayClientError};
use super::config::{GatewayChainConfig, GatewayConfigResolver};
use super::intent::{BurnIntent, SignedBurnIntent, TransferSpec};
use super::wallet::{WalletClient, WalletError};
use super::INTENT_BLOCK_WINDOW;

/// Fee ceiling signed into every burn intent. The testnet attestation
/// service charges nothing; raising this is a deliberate decision, not a
/// knob.
pub const MAX_INTENT_FEE: U256 = U256::ZERO;

/// The mutually exclusive flows; at most one of each may be in flight
/// per wallet address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Deposit,
    Transfer,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Deposit => "deposit",
            Self::Transfer => "transfer",
        })
    }
}

/// Everything needed to submit (or resubmit) a destination mint. The
/// attestation stays valid across process restarts, so callers may
/// persist this and retry later via [`GatewayService::mint_pending`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingMint {
    pub transfer_id: Uuid,
    pub destination_chain_id: u64,
    pub gateway_minter: Address,
    pub attestation: Bytes,
    pub signature: Bytes,
}

/// Outcome of a completed transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub transfer_id: Uuid,
    pub mint_tx: TxHash,
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("chain {chain_id} is not supported by Gateway")]
    UnsupportedChain { chain_id: u64 },
    #[error(transparent)]
    InvalidAmount(#[from] AmountError),
    #[error("balance {balance} is below the required {required} base units")]
    InsufficientBalance { balance: U256, required: U256 },
    #[error(transparent)]
    Wallet(#[from] WalletError),
    #[error(transparent)]
    Client(#[from] GatewayClientError),
    #[error("attestation service rejected the transfer: {message}")]
    AttestationRejected { message: String },
    #[error("mint failed for transfer {}; the attestation remains valid, retry with mint_pending", pending.transfer_id)]
    MintFailed {
        pending: Box<PendingMint>,
        #[source]
        source: WalletError,
    },
    #[error("a {operation} is already in flight for {address}")]
    OperationInProgress { address: Address, operation: Operation },
}

impl GatewayError {
    pub fn code(&self) -> crate::error::ErrorCode {
        use crate::error::ErrorCode;
        match self {
            Self::UnsupportedChain { .. } => ErrorCode::UnsupportedChain,
            Self::InvalidAmount(_) => ErrorCode::InvalidAmount,
            Self::InsufficientBalance { .. } => ErrorCode::InsufficientBalance,
            Self::Wallet(_) => ErrorCode::WalletFailure,
            Self::Client(_) => ErrorCode::ServiceUnavailable,
            Self::AttestationRejected { .. } => ErrorCode::AttestationRejected,
            Self::MintFailed { .. } => ErrorCode::MintFailed,
            Self::OperationInProgress { .. } => ErrorCode::OperationInProgress,
        }
    }
}

/// Drives the Gateway deposit and transfer flows against a
/// [`WalletClient`].
pub struct GatewayService {
    client: Arc<GatewayClient>,
    resolver: GatewayConfigResolver,
    in_flight: Mutex<HashSet<(Address, Operation)>>,
}

/// Releases the in-flight slot on drop, including on error paths.
struct OperationGuard<'a> {
    in_flight: &'a Mutex<HashSet<(Address, Operation)>>,
    key: (Address, Operation),
}

impl Drop for OperationGuard<'_> {
    fn drop(&mut self) {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}

impl GatewayService {
    pub fn new(client: Arc<GatewayClient>) -> Self {
        let resolver = GatewayConfigResolver::new(Arc::clone(&client));
        Self {
            client,
            resolver,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    pub fn resolver(&self) -> &GatewayConfigResolver {
        &self.resolver
    }

    fn acquire(
        &self,
        address: Address,
        operation: Operation,
    ) -> Result<OperationGuard<'_>, GatewayError> {
        let mut in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if !in_flight.insert((address, operation)) {
            return Err(GatewayError::OperationInProgress { address, operation });
        }
        Ok(OperationGuard {
            in_flight: &self.in_flight,
            key: (address, operation),
        })
    }

    async fn supported_config(&self, chain_id: u64) -> Result<GatewayChainConfig, GatewayError> {
        self.resolver
            .config(chain_id)
            .await
            .filter(GatewayChainConfig::is_complete)
            .ok_or(GatewayError::UnsupportedChain { chain_id })
    }

    fn base_units(amount: &str) -> Result<U256, GatewayError> {
        let amount = TokenAmount::from_str(amount)?;
        Ok(amount.to_base_units(STABLECOIN_DECIMALS)?)
    }

    /// Deposits `amount` of USDC on `chain_id` into the Gateway wallet
    /// contract, approving the exact amount first when the standing
    /// allowance falls short.
    ///
    /// The balance check runs before any state-changing call; on
    /// insufficient funds the chain is untouched.
    #[instrument(skip(self, wallet), fields(depositor = %wallet.address()))]
    pub async fn deposit<W: WalletClient + ?Sized>(
        &self,
        chain_id: u64,
        amount: &str,
        wallet: &W,
    ) -> Result<TxHash, GatewayError> {
        let _guard = self.acquire(wallet.address(), Operation::Deposit)?;
        let config = self.supported_config(chain_id).await?;
        let units = Self::base_units(amount)?;

        let balance = wallet.token_balance(chain_id, config.usdc).await?;
        if balance < units {
            return Err(GatewayError::InsufficientBalance {
                balance,
                required: units,
            });
        }

        let allowance = wallet
            .token_allowance(chain_id, config.usdc, config.gateway_wallet)
            .await?;
        if allowance < units {
            wallet
                .approve(chain_id, config.usdc, config.gateway_wallet, units)
                .await?;
        }

        let tx = wallet
            .deposit(chain_id, config.gateway_wallet, config.usdc, units)
            .await?;
        info!(chain_id, amount, %tx, "Gateway deposit confirmed");
        Ok(tx)
    }

    /// Moves `amount` of unified USDC balance from `from_chain_id` to
    /// `recipient` on `to_chain_id`: sign a burn intent, trade it for an
    /// attestation, submit the mint.
    ///
    /// A mint failure after a granted attestation returns
    /// [`GatewayError::MintFailed`] carrying a [`PendingMint`]; the burn
    /// already happened, so the caller must retry the mint rather than
    /// restart the transfer.
    #[instrument(skip(self, wallet), fields(signer = %wallet.address()))]
    pub async fn transfer<W: WalletClient + ?Sized>(
        &self,
        from_chain_id: u64,
        to_chain_id: u64,
        amount: &str,
        recipient: Address,
        wallet: &W,
    ) -> Result<TransferReceipt, GatewayError> {
        let _guard = self.acquire(wallet.address(), Operation::Transfer)?;
        let source = self.supported_config(from_chain_id).await?;
        let destination = self.supported_config(to_chain_id).await?;
        let units = Self::base_units(amount)?;

        let height = wallet.block_number(source.chain_id).await?;
        let intent = BurnIntent {
            maxBlockHeight: U256::from(height + INTENT_BLOCK_WINDOW),
            maxFee: MAX_INTENT_FEE,
            spec: TransferSpec {
                sourceSigner: wallet.address(),
                destinationCaller: wallet.address(),
                destinationDomain: destination.domain,
                recipient,
                amount: units,
            },
        };
        let signature = wallet.sign_burn_intent(source.chain_id, &intent).await?;

        let response = self
            .client
            .transfer(vec![SignedBurnIntent::new(&intent, signature)])
            .await?;
        let acceptance = response
            .into_acceptance()
            .map_err(|message| GatewayError::AttestationRejected { message })?;

        let pending = PendingMint {
            transfer_id: Uuid::new_v4(),
            destination_chain_id: destination.chain_id,
            gateway_minter: destination.gateway_minter,
            attestation: acceptance.attestation,
            signature: acceptance.signature,
        };
        info!(
            transfer_id = %pending.transfer_id,
            from_chain_id,
            to_chain_id,
            amount,
            "Burn intent attested, submitting mint"
        );

        match self.submit_mint(&pending, wallet).await {
            Ok(mint_tx) => {
                info!(transfer_id = %pending.transfer_id, %mint_tx, "Gateway transfer complete");
                Ok(TransferReceipt {
                    transfer_id: pending.transfer_id,
                    mint_tx,
                })
            }
            Err(source) => {
                warn!(
                    transfer_id = %pending.transfer_id,
                    %source,
                    "Mint failed after attestation; value is burned until the mint is retried"
                );
                Err(GatewayError::MintFailed {
                    pending: Box::new(pending),
                    source,
                })
            }
        }
    }

    /// Retries the destination mint of a transfer whose burn already
    /// succeeded.
    pub async fn mint_pending<W: WalletClient + ?Sized>(
        &self,
        pending: &PendingMint,
        wallet: &W,
    ) -> Result<TxHash, GatewayError> {
        let _guard = self.acquire(wallet.address(), Operation::Transfer)?;
        let mint_tx = self.submit_mint(pending, wallet).await?;
        info!(transfer_id = %pending.transfer_id, %mint_tx, "Pending mint completed");
        Ok(mint_tx)
    }

    async fn submit_mint<W: WalletClient + ?Sized>(
        &self,
        pending: &PendingMint,
        wallet: &W,
    ) -> Result<TxHash, WalletError> {
        wallet
            .gateway_mint(
                pending.destination_chain_id,
                pending.gateway_minter,
                pending.attestation.clone(),
                pending.signature.clone(),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockWallet, WalletCall};
    use httpmock::prelude::*;
    use serde_json::json;
    use url::Url;

    const SEPOLIA: u64 = 11155111;
    const BASE_SEPOLIA: u64 = 84532;

    fn info_body() -> serde_json::Value {
        json!({
            "supportedChains": [
                {
                    "domain": 0,
                    "chainId": "11155111",
                    "name": "Ethereum Sepolia",
                    "gatewayWallet": "0x0077777d7eba4688bdef3e311b846f25870a19b9",
                    "gatewayMinter": "0x0022222abe238cc2c7bb1f21003f0a260052475b",
                    "usdc": "0x1c7d4b196cb0c7b01d743fbc6116a902379c7238"
                },
                {
                    "domain": 6,
                    "chainId": "84532",
                    "name": "Base Sepolia",
                    "gatewayWallet": "0x0077777d7eba4688bdef3e311b846f25870a19b9",
                    "gatewayMinter": "0x0022222abe238cc2c7bb1f21003f0a260052475b",
                    "usdc": "0x036cbd53842c5426634e7929541ec2318f3dcf7e"
                }
            ]
        })
    }

    fn service(server: &MockServer) -> GatewayService {
        let client = Arc::new(GatewayClient::new(Url::parse(&server.base_url()).unwrap()));
        GatewayService::new(client)
    }

    fn mock_info(server: &MockServer) {
        server.mock(|when, then| {
            when.method(GET).path("/info");
            then.status(200).json_body(info_body());
        });
    }

    fn mock_transfer_accepted(server: &MockServer) {
        server.mock(|when, then| {
            when.method(POST).path("/transfer");
            then.status(201).json_body(json!({
                "success": true,
                "attestation": "0xdead",
                "signature": "0xbeef"
            }));
        });
    }

    #[tokio::test]
    async fn insufficient_balance_rejected_before_any_write() {
        let server = MockServer::start();
        mock_info(&server);
        let service = service(&server);
        let wallet = MockWallet::new(U256::from(1_000_000u64), U256::ZERO, 500);

        let error = service
            .deposit(SEPOLIA, "12.5", &wallet)
            .await
            .unwrap_err();
        match error {
            GatewayError::InsufficientBalance { balance, required } => {
                assert_eq!(balance, U256::from(1_000_000u64));
                assert_eq!(required, U256::from(12_500_000u64));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(wallet.calls().is_empty());
    }

    #[tokio::test]
    async fn short_allowance_triggers_exact_approve_then_deposit() {
        let server = MockServer::start();
        mock_info(&server);
        let service = service(&server);
        let wallet = MockWallet::new(U256::from(50_000_000u64), U256::ZERO, 500);

        service.deposit(SEPOLIA, "12.5", &wallet).await.unwrap();

        let calls = wallet.calls();
        assert_eq!(calls.len(), 2);
        match &calls[0] {
            WalletCall::Approve { spender, amount } => {
                assert_eq!(
                    *spender,
                    "0x0077777d7EBA4688BDeF3E311b846F25870A19B9"
                        .parse::<Address>()
                        .unwrap()
                );
                assert_eq!(*amount, U256::from(12_500_000u64));
            }
            other => panic!("expected approve first, got {other:?}"),
        }
        assert!(matches!(
            &calls[1],
            WalletCall::Deposit { amount } if *amount == U256::from(12_500_000u64)
        ));
    }

    #[tokio::test]
    async fn sufficient_allowance_skips_approve() {
        let server = MockServer::start();
        mock_info(&server);
        let service = service(&server);
        let wallet = MockWallet::new(
            U256::from(50_000_000u64),
            U256::from(100_000_000u64),
            500,
        );

        service.deposit(SEPOLIA, "12.5", &wallet).await.unwrap();

        let calls = wallet.calls();
        assert_eq!(calls.len(), 1);
        assert!(matches!(&calls[0], WalletCall::Deposit { .. }));
    }

    #[tokio::test]
    async fn unsupported_chain_is_rejected() {
        let server = MockServer::start();
        mock_info(&server);
        let service = service(&server);
        let wallet = MockWallet::new(U256::from(50_000_000u64), U256::ZERO, 500);

        let error = service.deposit(424242, "1", &wallet).await.unwrap_err();
        assert!(matches!(
            error,
            GatewayError::UnsupportedChain { chain_id: 424242 }
        ));
    }

    #[tokio::test]
    async fn intent_lifetime_is_bounded_by_block_window() {
        let server = MockServer::start();
        mock_info(&server);
        mock_transfer_accepted(&server);
        let service = service(&server);
        let wallet = MockWallet::new(U256::from(50_000_000u64), U256::ZERO, 500);
        let recipient = wallet.address();

        service
            .transfer(SEPOLIA, BASE_SEPOLIA, "3.25", recipient, &wallet)
            .await
            .unwrap();

        let signed = wallet.signed_intents();
        assert_eq!(signed.len(), 1);
        let (chain_id, intent) = &signed[0];
        assert_eq!(*chain_id, SEPOLIA);
        assert_eq!(intent.maxBlockHeight, U256::from(1500u64));
        assert_eq!(intent.maxFee, U256::ZERO);
        assert_eq!(intent.spec.destinationDomain, 6);
        assert_eq!(intent.spec.amount, U256::from(3_250_000u64));
        assert_eq!(intent.spec.recipient, recipient);
    }

    #[tokio::test]
    async fn rejected_attestation_surfaces_message_without_minting() {
        let server = MockServer::start();
        mock_info(&server);
        server.mock(|when, then| {
            when.method(POST).path("/transfer");
            then.status(201).json_body(json!({
                "success": false,
                "message": "intent expired"
            }));
        });
        let service = service(&server);
        let wallet = MockWallet::new(U256::from(50_000_000u64), U256::ZERO, 500);
        let recipient = wallet.address();

        let error = service
            .transfer(SEPOLIA, BASE_SEPOLIA, "1", recipient, &wallet)
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            GatewayError::AttestationRejected { ref message } if message == "intent expired"
        ));
        assert_eq!(wallet.mint_count(), 0);
    }

    #[tokio::test]
    async fn failed_mint_yields_retryable_pending_state() {
        let server = MockServer::start();
        mock_info(&server);
        mock_transfer_accepted(&server);
        let service = service(&server);
        let wallet = MockWallet::new(U256::from(50_000_000u64), U256::ZERO, 500);
        let recipient = wallet.address();
        wallet.fail_next_mint();

        let error = service
            .transfer(SEPOLIA, BASE_SEPOLIA, "1", recipient, &wallet)
            .await
            .unwrap_err();
        let pending = match error {
            GatewayError::MintFailed { pending, .. } => *pending,
            other => panic!("unexpected error: {other:?}"),
        };
        assert_eq!(pending.destination_chain_id, BASE_SEPOLIA);
        assert_eq!(pending.attestation, Bytes::from(vec![0xde, 0xad]));
        assert_eq!(pending.signature, Bytes::from(vec![0xbe, 0xef]));

        let mint_tx = service.mint_pending(&pending, &wallet).await.unwrap();
        assert_ne!(mint_tx, TxHash::ZERO);
        assert_eq!(wallet.mint_count(), 2);
    }

    #[tokio::test]
    async fn duplicate_operation_per_address_is_refused() {
        let server = MockServer::start();
        mock_info(&server);
        let service = service(&server);
        let wallet = MockWallet::new(U256::from(50_000_000u64), U256::ZERO, 500);

        let guard = service
            .acquire(wallet.address(), Operation::Deposit)
            .unwrap();
        let error = service.deposit(SEPOLIA, "1", &wallet).await.unwrap_err();
        assert!(matches!(
            error,
            GatewayError::OperationInProgress {
                operation: Operation::Deposit,
                ..
            }
        ));

        // A different operation for the same address is independent.
        service
            .acquire(wallet.address(), Operation::Transfer)
            .unwrap();

        drop(guard);
        service.deposit(SEPOLIA, "1", &wallet).await.unwrap();
    }

    #[test]
    fn pending_mint_round_trips_through_json() {
        let pending = PendingMint {
            transfer_id: Uuid::new_v4(),
            destination_chain_id: BASE_SEPOLIA,
            gateway_minter: "0x0022222ABE238Cc2C7Bb1f21003F0a260052475B"
                .parse()
                .unwrap(),
            attestation: Bytes::from(vec![0xde, 0xad]),
            signature: Bytes::from(vec![0xbe, 0xef]),
        };

        let encoded = serde_json::to_string(&pending).unwrap();
        let decoded: PendingMint = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, pending);
    }
}
