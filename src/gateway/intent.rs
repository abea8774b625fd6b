//! Burn intents: the EIP-712 structs and their wire form.
//!
//! A burn intent is a signed, time-bounded authorization to destroy value
//! on the source chain in exchange for an equivalent mint on the
//! destination chain. It is constructed per transfer attempt, signed once,
//! submitted once to the attestation service, and discarded; resubmitting
//! after expiry or after an attestation was issued is invalid.

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol;
use alloy::sol_types::Eip712Domain;
use serde::{Deserialize, Serialize};

use super::{EIP712_DOMAIN_NAME, EIP712_DOMAIN_VERSION, decimal_u256};

sol!(
    #![sol(all_derives = true)]

    /// Addressing and value of a single cross-chain transfer.
    struct TransferSpec {
        address sourceSigner;
        address destinationCaller;
        uint32 destinationDomain;
        address recipient;
        uint256 amount;
    }

    /// Time-bounded burn authorization. Invalid once the source chain
    /// passes `maxBlockHeight`; `maxFee` bounds what the attestation
    /// service may deduct.
    struct BurnIntent {
        uint256 maxBlockHeight;
        uint256 maxFee;
        TransferSpec spec;
    }
);

/// EIP-712 domain the intent is signed under on `chain_id`.
pub fn signing_domain(chain_id: u64) -> Eip712Domain {
    Eip712Domain {
        name: Some(EIP712_DOMAIN_NAME.into()),
        version: Some(EIP712_DOMAIN_VERSION.into()),
        chain_id: Some(U256::from(chain_id)),
        verifying_contract: None,
        salt: None,
    }
}

/// Wire form of [`TransferSpec`]; the amount travels as a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferSpecBody {
    pub source_signer: Address,
    pub destination_caller: Address,
    pub destination_domain: u32,
    pub recipient: Address,
    #[serde(with = "decimal_u256")]
    pub amount: U256,
}

/// Wire form of [`BurnIntent`] for the attestation service API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurnIntentBody {
    #[serde(with = "decimal_u256")]
    pub max_block_height: U256,
    #[serde(with = "decimal_u256")]
    pub max_fee: U256,
    pub spec: TransferSpecBody,
}

/// A burn intent alongside its EIP-712 signature, ready for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedBurnIntent {
    pub burn_intent: BurnIntentBody,
    pub signature: Bytes,
}

impl SignedBurnIntent {
    pub fn new(intent: &BurnIntent, signature: Bytes) -> Self {
        Self {
            burn_intent: intent.into(),
            signature,
        }
    }
}

impl From<&BurnIntent> for BurnIntentBody {
    fn from(intent: &BurnIntent) -> Self {
        Self {
            max_block_height: intent.maxBlockHeight,
            max_fee: intent.maxFee,
            spec: TransferSpecBody {
                source_signer: intent.spec.sourceSigner,
                destination_caller: intent.spec.destinationCaller,
                destination_domain: intent.spec.destinationDomain,
                recipient: intent.spec.recipient,
                amount: intent.spec.amount,
            },
        }
    }
}

impl From<&BurnIntentBody> for BurnIntent {
    fn from(body: &BurnIntentBody) -> Self {
        Self {
            maxBlockHeight: body.max_block_height,
            maxFee: body.max_fee,
            spec: TransferSpec {
                sourceSigner: body.spec.source_signer,
                destinationCaller: body.spec.destination_caller,
                destinationDomain: body.spec.destination_domain,
                recipient: body.spec.recipient,
                amount: body.spec.amount,
            },
        }
    }
}
