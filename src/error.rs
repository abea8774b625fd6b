//! Normalization of domain errors into the single shape the UI renders.
//!
//! Every internal error becomes an [`AppError`] carrying a machine-readable
//! [`ErrorCode`] and a human-readable message before it reaches the UI
//! layer. The UI renders the message verbatim; nothing in this crate
//! retries on its own.

use serde::Serialize;

use crate::amount::AmountError;
use crate::bridge::BridgeError;
use crate::gateway::{GatewayClientError, GatewayError};
use crate::route::RouteError;

/// Machine-readable error codes surfaced alongside every error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    WalletNotConnected,
    RouteNotAvailable,
    InvalidAmount,
    InsufficientBalance,
    UserRejected,
    BridgeFailed,
    UnsupportedChain,
    AttestationRejected,
    MintFailed,
    OperationInProgress,
    WalletFailure,
    ServiceUnavailable,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WalletNotConnected => "WALLET_NOT_CONNECTED",
            Self::RouteNotAvailable => "ROUTE_NOT_AVAILABLE",
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::InsufficientBalance => "INSUFFICIENT_BALANCE",
            Self::UserRejected => "USER_REJECTED",
            Self::BridgeFailed => "BRIDGE_FAILED",
            Self::UnsupportedChain => "UNSUPPORTED_CHAIN",
            Self::AttestationRejected => "ATTESTATION_REJECTED",
            Self::MintFailed => "MINT_FAILED",
            Self::OperationInProgress => "OPERATION_IN_PROGRESS",
            Self::WalletFailure => "WALLET_FAILURE",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The one error shape the UI layer sees.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{code}: {message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<BridgeError> for AppError {
    fn from(error: BridgeError) -> Self {
        Self::new(error.code(), error.to_string())
    }
}

impl From<GatewayError> for AppError {
    fn from(error: GatewayError) -> Self {
        Self::new(error.code(), error.to_string())
    }
}

impl From<RouteError> for AppError {
    fn from(error: RouteError) -> Self {
        Self::new(ErrorCode::RouteNotAvailable, error.to_string())
    }
}

impl From<AmountError> for AppError {
    fn from(error: AmountError) -> Self {
        Self::new(ErrorCode::InvalidAmount, error.to_string())
    }
}

impl From<GatewayClientError> for AppError {
    fn from(error: GatewayClientError) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, error.to_string())
    }
}
