//! Cross-chain stablecoin transfer orchestration.
//!
//! The crate is organized around three layers:
//!
//! - [`registry`] and [`route`]: static chain and token metadata plus
//!   the validation that turns a user's chain/token selection into a
//!   [`route::ValidRoute`].
//! - [`bridge`]: the adapter-backed orchestrator for third-party bridge
//!   routes.
//! - [`gateway`]: the Gateway unified-balance protocol, covering the
//!   attestation-service client, per-chain contract configs, EIP-712
//!   burn intents, and the deposit and transfer flows.
//!
//! Every fallible surface normalizes into [`AppError`] with a
//! machine-readable [`ErrorCode`] so callers render errors uniformly.

pub mod amount;
pub mod bindings;
pub mod bridge;
pub mod config;
pub mod error;
pub mod gateway;
pub mod registry;
pub mod route;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{AppError, ErrorCode};
