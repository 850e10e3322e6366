// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the faucetwatch library.
//!
//! Each concern has its own error type so callers can react to the failure
//! class that matters to them:
//!
//! - [`RpcError`] - dialing, subscribing and querying the chain (`ConnectError`, `QueryError`)
//! - [`TransportError`] - a live subscription died underneath us
//! - [`DecodeError`] - a raw log could not be turned into a domain event
//! - [`SchemaError`] - the contract interface could not be loaded or validated
//! - [`NotifyError`] - the notification sink rejected or never received a message
//! - [`ConfigError`] - process configuration is missing or malformed
//!
//! Only [`SchemaError`] and [`ConfigError`] are fatal, and only at startup.
//! Everything else is recovered inside the event loop.
//!
//! # Examples
//!
//! ```rust
//! use faucetwatch::{DecodeError, WatchError};
//! use alloy_primitives::B256;
//!
//! let err: WatchError = DecodeError::UnknownEventSignature { selector: B256::ZERO }.into();
//! assert!(err.to_string().starts_with("Decode error"));
//! ```

mod config;
mod decode;
mod notify;
mod rpc;
mod schema;
mod transport;

pub use config::ConfigError;
pub use decode::DecodeError;
pub use notify::NotifyError;
pub use rpc::RpcError;
pub use schema::SchemaError;
pub use transport::TransportError;

/// Unified error type for all faucetwatch operations.
///
/// All module-specific error types convert into `WatchError` via `From`,
/// so `?` works across module boundaries.
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    /// Error talking to the chain.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// A live subscription failed.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// A log could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The contract interface could not be loaded.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// A notification could not be delivered.
    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),

    /// Configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
