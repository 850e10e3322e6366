// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! # faucetwatch
//!
//! Watches an EVM faucet contract in real time and posts a chat notification
//! for every event it emits.
//!
//! At startup the contract's interface is loaded (from an Etherscan-compatible
//! API or a local ABI file) and validated. The watcher then subscribes to the
//! contract's logs over WebSocket, decodes each log into a human-readable
//! message, attaches the current balances of the contract and a secondary
//! account, and posts the result to a Slack webhook. Dropped subscriptions
//! are reopened; failed connection attempts are retried after a fixed delay.
//!
//! ## Modules
//!
//! - [`config`] - environment-driven settings and a builder
//! - [`schema`] - interface loading and validation
//! - [`events`] - decoding, formatting, subscriptions and the event loop
//! - [`retrieval`] - balance lookups
//! - [`notify`] - notification sinks
//! - [`types`] - wei amounts and address display helpers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use faucetwatch::bootstrap::run;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     run().await
//! }
//! ```

pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod events;
pub mod notify;
pub mod provider;
pub mod retrieval;
pub mod schema;
mod spans;
pub mod types;

pub use config::{SchemaLocation, WatchConfig, WatchConfigBuilder};
pub use errors::{
    ConfigError, DecodeError, NotifyError, RpcError, SchemaError, TransportError, WatchError,
};
pub use events::{
    format_event, DecodedLog, DomainEvent, EventFields, EventKind, EventWatcher, LogDecoder,
    LogSubscriber, LoopEvent, Subscription, SubscriptionFeed, SubscriptionItem, WsLogSubscriber,
};
pub use notify::{NotificationSink, SlackWebhookSink};
pub use retrieval::{balance_or_unknown, BalanceSource, ProviderBalanceSource};
pub use schema::{
    EtherscanSchemaSource, FileSchemaSource, InterfaceSchema, PayloadLayout, SchemaSource,
};
pub use types::address::short_address;
pub use types::wei::WeiAmount;
