// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider construction for the two endpoints the watcher talks to.
//!
//! - [`create_http_provider`] - request/response queries (balances)
//! - [`create_ws_provider`] - pub/sub log subscriptions
//!
//! Both return `AnyNetwork` root providers: the watcher only needs
//! network-agnostic calls, so any EVM chain works.

mod factory;

pub use factory::{create_http_provider, create_ws_provider};

use alloy_network::AnyNetwork;

/// Root provider over HTTP or WebSocket, for any EVM network
pub type AnyProvider = alloy_provider::RootProvider<AnyNetwork>;
