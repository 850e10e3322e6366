// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Native balance lookups
//!
//! Every notification carries two balances: the monitored contract's and a
//! configured secondary account's. A failed lookup must never block the
//! notification, so [`balance_or_unknown`] substitutes a sentinel.
//!
//! # Example
//!
//! ```rust,ignore
//! use faucetwatch::retrieval::{balance_or_unknown, ProviderBalanceSource};
//! use faucetwatch::provider::create_http_provider;
//!
//! let balances = ProviderBalanceSource::new(create_http_provider(&config.http_url)?);
//! let faucet_balance = balance_or_unknown(&balances, contract).await;
//! println!("Faucet holds {faucet_balance} ETH");
//! ```

use alloy_network::AnyNetwork;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use async_trait::async_trait;
use tracing::{warn, Instrument};

use crate::config::constants::UNKNOWN_BALANCE;
use crate::errors::RpcError;
use crate::spans;
use crate::types::wei::WeiAmount;

/// Reads native account balances.
#[async_trait]
pub trait BalanceSource: Send + Sync {
    /// Current balance of `address` in wei
    async fn balance_of(&self, address: Address) -> Result<U256, RpcError>;
}

/// [`BalanceSource`] backed by an alloy provider (`eth_getBalance` at the latest block).
#[derive(Debug, Clone)]
pub struct ProviderBalanceSource<P> {
    provider: P,
}

impl<P> ProviderBalanceSource<P> {
    /// Wrap a provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P> BalanceSource for ProviderBalanceSource<P>
where
    P: Provider<AnyNetwork> + Send + Sync,
{
    async fn balance_of(&self, address: Address) -> Result<U256, RpcError> {
        self.provider
            .get_balance(address)
            .await
            .map_err(|e| RpcError::balance_query_failed(address, e))
    }
}

/// Fetch a balance and render it in ether, or `"unknown"` if the lookup fails.
///
/// Failures are logged with the affected address.
pub async fn balance_or_unknown<B>(source: &B, address: Address) -> String
where
    B: BalanceSource + ?Sized,
{
    match source
        .balance_of(address)
        .instrument(spans::fetch_balance(address))
        .await
    {
        Ok(wei) => WeiAmount::new(wei).to_ether_string(),
        Err(e) => {
            warn!(address = %address, error = %e, "Failed to get balance");
            UNKNOWN_BALANCE.to_string()
        }
    }
}
