// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for faucetwatch integration tests
//!
//! Provides scripted implementations of the watcher's collaborators so the
//! event loop can be driven without a node, an explorer API or a webhook.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use alloy_primitives::{address, Address, LogData, B256, U256};
use alloy_rpc_types::Log;
use alloy_sol_types::sol;
use async_trait::async_trait;
use faucetwatch::{
    BalanceSource, DomainEvent, InterfaceSchema, LogDecoder, LogSubscriber, NotificationSink,
    NotifyError, RpcError, Subscription, SubscriptionFeed,
};

pub const FAUCET: Address = address!("5fbdb2315678afecb367f032d93f642f64180aa3");
pub const MINER: Address = address!("206aab6b3e64e812479e287715fe40b2d7bde67d");

pub const ONE_ETHER: u128 = 1_000_000_000_000_000_000;

sol! {
    event FallbackEvent(address indexed from, uint256 amount);
    event ReceiveEvent(address indexed from, uint256 amount);
    event WithDrawEvent(address indexed receiver, uint256 amount);
    event OwnershipTransferred(address indexed previousOwner, address indexed newOwner);
    event Paused(address account);
}

/// Decoder over the faucet ABI fixture
pub fn faucet_decoder() -> LogDecoder {
    let schema = InterfaceSchema::from_json(include_str!("../fixtures/faucet_abi.json"))
        .expect("fixture ABI is valid");
    LogDecoder::new(Arc::new(schema))
}

/// Wrap encoded event data as a log emitted by the faucet in transaction `0x{tx}{tx}..`
pub fn faucet_log(data: LogData, tx: u8) -> Log {
    Log {
        inner: alloy_primitives::Log {
            address: FAUCET,
            data,
        },
        transaction_hash: Some(B256::repeat_byte(tx)),
        ..Default::default()
    }
}

/// Hex transaction id as rendered in domain events
pub fn tx_id(tx: u8) -> String {
    format!("{:#x}", B256::repeat_byte(tx))
}

/// Subscriber that hands out pre-scripted results and records every call.
///
/// Once the script runs out, every further `open` fails.
#[derive(Clone, Default)]
pub struct ScriptedSubscriber {
    script: Arc<Mutex<VecDeque<Result<Subscription, RpcError>>>>,
    calls: Arc<Mutex<Vec<(String, Address)>>>,
}

impl ScriptedSubscriber {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a failed connection attempt
    pub fn push_failure(&self) {
        self.script
            .lock()
            .unwrap()
            .push_back(Err(RpcError::ProviderConnectionFailed(
                "connection refused".to_string(),
            )));
    }

    /// Queue a successful subscription and return the feed that drives it
    pub fn push_subscription(&self) -> SubscriptionFeed {
        let (feed, subscription) = Subscription::channel();
        self.script.lock().unwrap().push_back(Ok(subscription));
        feed
    }

    /// Every `(endpoint, target)` pair passed to `open`, in order
    pub fn calls(&self) -> Vec<(String, Address)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LogSubscriber for ScriptedSubscriber {
    async fn open(&self, endpoint: &str, target: Address) -> Result<Subscription, RpcError> {
        self.calls
            .lock()
            .unwrap()
            .push((endpoint.to_string(), target));

        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(|| {
            Err(RpcError::ProviderConnectionFailed(
                "script exhausted".to_string(),
            ))
        })
    }
}

/// Balance source with fixed balances; unknown addresses fail.
#[derive(Clone, Default)]
pub struct MockBalances {
    balances: HashMap<Address, U256>,
}

impl MockBalances {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(mut self, address: Address, wei: U256) -> Self {
        self.balances.insert(address, wei);
        self
    }
}

#[async_trait]
impl BalanceSource for MockBalances {
    async fn balance_of(&self, address: Address) -> Result<U256, RpcError> {
        self.balances.get(&address).copied().ok_or_else(|| {
            RpcError::balance_query_failed(address, std::io::Error::other("node unavailable"))
        })
    }
}

/// One recorded `post` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posted {
    pub event: DomainEvent,
    pub primary_balance: String,
    pub secondary_balance: String,
}

/// Sink that records every post; optionally rejects them all.
#[derive(Clone, Default)]
pub struct RecordingSink {
    posted: Arc<Mutex<Vec<Posted>>>,
    reject: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every post fails after being recorded
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    pub fn posted(&self) -> Vec<Posted> {
        self.posted.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn post(
        &self,
        event: &DomainEvent,
        primary_balance: &str,
        secondary_balance: &str,
    ) -> Result<(), NotifyError> {
        self.posted.lock().unwrap().push(Posted {
            event: event.clone(),
            primary_balance: primary_balance.to_string(),
            secondary_balance: secondary_balance.to_string(),
        });

        if self.reject {
            return Err(NotifyError::Rejected {
                status: 500,
                body: "internal_error".to_string(),
            });
        }
        Ok(())
    }
}
