// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The resilient event loop.
//!
//! [`EventWatcher`] owns at most one live [`Subscription`] and moves between
//! two states:
//!
//! - **Resubscribing**: try to open a subscription. On success move to
//!   Subscribed; on failure wait the reconnect delay and try again.
//! - **Subscribed**: wait for the next log or transport error. Logs are
//!   decoded, enriched with balances and posted to the sink. A transport
//!   error drops the subscription and moves straight back to Resubscribing,
//!   with no delay.
//!
//! Logs that were already delivered when a transport error arrives are
//! processed before the subscription is discarded.
//!
//! # Example
//!
//! ```rust,ignore
//! use faucetwatch::events::watcher::EventWatcher;
//!
//! let mut watcher = EventWatcher::new(&config, decoder, WsLogSubscriber, balances, sink);
//! watcher.run().await;
//! ```

use std::time::Duration;

use alloy_primitives::Address;
use alloy_rpc_types::Log;
use tracing::{error, info, warn, Instrument};

use super::decoder::LogDecoder;
use super::subscription::{LogSubscriber, Subscription, SubscriptionItem};
use crate::config::WatchConfig;
use crate::notify::NotificationSink;
use crate::retrieval::{balance_or_unknown, BalanceSource};
use crate::spans;

/// Where the loop currently is.
#[derive(Debug)]
enum WatchState {
    Resubscribing,
    Subscribed(Subscription),
}

/// What one [`EventWatcher::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEvent {
    /// A subscription was opened
    Connected,
    /// Opening failed; the reconnect delay has already elapsed
    ConnectFailed,
    /// One log was handled (whether or not it decoded)
    LogHandled,
    /// The subscription died and was dropped after handling `drained` pending logs
    TransportFailed { drained: usize },
}

/// Watches one contract and forwards its events to a notification sink.
pub struct EventWatcher<S, B, N> {
    subscriber: S,
    balances: B,
    sink: N,
    decoder: LogDecoder,
    endpoint: String,
    target: Address,
    secondary: Address,
    reconnect_delay: Duration,
    state: WatchState,
}

impl<S, B, N> EventWatcher<S, B, N>
where
    S: LogSubscriber,
    B: BalanceSource,
    N: NotificationSink,
{
    /// Create a watcher in the Resubscribing state.
    pub fn new(
        config: &WatchConfig,
        decoder: LogDecoder,
        subscriber: S,
        balances: B,
        sink: N,
    ) -> Self {
        Self {
            subscriber,
            balances,
            sink,
            decoder,
            endpoint: config.ws_url.clone(),
            target: config.contract_address,
            secondary: config.secondary_address,
            reconnect_delay: config.reconnect_delay,
            state: WatchState::Resubscribing,
        }
    }

    /// Whether a live subscription is currently held
    pub fn is_subscribed(&self) -> bool {
        matches!(self.state, WatchState::Subscribed(_))
    }

    /// Run the loop forever.
    pub async fn run(&mut self) {
        info!(
            endpoint = %self.endpoint,
            contract = %self.target,
            "Starting event watcher"
        );
        loop {
            self.step().await;
        }
    }

    /// Advance the state machine by one transition.
    pub async fn step(&mut self) -> LoopEvent {
        match &mut self.state {
            WatchState::Resubscribing => self.resubscribe().await,
            WatchState::Subscribed(subscription) => match subscription.next().await {
                SubscriptionItem::Log(log) => {
                    self.handle_log(&log).await;
                    LoopEvent::LogHandled
                }
                SubscriptionItem::Failed(e) => {
                    warn!(error = %e, "Subscription failed, resubscribing");

                    let mut pending = Vec::new();
                    while let Some(log) = subscription.try_next_log() {
                        pending.push(log);
                    }
                    self.state = WatchState::Resubscribing;

                    for log in &pending {
                        self.handle_log(log).await;
                    }
                    LoopEvent::TransportFailed {
                        drained: pending.len(),
                    }
                }
            },
        }
    }

    async fn resubscribe(&mut self) -> LoopEvent {
        let opened = self
            .subscriber
            .open(&self.endpoint, self.target)
            .instrument(spans::open_subscription(&self.endpoint, self.target))
            .await;

        match opened {
            Ok(subscription) => {
                info!(contract = %self.target, "Subscribed to contract logs");
                self.state = WatchState::Subscribed(subscription);
                LoopEvent::Connected
            }
            Err(e) => {
                warn!(
                    error = %e,
                    retry_in = ?self.reconnect_delay,
                    "Failed to open subscription"
                );
                tokio::time::sleep(self.reconnect_delay).await;
                LoopEvent::ConnectFailed
            }
        }
    }

    async fn handle_log(&self, log: &Log) {
        async {
            let event = match self.decoder.decode(log) {
                Ok(event) => event,
                Err(e) => {
                    warn!(
                        tx_hash = ?log.transaction_hash,
                        error = %e,
                        "Skipping undecodable log"
                    );
                    return;
                }
            };

            info!(event = %event, "Decoded event");

            let primary = balance_or_unknown(&self.balances, self.target).await;
            let secondary = balance_or_unknown(&self.balances, self.secondary).await;

            if let Err(e) = self.sink.post(&event, &primary, &secondary).await {
                error!(event = %event, error = %e, "Failed to post notification");
            }
        }
        .instrument(spans::process_log(log.transaction_hash))
        .await
    }
}
