// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Live log subscriptions.
//!
//! A [`Subscription`] is a handle to one open stream of logs. It exposes two
//! one-way channels: raw logs, in the order the event source delivered them,
//! and asynchronous transport errors. A subscription that reported an error
//! is dead for good; the owner drops it and opens a new one through a
//! [`LogSubscriber`].
//!
//! Reconnecting is the caller's job (see
//! [`EventWatcher`](super::watcher::EventWatcher)); nothing in this module
//! retries on its own.
//!
//! # Provider Setup
//!
//! [`WsLogSubscriber`] dials a WebSocket endpoint for every `open` call:
//!
//! ```rust,ignore
//! use faucetwatch::events::subscription::{LogSubscriber, WsLogSubscriber};
//!
//! let mut subscription = WsLogSubscriber.open("wss://eth.example.com/ws", contract).await?;
//! while let SubscriptionItem::Log(log) = subscription.next().await {
//!     println!("{log:?}");
//! }
//! ```

use alloy_primitives::Address;
use alloy_provider::Provider;
use alloy_rpc_types::{Filter, Log};
use async_trait::async_trait;
use futures::stream::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::errors::{RpcError, TransportError};
use crate::provider::create_ws_provider;

/// Opens filtered log subscriptions against an event source.
#[async_trait]
pub trait LogSubscriber: Send + Sync {
    /// Dial `endpoint` and subscribe to logs emitted by `target` only.
    ///
    /// # Errors
    ///
    /// Returns a connect-class [`RpcError`] if dialing or registering the
    /// filter fails. The caller decides when to try again.
    async fn open(&self, endpoint: &str, target: Address) -> Result<Subscription, RpcError>;
}

/// One item received from a subscription.
#[derive(Debug)]
pub enum SubscriptionItem {
    /// A raw log entry
    Log(Log),
    /// The subscription died
    Failed(TransportError),
}

/// Handle to a live log stream.
///
/// Dropping the handle stops any task feeding it.
#[derive(Debug)]
pub struct Subscription {
    logs: mpsc::UnboundedReceiver<Log>,
    errors: mpsc::UnboundedReceiver<TransportError>,
    forwarder: Option<JoinHandle<()>>,
}

/// Producer side of a [`Subscription`].
#[derive(Debug, Clone)]
pub struct SubscriptionFeed {
    logs: mpsc::UnboundedSender<Log>,
    errors: mpsc::UnboundedSender<TransportError>,
}

impl Subscription {
    /// Create a subscription together with the feed that fills it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faucetwatch::events::subscription::Subscription;
    /// use faucetwatch::TransportError;
    ///
    /// let (feed, subscription) = Subscription::channel();
    /// assert!(feed.fail(TransportError::StreamClosed));
    ///
    /// drop(subscription);
    /// assert!(feed.is_closed());
    /// ```
    pub fn channel() -> (SubscriptionFeed, Subscription) {
        let (logs_tx, logs_rx) = mpsc::unbounded_channel();
        let (errors_tx, errors_rx) = mpsc::unbounded_channel();

        let feed = SubscriptionFeed {
            logs: logs_tx,
            errors: errors_tx,
        };
        let subscription = Subscription {
            logs: logs_rx,
            errors: errors_rx,
            forwarder: None,
        };

        (feed, subscription)
    }

    /// Tie a feeding task's lifetime to this handle
    pub fn with_forwarder(mut self, forwarder: JoinHandle<()>) -> Self {
        self.forwarder = Some(forwarder);
        self
    }

    /// Wait for the next log or error, whichever is ready first.
    ///
    /// Neither channel has priority. A closed log channel is reported as
    /// [`TransportError::StreamClosed`].
    pub async fn next(&mut self) -> SubscriptionItem {
        tokio::select! {
            error = self.errors.recv() => {
                SubscriptionItem::Failed(error.unwrap_or(TransportError::StreamClosed))
            }
            log = self.logs.recv() => match log {
                Some(log) => SubscriptionItem::Log(log),
                None => SubscriptionItem::Failed(TransportError::StreamClosed),
            },
        }
    }

    /// Take a log that has already been delivered, without waiting.
    pub fn try_next_log(&mut self) -> Option<Log> {
        self.logs.try_recv().ok()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(forwarder) = self.forwarder.take() {
            forwarder.abort();
        }
    }
}

impl SubscriptionFeed {
    /// Deliver a log. Returns `false` once the subscription has been dropped.
    pub fn deliver(&self, log: Log) -> bool {
        self.logs.send(log).is_ok()
    }

    /// Report a transport failure. Returns `false` once the subscription has been dropped.
    pub fn fail(&self, error: TransportError) -> bool {
        self.errors.send(error).is_ok()
    }

    /// Whether the subscription side is gone
    pub fn is_closed(&self) -> bool {
        self.logs.is_closed()
    }
}

/// Subscribes over a fresh WebSocket connection per `open` call.
#[derive(Debug, Clone, Copy, Default)]
pub struct WsLogSubscriber;

#[async_trait]
impl LogSubscriber for WsLogSubscriber {
    async fn open(&self, endpoint: &str, target: Address) -> Result<Subscription, RpcError> {
        info!(endpoint, "Connecting to websocket endpoint");
        let provider = create_ws_provider(endpoint).await?;

        let filter = Filter::new().address(target);
        info!(address = ?filter.address, "Subscribing to logs");

        let stream = provider
            .subscribe_logs(&filter)
            .await
            .map_err(|e| RpcError::subscription_failed("logs", e))?
            .into_result_stream();

        debug!("Log subscription established");

        let (feed, subscription) = Subscription::channel();
        // The provider moves into the task so the connection lives as long as the stream.
        let forwarder = tokio::spawn(async move {
            let _connection = provider;
            forward_logs(stream, feed).await;
        });

        Ok(subscription.with_forwarder(forwarder))
    }
}

/// Copy logs from a stream into a feed until either side goes away.
///
/// A notification that cannot be read as a log kills the subscription with
/// [`TransportError::Backend`]. The end of the stream is reported as
/// [`TransportError::StreamClosed`].
pub async fn forward_logs<S, E>(stream: S, feed: SubscriptionFeed)
where
    S: Stream<Item = Result<Log, E>> + Send,
    E: std::fmt::Display,
{
    let mut stream = Box::pin(stream);

    while let Some(item) = stream.next().await {
        match item {
            Ok(log) => {
                if !feed.deliver(log) {
                    debug!("Subscription dropped, stopping log forwarder");
                    return;
                }
            }
            Err(e) => {
                warn!(error = %e, "Received undecodable log notification");
                feed.fail(TransportError::backend(format!(
                    "undecodable log notification: {e}"
                )));
                return;
            }
        }
    }

    warn!("Log stream ended");
    feed.fail(TransportError::StreamClosed);
}
