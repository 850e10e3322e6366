//! Span creation helpers for faucetwatch operations.
//!
//! Telemetry concerns are kept apart from business logic: instead of
//! `#[instrument]` attributes, each instrumented operation has a matching
//! span helper here, attached with [`tracing::Instrument`].
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     async { /* business logic */ }
//!         .instrument(spans::my_operation(param))
//!         .await
//! }
//! ```

use alloy_primitives::{Address, TxHash};
use tracing::Span;

/// Create span for fetching the contract interface at startup.
///
/// Parent: None (startup phase)
#[inline]
pub(crate) fn fetch_schema(contract: Address) -> Span {
    tracing::info_span!("faucetwatch.fetch_schema", contract = %contract)
}

/// Create span for one attempt at opening the log subscription.
///
/// Parent: None (one per Resubscribing step of the event loop)
#[inline]
pub(crate) fn open_subscription(endpoint: &str, target: Address) -> Span {
    tracing::info_span!(
        "faucetwatch.open_subscription",
        endpoint = endpoint,
        contract = %target,
    )
}

/// Create span for handling one delivered log entry.
///
/// Parent: None
/// Children: balance lookups and the notification post
#[inline]
pub(crate) fn process_log(tx_hash: Option<TxHash>) -> Span {
    tracing::info_span!(
        "faucetwatch.process_log",
        tx_hash = %tx_hash.unwrap_or_default(),
    )
}

/// Create span for a single balance lookup.
///
/// Parent: process_log span
#[inline]
pub(crate) fn fetch_balance(address: Address) -> Span {
    tracing::debug_span!("faucetwatch.fetch_balance", address = %address)
}

/// Create span for delivering one notification.
///
/// Parent: process_log span
#[inline]
pub(crate) fn post_notification(event_name: &str) -> Span {
    tracing::debug_span!("faucetwatch.post_notification", event = event_name)
}
