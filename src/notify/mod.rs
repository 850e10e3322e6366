//! Notification delivery.
//!
//! The event loop hands every decoded event, together with the two balance
//! snapshots, to a [`NotificationSink`]. Delivery is fire-and-forget from the
//! loop's point of view: failures are logged and never retried.

mod slack;

pub use slack::{Block, Button, SlackMessage, SlackWebhookSink, Text};

use async_trait::async_trait;

use crate::errors::NotifyError;
use crate::events::DomainEvent;

/// Destination for event notifications.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Deliver one event with the primary (contract) and secondary account balances.
    ///
    /// Balances are already rendered; either may be the `"unknown"` sentinel.
    async fn post(
        &self,
        event: &DomainEvent,
        primary_balance: &str,
        secondary_balance: &str,
    ) -> Result<(), NotifyError>;
}
