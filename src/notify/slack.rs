//! Slack incoming-webhook sink using Block Kit messages.
//!
//! Each event becomes a header, the event message with a button linking to
//! the transaction on a block explorer, the two balances, and a divider.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, Instrument};

use super::NotificationSink;
use crate::config::constants::labels::{PRIMARY_BALANCE, SECONDARY_BALANCE};
use crate::errors::NotifyError;
use crate::events::DomainEvent;
use crate::spans;

/// Top-level webhook payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlackMessage {
    pub blocks: Vec<Block>,
}

/// The subset of Block Kit blocks the watcher emits
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header {
        text: Text,
    },
    Section {
        text: Text,
        #[serde(skip_serializing_if = "Option::is_none")]
        accessory: Option<Button>,
    },
    Divider,
}

/// A text object, either `plain_text` or `mrkdwn`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<bool>,
}

impl Text {
    fn plain(text: impl Into<String>, emoji: bool) -> Self {
        Self {
            kind: "plain_text",
            text: text.into(),
            emoji: emoji.then_some(true),
        }
    }

    fn markdown(text: impl Into<String>) -> Self {
        Self {
            kind: "mrkdwn",
            text: text.into(),
            emoji: None,
        }
    }
}

/// A link button accessory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub action_id: String,
    pub value: String,
    pub text: Text,
    pub url: String,
}

impl SlackMessage {
    /// Build the message for one event.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faucetwatch::{DomainEvent, notify::SlackMessage};
    ///
    /// let event = DomainEvent {
    ///     name: "WithDrawEvent".into(),
    ///     message: "0x206A...E67d withdraw 5 ETH".into(),
    ///     transaction_id: "0xabc".into(),
    /// };
    /// let message = SlackMessage::for_event(&event, "https://etherscan.io/tx/", "10", "unknown");
    /// assert_eq!(message.blocks.len(), 4);
    /// ```
    pub fn for_event(
        event: &DomainEvent,
        explorer_tx_url: &str,
        primary_balance: &str,
        secondary_balance: &str,
    ) -> Self {
        let view_tx = Button {
            kind: "button",
            action_id: "viewTx".to_string(),
            value: event.transaction_id.clone(),
            text: Text::plain("View Detail", false),
            url: event.tx_url(explorer_tx_url),
        };

        let balances = format!(
            "*{PRIMARY_BALANCE}*: {primary_balance}\n*{SECONDARY_BALANCE}*: {secondary_balance}\n"
        );

        Self {
            blocks: vec![
                Block::Header {
                    text: Text::plain(format!("📣{}", event.name), true),
                },
                Block::Section {
                    text: Text::markdown(&event.message),
                    accessory: Some(view_tx),
                },
                Block::Section {
                    text: Text::markdown(balances),
                    accessory: None,
                },
                Block::Divider,
            ],
        }
    }
}

/// Posts notifications to a Slack incoming webhook.
#[derive(Debug, Clone)]
pub struct SlackWebhookSink {
    client: reqwest::Client,
    webhook_url: String,
    explorer_tx_url: String,
}

impl SlackWebhookSink {
    /// Create a sink posting to `webhook_url`, linking transactions under `explorer_tx_url`
    pub fn new(webhook_url: impl Into<String>, explorer_tx_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url: webhook_url.into(),
            explorer_tx_url: explorer_tx_url.into(),
        }
    }

    async fn send(&self, message: &SlackMessage) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = %status, "Notification delivered");
        Ok(())
    }
}

#[async_trait]
impl NotificationSink for SlackWebhookSink {
    async fn post(
        &self,
        event: &DomainEvent,
        primary_balance: &str,
        secondary_balance: &str,
    ) -> Result<(), NotifyError> {
        let message = SlackMessage::for_event(
            event,
            &self.explorer_tx_url,
            primary_balance,
            secondary_balance,
        );

        self.send(&message)
            .instrument(spans::post_notification(&event.name))
            .await
    }
}
