//! Rendering decoded events into display messages.

use std::fmt;

use alloy_primitives::{Address, TxHash};
use serde::Serialize;

use crate::config::constants::UNHANDLED_EVENT_MESSAGE;
use crate::types::address::short_address;
use crate::types::wei::WeiAmount;

/// Typed fields extracted from a log, per event kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventFields {
    /// `FallbackEvent` / `ReceiveEvent`
    Deposit { from: Address, amount: WeiAmount },
    /// `OwnershipTransferred`
    OwnershipTransferred {
        previous_owner: Address,
        new_owner: Address,
    },
    /// `WithDrawEvent`
    Withdraw { receiver: Address, amount: WeiAmount },
    /// Any other declared event
    Unhandled,
}

/// A log matched against the schema, with its fields extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLog {
    /// Declared name of the matched event
    pub name: String,
    /// Hash of the emitting transaction
    pub transaction_hash: TxHash,
    /// Extracted fields
    pub fields: EventFields,
}

/// The record forwarded to the notification sink.
///
/// # Examples
///
/// ```rust
/// use faucetwatch::DomainEvent;
///
/// let event = DomainEvent {
///     name: "WithDrawEvent".to_string(),
///     message: "0x206A...E67d withdraw 5 ETH".to_string(),
///     transaction_id: "0xabc".to_string(),
/// };
/// assert_eq!(event.tx_url("https://etherscan.io/tx/"), "https://etherscan.io/tx/0xabc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainEvent {
    pub name: String,
    pub message: String,
    pub transaction_id: String,
}

impl DomainEvent {
    /// Block explorer link for the emitting transaction
    pub fn tx_url(&self, explorer_tx_url: &str) -> String {
        format!("{explorer_tx_url}{}", self.transaction_id)
    }
}

impl fmt::Display for DomainEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EventLog<Name={}, Message={}, Tx={}>",
            self.name, self.message, self.transaction_id
        )
    }
}

/// Render a decoded log into its domain event.
pub fn format_event(decoded: &DecodedLog) -> DomainEvent {
    let message = match &decoded.fields {
        EventFields::Deposit { from, amount } => {
            format!("Received {amount} ETH from {}", short_address(*from))
        }
        EventFields::OwnershipTransferred {
            previous_owner,
            new_owner,
        } => format!(
            "OwnershipTransferred from {} to {}",
            short_address(*previous_owner),
            short_address(*new_owner)
        ),
        EventFields::Withdraw { receiver, amount } => {
            format!("{} withdraw {amount} ETH", short_address(*receiver))
        }
        EventFields::Unhandled => UNHANDLED_EVENT_MESSAGE.to_string(),
    };

    DomainEvent {
        name: decoded.name.clone(),
        message,
        transaction_id: format!("{:#x}", decoded.transaction_hash),
    }
}
