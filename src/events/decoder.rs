// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decoding raw logs into domain events against the loaded interface schema.
//!
//! Decoding runs in three steps:
//!
//! 1. Match `topics[0]` against the signature hashes of the declared events.
//! 2. If the log carries a payload, unpack it against the schema's shared
//!    non-indexed layout (validated when the schema was loaded).
//! 3. Extract the fields the matched event kind renders: indexed addresses
//!    from topics 1 and 2, the amount from the unpacked payload.
//!
//! Events that are declared but have no dedicated rendering decode
//! successfully to [`EventFields::Unhandled`].
//!
//! # Example
//!
//! ```rust,ignore
//! use faucetwatch::{InterfaceSchema, LogDecoder};
//! use std::sync::Arc;
//!
//! let decoder = LogDecoder::new(Arc::new(InterfaceSchema::from_json(abi_json)?));
//! let event = decoder.decode(&log)?;
//! println!("{}: {}", event.name, event.message);
//! ```

use std::sync::Arc;

use alloy_primitives::{Address, B256};
use alloy_rpc_types::Log;
use tracing::debug;

use super::definitions::EventKind;
use super::formatter::{format_event, DecodedLog, DomainEvent, EventFields};
use crate::errors::DecodeError;
use crate::schema::InterfaceSchema;
use crate::types::wei::WeiAmount;

/// Decodes raw logs using an immutable interface schema.
#[derive(Debug, Clone)]
pub struct LogDecoder {
    schema: Arc<InterfaceSchema>,
}

impl LogDecoder {
    /// Create a decoder over a loaded schema
    pub fn new(schema: Arc<InterfaceSchema>) -> Self {
        Self { schema }
    }

    /// The schema this decoder matches against
    pub fn schema(&self) -> &InterfaceSchema {
        &self.schema
    }

    /// Decode a log and render it into a domain event.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::UnknownEventSignature`] if topic0 matches no declared event
    /// - [`DecodeError::DecodePayload`] if the payload does not fit the shared layout
    /// - [`DecodeError::MissingTopic`] / [`DecodeError::MissingAmount`] if the log
    ///   lacks data its event kind renders
    pub fn decode(&self, log: &Log) -> Result<DomainEvent, DecodeError> {
        self.decode_fields(log).map(|decoded| format_event(&decoded))
    }

    /// Decode a log into its typed fields without rendering it.
    pub fn decode_fields(&self, log: &Log) -> Result<DecodedLog, DecodeError> {
        let topics = log.inner.data.topics();
        let payload = &log.inner.data.data;

        let selector = topics
            .first()
            .ok_or_else(|| DecodeError::missing_topic("<unknown>", 0))?;
        let event = self
            .schema
            .event_by_selector(selector)
            .ok_or(DecodeError::UnknownEventSignature {
                selector: *selector,
            })?;
        let name = event.name.as_str();
        let transaction_hash = log.transaction_hash.unwrap_or_default();

        debug!(event = name, tx_hash = %transaction_hash, "Matched log to event");

        let layout = self.schema.payload_layout();
        let values = if payload.is_empty() {
            None
        } else {
            Some(layout.unpack(name, payload)?)
        };

        let amount = || -> Result<WeiAmount, DecodeError> {
            let values = values.as_deref().ok_or_else(|| DecodeError::MissingAmount {
                event: name.to_string(),
            })?;
            layout.amount(name, values).map(WeiAmount::new)
        };

        let fields = match EventKind::from_name(name) {
            EventKind::Deposit => EventFields::Deposit {
                from: topic_address(topics, 1, name)?,
                amount: amount()?,
            },
            EventKind::OwnershipTransferred => EventFields::OwnershipTransferred {
                previous_owner: topic_address(topics, 1, name)?,
                new_owner: topic_address(topics, 2, name)?,
            },
            EventKind::Withdraw => EventFields::Withdraw {
                receiver: topic_address(topics, 1, name)?,
                amount: amount()?,
            },
            EventKind::Unhandled => EventFields::Unhandled,
        };

        Ok(DecodedLog {
            name: name.to_string(),
            transaction_hash,
            fields,
        })
    }
}

fn topic_address(topics: &[B256], index: usize, event: &str) -> Result<Address, DecodeError> {
    topics
        .get(index)
        .map(|topic| Address::from_word(*topic))
        .ok_or_else(|| DecodeError::missing_topic(event, index))
}
