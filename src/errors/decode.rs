// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for log decoding.

use alloy_primitives::B256;

/// Errors that can occur while decoding a raw log into a domain event.
///
/// All of these are recovered by the event loop: the offending log is
/// logged and skipped. A log whose event is declared in the schema but has
/// no dedicated rendering is *not* an error; it decodes to the
/// "Unhandled Event" message instead.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The first topic does not match any event declared in the schema.
    #[error("No event in the contract interface has signature {selector}")]
    UnknownEventSignature {
        /// The topic0 value that failed to match
        selector: B256,
    },

    /// The payload does not fit the shared non-indexed argument layout.
    #[error("Failed to unpack payload of {event}: {details}")]
    DecodePayload {
        /// Name of the matched event
        event: String,
        /// Details about why unpacking failed
        details: String,
    },

    /// A topic the event's rendering reads is absent.
    #[error("Log for {event} has no topic at index {index}")]
    MissingTopic {
        /// Name of the matched event, or "<unknown>" when there is no topic0
        event: String,
        /// Position of the missing topic
        index: usize,
    },

    /// The event carries an amount but the log has no payload.
    #[error("Log for {event} carries no amount")]
    MissingAmount {
        /// Name of the matched event
        event: String,
    },
}

impl DecodeError {
    /// Create a `DecodePayload` error with details.
    pub fn decode_payload(event: impl Into<String>, details: impl std::fmt::Display) -> Self {
        DecodeError::DecodePayload {
            event: event.into(),
            details: details.to_string(),
        }
    }

    /// Create a `MissingTopic` error.
    pub fn missing_topic(event: impl Into<String>, index: usize) -> Self {
        DecodeError::MissingTopic {
            event: event.into(),
            index,
        }
    }
}
