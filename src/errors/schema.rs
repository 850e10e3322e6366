// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for loading and validating the contract interface.
//!
//! These only occur during startup and are fatal: without a schema the
//! watcher cannot decode anything.

/// Errors that can occur while fetching or validating an interface schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The schema source could not be reached.
    #[error("Failed to fetch contract ABI")]
    FetchFailed(#[from] reqwest::Error),

    /// The schema source answered, but refused the request.
    #[error("Contract ABI request rejected: {reason}")]
    Rejected {
        /// The reason reported by the source
        reason: String,
    },

    /// The schema document is not a valid ABI.
    #[error("Malformed contract ABI: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Events carrying a payload disagree about its layout.
    #[error("Events {first} and {second} declare different non-indexed arguments")]
    InconsistentPayloadLayout {
        /// Event whose layout was taken as reference
        first: String,
        /// Event that disagrees with it
        second: String,
    },

    /// A handled event does not have the arguments its rendering reads.
    #[error("Event {event} has an unexpected shape: {details}")]
    InvalidEventShape {
        /// Name of the offending event
        event: String,
        /// What is wrong with it
        details: String,
    },

    /// Reading a local schema file failed.
    #[error("Failed to read contract ABI file")]
    Io(#[from] std::io::Error),
}

impl SchemaError {
    /// Create a `Rejected` error with a reason.
    pub fn rejected(reason: impl Into<String>) -> Self {
        SchemaError::Rejected {
            reason: reason.into(),
        }
    }

    /// Create an `InvalidEventShape` error.
    pub fn invalid_event_shape(event: impl Into<String>, details: impl Into<String>) -> Self {
        SchemaError::InvalidEventShape {
            event: event.into(),
            details: details.into(),
        }
    }
}
