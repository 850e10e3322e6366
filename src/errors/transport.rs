//! Asynchronous failures of a live subscription.

/// Error delivered on a subscription's error channel after it was active.
///
/// Receiving any `TransportError` means the subscription is dead: the event
/// loop discards it and opens a fresh one immediately.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The remote side ended the log stream.
    #[error("Subscription stream closed")]
    StreamClosed,

    /// The transport reported a failure.
    #[error("Transport failure: {0}")]
    Backend(String),
}

impl TransportError {
    /// Create a `Backend` error from anything printable.
    pub fn backend(details: impl std::fmt::Display) -> Self {
        TransportError::Backend(details.to_string())
    }
}
