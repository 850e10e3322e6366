//! Error types for notification delivery.

/// Errors that can occur while posting a notification.
///
/// The event loop logs these together with the affected event and moves on;
/// notifications are never retried.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The request never completed.
    #[error("Notification request failed")]
    Request(#[from] reqwest::Error),

    /// The sink answered with a non-success status.
    #[error("Notification rejected with status {status}: {body}")]
    Rejected {
        /// HTTP status code returned by the sink
        status: u16,
        /// Response body, for diagnosis
        body: String,
    },
}
