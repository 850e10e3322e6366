//! Shared RPC error types for blockchain provider operations.
//!
//! Dial and subscription failures are the `ConnectError` class: the event
//! loop retries them forever after a fixed delay. Balance lookups fail with
//! [`RpcError::BalanceQueryFailed`], which the loop replaces with a sentinel.

use alloy_primitives::Address;

/// Errors that can occur during blockchain RPC operations.
///
/// # Examples
///
/// ```rust
/// use faucetwatch::RpcError;
///
/// let error = RpcError::ProviderConnectionFailed("connection refused".to_string());
/// assert_eq!(error.to_string(), "Failed to connect to provider: connection refused");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The endpoint URL could not be parsed.
    #[error("Invalid provider URL: {0}")]
    ProviderUrlInvalid(String),

    /// Dialing the endpoint failed.
    #[error("Failed to connect to provider: {0}")]
    ProviderConnectionFailed(String),

    /// The endpoint accepted the connection but refused the subscription.
    #[error("Failed to subscribe to {kind}")]
    SubscriptionFailed {
        /// What was being subscribed to (e.g. "logs")
        kind: String,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Reading an account balance failed.
    #[error("Failed to query balance of {address}")]
    BalanceQueryFailed {
        /// The account whose balance was requested
        address: Address,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl RpcError {
    /// Helper to create a `SubscriptionFailed` error from any error type.
    pub fn subscription_failed(
        kind: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::SubscriptionFailed {
            kind: kind.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `BalanceQueryFailed` error from any error type.
    pub fn balance_query_failed(
        address: Address,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::BalanceQueryFailed {
            address,
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_failures_name_the_address() {
        let err = RpcError::balance_query_failed(Address::ZERO, std::io::Error::other("boom"));
        assert!(err.to_string().contains("0x0000000000000000000000000000000000000000"));
    }

    #[test]
    fn subscription_failures_keep_their_source() {
        let err = RpcError::subscription_failed("logs", std::io::Error::other("refused"));
        let source = std::error::Error::source(&err).expect("source is kept");
        assert_eq!(source.to_string(), "refused");
    }
}
