// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider factory functions

use alloy_network::AnyNetwork;
use alloy_provider::{ProviderBuilder, WsConnect};

use crate::errors::RpcError;

use super::AnyProvider;

/// Create an HTTP provider.
///
/// No connection is made until the first request, so this only fails on
/// an unparseable URL.
///
/// # Examples
///
/// ```rust
/// use faucetwatch::provider::create_http_provider;
///
/// assert!(create_http_provider("http://localhost:8545").is_ok());
/// assert!(create_http_provider("not a url").is_err());
/// ```
pub fn create_http_provider(url: &str) -> Result<AnyProvider, RpcError> {
    let url: url::Url = url
        .parse()
        .map_err(|e| RpcError::ProviderUrlInvalid(format!("{e}")))?;

    // Recommended fillers are disabled to get a plain RootProvider back
    Ok(ProviderBuilder::new()
        .disable_recommended_fillers()
        .network::<AnyNetwork>()
        .connect_http(url))
}

/// Create a WebSocket provider, dialing the endpoint immediately.
///
/// # Errors
///
/// Returns [`RpcError::ProviderConnectionFailed`] if the handshake fails.
pub async fn create_ws_provider(url: &str) -> Result<AnyProvider, RpcError> {
    let ws = WsConnect::new(url);

    ProviderBuilder::new()
        .disable_recommended_fillers()
        .network::<AnyNetwork>()
        .connect_ws(ws)
        .await
        .map_err(|e| RpcError::ProviderConnectionFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_http_provider_invalid_url() {
        let result = create_http_provider("not-a-valid-url");
        assert!(matches!(result, Err(RpcError::ProviderUrlInvalid(_))));
    }

    #[test]
    fn test_create_http_provider_valid_url() {
        assert!(create_http_provider("http://localhost:8545").is_ok());
    }
}
