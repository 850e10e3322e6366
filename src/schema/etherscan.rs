// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Verified contract ABI lookup through an Etherscan-compatible API.

use alloy_primitives::Address;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, Instrument};

use super::{InterfaceSchema, SchemaSource};
use crate::errors::SchemaError;
use crate::spans;

/// Envelope returned by `?module=contract&action=getabi`.
///
/// On success `status` is `"1"` and `result` holds the ABI as JSON text;
/// otherwise `result` carries the reason.
#[derive(Debug, Deserialize)]
pub(crate) struct RawAbiResponse {
    pub(crate) status: String,
    #[serde(default)]
    pub(crate) message: String,
    pub(crate) result: String,
}

impl RawAbiResponse {
    pub(crate) fn into_schema(self) -> Result<InterfaceSchema, SchemaError> {
        if self.status != "1" {
            return Err(SchemaError::rejected(format!(
                "{} ({})",
                self.result, self.message
            )));
        }
        InterfaceSchema::from_json(&self.result)
    }
}

/// Fetches verified ABIs from Etherscan or a compatible explorer API.
#[derive(Debug, Clone)]
pub struct EtherscanSchemaSource {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl EtherscanSchemaSource {
    /// Create a source for the given API base URL and key
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }
}

impl EtherscanSchemaSource {
    async fn request_abi(&self, contract: Address) -> Result<InterfaceSchema, SchemaError> {
        let address = contract.to_string();
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("module", "contract"),
                ("action", "getabi"),
                ("address", address.as_str()),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SchemaError::rejected(format!("HTTP {status}: {body}")));
        }

        let schema = response.json::<RawAbiResponse>().await?.into_schema()?;
        info!(events = schema.events().count(), "Loaded contract ABI");
        Ok(schema)
    }
}

#[async_trait]
impl SchemaSource for EtherscanSchemaSource {
    async fn fetch(&self, contract: Address) -> Result<InterfaceSchema, SchemaError> {
        self.request_abi(contract)
            .instrument(spans::fetch_schema(contract))
            .await
    }
}
