// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;

use crate::{
    config::{SchemaLocation, WatchConfig},
    errors::WatchError,
    events::{EventWatcher, LogDecoder, WsLogSubscriber},
    notify::SlackWebhookSink,
    provider::create_http_provider,
    retrieval::ProviderBalanceSource,
    schema::{EtherscanSchemaSource, FileSchemaSource, InterfaceSchema, SchemaSource},
};

/// Main entry point for the application.
///
/// Only returns on a startup failure; once the event loop starts it runs forever.
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = WatchConfig::from_env()?;
    info!(
        contract = %config.contract_address,
        secondary = %config.secondary_address,
        "Loaded configuration"
    );

    let schema = load_schema(&config).await?;
    info!(
        events = schema.events().count(),
        payload = ?schema.payload_layout().field_names(),
        "Loaded contract interface"
    );

    let decoder = LogDecoder::new(Arc::new(schema));
    let balances = ProviderBalanceSource::new(create_http_provider(&config.http_url)?);
    let sink = SlackWebhookSink::new(&config.webhook_url, &config.explorer_tx_url);

    let mut watcher = EventWatcher::new(&config, decoder, WsLogSubscriber, balances, sink);
    watcher.run().await;

    Ok(())
}

/// Load and validate the contract interface from the configured location.
async fn load_schema(config: &WatchConfig) -> Result<InterfaceSchema, WatchError> {
    let schema = match &config.schema {
        SchemaLocation::Etherscan { api_url, api_key } => {
            EtherscanSchemaSource::new(api_url, api_key)
                .fetch(config.contract_address)
                .await?
        }
        SchemaLocation::File(path) => {
            FileSchemaSource::new(path)
                .fetch(config.contract_address)
                .await?
        }
    };
    Ok(schema)
}
