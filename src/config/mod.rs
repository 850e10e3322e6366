//! Configuration for faucetwatch
//!
//! All settings are supplied externally, normally through environment
//! variables (optionally from a `.env` file). Tests and embedders can use
//! [`WatchConfigBuilder`] instead.
//!
//! # Example: From the environment
//!
//! ```rust,ignore
//! use faucetwatch::WatchConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = WatchConfig::from_env()?;
//! ```
//!
//! # Example: Builder
//!
//! ```rust
//! use faucetwatch::WatchConfigBuilder;
//! use alloy_primitives::address;
//! use std::time::Duration;
//!
//! let config = WatchConfigBuilder::new(
//!     address!("5fbdb2315678afecb367f032d93f642f64180aa3"),
//!     address!("206aab6b3e64e812479e287715fe40b2d7bde67d"),
//! )
//! .ws_url("ws://127.0.0.1:8545")
//! .reconnect_delay(Duration::from_secs(1))
//! .build();
//!
//! assert_eq!(config.reconnect_delay, Duration::from_secs(1));
//! ```

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use alloy_primitives::Address;

use crate::errors::ConfigError;

pub mod constants;

use constants::{env, DEFAULT_ETHERSCAN_API_URL, DEFAULT_EXPLORER_TX_URL, DEFAULT_RECONNECT_DELAY};

/// Where the contract interface is loaded from at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaLocation {
    /// Look up the verified ABI through an Etherscan-compatible API
    Etherscan {
        /// API base URL
        api_url: String,
        /// API key
        api_key: String,
    },
    /// Read the ABI from a local JSON file
    File(PathBuf),
}

/// Process configuration for the watcher
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// HTTP endpoint used for balance queries
    pub http_url: String,

    /// Streaming (WebSocket) endpoint used for the log subscription
    pub ws_url: String,

    /// Monitored contract; the subscription filter target
    pub contract_address: Address,

    /// Secondary account whose balance accompanies every notification
    pub secondary_address: Address,

    /// Notification sink endpoint
    pub webhook_url: String,

    /// Prefix for transaction links in notifications
    pub explorer_tx_url: String,

    /// Source of the contract interface
    pub schema: SchemaLocation,

    /// Fixed wait between failed subscription attempts
    /// Default: 3 seconds
    pub reconnect_delay: Duration,
}

impl WatchConfig {
    /// Load configuration from the process environment.
    ///
    /// `CONTRACT_ABI_PATH` takes precedence over Etherscan; when it is set
    /// `ETHERSCAN_API_KEY` is not required.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| get(key).ok_or_else(|| ConfigError::missing(key));

        let schema = match get(env::CONTRACT_ABI_PATH) {
            Some(path) => SchemaLocation::File(PathBuf::from(path)),
            None => SchemaLocation::Etherscan {
                api_url: get(env::ETHERSCAN_API_URL)
                    .unwrap_or_else(|| DEFAULT_ETHERSCAN_API_URL.to_string()),
                api_key: require(env::ETHERSCAN_API_KEY)?,
            },
        };

        let reconnect_delay = match get(env::RECONNECT_DELAY_SECS) {
            Some(raw) => Duration::from_secs(parse_field(env::RECONNECT_DELAY_SECS, &raw)?),
            None => DEFAULT_RECONNECT_DELAY,
        };

        Ok(Self {
            http_url: require(env::RPC_HTTP_URL)?,
            ws_url: require(env::RPC_WS_URL)?,
            contract_address: parse_field(
                env::FAUCET_CONTRACT_ADDRESS,
                &require(env::FAUCET_CONTRACT_ADDRESS)?,
            )?,
            secondary_address: parse_field(env::MINER_ADDRESS, &require(env::MINER_ADDRESS)?)?,
            webhook_url: require(env::SLACK_WEBHOOK_URL)?,
            explorer_tx_url: get(env::EXPLORER_TX_URL)
                .unwrap_or_else(|| DEFAULT_EXPLORER_TX_URL.to_string()),
            schema,
            reconnect_delay,
        })
    }
}

fn parse_field<T>(field: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| ConfigError::invalid(field, e))
}

/// Builder for [`WatchConfig`]
///
/// Starts from local-node defaults; only the two addresses are mandatory.
pub struct WatchConfigBuilder {
    config: WatchConfig,
}

impl WatchConfigBuilder {
    /// Create a builder for the given monitored contract and secondary account
    pub fn new(contract_address: Address, secondary_address: Address) -> Self {
        Self {
            config: WatchConfig {
                http_url: "http://127.0.0.1:8545".to_string(),
                ws_url: "ws://127.0.0.1:8545".to_string(),
                contract_address,
                secondary_address,
                webhook_url: String::new(),
                explorer_tx_url: DEFAULT_EXPLORER_TX_URL.to_string(),
                schema: SchemaLocation::File(PathBuf::from("abi.json")),
                reconnect_delay: DEFAULT_RECONNECT_DELAY,
            },
        }
    }

    /// Set the HTTP endpoint
    pub fn http_url(mut self, url: impl Into<String>) -> Self {
        self.config.http_url = url.into();
        self
    }

    /// Set the streaming endpoint
    pub fn ws_url(mut self, url: impl Into<String>) -> Self {
        self.config.ws_url = url.into();
        self
    }

    /// Set the notification sink endpoint
    pub fn webhook_url(mut self, url: impl Into<String>) -> Self {
        self.config.webhook_url = url.into();
        self
    }

    /// Set the transaction link prefix
    pub fn explorer_tx_url(mut self, url: impl Into<String>) -> Self {
        self.config.explorer_tx_url = url.into();
        self
    }

    /// Set the schema source
    pub fn schema(mut self, schema: SchemaLocation) -> Self {
        self.config.schema = schema;
        self
    }

    /// Set the fixed reconnect delay
    pub fn reconnect_delay(mut self, delay: Duration) -> Self {
        self.config.reconnect_delay = delay;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> WatchConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use std::collections::HashMap;

    fn base_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            (env::RPC_HTTP_URL, "https://rpc.example.com"),
            (env::RPC_WS_URL, "wss://rpc.example.com/ws"),
            (
                env::FAUCET_CONTRACT_ADDRESS,
                "0x5FbDB2315678afecb367f032d93F642f64180aa3",
            ),
            (
                env::MINER_ADDRESS,
                "0x206AaB6b3e64e812479E287715fe40b2d7BDE67d",
            ),
            (env::SLACK_WEBHOOK_URL, "https://hooks.slack.com/services/T/B/X"),
            (env::ETHERSCAN_API_KEY, "KEY"),
        ])
    }

    fn load(vars: &HashMap<&'static str, &'static str>) -> Result<WatchConfig, ConfigError> {
        WatchConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn test_from_lookup_with_defaults() {
        let config = load(&base_env()).unwrap();

        assert_eq!(
            config.contract_address,
            address!("5fbdb2315678afecb367f032d93f642f64180aa3")
        );
        assert_eq!(config.reconnect_delay, Duration::from_secs(3));
        assert_eq!(config.explorer_tx_url, DEFAULT_EXPLORER_TX_URL);
        assert_eq!(
            config.schema,
            SchemaLocation::Etherscan {
                api_url: DEFAULT_ETHERSCAN_API_URL.to_string(),
                api_key: "KEY".to_string(),
            }
        );
    }

    #[test]
    fn test_abi_path_replaces_etherscan() {
        let mut vars = base_env();
        vars.remove(env::ETHERSCAN_API_KEY);
        vars.insert(env::CONTRACT_ABI_PATH, "faucet.json");

        let config = load(&vars).unwrap();
        assert_eq!(config.schema, SchemaLocation::File(PathBuf::from("faucet.json")));
    }

    #[test]
    fn test_missing_required_field() {
        let mut vars = base_env();
        vars.remove(env::RPC_WS_URL);

        match load(&vars) {
            Err(ConfigError::Missing { field }) => assert_eq!(field, env::RPC_WS_URL),
            other => panic!("expected missing field, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let mut vars = base_env();
        vars.insert(env::SLACK_WEBHOOK_URL, "  ");

        assert!(matches!(load(&vars), Err(ConfigError::Missing { .. })));
    }

    #[test]
    fn test_invalid_address() {
        let mut vars = base_env();
        vars.insert(env::MINER_ADDRESS, "not-an-address");

        match load(&vars) {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, env::MINER_ADDRESS),
            other => panic!("expected invalid field, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_reconnect_delay() {
        let mut vars = base_env();
        vars.insert(env::RECONNECT_DELAY_SECS, "10");

        let config = load(&vars).unwrap();
        assert_eq!(config.reconnect_delay, Duration::from_secs(10));
    }

    #[test]
    fn test_builder_overrides() {
        let config = WatchConfigBuilder::new(Address::ZERO, Address::ZERO)
            .http_url("http://node:8545")
            .webhook_url("http://hooks")
            .build();

        assert_eq!(config.http_url, "http://node:8545");
        assert_eq!(config.webhook_url, "http://hooks");
        assert_eq!(config.reconnect_delay, DEFAULT_RECONNECT_DELAY);
    }
}
