//! Well-known defaults and constants
//!
//! This module centralizes magic constants used throughout the faucetwatch
//! crate, improving discoverability and maintainability.

use std::time::Duration;

/// Fixed delay between failed attempts to open a subscription.
pub const DEFAULT_RECONNECT_DELAY: Duration = Duration::from_secs(3);

/// Shown in place of a balance that could not be fetched.
pub const UNKNOWN_BALANCE: &str = "unknown";

/// Etherscan-compatible API used to look up verified contract ABIs.
pub const DEFAULT_ETHERSCAN_API_URL: &str = "https://api.etherscan.io/api";

/// Prefix of block explorer transaction links.
pub const DEFAULT_EXPLORER_TX_URL: &str = "https://etherscan.io/tx/";

/// Message used for events declared in the schema without a dedicated rendering.
pub const UNHANDLED_EVENT_MESSAGE: &str = "Unhandled Event";

/// Labels for the two balances attached to every notification.
pub mod labels {
    /// Balance of the monitored contract itself
    pub const PRIMARY_BALANCE: &str = "Faucet Balance";

    /// Balance of the configured secondary account
    pub const SECONDARY_BALANCE: &str = "Miner Balance";
}

/// Environment variable names read by [`WatchConfig::from_env`](super::WatchConfig::from_env).
pub mod env {
    pub const RPC_HTTP_URL: &str = "RPC_HTTP_URL";
    pub const RPC_WS_URL: &str = "RPC_WS_URL";
    pub const FAUCET_CONTRACT_ADDRESS: &str = "FAUCET_CONTRACT_ADDRESS";
    pub const MINER_ADDRESS: &str = "MINER_ADDRESS";
    pub const SLACK_WEBHOOK_URL: &str = "SLACK_WEBHOOK_URL";
    pub const ETHERSCAN_API_KEY: &str = "ETHERSCAN_API_KEY";
    pub const ETHERSCAN_API_URL: &str = "ETHERSCAN_API_URL";
    pub const CONTRACT_ABI_PATH: &str = "CONTRACT_ABI_PATH";
    pub const EXPLORER_TX_URL: &str = "EXPLORER_TX_URL";
    pub const RECONNECT_DELAY_SECS: &str = "RECONNECT_DELAY_SECS";
}
