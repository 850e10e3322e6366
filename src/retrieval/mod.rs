//! Data retrieval for notification context.
//!
//! This module handles on-demand account balance lookups. Balances are
//! point-in-time snapshots fetched per event and never cached.

mod balance;

pub use balance::{balance_or_unknown, BalanceSource, ProviderBalanceSource};
