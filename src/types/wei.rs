// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for native currency amounts
//!
//! This module provides a newtype wrapper for native currency (ETH) in wei.
//! Conversion to ether is done in integer space so that every wei survives
//! formatting; nothing here goes through floating point.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Number of wei in one ether (10^18)
pub const WEI_PER_ETHER: U256 = U256::from_limbs([1_000_000_000_000_000_000u64, 0, 0, 0]);

const ETHER_DECIMALS: usize = 18;

/// Represents an amount of native currency in wei
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use faucetwatch::WeiAmount;
///
/// let amount = WeiAmount::new(U256::from(1_500_000_000_000_000_000u128));
/// assert_eq!(amount.to_ether_string(), "1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct WeiAmount(U256);

impl WeiAmount {
    /// Zero wei amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new wei amount
    pub const fn new(wei: U256) -> Self {
        Self(wei)
    }

    /// Render the amount in ether as an exact decimal string.
    ///
    /// Trailing fractional zeros are dropped and whole amounts carry no
    /// decimal point. Scientific notation is never used.
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::U256;
    /// use faucetwatch::WeiAmount;
    ///
    /// assert_eq!(WeiAmount::new(U256::from(5_000_000_000_000_000_000u128)).to_ether_string(), "5");
    /// assert_eq!(WeiAmount::new(U256::from(1u64)).to_ether_string(), "0.000000000000000001");
    /// assert_eq!(WeiAmount::ZERO.to_ether_string(), "0");
    /// ```
    pub fn to_ether_string(&self) -> String {
        let whole = self.0 / WEI_PER_ETHER;
        let fractional = self.0 % WEI_PER_ETHER;

        let fractional_str = format!("{:0width$}", fractional, width = ETHER_DECIMALS);
        let trimmed = fractional_str.trim_end_matches('0');

        if trimmed.is_empty() {
            whole.to_string()
        } else {
            format!("{whole}.{trimmed}")
        }
    }
}

impl From<u64> for WeiAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for WeiAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for WeiAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_ether_string())
    }
}
