//! Shortened display form for account addresses.
//!
//! Notifications show addresses as `0xAbCd...1234`: the first six characters
//! of the EIP-55 checksummed hex form, an ellipsis, and the last four.

use alloy_primitives::Address;

const PREFIX_LEN: usize = 6;
const SUFFIX_LEN: usize = 4;

/// Shorten an address to `first 6 chars + "..." + last 4 chars`.
///
/// # Examples
///
/// ```
/// use alloy_primitives::address;
/// use faucetwatch::short_address;
///
/// let addr = address!("5fbdb2315678afecb367f032d93f642f64180aa3");
/// assert_eq!(short_address(addr), "0x5FbD...0aa3");
/// ```
pub fn short_address(address: Address) -> String {
    shorten(&address.to_checksum(None))
}

/// Shorten an arbitrary display string the same way addresses are shortened.
///
/// Strings too short to shorten are returned unchanged.
pub fn shorten(s: &str) -> String {
    if s.len() <= PREFIX_LEN + SUFFIX_LEN || !s.is_ascii() {
        return s.to_string();
    }
    format!("{}...{}", &s[..PREFIX_LEN], &s[s.len() - SUFFIX_LEN..])
}
