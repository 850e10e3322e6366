//! Faucet contract event definitions
//!
//! The watcher matches logs against whatever events the loaded interface
//! declares, but renders only the kinds listed here. Everything else decodes
//! to the "Unhandled Event" message.
//!
//! # Event Signatures
//!
//! - **FallbackEvent**: `FallbackEvent(address,uint256)` - ether sent with calldata
//! - **ReceiveEvent**: `ReceiveEvent(address,uint256)` - plain ether transfer
//! - **WithDrawEvent**: `WithDrawEvent(address,uint256)` - faucet payout
//! - **OwnershipTransferred**: `OwnershipTransferred(address,address)`

/// Name of the event emitted by the contract's fallback function
pub const FALLBACK_EVENT: &str = "FallbackEvent";

/// Name of the event emitted by the contract's receive function
pub const RECEIVE_EVENT: &str = "ReceiveEvent";

/// Name of the event emitted on a faucet withdrawal
pub const WITHDRAW_EVENT: &str = "WithDrawEvent";

/// Name of the standard Ownable ownership event
pub const OWNERSHIP_TRANSFERRED_EVENT: &str = "OwnershipTransferred";

/// Name of the non-indexed argument holding a wei amount
pub const AMOUNT_FIELD: &str = "amount";

/// The rendering a declared event gets, chosen by its name.
///
/// # Examples
///
/// ```rust
/// use faucetwatch::events::EventKind;
///
/// assert_eq!(EventKind::from_name("ReceiveEvent"), EventKind::Deposit);
/// assert_eq!(EventKind::from_name("Paused"), EventKind::Unhandled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Ether received: sender at topic 1, `amount` in the payload
    Deposit,
    /// Ownership change: previous owner at topic 1, new owner at topic 2
    OwnershipTransferred,
    /// Faucet payout: receiver at topic 1, `amount` in the payload
    Withdraw,
    /// Declared in the interface but without a dedicated rendering
    Unhandled,
}

impl EventKind {
    /// Classify an event by its declared name
    pub fn from_name(name: &str) -> Self {
        match name {
            FALLBACK_EVENT | RECEIVE_EVENT => EventKind::Deposit,
            OWNERSHIP_TRANSFERRED_EVENT => EventKind::OwnershipTransferred,
            WITHDRAW_EVENT => EventKind::Withdraw,
            _ => EventKind::Unhandled,
        }
    }

    /// Number of indexed address arguments the rendering reads from topics 1..
    pub fn indexed_addresses(self) -> usize {
        match self {
            EventKind::Deposit | EventKind::Withdraw => 1,
            EventKind::OwnershipTransferred => 2,
            EventKind::Unhandled => 0,
        }
    }

    /// Whether the rendering reads `amount` from the payload
    pub fn reads_amount(self) -> bool {
        matches!(self, EventKind::Deposit | EventKind::Withdraw)
    }
}
