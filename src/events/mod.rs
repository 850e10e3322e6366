// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Event processing for the watched faucet contract.
//!
//! This module handles:
//! - Event names and kinds the watcher knows how to render
//! - Decoding raw logs against the loaded interface schema
//! - Rendering decoded logs into display messages
//! - Live log subscriptions over WebSocket
//! - The reconnecting event loop

pub mod decoder;
pub mod definitions;
pub mod formatter;
pub mod subscription;
pub mod watcher;

// Re-export public types
pub use decoder::LogDecoder;
pub use definitions::EventKind;
pub use formatter::{format_event, DecodedLog, DomainEvent, EventFields};
pub use subscription::{
    LogSubscriber, Subscription, SubscriptionFeed, SubscriptionItem, WsLogSubscriber,
};
pub use watcher::{EventWatcher, LoopEvent};
