// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across faucetwatch.
//!
//! This module provides newtype wrappers and display helpers for:
//! - Native currency amounts in wei, rendered exactly in ether
//! - Account addresses rendered in their shortened display form

pub mod address;
pub mod wei;

// Note: Public types are re-exported from lib.rs, not here
