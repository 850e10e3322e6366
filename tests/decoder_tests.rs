// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decoding logs produced by the canonical event encoder
//!
//! Logs are built with `sol!` event types so topic hashing and payload
//! encoding come from an independent implementation.

mod helpers;

use std::sync::Arc;

use alloy_primitives::{Bytes, LogData, U256};
use alloy_sol_types::SolEvent;
use faucetwatch::{DecodeError, EventFields, InterfaceSchema, LogDecoder, WeiAmount};
use helpers::*;
use proptest::prelude::*;

#[test]
fn test_fallback_event_decodes_sender_and_amount() {
    let event = FallbackEvent {
        from: MINER,
        amount: U256::from(ONE_ETHER + 1),
    };
    let log = faucet_log(event.encode_log_data(), 0x42);

    let decoded = faucet_decoder().decode_fields(&log).unwrap();
    assert_eq!(decoded.name, "FallbackEvent");
    assert_eq!(
        decoded.fields,
        EventFields::Deposit {
            from: MINER,
            amount: WeiAmount::from(U256::from(ONE_ETHER + 1)),
        }
    );

    let rendered = faucet_decoder().decode(&log).unwrap();
    assert_eq!(
        rendered.message,
        "Received 1.000000000000000001 ETH from 0x206A...E67d"
    );
    assert_eq!(rendered.transaction_id, tx_id(0x42));
}

#[test]
fn test_withdraw_without_payload_is_missing_amount() {
    let event = WithDrawEvent {
        receiver: MINER,
        amount: U256::from(ONE_ETHER),
    };
    let encoded = event.encode_log_data();
    let stripped = LogData::new_unchecked(encoded.topics().to_vec(), Default::default());

    let err = faucet_decoder()
        .decode(&faucet_log(stripped, 0x01))
        .unwrap_err();
    assert!(matches!(err, DecodeError::MissingAmount { .. }), "{err:?}");
}

#[test]
fn test_ownership_without_new_owner_topic_is_missing_topic() {
    let event = OwnershipTransferred {
        previousOwner: MINER,
        newOwner: FAUCET,
    };
    let encoded = event.encode_log_data();
    let truncated = LogData::new_unchecked(encoded.topics()[..2].to_vec(), Default::default());

    let err = faucet_decoder()
        .decode(&faucet_log(truncated, 0x01))
        .unwrap_err();
    assert!(
        matches!(err, DecodeError::MissingTopic { index: 2, .. }),
        "{err:?}"
    );
}

#[test]
fn test_log_without_topics_is_rejected() {
    let empty = LogData::new_unchecked(Vec::new(), Default::default());

    let err = faucet_decoder()
        .decode(&faucet_log(empty, 0x01))
        .unwrap_err();
    assert!(
        matches!(err, DecodeError::MissingTopic { index: 0, .. }),
        "{err:?}"
    );
}

/// Faucet withdrawals next to an OpenZeppelin `Pausable` event with its own payload
const PAUSABLE_FAUCET_ABI: &str = r#"[
    {"type": "event", "name": "WithDrawEvent", "anonymous": false, "inputs": [
        {"name": "receiver", "type": "address", "indexed": true},
        {"name": "amount", "type": "uint256", "indexed": false}
    ]},
    {"type": "event", "name": "Paused", "anonymous": false, "inputs": [
        {"name": "account", "type": "address", "indexed": false}
    ]}
]"#;

#[test]
fn test_unhandled_event_with_own_payload_loads_and_decodes() {
    let schema = InterfaceSchema::from_json(PAUSABLE_FAUCET_ABI).unwrap();
    assert_eq!(schema.payload_layout().source_event(), Some("WithDrawEvent"));
    let decoder = LogDecoder::new(Arc::new(schema));

    let paused = Paused { account: MINER };
    let event = decoder
        .decode(&faucet_log(paused.encode_log_data(), 0x09))
        .unwrap();
    assert_eq!(event.name, "Paused");
    assert_eq!(event.message, "Unhandled Event");

    let withdraw = WithDrawEvent {
        receiver: MINER,
        amount: U256::from(5 * ONE_ETHER),
    };
    let event = decoder
        .decode(&faucet_log(withdraw.encode_log_data(), 0x0a))
        .unwrap();
    assert_eq!(event.message, "0x206A...E67d withdraw 5 ETH");
}

#[test]
fn test_unhandled_event_with_truncated_payload_fails_to_unpack() {
    let paused = Paused { account: MINER }.encode_log_data();
    let truncated = LogData::new_unchecked(
        paused.topics().to_vec(),
        Bytes::copy_from_slice(&paused.data[..20]),
    );

    let err = faucet_decoder()
        .decode(&faucet_log(truncated, 0x01))
        .unwrap_err();
    assert!(
        matches!(&err, DecodeError::DecodePayload { event, .. } if event == "Paused"),
        "{err:?}"
    );
}

proptest! {
    #[test]
    fn prop_withdraw_amount_survives_decoding(amount in any::<u128>()) {
        let event = WithDrawEvent { receiver: MINER, amount: U256::from(amount) };
        let decoded = faucet_decoder()
            .decode_fields(&faucet_log(event.encode_log_data(), 0x01))
            .unwrap();

        prop_assert_eq!(
            decoded.fields,
            EventFields::Withdraw { receiver: MINER, amount: WeiAmount::from(U256::from(amount)) }
        );
    }
}
