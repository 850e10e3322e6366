// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Contract interface schema loading and validation.
//!
//! The interface is loaded once at startup and never changes afterwards.
//! Loading also validates the assumptions the decoder relies on, so that a
//! schema the watcher cannot handle fails the process immediately instead of
//! failing every log at runtime:
//!
//! - The events that render an amount (deposits and withdrawals) declare the
//!   *same* ordered list of non-indexed arguments, taken from `WithDrawEvent`
//!   when it is declared. Every payload is unpacked against this one shared
//!   layout, whichever event matched, so an unhandled event whose payload
//!   does not fit only fails that log at decode time.
//! - The shared layout contains `amount` of type `uint256`.
//! - Handled events declare the indexed address arguments their rendering
//!   reads from the topics.
//!
//! # Sources
//!
//! - [`EtherscanSchemaSource`] - verified ABI via an Etherscan-compatible API
//! - [`FileSchemaSource`] - ABI JSON on local disk
//!
//! ```rust,ignore
//! use faucetwatch::schema::{EtherscanSchemaSource, SchemaSource};
//!
//! let source = EtherscanSchemaSource::new(api_url, api_key);
//! let schema = source.fetch(contract_address).await?;
//! ```

use std::path::PathBuf;

use alloy_dyn_abi::{DynSolType, DynSolValue, Specifier};
use alloy_json_abi::{Event, EventParam, JsonAbi};
use alloy_primitives::{Address, B256, U256};
use async_trait::async_trait;
use tracing::debug;

use crate::errors::{DecodeError, SchemaError};
use crate::events::definitions::{EventKind, AMOUNT_FIELD, WITHDRAW_EVENT};

mod etherscan;

pub use etherscan::EtherscanSchemaSource;

/// Loads the interface schema of a contract.
///
/// Called once during startup; implementations need no caching or retries.
#[async_trait]
pub trait SchemaSource: Send + Sync {
    /// Fetch and validate the interface of `contract`
    async fn fetch(&self, contract: Address) -> Result<InterfaceSchema, SchemaError>;
}

/// Reads the interface from an ABI JSON file.
#[derive(Debug, Clone)]
pub struct FileSchemaSource {
    path: PathBuf,
}

impl FileSchemaSource {
    /// Create a source reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SchemaSource for FileSchemaSource {
    async fn fetch(&self, contract: Address) -> Result<InterfaceSchema, SchemaError> {
        debug!(path = %self.path.display(), contract = %contract, "Reading contract ABI from file");
        let raw = tokio::fs::read_to_string(&self.path).await?;
        InterfaceSchema::from_json(&raw)
    }
}

/// Immutable description of a contract's events, validated for decoding.
#[derive(Debug, Clone)]
pub struct InterfaceSchema {
    abi: JsonAbi,
    payload: PayloadLayout,
}

impl InterfaceSchema {
    /// Validate an ABI and build the schema from it
    pub fn new(abi: JsonAbi) -> Result<Self, SchemaError> {
        let payload = PayloadLayout::from_abi(&abi)?;

        for event in abi.events() {
            validate_event_shape(event, &payload)?;
        }

        Ok(Self { abi, payload })
    }

    /// Parse ABI JSON text and validate it
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faucetwatch::InterfaceSchema;
    ///
    /// let schema = InterfaceSchema::from_json(r#"[{
    ///     "type": "event", "name": "WithDrawEvent", "anonymous": false,
    ///     "inputs": [
    ///         {"name": "receiver", "type": "address", "indexed": true},
    ///         {"name": "amount", "type": "uint256", "indexed": false}
    ///     ]
    /// }]"#).unwrap();
    ///
    /// assert_eq!(schema.payload_layout().field_names(), ["amount"]);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let abi: JsonAbi = serde_json::from_str(json)?;
        Self::new(abi)
    }

    /// Find the non-anonymous event whose signature hash equals `selector`
    pub fn event_by_selector(&self, selector: &B256) -> Option<&Event> {
        self.abi
            .events()
            .filter(|event| !event.anonymous)
            .find(|event| event.selector() == *selector)
    }

    /// The shared non-indexed argument layout
    pub fn payload_layout(&self) -> &PayloadLayout {
        &self.payload
    }

    /// All declared events
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.abi.events()
    }
}

/// The non-indexed argument layout every payload is unpacked against.
#[derive(Debug, Clone, Default)]
pub struct PayloadLayout {
    source_event: Option<String>,
    names: Vec<String>,
    tuple: Option<DynSolType>,
    amount_index: Option<usize>,
}

impl PayloadLayout {
    /// Derive the layout from the events that render an amount.
    ///
    /// `WithDrawEvent` supplies the layout when declared; every other
    /// amount-reading event must match it. Events without a dedicated
    /// rendering are not consulted, whatever their payload looks like.
    fn from_abi(abi: &JsonAbi) -> Result<Self, SchemaError> {
        let mut candidates: Vec<(&Event, Vec<&EventParam>)> = abi
            .events()
            .filter(|event| {
                !event.anonymous && EventKind::from_name(&event.name).reads_amount()
            })
            .map(|event| (event, unindexed_inputs(event)))
            .filter(|(_, unindexed)| !unindexed.is_empty())
            .collect();
        candidates.sort_by_key(|(event, _)| event.name != WITHDRAW_EVENT);

        let mut candidates = candidates.into_iter();
        let reference = candidates.next();

        if let Some((first, layout)) = &reference {
            let mismatch = candidates.find(|(_, unindexed)| !same_layout(layout, unindexed));
            if let Some((other, _)) = mismatch {
                return Err(SchemaError::InconsistentPayloadLayout {
                    first: first.name.clone(),
                    second: other.name.clone(),
                });
            }
        }

        let Some((event, params)) = reference else {
            return Ok(Self::default());
        };

        let types = params
            .iter()
            .map(|param| {
                param
                    .resolve()
                    .map_err(|e| SchemaError::invalid_event_shape(&event.name, e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let amount_index = params
            .iter()
            .position(|param| param.name == AMOUNT_FIELD && param.ty == "uint256");

        debug!(
            event = %event.name,
            fields = params.len(),
            has_amount = amount_index.is_some(),
            "Derived shared payload layout"
        );

        Ok(Self {
            source_event: Some(event.name.clone()),
            names: params.iter().map(|param| param.name.clone()).collect(),
            tuple: Some(DynSolType::Tuple(types)),
            amount_index,
        })
    }

    /// Names of the non-indexed arguments, in payload order
    pub fn field_names(&self) -> &[String] {
        &self.names
    }

    /// Event the layout was taken from, if any event carries a payload
    pub fn source_event(&self) -> Option<&str> {
        self.source_event.as_deref()
    }

    /// Whether the layout contains a `uint256 amount`
    pub fn has_amount(&self) -> bool {
        self.amount_index.is_some()
    }

    /// Unpack a payload against the shared layout.
    ///
    /// `event` is the name of the matched event and only feeds error messages.
    pub fn unpack(&self, event: &str, data: &[u8]) -> Result<Vec<DynSolValue>, DecodeError> {
        let Some(tuple) = &self.tuple else {
            return Err(DecodeError::decode_payload(
                event,
                "contract declares no event with a payload",
            ));
        };

        match tuple.abi_decode_sequence(data) {
            Ok(DynSolValue::Tuple(values)) => Ok(values),
            Ok(other) => Ok(vec![other]),
            Err(e) => Err(DecodeError::decode_payload(event, e)),
        }
    }

    /// Read the amount from unpacked payload values.
    pub fn amount(&self, event: &str, values: &[DynSolValue]) -> Result<U256, DecodeError> {
        self.amount_index
            .and_then(|index| values.get(index))
            .and_then(DynSolValue::as_uint)
            .map(|(amount, _)| amount)
            .ok_or_else(|| DecodeError::decode_payload(event, "payload has no uint256 amount"))
    }
}

fn unindexed_inputs(event: &Event) -> Vec<&EventParam> {
    event.inputs.iter().filter(|param| !param.indexed).collect()
}

fn same_layout(a: &[&EventParam], b: &[&EventParam]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(x, y)| x.name == y.name && x.selector_type() == y.selector_type())
}

fn validate_event_shape(event: &Event, payload: &PayloadLayout) -> Result<(), SchemaError> {
    let kind = EventKind::from_name(&event.name);
    if kind == EventKind::Unhandled {
        return Ok(());
    }

    let indexed: Vec<&EventParam> = event.inputs.iter().filter(|param| param.indexed).collect();
    let wanted = kind.indexed_addresses();
    if indexed.len() < wanted || indexed.iter().take(wanted).any(|param| param.ty != "address") {
        return Err(SchemaError::invalid_event_shape(
            &event.name,
            format!("expected {wanted} indexed address argument(s)"),
        ));
    }

    if kind.reads_amount() && (unindexed_inputs(event).is_empty() || !payload.has_amount()) {
        return Err(SchemaError::invalid_event_shape(
            &event.name,
            format!("expected a non-indexed uint256 {AMOUNT_FIELD}"),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAUCET_ABI: &str = include_str!("../../tests/fixtures/faucet_abi.json");

    fn event_json(name: &str, inputs: &str) -> String {
        format!(r#"{{"type":"event","name":"{name}","anonymous":false,"inputs":[{inputs}]}}"#)
    }

    #[test]
    fn test_faucet_abi_loads() {
        let schema = InterfaceSchema::from_json(FAUCET_ABI).unwrap();

        assert_eq!(schema.events().count(), 5);
        assert_eq!(schema.payload_layout().field_names(), ["amount"]);
        assert!(schema.payload_layout().has_amount());
        assert_eq!(schema.payload_layout().source_event(), Some("WithDrawEvent"));
    }

    #[test]
    fn test_event_by_selector() {
        let schema = InterfaceSchema::from_json(FAUCET_ABI).unwrap();
        let withdraw = schema
            .events()
            .find(|event| event.name == "WithDrawEvent")
            .unwrap();

        let found = schema.event_by_selector(&withdraw.selector()).unwrap();
        assert_eq!(found.name, "WithDrawEvent");
        assert!(schema.event_by_selector(&B256::repeat_byte(0xab)).is_none());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            InterfaceSchema::from_json("{not json"),
            Err(SchemaError::Malformed(_))
        ));
    }

    #[test]
    fn test_inconsistent_payload_layout_rejected() {
        let abi = format!(
            "[{},{}]",
            event_json(
                "ReceiveEvent",
                r#"{"name":"from","type":"address","indexed":true},{"name":"amount","type":"uint128","indexed":false}"#
            ),
            event_json(
                "WithDrawEvent",
                r#"{"name":"receiver","type":"address","indexed":true},{"name":"amount","type":"uint256","indexed":false}"#
            ),
        );

        match InterfaceSchema::from_json(&abi) {
            Err(SchemaError::InconsistentPayloadLayout { first, second }) => {
                assert_eq!(first, "WithDrawEvent");
                assert_eq!(second, "ReceiveEvent");
            }
            other => panic!("expected inconsistent layout, got {other:?}"),
        }
    }

    #[test]
    fn test_unhandled_event_with_other_payload_loads() {
        let abi = format!(
            "[{},{},{}]",
            event_json(
                "WithDrawEvent",
                r#"{"name":"receiver","type":"address","indexed":true},{"name":"amount","type":"uint256","indexed":false}"#
            ),
            event_json("Paused", r#"{"name":"account","type":"address","indexed":false}"#),
            event_json(
                "Refund",
                r#"{"name":"to","type":"address","indexed":true},{"name":"amount","type":"uint128","indexed":false},{"name":"memo","type":"string","indexed":false}"#
            ),
        );

        let schema = InterfaceSchema::from_json(&abi).unwrap();
        assert_eq!(schema.payload_layout().source_event(), Some("WithDrawEvent"));
        assert_eq!(schema.payload_layout().field_names(), ["amount"]);
    }

    #[test]
    fn test_missing_amount_rejected_for_handled_event() {
        let abi = format!(
            "[{}]",
            event_json(
                "ReceiveEvent",
                r#"{"name":"from","type":"address","indexed":true},{"name":"value","type":"uint256","indexed":false}"#
            ),
        );

        assert!(matches!(
            InterfaceSchema::from_json(&abi),
            Err(SchemaError::InvalidEventShape { .. })
        ));
    }

    #[test]
    fn test_ownership_needs_two_indexed_addresses() {
        let abi = format!(
            "[{}]",
            event_json(
                "OwnershipTransferred",
                r#"{"name":"previousOwner","type":"address","indexed":true},{"name":"newOwner","type":"address","indexed":false}"#
            ),
        );

        match InterfaceSchema::from_json(&abi) {
            Err(SchemaError::InvalidEventShape { event, .. }) => {
                assert_eq!(event, "OwnershipTransferred")
            }
            other => panic!("expected invalid shape, got {other:?}"),
        }
    }

    #[test]
    fn test_unhandled_events_are_not_shape_checked() {
        let abi = format!(
            "[{}]",
            event_json("Paused", r#"{"name":"flag","type":"bool","indexed":true}"#),
        );

        let schema = InterfaceSchema::from_json(&abi).unwrap();
        assert!(schema.payload_layout().source_event().is_none());
    }

    #[test]
    fn test_unpack_without_layout_fails() {
        let layout = PayloadLayout::default();
        assert!(matches!(
            layout.unpack("Paused", &[0u8; 32]),
            Err(DecodeError::DecodePayload { .. })
        ));
    }

    #[test]
    fn test_unpack_reads_amount() {
        let schema = InterfaceSchema::from_json(FAUCET_ABI).unwrap();
        let layout = schema.payload_layout();

        let data = U256::from(42u64).to_be_bytes::<32>();
        let values = layout.unpack("WithDrawEvent", &data).unwrap();
        assert_eq!(layout.amount("WithDrawEvent", &values).unwrap(), U256::from(42u64));
    }

    #[test]
    fn test_unpack_short_payload_fails() {
        let schema = InterfaceSchema::from_json(FAUCET_ABI).unwrap();
        assert!(matches!(
            schema.payload_layout().unpack("WithDrawEvent", &[1, 2, 3]),
            Err(DecodeError::DecodePayload { .. })
        ));
    }

    #[tokio::test]
    async fn test_file_schema_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("abi.json");
        std::fs::write(&path, FAUCET_ABI).unwrap();

        let schema = FileSchemaSource::new(&path)
            .fetch(Address::ZERO)
            .await
            .unwrap();
        assert!(schema.payload_layout().has_amount());
    }

    #[tokio::test]
    async fn test_file_schema_source_missing_file() {
        let result = FileSchemaSource::new("/nonexistent/abi.json")
            .fetch(Address::ZERO)
            .await;
        assert!(matches!(result, Err(SchemaError::Io(_))));
    }
}
