//! Per-tag action schemas and the top-level decoder.
//!
//! `ActionDecoder` keeps a registry mapping each known action-type tag to
//! an [`ActionSchema`]: the ordered field schema the slot decoder runs
//! with, paired with a builder that assembles the typed variant. Tags
//! without a registered schema fall back to the `unknown` variant, so
//! decoding any payload with an intact header always succeeds.
use std::collections::HashMap;

use corewriter_shared::types::{
    ActionKind, CancelOrderByCloid, CancelOrderByOid, CoreWriterAction, LimitOrder, SendAsset,
    SpotSend, StakingDeposit, StakingWithdraw, TokenDelegate, UnknownAction, UsdClassTransfer,
    VaultTransfer,
};
use tracing::debug;

use crate::errors::DecodeError;
use crate::header::parse_header;
use crate::slots::{Field, PrimitiveType, SlotValue, decode_slots};

type BuildFn = fn(u8, &[SlotValue]) -> Result<CoreWriterAction, DecodeError>;

/// Schema and constructor registered for one known action tag.
pub struct ActionSchema {
    /// The wire name of the action, as rendered in the serialized `type` field.
    pub action: &'static str,
    /// The ordered field schema driving the slot decoder.
    pub fields: &'static [Field],
    build: BuildFn,
}

impl ActionSchema {
    pub const fn new(action: &'static str, fields: &'static [Field], build: BuildFn) -> Self {
        Self {
            action,
            fields,
            build,
        }
    }
}

/// `ActionDecoder` turns raw CoreWriter payloads into structured
/// [`CoreWriterAction`] values.
///
/// It manages a registry of schemas keyed by action-type tag; the registry
/// is built once and only read afterwards, so a single decoder can be
/// shared across threads and decode calls never coordinate.
pub struct ActionDecoder {
    schema_registry: HashMap<u32, ActionSchema>,
}

impl ActionDecoder {
    /// Creates a new `ActionDecoder` with all known action schemas registered.
    pub fn new() -> Self {
        let mut decoder = Self {
            schema_registry: HashMap::new(),
        };
        decoder.register_schema(
            1,
            ActionSchema::new("limitOrder", LIMIT_ORDER_FIELDS, build_limit_order),
        );
        decoder.register_schema(
            2,
            ActionSchema::new("vaultTransfer", VAULT_TRANSFER_FIELDS, build_vault_transfer),
        );
        decoder.register_schema(
            3,
            ActionSchema::new("tokenDelegate", TOKEN_DELEGATE_FIELDS, build_token_delegate),
        );
        decoder.register_schema(
            4,
            ActionSchema::new("stakingDeposit", STAKING_WEI_FIELDS, build_staking_deposit),
        );
        decoder.register_schema(
            5,
            ActionSchema::new("stakingWithdraw", STAKING_WEI_FIELDS, build_staking_withdraw),
        );
        decoder.register_schema(
            6,
            ActionSchema::new("spotSend", SPOT_SEND_FIELDS, build_spot_send),
        );
        decoder.register_schema(
            7,
            ActionSchema::new(
                "usdClassTransfer",
                USD_CLASS_TRANSFER_FIELDS,
                build_usd_class_transfer,
            ),
        );
        decoder.register_schema(
            10,
            ActionSchema::new(
                "cancelOrderByOid",
                CANCEL_ORDER_BY_OID_FIELDS,
                build_cancel_order_by_oid,
            ),
        );
        decoder.register_schema(
            11,
            ActionSchema::new(
                "cancelOrderByCloid",
                CANCEL_ORDER_BY_CLOID_FIELDS,
                build_cancel_order_by_cloid,
            ),
        );
        decoder.register_schema(
            13,
            ActionSchema::new("sendAsset", SEND_ASSET_FIELDS, build_send_asset),
        );
        decoder
    }

    /// Registers a schema for a specific action-type tag.
    ///
    /// # Arguments
    ///
    /// * `action_type` - The 24-bit tag the schema applies to.
    /// * `schema` - The field schema and builder for the tag.
    pub fn register_schema(&mut self, action_type: u32, schema: ActionSchema) {
        self.schema_registry.insert(action_type, schema);
    }

    /// Returns the schema registered for a tag, if any.
    pub fn schema_for(&self, action_type: u32) -> Option<&ActionSchema> {
        self.schema_registry.get(&action_type)
    }

    /// Decodes a hex-encoded CoreWriter payload into a structured action.
    ///
    /// The input may carry an optional `0x` prefix. Payloads whose tag has
    /// no registered schema decode to `ActionKind::Unknown` carrying the
    /// re-hex-encoded remainder; this path is a success by design.
    ///
    /// # Arguments
    ///
    /// * `hex_payload` - The `data` field of a `RawAction` log, as hex text.
    ///
    /// # Returns
    ///
    /// The decoded `CoreWriterAction`, or a `DecodeError` if the input is
    /// not valid hex, lacks the 4-byte header, or is shorter than the
    /// selected schema requires.
    pub fn decode(&self, hex_payload: &str) -> Result<CoreWriterAction, DecodeError> {
        let stripped = hex_payload.strip_prefix("0x").unwrap_or(hex_payload);
        let raw = alloy::hex::decode(stripped)?;

        let (header, remainder) = parse_header(&raw)?;
        let Some(schema) = self.schema_for(header.action_type) else {
            debug!(
                action_type = header.action_type,
                "no schema registered, decoding as unknown action"
            );
            return Ok(CoreWriterAction {
                version: header.version,
                kind: ActionKind::Unknown(UnknownAction {
                    data: alloy::hex::encode(remainder),
                }),
            });
        };

        let values = decode_slots(remainder, schema.fields)?;
        (schema.build)(header.version, &values)
    }
}

impl Default for ActionDecoder {
    fn default() -> Self {
        Self::new()
    }
}

const LIMIT_ORDER_FIELDS: &[Field] = &[
    Field::new("asset", PrimitiveType::Uint32),
    Field::new("isBuy", PrimitiveType::Bool),
    Field::new("limitPx", PrimitiveType::Uint64),
    Field::new("sz", PrimitiveType::Uint64),
    Field::new("reduceOnly", PrimitiveType::Bool),
    Field::new("encodedTif", PrimitiveType::Uint32),
    Field::new("cloid", PrimitiveType::Uint128),
];

const VAULT_TRANSFER_FIELDS: &[Field] = &[
    Field::new("vault", PrimitiveType::Address),
    Field::new("isDeposit", PrimitiveType::Bool),
    Field::new("usd", PrimitiveType::Uint64),
];

const TOKEN_DELEGATE_FIELDS: &[Field] = &[
    Field::new("validator", PrimitiveType::Address),
    Field::new("wei", PrimitiveType::Uint64),
    Field::new("isUndelegate", PrimitiveType::Bool),
];

// Deposit and withdraw share the single-field schema.
const STAKING_WEI_FIELDS: &[Field] = &[Field::new("wei", PrimitiveType::Uint64)];

const SPOT_SEND_FIELDS: &[Field] = &[
    Field::new("destination", PrimitiveType::Address),
    Field::new("token", PrimitiveType::Uint64),
    Field::new("wei", PrimitiveType::Uint64),
];

const USD_CLASS_TRANSFER_FIELDS: &[Field] = &[
    Field::new("ntl", PrimitiveType::Uint64),
    Field::new("toPerp", PrimitiveType::Bool),
];

const CANCEL_ORDER_BY_OID_FIELDS: &[Field] = &[
    Field::new("asset", PrimitiveType::Uint32),
    Field::new("oid", PrimitiveType::Uint64),
];

const CANCEL_ORDER_BY_CLOID_FIELDS: &[Field] = &[
    Field::new("asset", PrimitiveType::Uint32),
    Field::new("cloid", PrimitiveType::Uint64),
];

const SEND_ASSET_FIELDS: &[Field] = &[
    Field::new("destination", PrimitiveType::Address),
    Field::new("subAccount", PrimitiveType::Address),
    Field::new("sourceDex", PrimitiveType::Uint32),
    Field::new("destinationDex", PrimitiveType::Uint32),
    Field::new("token", PrimitiveType::Uint64),
    Field::new("wei", PrimitiveType::Uint64),
];

fn build_limit_order(version: u8, values: &[SlotValue]) -> Result<CoreWriterAction, DecodeError> {
    match *values {
        [
            SlotValue::Uint32(asset),
            SlotValue::Bool(is_buy),
            SlotValue::Uint64(limit_px),
            SlotValue::Uint64(sz),
            SlotValue::Bool(reduce_only),
            SlotValue::Uint32(encoded_tif),
            SlotValue::Uint128(cloid),
        ] => Ok(CoreWriterAction {
            version,
            kind: ActionKind::LimitOrder(LimitOrder {
                asset,
                is_buy,
                limit_px,
                sz,
                reduce_only,
                encoded_tif,
                cloid,
            }),
        }),
        _ => Err(DecodeError::SchemaMismatch {
            action: "limitOrder",
        }),
    }
}

fn build_vault_transfer(
    version: u8,
    values: &[SlotValue],
) -> Result<CoreWriterAction, DecodeError> {
    match *values {
        [
            SlotValue::Address(vault),
            SlotValue::Bool(is_deposit),
            SlotValue::Uint64(usd),
        ] => Ok(CoreWriterAction {
            version,
            kind: ActionKind::VaultTransfer(VaultTransfer {
                vault,
                is_deposit,
                usd,
            }),
        }),
        _ => Err(DecodeError::SchemaMismatch {
            action: "vaultTransfer",
        }),
    }
}

fn build_token_delegate(
    version: u8,
    values: &[SlotValue],
) -> Result<CoreWriterAction, DecodeError> {
    match *values {
        [
            SlotValue::Address(validator),
            SlotValue::Uint64(wei),
            SlotValue::Bool(is_undelegate),
        ] => Ok(CoreWriterAction {
            version,
            kind: ActionKind::TokenDelegate(TokenDelegate {
                validator,
                wei,
                is_undelegate,
            }),
        }),
        _ => Err(DecodeError::SchemaMismatch {
            action: "tokenDelegate",
        }),
    }
}

fn build_staking_deposit(
    version: u8,
    values: &[SlotValue],
) -> Result<CoreWriterAction, DecodeError> {
    match *values {
        [SlotValue::Uint64(wei)] => Ok(CoreWriterAction {
            version,
            kind: ActionKind::StakingDeposit(StakingDeposit { wei }),
        }),
        _ => Err(DecodeError::SchemaMismatch {
            action: "stakingDeposit",
        }),
    }
}

fn build_staking_withdraw(
    version: u8,
    values: &[SlotValue],
) -> Result<CoreWriterAction, DecodeError> {
    match *values {
        [SlotValue::Uint64(wei)] => Ok(CoreWriterAction {
            version,
            kind: ActionKind::StakingWithdraw(StakingWithdraw { wei }),
        }),
        _ => Err(DecodeError::SchemaMismatch {
            action: "stakingWithdraw",
        }),
    }
}

fn build_spot_send(version: u8, values: &[SlotValue]) -> Result<CoreWriterAction, DecodeError> {
    match *values {
        [
            SlotValue::Address(destination),
            SlotValue::Uint64(token),
            SlotValue::Uint64(wei),
        ] => Ok(CoreWriterAction {
            version,
            kind: ActionKind::SpotSend(SpotSend {
                destination,
                token,
                wei,
            }),
        }),
        _ => Err(DecodeError::SchemaMismatch { action: "spotSend" }),
    }
}

fn build_usd_class_transfer(
    version: u8,
    values: &[SlotValue],
) -> Result<CoreWriterAction, DecodeError> {
    match *values {
        [SlotValue::Uint64(ntl), SlotValue::Bool(to_perp)] => Ok(CoreWriterAction {
            version,
            kind: ActionKind::UsdClassTransfer(UsdClassTransfer { ntl, to_perp }),
        }),
        _ => Err(DecodeError::SchemaMismatch {
            action: "usdClassTransfer",
        }),
    }
}

fn build_cancel_order_by_oid(
    version: u8,
    values: &[SlotValue],
) -> Result<CoreWriterAction, DecodeError> {
    match *values {
        [SlotValue::Uint32(asset), SlotValue::Uint64(oid)] => Ok(CoreWriterAction {
            version,
            kind: ActionKind::CancelOrderByOid(CancelOrderByOid { asset, oid }),
        }),
        _ => Err(DecodeError::SchemaMismatch {
            action: "cancelOrderByOid",
        }),
    }
}

fn build_cancel_order_by_cloid(
    version: u8,
    values: &[SlotValue],
) -> Result<CoreWriterAction, DecodeError> {
    match *values {
        [SlotValue::Uint32(asset), SlotValue::Uint64(cloid)] => Ok(CoreWriterAction {
            version,
            kind: ActionKind::CancelOrderByCloid(CancelOrderByCloid { asset, cloid }),
        }),
        _ => Err(DecodeError::SchemaMismatch {
            action: "cancelOrderByCloid",
        }),
    }
}

fn build_send_asset(version: u8, values: &[SlotValue]) -> Result<CoreWriterAction, DecodeError> {
    match *values {
        [
            SlotValue::Address(destination),
            SlotValue::Address(sub_account),
            SlotValue::Uint32(source_dex),
            SlotValue::Uint32(destination_dex),
            SlotValue::Uint64(token),
            SlotValue::Uint64(wei),
        ] => Ok(CoreWriterAction {
            version,
            kind: ActionKind::SendAsset(SendAsset {
                destination,
                sub_account,
                source_dex,
                destination_dex,
                token,
                wei,
            }),
        }),
        _ => Err(DecodeError::SchemaMismatch {
            action: "sendAsset",
        }),
    }
}
