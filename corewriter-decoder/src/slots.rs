//! Generic decoding of contract-ABI scalar slots.
//!
//! ABI scalar encoding gives every field a full 32-byte slot regardless of
//! its logical width: integers and booleans sit right-aligned in the slot,
//! addresses occupy the low 20 bytes. Given an ordered field schema, this
//! module reads one slot per field and yields the typed values.
use alloy::primitives::Address;

use crate::errors::DecodeError;

/// Number of bytes in one ABI scalar slot.
pub const SLOT_SIZE: usize = 32;

/// Represents the primitive type stored in one slot.
///
/// None of the known schemas use dynamic-length ABI types, so only scalar
/// primitives are supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveType {
    Uint32,
    Uint64,
    Uint128,
    Bool,
    Address,
}

/// Represents the typed value decoded from one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotValue {
    Uint32(u32),
    Uint64(u64),
    Uint128(u128),
    Bool(bool),
    Address(Address),
}

/// One named, typed field of an action schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub ty: PrimitiveType,
}

impl Field {
    pub const fn new(name: &'static str, ty: PrimitiveType) -> Self {
        Self { name, ty }
    }
}

/// Decodes one 32-byte slot per schema field, in schema order.
///
/// # Arguments
///
/// * `payload` - The post-header field bytes.
/// * `fields` - The ordered schema selected for the action's tag.
///
/// # Returns
///
/// The decoded values, one per field, or `DecodeError::TruncatedPayload`
/// if the payload holds fewer slots than the schema requires. Trailing
/// bytes beyond the schema's slots are ignored.
pub fn decode_slots(payload: &[u8], fields: &[Field]) -> Result<Vec<SlotValue>, DecodeError> {
    let required = fields.len() * SLOT_SIZE;
    if payload.len() < required {
        return Err(DecodeError::TruncatedPayload {
            required,
            actual: payload.len(),
        });
    }

    let values = fields
        .iter()
        .zip(payload.chunks_exact(SLOT_SIZE))
        .map(|(field, slot)| decode_slot(slot, field.ty))
        .collect();
    Ok(values)
}

/// Decodes a single slot. `slot` is always exactly `SLOT_SIZE` bytes.
fn decode_slot(slot: &[u8], ty: PrimitiveType) -> SlotValue {
    match ty {
        PrimitiveType::Uint32 => {
            let mut buf = [0u8; 4];
            buf.copy_from_slice(&slot[28..]);
            SlotValue::Uint32(u32::from_be_bytes(buf))
        }
        PrimitiveType::Uint64 => {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(&slot[24..]);
            SlotValue::Uint64(u64::from_be_bytes(buf))
        }
        PrimitiveType::Uint128 => {
            let mut buf = [0u8; 16];
            buf.copy_from_slice(&slot[16..]);
            SlotValue::Uint128(u128::from_be_bytes(buf))
        }
        PrimitiveType::Bool => SlotValue::Bool(slot[SLOT_SIZE - 1] != 0),
        PrimitiveType::Address => SlotValue::Address(Address::from_slice(&slot[12..])),
    }
}
