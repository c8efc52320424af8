//! End-to-end decoding tests against hand-packed payloads.
//!
//! Payloads are built the way the contract emits them: a 1-byte version,
//! a 3-byte big-endian tag, then one right-aligned 32-byte ABI slot per
//! schema field.
use alloy::hex::FromHex;
use alloy::primitives::Address;
use corewriter_decoder::ActionDecoder;
use corewriter_decoder::errors::DecodeError;
use corewriter_shared::types::{
    ActionKind, CancelOrderByCloid, CancelOrderByOid, LimitOrder, SendAsset, SpotSend,
    StakingDeposit, StakingWithdraw, TokenDelegate, UsdClassTransfer, VaultTransfer,
};

fn uint_slot(value: u128) -> [u8; 32] {
    let mut slot = [0u8; 32];
    slot[16..].copy_from_slice(&value.to_be_bytes());
    slot
}

fn bool_slot(value: bool) -> [u8; 32] {
    uint_slot(value as u128)
}

fn address_slot(address: Address) -> [u8; 32] {
    let mut slot = [0u8; 32];
    slot[12..].copy_from_slice(address.as_slice());
    slot
}

fn payload(version: u8, action_type: u32, slots: &[[u8; 32]]) -> String {
    let tag = action_type.to_be_bytes();
    let mut raw = vec![version, tag[1], tag[2], tag[3]];
    for slot in slots {
        raw.extend_from_slice(slot);
    }
    alloy::hex::encode(raw)
}

fn test_address() -> Address {
    Address::from_hex("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045").unwrap()
}

#[test]
fn test_decode_limit_order_concrete_scenario() {
    let decoder = ActionDecoder::new();
    let hex = payload(
        1,
        1,
        &[
            uint_slot(0),
            bool_slot(true),
            uint_slot(100_000_000),
            uint_slot(50_000_000),
            bool_slot(false),
            uint_slot(2),
            uint_slot(123_456_789),
        ],
    );

    let action = decoder.decode(&hex).unwrap();
    assert_eq!(action.version, 1);
    assert_eq!(
        action.kind,
        ActionKind::LimitOrder(LimitOrder {
            asset: 0,
            is_buy: true,
            limit_px: 100_000_000,
            sz: 50_000_000,
            reduce_only: false,
            encoded_tif: 2,
            cloid: 123_456_789,
        })
    );
}

#[test]
fn test_decode_limit_order_cloid_max_u128_is_exact() {
    let decoder = ActionDecoder::new();
    let hex = payload(
        1,
        1,
        &[
            uint_slot(3),
            bool_slot(false),
            uint_slot(1),
            uint_slot(1),
            bool_slot(true),
            uint_slot(1),
            uint_slot(u128::MAX),
        ],
    );

    let action = decoder.decode(&hex).unwrap();
    match action.kind {
        ActionKind::LimitOrder(order) => assert_eq!(order.cloid, u128::MAX),
        other => panic!("expected limitOrder, got {other:?}"),
    }
}

#[test]
fn test_decode_amounts_above_2_pow_53_keep_full_precision() {
    // The displayed explorer this decoder replaces went through an f64 and
    // lost precision above 2^53; these must stay exact.
    let big = (1u64 << 53) + 1;
    let decoder = ActionDecoder::new();
    let hex = payload(1, 4, &[uint_slot(big as u128)]);

    let action = decoder.decode(&hex).unwrap();
    assert_eq!(
        action.kind,
        ActionKind::StakingDeposit(StakingDeposit { wei: big })
    );
}

#[test]
fn test_decode_vault_transfer_round_trip() {
    let decoder = ActionDecoder::new();
    let hex = payload(
        1,
        2,
        &[
            address_slot(test_address()),
            bool_slot(true),
            uint_slot(250_000),
        ],
    );

    let action = decoder.decode(&hex).unwrap();
    assert_eq!(
        action.kind,
        ActionKind::VaultTransfer(VaultTransfer {
            vault: test_address(),
            is_deposit: true,
            usd: 250_000,
        })
    );
}

#[test]
fn test_decode_token_delegate_round_trip() {
    let decoder = ActionDecoder::new();
    let hex = payload(
        1,
        3,
        &[
            address_slot(test_address()),
            uint_slot(1_000_000_000_000),
            bool_slot(true),
        ],
    );

    let action = decoder.decode(&hex).unwrap();
    assert_eq!(
        action.kind,
        ActionKind::TokenDelegate(TokenDelegate {
            validator: test_address(),
            wei: 1_000_000_000_000,
            is_undelegate: true,
        })
    );
}

#[test]
fn test_decode_staking_withdraw_round_trip() {
    let decoder = ActionDecoder::new();
    let hex = payload(2, 5, &[uint_slot(777)]);

    let action = decoder.decode(&hex).unwrap();
    assert_eq!(action.version, 2);
    assert_eq!(
        action.kind,
        ActionKind::StakingWithdraw(StakingWithdraw { wei: 777 })
    );
}

#[test]
fn test_decode_spot_send_round_trip() {
    let decoder = ActionDecoder::new();
    let hex = payload(
        1,
        6,
        &[
            address_slot(test_address()),
            uint_slot(150),
            uint_slot(5_000_000_000),
        ],
    );

    let action = decoder.decode(&hex).unwrap();
    assert_eq!(
        action.kind,
        ActionKind::SpotSend(SpotSend {
            destination: test_address(),
            token: 150,
            wei: 5_000_000_000,
        })
    );
}

#[test]
fn test_decode_usd_class_transfer_round_trip() {
    let decoder = ActionDecoder::new();
    let hex = payload(1, 7, &[uint_slot(42_000_000), bool_slot(false)]);

    let action = decoder.decode(&hex).unwrap();
    assert_eq!(
        action.kind,
        ActionKind::UsdClassTransfer(UsdClassTransfer {
            ntl: 42_000_000,
            to_perp: false,
        })
    );
}

#[test]
fn test_decode_cancel_order_by_oid_round_trip() {
    let decoder = ActionDecoder::new();
    let hex = payload(1, 10, &[uint_slot(9), uint_slot(123_456_789_012)]);

    let action = decoder.decode(&hex).unwrap();
    assert_eq!(
        action.kind,
        ActionKind::CancelOrderByOid(CancelOrderByOid {
            asset: 9,
            oid: 123_456_789_012,
        })
    );
}

#[test]
fn test_decode_cancel_order_by_cloid_round_trip() {
    let decoder = ActionDecoder::new();
    let hex = payload(1, 11, &[uint_slot(4), uint_slot(987_654_321)]);

    let action = decoder.decode(&hex).unwrap();
    assert_eq!(
        action.kind,
        ActionKind::CancelOrderByCloid(CancelOrderByCloid {
            asset: 4,
            cloid: 987_654_321,
        })
    );
}

#[test]
fn test_decode_send_asset_round_trip() {
    let sub_account = Address::from_hex("0x1234567890123456789012345678901234567890").unwrap();
    let decoder = ActionDecoder::new();
    let hex = payload(
        1,
        13,
        &[
            address_slot(test_address()),
            address_slot(sub_account),
            uint_slot(0),
            uint_slot(2),
            uint_slot(150),
            uint_slot(1_000_000),
        ],
    );

    let action = decoder.decode(&hex).unwrap();
    assert_eq!(
        action.kind,
        ActionKind::SendAsset(SendAsset {
            destination: test_address(),
            sub_account,
            source_dex: 0,
            destination_dex: 2,
            token: 150,
            wei: 1_000_000,
        })
    );
}

#[test]
fn test_decode_unknown_tag_preserves_remainder() {
    let decoder = ActionDecoder::new();
    let action = decoder.decode("0x01000063deadbeef").unwrap();
    assert_eq!(action.version, 1);
    match action.kind {
        ActionKind::Unknown(unknown) => assert_eq!(unknown.data, "deadbeef"),
        other => panic!("expected unknown, got {other:?}"),
    }
}

#[test]
fn test_decode_unknown_tag_with_empty_remainder() {
    let decoder = ActionDecoder::new();
    let action = decoder.decode("05000063").unwrap();
    assert_eq!(action.version, 5);
    match action.kind {
        ActionKind::Unknown(unknown) => assert_eq!(unknown.data, ""),
        other => panic!("expected unknown, got {other:?}"),
    }
}

#[test]
fn test_decode_accepts_payload_without_prefix() {
    let decoder = ActionDecoder::new();
    let prefixed = payload(1, 4, &[uint_slot(10)]);
    let with_prefix = decoder.decode(&format!("0x{prefixed}")).unwrap();
    let without_prefix = decoder.decode(&prefixed).unwrap();
    assert_eq!(with_prefix, without_prefix);
}

#[test]
fn test_decode_short_header_is_malformed() {
    let decoder = ActionDecoder::new();
    let err = decoder.decode("0x010000").unwrap_err();
    assert!(matches!(err, DecodeError::MalformedPayload { actual: 3 }));
}

#[test]
fn test_decode_truncated_schema_payload() {
    let decoder = ActionDecoder::new();
    // Tag 2 (vaultTransfer) needs three slots; provide one.
    let hex = payload(1, 2, &[address_slot(test_address())]);
    let err = decoder.decode(&hex).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::TruncatedPayload {
            required: 96,
            actual: 32,
        }
    ));
}

#[test]
fn test_decode_rejects_non_hex_input() {
    let decoder = ActionDecoder::new();
    let err = decoder.decode("0xzz000001").unwrap_err();
    assert!(matches!(err, DecodeError::InvalidHex(_)));
}

#[test]
fn test_decode_rejects_odd_length_input() {
    let decoder = ActionDecoder::new();
    let err = decoder.decode("0x0100001").unwrap_err();
    assert!(matches!(err, DecodeError::InvalidHex(_)));
}

#[test]
fn test_serialized_shape_matches_render_contract() {
    let decoder = ActionDecoder::new();
    let hex = payload(
        1,
        1,
        &[
            uint_slot(0),
            bool_slot(true),
            uint_slot(100_000_000),
            uint_slot(50_000_000),
            bool_slot(false),
            uint_slot(2),
            uint_slot(123_456_789),
        ],
    );

    let action = decoder.decode(&hex).unwrap();
    let json = serde_json::to_value(&action).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "version": 1,
            "type": "limitOrder",
            "data": {
                "asset": 0,
                "isBuy": true,
                "limitPx": 100_000_000u64,
                "sz": 50_000_000u64,
                "reduceOnly": false,
                "encodedTif": 2,
                "cloid": 123_456_789u64,
            }
        })
    );
}

#[test]
fn test_serialized_unknown_shape() {
    let decoder = ActionDecoder::new();
    let action = decoder.decode("0x01000063deadbeef").unwrap();
    let json = serde_json::to_value(&action).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "version": 1,
            "type": "unknown",
            "data": { "data": "deadbeef" }
        })
    );
}
