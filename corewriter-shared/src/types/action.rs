use serde::{Deserialize, Serialize};

use super::order::{CancelOrderByCloid, CancelOrderByOid, LimitOrder};
use super::staking::{StakingDeposit, StakingWithdraw, TokenDelegate};
use super::transfer::{SendAsset, SpotSend, UsdClassTransfer, VaultTransfer};

/// Represents a fully decoded CoreWriter action.
///
/// This struct combines the header version with the kind-specific data,
/// providing the structured form handed to rendering collaborators. It
/// serializes as `{"version": .., "type": "..", "data": {..}}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoreWriterAction {
    pub version: u8,
    #[serde(flatten)]
    pub kind: ActionKind,
}

/// Represents the kind-specific payload of a decoded action.
///
/// One variant exists per known action tag, plus `Unknown` for tags the
/// decoder has no schema for.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum ActionKind {
    LimitOrder(LimitOrder),
    VaultTransfer(VaultTransfer),
    TokenDelegate(TokenDelegate),
    StakingDeposit(StakingDeposit),
    StakingWithdraw(StakingWithdraw),
    SpotSend(SpotSend),
    UsdClassTransfer(UsdClassTransfer),
    CancelOrderByOid(CancelOrderByOid),
    CancelOrderByCloid(CancelOrderByCloid),
    SendAsset(SendAsset),
    Unknown(UnknownAction),
}

/// Fallback payload for unrecognized action tags.
///
/// Carries the post-header remainder re-encoded as lowercase hex, without
/// a `0x` prefix. Decoding to this variant is a success, not an error.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnknownAction {
    pub data: String,
}
