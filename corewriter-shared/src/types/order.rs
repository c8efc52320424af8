use serde::{Deserialize, Serialize};

/// Represents a limit order placed on the settlement layer (tag 1).
///
/// `limit_px` and `sz` are exact on-chain integer quantities and are kept
/// in full `u64` width. `cloid` is the client-assigned 128-bit order id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrder {
    pub asset: u32,
    pub is_buy: bool,
    pub limit_px: u64,
    pub sz: u64,
    pub reduce_only: bool,
    pub encoded_tif: u32,
    pub cloid: u128,
}

/// Represents an order cancellation by exchange-assigned order id (tag 10).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderByOid {
    pub asset: u32,
    pub oid: u64,
}

/// Represents an order cancellation by client-assigned order id (tag 11).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderByCloid {
    pub asset: u32,
    pub cloid: u64,
}
