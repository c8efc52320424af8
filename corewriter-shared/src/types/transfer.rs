use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

/// Represents a deposit into or withdrawal from a vault (tag 2).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VaultTransfer {
    pub vault: Address,
    pub is_deposit: bool,
    pub usd: u64,
}

/// Represents a spot token transfer to another address (tag 6).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SpotSend {
    pub destination: Address,
    pub token: u64,
    pub wei: u64,
}

/// Represents a USD transfer between spot and perp balances (tag 7).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UsdClassTransfer {
    pub ntl: u64,
    pub to_perp: bool,
}

/// Represents an asset transfer between dexes or sub-accounts (tag 13).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SendAsset {
    pub destination: Address,
    pub sub_account: Address,
    pub source_dex: u32,
    pub destination_dex: u32,
    pub token: u64,
    pub wei: u64,
}
