use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

/// Represents a delegation of staked tokens to a validator (tag 3).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenDelegate {
    pub validator: Address,
    pub wei: u64,
    pub is_undelegate: bool,
}

/// Represents a deposit into the staking balance (tag 4).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StakingDeposit {
    pub wei: u64,
}

/// Represents a withdrawal from the staking balance (tag 5).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StakingWithdraw {
    pub wei: u64,
}
