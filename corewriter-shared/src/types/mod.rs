mod action;
mod order;
mod staking;
mod transfer;

pub use action::{ActionKind, CoreWriterAction, UnknownAction};
pub use order::{CancelOrderByCloid, CancelOrderByOid, LimitOrder};
pub use staking::{StakingDeposit, StakingWithdraw, TokenDelegate};
pub use transfer::{SendAsset, SpotSend, UsdClassTransfer, VaultTransfer};
