use alloy::primitives::{Address, address};

/// Address of the CoreWriter system contract.
///
/// Every `RawAction(address indexed user, bytes data)` log carrying an
/// encoded action is emitted from this address. Callers are expected to
/// filter logs by emitter before handing the `data` bytes to the decoder;
/// the decoder itself accepts any sufficiently long payload.
pub const CORE_WRITER_ADDRESS: Address = address!("0x3333333333333333333333333333333333333333");
