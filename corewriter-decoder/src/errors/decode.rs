//! Error types for the CoreWriter decoder.
//! Defines the failure conditions that can occur while turning a raw hex
//! payload into a structured action.
use thiserror::Error;

/// Represents errors that can occur while decoding a CoreWriter payload.
///
/// Unrecognized action tags are deliberately not represented here: they
/// decode to the `unknown` variant and are never an error.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The boundary hex string could not be decoded to bytes.
    #[error("Invalid hex payload: {0}")]
    InvalidHex(#[from] alloy::hex::FromHexError),
    /// The payload is too short to contain the 4-byte action header.
    #[error("Malformed payload: {actual} bytes, header requires 4")]
    MalformedPayload { actual: usize },
    /// The payload is too short for the slots the selected schema requires.
    #[error("Truncated payload: schema requires {required} bytes, got {actual}")]
    TruncatedPayload { required: usize, actual: usize },
    /// Decoded slot values did not match the registered schema shape.
    /// Unreachable through the registrations installed by `ActionDecoder::new`.
    #[error("Slot values do not match the `{action}` schema")]
    SchemaMismatch { action: &'static str },
}
