//! Error types for the CoreWriter decode CLI.
//! Consolidates argument handling, decode, and serialization failures.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Usage: corewriter-cli <hex-payload>")]
    MissingPayload,
    #[error("Decode error: {0}")]
    Decode(#[from] corewriter_decoder::DecodeError),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
