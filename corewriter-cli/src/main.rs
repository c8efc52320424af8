mod errors;

use corewriter_decoder::ActionDecoder;
use errors::CliError;
use tracing_subscriber::EnvFilter;

/// Main entry point for the CoreWriter decode CLI.
///
/// Decodes the hex payload passed as the first argument (the `data` field
/// of a `RawAction` log, with or without a `0x` prefix) and prints the
/// structured action as pretty JSON.
///
/// # Returns
///
/// A `Result` indicating success or a `CliError` if the argument is
/// missing or the payload cannot be decoded.
fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let payload = std::env::args().nth(1).ok_or(CliError::MissingPayload)?;

    let decoder = ActionDecoder::new();
    let action = decoder.decode(&payload)?;
    println!("{}", serde_json::to_string_pretty(&action)?);
    Ok(())
}
