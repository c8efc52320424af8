//! # CoreWriter Decoder
//! This crate decodes the byte payload of CoreWriter `RawAction` events
//! into structured [`CoreWriterAction`] values.
//! It includes modules for header parsing, ABI slot decoding, and the
//! per-tag schema registry, along with error handling.
pub mod header;
pub mod schema;
pub mod slots;

pub mod errors;

pub use corewriter_shared::types::CoreWriterAction;
pub use errors::DecodeError;
pub use schema::ActionDecoder;
