//! # CoreWriter Shared
//! This crate defines shared data structures and constants used across the
//! CoreWriter decoder ecosystem.
//! It includes the decoded action representation, the per-action data
//! structs, and the well-known CoreWriter contract address.
pub mod constants;
pub mod types;
