//! This file is the root of the `compsniff` crate.
//!
//! compsniff identifies which compression scheme, if any, produced an opaque
//! byte blob, and returns the decompressed payload. Detection is blind: there
//! is no magic-number or header shortlisting, only an ordered sequence of
//! trial decodes that accepts the first clean, complete one.
//!
//! The library installs no global state. Diagnostics are emitted through the
//! `log` facade; wiring up a backend (and tearing it down) is entirely the
//! caller's responsibility, as is the `SniffConfig` value handed to each
//! `Extractor` at construction time.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod config;
pub mod error;
pub mod extractor;
pub mod kernels;
pub mod kind;

#[cfg(test)]
mod extractor_tests;

//==================================================================================
// 2. Re-exports
//==================================================================================
pub use config::{SniffConfig, DEFAULT_MAX_DECODED_LEN};
pub use error::SniffError;
pub use extractor::{Extraction, Extractor};
pub use kind::CompressionKind;
