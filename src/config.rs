// In: src/config.rs

//! The single source of truth for all compsniff configuration.
//!
//! This module defines the `SniffConfig` struct, which is designed to be
//! created once at the application boundary and handed to an `Extractor` at
//! construction time. The library never installs process-wide state of its
//! own: the caller owns both this configuration value and the lifecycle of
//! whatever `log` backend (if any) it wants the diagnostics routed to.

use serde::{Deserialize, Serialize};

/// The default cap on decoded output size for the block schemes that carry no
/// length metadata of their own (LZ4, LZW). One megabyte, matching the scratch
/// size of the original system.
pub const DEFAULT_MAX_DECODED_LEN: usize = 1024 * 1024;

/// Configuration for a single `Extractor`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct SniffConfig {
    /// Upper bound on decoded output for the length-blind block schemes.
    /// A stream whose true decompressed size exceeds this cap is reported as
    /// `SniffError::OutputTooLarge` for that scheme, never truncated.
    pub max_decoded_len: usize,

    /// When set, every probe that rejects the input is logged at debug level.
    /// Purely observational; the return value of the detector is unaffected.
    pub log_rejections: bool,
}

impl Default for SniffConfig {
    fn default() -> Self {
        Self {
            max_decoded_len: DEFAULT_MAX_DECODED_LEN,
            log_rejections: true,
        }
    }
}
