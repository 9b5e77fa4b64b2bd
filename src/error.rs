// In: src/error.rs

//! This module defines the single, unified error type for the entire compsniff
//! library. It uses the `thiserror` crate to provide ergonomic, context-aware
//! error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SniffError {
    // =========================================================================
    // === Terminal Errors (the only ones a detector caller ever sees)
    // =========================================================================
    /// The byte source could not be read. Fatal; surfaced before any probe runs.
    #[error("failed to read input source: {0}")]
    Io(#[from] std::io::Error),

    /// Every candidate decoder rejected the input. This is the sole failure
    /// mode of the detection loop itself.
    #[error("no supported compression format recognized")]
    UnrecognizedFormat,

    // =========================================================================
    // === Per-Scheme Decode Errors (recovered inside the detection loop)
    // =========================================================================
    /// The decoded output would exceed the configured size cap. Reported
    /// explicitly rather than truncating the payload.
    #[error("decoded output exceeds the configured cap of {limit} bytes")]
    OutputTooLarge { limit: usize },

    #[error("zlib decode failed: {0}")]
    Zlib(String),

    #[error("raw deflate decode failed: {0}")]
    Deflate(String),

    #[error("LZO1x decode failed: {0}")]
    Lzo(String),

    #[error("LZ4 block decode failed: {0}")]
    Lz4(String),

    #[error("LZW decode failed: {0}")]
    Lzw(String),
}
