//! This module contains the pure, stateless kernel for decoding an LZ4 block.
//!
//! The block format carries no decompressed-size field, so the caller must
//! supply a cap. An output that would exceed the cap is reported as a distinct
//! `OutputTooLarge` error rather than being silently truncated; inside the
//! detection loop that error simply counts as a non-match for this scheme.
//! This module is a safe wrapper around the `lz4_flex` crate.

use lz4_flex::block::{decompress, DecompressError};

use crate::error::SniffError;

/// Decodes a full LZ4 block whose decompressed size is at most `max_decoded_len`.
pub fn decode(input: &[u8], max_decoded_len: usize) -> Result<Vec<u8>, SniffError> {
    if input.is_empty() {
        return Err(SniffError::Lz4(
            "an LZ4 block has at least one token".to_string(),
        ));
    }

    match decompress(input, max_decoded_len) {
        Ok(output) => Ok(output),
        Err(DecompressError::OutputTooSmall { .. }) => Err(SniffError::OutputTooLarge {
            limit: max_decoded_len,
        }),
        Err(e) => Err(SniffError::Lz4(e.to_string())),
    }
}
