//! This module contains the pure, stateless kernel for decoding a raw deflate
//! bitstream (no zlib or gzip container around it).
//!
//! There is no header and no checksum to lean on; success simply means the
//! bitstream parses as a sequence of deflate blocks and terminates cleanly on
//! a final block. This module is a safe wrapper around the `flate2` crate.

use std::io::Read;

use flate2::read::DeflateDecoder;

use crate::error::SniffError;

/// Decodes a full raw deflate stream. Trailing bytes after the final block
/// are ignored.
pub fn decode(input: &[u8]) -> Result<Vec<u8>, SniffError> {
    if input.is_empty() {
        return Err(SniffError::Deflate(
            "a deflate stream has at least one block".to_string(),
        ));
    }

    let mut decoder = DeflateDecoder::new(input);
    let mut output = Vec::new();
    decoder
        .read_to_end(&mut output)
        .map_err(|e| SniffError::Deflate(e.to_string()))?;
    Ok(output)
}
