//! This module contains the pure, stateless kernel for decoding a zlib
//! container stream.
//!
//! zlib is the only candidate scheme with internal validation: the 2-byte
//! header declares the method and window size, and the trailing adler32 must
//! match the decoded payload. Both checks have to pass for this kernel to
//! report success. This module is a safe wrapper around the `flate2` crate.

use std::io::Read;

use flate2::read::ZlibDecoder;

use crate::error::SniffError;

/// Decodes a full zlib stream. Trailing bytes after the stream end are
/// ignored, matching the behavior of streaming zlib readers.
pub fn decode(input: &[u8]) -> Result<Vec<u8>, SniffError> {
    if input.len() < 2 {
        return Err(SniffError::Zlib(
            "input shorter than the zlib header".to_string(),
        ));
    }

    let mut decoder = ZlibDecoder::new(input);
    let mut output = Vec::new();
    decoder
        .read_to_end(&mut output)
        .map_err(|e| SniffError::Zlib(e.to_string()))?;
    Ok(output)
}
