//! This module contains the pure, stateless kernel for decoding an LZW stream
//! with least-significant-bit-first bit order and an 8-bit literal width.
//!
//! LZW is the most permissive of the candidate formats: any byte sequence is a
//! plausible prefix of some stream, and failure only occurs when a code refers
//! to a dictionary entry that does not exist yet. To keep the success
//! criterion meaningful this kernel requires the explicit end-of-information
//! code before the input runs out; a stream that just stops mid-way is a
//! decode failure, never a truncated success. The decode runs incrementally
//! into a growable buffer bounded by the caller's cap. This module is a safe
//! wrapper around the `weezl` crate.

use weezl::{decode::Decoder, BitOrder, LzwStatus};

use crate::error::SniffError;

/// Literal width of the LZW alphabet; codes start at 9 bits and grow from there.
const LITERAL_WIDTH: u8 = 8;

/// Granularity of the incremental decode into the output buffer.
const DECODE_CHUNK: usize = 4096;

/// Decodes a full LZW stream whose decompressed size is at most `max_decoded_len`.
/// Trailing bytes after the end-of-information code are ignored.
pub fn decode(input: &[u8], max_decoded_len: usize) -> Result<Vec<u8>, SniffError> {
    if input.is_empty() {
        return Err(SniffError::Lzw(
            "an LZW stream has at least one code".to_string(),
        ));
    }

    let mut decoder = Decoder::new(BitOrder::Lsb, LITERAL_WIDTH);
    let mut output = Vec::new();
    let mut chunk = [0u8; DECODE_CHUNK];
    let mut consumed = 0;

    loop {
        let result = decoder.decode_bytes(&input[consumed..], &mut chunk);
        consumed += result.consumed_in;

        if output.len() + result.consumed_out > max_decoded_len {
            return Err(SniffError::OutputTooLarge {
                limit: max_decoded_len,
            });
        }
        output.extend_from_slice(&chunk[..result.consumed_out]);

        match result.status {
            Ok(LzwStatus::Done) => return Ok(output),
            Ok(LzwStatus::Ok) | Ok(LzwStatus::NoProgress) => {
                if result.consumed_in == 0 && result.consumed_out == 0 {
                    return Err(SniffError::Lzw(
                        "stream ended without an end-of-information code".to_string(),
                    ));
                }
            }
            Err(e) => return Err(SniffError::Lzw(e.to_string())),
        }
    }
}
