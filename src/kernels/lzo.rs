//! This module contains the pure, stateless kernel for decoding an LZO1x
//! block stream.
//!
//! The decoder is implemented here directly rather than delegated: a probe
//! loop needs a decoder that is total over arbitrary byte input, returning an
//! error for every malformed stream instead of panicking on one. Every input
//! read, lookbehind reference, and length field below is bounds-checked, so
//! the worst any input can do is produce a `SniffError::Lzo`.
//!
//! LZO1x carries no length or checksum metadata, but a well-formed stream
//! ends with an explicit end-of-stream marker and must consume its input
//! exactly. The output buffer grows as needed; no expected-size hint is
//! required.

use crate::error::SniffError;

/// M4 distance value reserved for the end-of-stream marker.
const EOS_DISTANCE: usize = 16384;

/// Decodes a full LZO1x stream, requiring the end-of-stream marker at the
/// exact end of the input.
pub fn decode(input: &[u8]) -> Result<Vec<u8>, SniffError> {
    if input.is_empty() {
        return Err(SniffError::Lzo(
            "an LZO1x stream has at least one instruction".to_string(),
        ));
    }

    let mut out: Vec<u8> = Vec::new();
    let mut ip = 0usize;
    // Number of literals copied by the previous instruction (0..=3, or 4 for
    // "four or more"); it changes how the low instruction codes are read.
    let mut state = 0usize;

    // A first byte above 17 is a shortened encoding of the initial literal run.
    if input[0] > 17 {
        let len = input[0] as usize - 17;
        ip = 1;
        copy_literals(input, &mut ip, &mut out, len)?;
        state = len.min(4);
    }

    loop {
        let inst = read_u8(input, &mut ip)?;
        let len;
        let dist;
        let trailing;

        if inst >= 0x40 {
            // M2: 3..8 byte match within 2 KiB, distance high bits in the
            // following byte.
            let high = read_u8(input, &mut ip)? as usize;
            len = (inst >> 5) as usize + 1;
            dist = (high << 3) + ((inst >> 2) & 0x7) as usize + 1;
            trailing = (inst & 0x3) as usize;
        } else if inst >= 0x20 {
            // M3: match within 16 KiB, run-length-extended length, LE16
            // distance/state field.
            let mut base = (inst & 0x1f) as usize;
            if base == 0 {
                base = 31 + read_zero_extended(input, &mut ip)?;
            }
            let field = read_le16(input, &mut ip)?;
            len = base + 2;
            dist = (field >> 2) + 1;
            trailing = field & 0x3;
        } else if inst >= 0x10 {
            // M4: match within 16..48 KiB, or the end-of-stream marker when
            // the encoded distance collapses to 16384.
            let mut base = (inst & 0x7) as usize;
            if base == 0 {
                base = 7 + read_zero_extended(input, &mut ip)?;
            }
            let field = read_le16(input, &mut ip)?;
            dist = EOS_DISTANCE + (((inst & 0x8) as usize) << 11) + (field >> 2);
            if dist == EOS_DISTANCE {
                if ip != input.len() {
                    return Err(SniffError::Lzo(format!(
                        "{} trailing bytes after the end-of-stream marker",
                        input.len() - ip
                    )));
                }
                return Ok(out);
            }
            len = base + 2;
            trailing = field & 0x3;
        } else if state == 0 {
            // Low codes directly after a match (or at stream start) encode a
            // long literal run.
            let mut base = inst as usize;
            if base == 0 {
                base = 15 + read_zero_extended(input, &mut ip)?;
            }
            copy_literals(input, &mut ip, &mut out, base + 3)?;
            state = 4;
            continue;
        } else {
            // M1: 2 or 3 byte match tucked in behind a short literal tail;
            // the distance base depends on how many literals that was.
            let high = read_u8(input, &mut ip)? as usize;
            let base = (high << 2) + (inst >> 2) as usize;
            if state == 4 {
                len = 3;
                dist = base + 2049;
            } else {
                len = 2;
                dist = base + 1;
            }
            trailing = (inst & 0x3) as usize;
        }

        copy_match(&mut out, dist, len)?;
        copy_literals(input, &mut ip, &mut out, trailing)?;
        state = trailing;
    }
}

fn read_u8(input: &[u8], ip: &mut usize) -> Result<u8, SniffError> {
    let byte = *input
        .get(*ip)
        .ok_or_else(|| SniffError::Lzo("unexpected end of input".to_string()))?;
    *ip += 1;
    Ok(byte)
}

fn read_le16(input: &[u8], ip: &mut usize) -> Result<usize, SniffError> {
    let lo = read_u8(input, ip)? as usize;
    let hi = read_u8(input, ip)? as usize;
    Ok(lo | (hi << 8))
}

/// Run-length extension shared by the long literal and M3/M4 length fields:
/// each zero byte adds 255, the first non-zero byte terminates the run.
fn read_zero_extended(input: &[u8], ip: &mut usize) -> Result<usize, SniffError> {
    let mut len = 0usize;
    loop {
        let byte = read_u8(input, ip)?;
        if byte == 0 {
            len += 255;
        } else {
            return Ok(len + byte as usize);
        }
    }
}

fn copy_literals(
    input: &[u8],
    ip: &mut usize,
    out: &mut Vec<u8>,
    len: usize,
) -> Result<(), SniffError> {
    let end = ip
        .checked_add(len)
        .filter(|&end| end <= input.len())
        .ok_or_else(|| SniffError::Lzo("literal run exceeds the input".to_string()))?;
    out.extend_from_slice(&input[*ip..end]);
    *ip = end;
    Ok(())
}

fn copy_match(out: &mut Vec<u8>, dist: usize, len: usize) -> Result<(), SniffError> {
    if dist > out.len() {
        return Err(SniffError::Lzo(format!(
            "lookbehind distance {} exceeds the {} bytes decoded so far",
            dist,
            out.len()
        )));
    }
    // Byte-by-byte so an overlapping copy repeats the tail, as the format
    // requires.
    let mut pos = out.len() - dist;
    for _ in 0..len {
        let byte = out[pos];
        out.push(byte);
        pos += 1;
    }
    Ok(())
}
