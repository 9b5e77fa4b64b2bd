//! End-to-end tests for the detection loop: round-trip classification for
//! every scheme, the priority-order contract, and the fixed outcomes for
//! inputs that match nothing.

use std::io::Write;

use flate2::write::{DeflateEncoder, ZlibEncoder};
use flate2::Compression;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use weezl::{encode::Encoder, BitOrder};

use crate::{CompressionKind, Extractor, SniffConfig, SniffError};

/// Deterministic pseudo-random payload; incompressible, so the block schemes
/// fall back to literal runs with predictable leading bytes.
fn random_payload(len: usize, seed: u64) -> Vec<u8> {
    let mut payload = vec![0u8; len];
    StdRng::seed_from_u64(seed).fill_bytes(&mut payload);
    payload
}

fn zlib_compress(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn deflate_compress(data: &[u8]) -> Vec<u8> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn lzw_compress(data: &[u8]) -> Vec<u8> {
    Encoder::new(BitOrder::Lsb, 8).encode(data).unwrap()
}

#[test]
fn test_detects_zlib_roundtrip() {
    let payload = random_payload(4096, 1);
    let extractor = Extractor::default();

    let result = extractor.try_extract_slice(&zlib_compress(&payload)).unwrap();
    assert_eq!(result.kind, CompressionKind::Zlib);
    assert_eq!(result.data, payload);
}

#[test]
fn test_detects_raw_deflate_of_the_quick_brown_fox() {
    let extractor = Extractor::default();

    let result = extractor
        .try_extract_slice(&deflate_compress(b"the quick brown fox"))
        .unwrap();
    assert_eq!(result.kind, CompressionKind::Deflate);
    assert_eq!(result.data, b"the quick brown fox");
}

#[test]
fn test_detects_lzo1x_roundtrip() {
    // Incompressible input forces a long literal run, whose LZO encoding
    // starts with a 0x00 marker byte that zlib and deflate both reject.
    let payload = random_payload(4096, 2);
    let extractor = Extractor::default();

    let compressed = lzokay_native::compress(&payload).unwrap();
    let result = extractor.try_extract_slice(&compressed).unwrap();
    assert_eq!(result.kind, CompressionKind::Lzo1x);
    assert_eq!(result.data, payload);
}

#[test]
fn test_detects_lz4_roundtrip() {
    let payload = random_payload(4096, 3);
    let extractor = Extractor::default();

    let compressed = lz4_flex::block::compress(&payload);
    let result = extractor.try_extract_slice(&compressed).unwrap();
    assert_eq!(result.kind, CompressionKind::Lz4);
    assert_eq!(result.data, payload);
}

#[test]
fn test_detects_lzw_roundtrip() {
    let payload = b"the quick brown fox jumps over the lazy dog. ".repeat(64);
    let extractor = Extractor::default();

    let result = extractor.try_extract_slice(&lzw_compress(&payload)).unwrap();
    assert_eq!(result.kind, CompressionKind::LzwLsb8);
    assert_eq!(result.data, payload);
}

#[test]
fn test_priority_order_wins_for_dual_valid_input() {
    // Hand-crafted bytes that decode cleanly as BOTH an LZO1x stream and an
    // LZ4 block (with different outputs), while zlib rejects the header
    // (method nibble 0 != 8) and deflate rejects the stored-block length
    // complement. Byte layout:
    //   idx 0      0x30  LZO: literal run of 31 / LZ4: token, 3 literals + match
    //   idx 1..3   LZ4 literals "ABC"
    //   idx 4..5   LZ4 match offset = 1 (copies 'C' four times)
    //   idx 6      0xF0  LZ4 token, extended literal run
    //   idx 7      0x0C  LZ4 extension byte -> 27 literals to end of input
    //   idx 8..31  filler inside the LZO literal run
    //   idx 32..34 0x11 0x00 0x00  LZO end-of-stream marker
    let mut input = vec![0x30, b'A', b'B', b'C', 0x01, 0x00, 0xF0, 0x0C];
    input.extend_from_slice(&[b'X'; 24]);
    input.extend_from_slice(&[0x11, 0x00, 0x00]);
    assert_eq!(input.len(), 35);

    // Both schemes genuinely accept it on their own.
    let lzo_view = crate::kernels::lzo::decode(&input).unwrap();
    let lz4_view = crate::kernels::lz4::decode(&input, 1024).unwrap();
    assert_eq!(lzo_view, &input[1..32]);
    assert_ne!(lzo_view, lz4_view);

    // The detector must report the earlier-ordered scheme.
    let result = Extractor::default().try_extract_slice(&input).unwrap();
    assert_eq!(result.kind, CompressionKind::Lzo1x);
    assert_eq!(result.data, lzo_view);
}

#[test]
fn test_empty_input_is_unrecognized() {
    let result = Extractor::default().try_extract_slice(&[]);
    assert!(matches!(result, Err(SniffError::UnrecognizedFormat)));
}

#[test]
fn test_garbage_input_is_unrecognized() {
    // 0xFF fill fails every scheme: bad zlib method, reserved deflate block
    // type, overlong LZO/LZ4 literal runs, out-of-range LZW code.
    let result = Extractor::default().try_extract_slice(&[0xFF; 64]);
    assert!(matches!(result, Err(SniffError::UnrecognizedFormat)));
}

#[test]
fn test_plain_text_is_unrecognized() {
    // Uncompressed ASCII text of nontrivial length must not be misclassified
    // as any scheme.
    let text = b"Pack my box with five dozen liquor jugs. ".repeat(13);
    assert!(text.len() >= 512);
    let result = Extractor::default().try_extract_slice(&text);
    assert!(matches!(result, Err(SniffError::UnrecognizedFormat)));
}

#[test]
fn test_random_bytes_are_unrecognized() {
    let noise = random_payload(4096, 5);
    let result = Extractor::default().try_extract_slice(&noise);
    assert!(matches!(result, Err(SniffError::UnrecognizedFormat)));
}

#[test]
fn test_detection_is_idempotent() {
    let compressed = zlib_compress(&random_payload(2048, 4));
    let extractor = Extractor::default();

    let first = extractor.try_extract_slice(&compressed).unwrap();
    let second = extractor.try_extract_slice(&compressed).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_reader_front_end_matches_slice_path() {
    let compressed = deflate_compress(b"the quick brown fox");
    let extractor = Extractor::default();

    let via_reader = extractor.try_extract(&compressed[..]).unwrap();
    let via_slice = extractor.try_extract_slice(&compressed).unwrap();
    assert_eq!(via_reader, via_slice);
}

#[test]
fn test_over_cap_lz4_is_never_reported_as_a_match() {
    let payload = vec![0u8; 3 * 1024 * 1024];
    let compressed = lz4_flex::block::compress(&payload);

    // Under the default 1 MiB cap the LZ4 probe must not match, and in
    // particular must never surface a truncated payload as success.
    let capped = Extractor::default().try_extract_slice(&compressed);
    assert!(!matches!(
        capped,
        Ok(ref extraction) if extraction.kind == CompressionKind::Lz4
    ));

    // Raising the cap yields the full payload.
    let roomy = Extractor::new(SniffConfig {
        max_decoded_len: 4 * 1024 * 1024,
        ..SniffConfig::default()
    });
    let result = roomy.try_extract_slice(&compressed).unwrap();
    assert_eq!(result.kind, CompressionKind::Lz4);
    assert_eq!(result.data, payload);
}
