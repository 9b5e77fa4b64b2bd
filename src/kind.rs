// In: src/kind.rs

//! The closed set of compression schemes the detector knows how to probe.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One supported compression algorithm or container format.
///
/// The declaration order here is the detection priority order used by the
/// `Extractor`; it is significant and must be preserved exactly. Container
/// formats with internal validation (zlib) come before bare block formats,
/// and LZW comes last because its bitstream accepts the widest range of
/// spurious inputs.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CompressionKind {
    /// zlib container: 2-byte header plus an adler32 checksum over the payload.
    Zlib,
    /// Raw deflate bitstream with no container header.
    Deflate,
    /// LZO1x block stream, terminated by an end-of-stream marker.
    Lzo1x,
    /// LZ4 block format, no frame header.
    Lz4,
    /// LZW, least-significant-bit-first bit order, 8-bit literal width.
    LzwLsb8,
}

impl fmt::Display for CompressionKind {
    /// Canonical display names, used only for human-readable reporting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompressionKind::Zlib => "ZLib",
            CompressionKind::Deflate => "Deflate",
            CompressionKind::Lzo1x => "LZO1x",
            CompressionKind::Lz4 => "LZ4",
            CompressionKind::LzwLsb8 => "LZW-LSB-8",
        };
        f.write_str(name)
    }
}
