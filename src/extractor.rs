// In: src/extractor.rs

//! The detection loop: classify an opaque byte blob as one of the known
//! compression schemes and return its decompressed payload.
//!
//! There is no header or magic-number sniffing here. The `Extractor` walks a
//! fixed, ordered table of probes and accepts the first decoder that consumes
//! the input cleanly. A probe failure is local and non-fatal; it only advances
//! the loop. The schemes are not guaranteed disjoint, so "first clean decode
//! wins" is the whole contract: a short or adversarial input that happens to
//! validate under more than one scheme is reported as the earliest match.

use std::io::Read;

use crate::config::SniffConfig;
use crate::error::SniffError;
use crate::kernels;
use crate::kind::CompressionKind;

//==================================================================================
// 1. Probe Table
//==================================================================================

/// The iteration unit of the detection loop: one candidate scheme paired with
/// its decode adapter.
struct Probe {
    kind: CompressionKind,
    run: fn(&[u8], &SniffConfig) -> Result<Vec<u8>, SniffError>,
}

/// Candidate schemes in priority order. Adding or reordering a scheme is a
/// one-line change here; nothing else in the loop is scheme-aware.
static PROBES: [Probe; 5] = [
    Probe {
        kind: CompressionKind::Zlib,
        run: probe_zlib,
    },
    Probe {
        kind: CompressionKind::Deflate,
        run: probe_deflate,
    },
    Probe {
        kind: CompressionKind::Lzo1x,
        run: probe_lzo,
    },
    Probe {
        kind: CompressionKind::Lz4,
        run: probe_lz4,
    },
    Probe {
        kind: CompressionKind::LzwLsb8,
        run: probe_lzw,
    },
];

fn probe_zlib(input: &[u8], _config: &SniffConfig) -> Result<Vec<u8>, SniffError> {
    kernels::zlib::decode(input)
}

fn probe_deflate(input: &[u8], _config: &SniffConfig) -> Result<Vec<u8>, SniffError> {
    kernels::deflate::decode(input)
}

fn probe_lzo(input: &[u8], _config: &SniffConfig) -> Result<Vec<u8>, SniffError> {
    kernels::lzo::decode(input)
}

fn probe_lz4(input: &[u8], config: &SniffConfig) -> Result<Vec<u8>, SniffError> {
    kernels::lz4::decode(input, config.max_decoded_len)
}

fn probe_lzw(input: &[u8], config: &SniffConfig) -> Result<Vec<u8>, SniffError> {
    kernels::lzw::decode(input, config.max_decoded_len)
}

//==================================================================================
// 2. Public API
//==================================================================================

/// A successful detection: the scheme that matched and the decoded payload.
/// The payload buffer belongs solely to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub kind: CompressionKind,
    pub data: Vec<u8>,
}

/// The blind-format detector. Holds nothing but its configuration; every call
/// operates on its own buffers, so independent callers never interfere.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: SniffConfig,
}

impl Extractor {
    pub fn new(config: SniffConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SniffConfig {
        &self.config
    }

    /// Reads `source` fully into memory, then runs detection on the buffered
    /// bytes. A read failure is fatal and surfaces as `SniffError::Io` before
    /// any probe is attempted.
    pub fn try_extract<R: Read>(&self, mut source: R) -> Result<Extraction, SniffError> {
        let mut input = Vec::new();
        source.read_to_end(&mut input)?;
        self.try_extract_slice(&input)
    }

    /// Runs the probe loop over an in-memory byte slice, stopping at the first
    /// decoder that accepts the whole input.
    ///
    /// Detection is deterministic: the same bytes always yield the same
    /// result. Empty input matches no scheme (every kernel rejects it) and is
    /// reported as `UnrecognizedFormat`. On failure the caller learns nothing
    /// about the individual probe errors; those go to the `log` side channel
    /// only.
    pub fn try_extract_slice(&self, input: &[u8]) -> Result<Extraction, SniffError> {
        for probe in &PROBES {
            match (probe.run)(input, &self.config) {
                Ok(data) => {
                    log::info!(
                        "detected {} compression ({} -> {} bytes)",
                        probe.kind,
                        input.len(),
                        data.len()
                    );
                    return Ok(Extraction {
                        kind: probe.kind,
                        data,
                    });
                }
                Err(e) => {
                    if self.config.log_rejections {
                        log::debug!("{} probe rejected input: {}", probe.kind, e);
                    }
                }
            }
        }
        Err(SniffError::UnrecognizedFormat)
    }
}
