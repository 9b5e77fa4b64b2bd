//! This module contains the pure, stateless decode kernels, one per supported
//! compression scheme.
//!
//! Every kernel follows the same contract: it is handed a read-only byte
//! slice, it either decodes the *entire* stream cleanly or it returns an
//! error, and it never reports success for a truncated or partially-applied
//! decode. The kernels are independent of each other; the only caller that
//! ties them together is the `Extractor` probe loop.

pub mod deflate;
pub mod lz4;
pub mod lzo;
pub mod lzw;
pub mod zlib;
