//! src/splitter/stream.rs
//! Gzip stream encoding for one half of a payload.

use crate::error::GzsplitError;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

/// Encode `half` as a standalone gzip stream at the given level.
///
/// Each half becomes its own complete RFC 1952 stream: no shared dictionary,
/// no state carried over from the other half. A zero-length half still
/// produces a valid (if mostly-header) stream.
pub fn compress_gzip(half: &[u8], level: Compression) -> Result<Vec<u8>, GzsplitError> {
    let mut encoder = GzEncoder::new(Vec::with_capacity(half.len() / 2 + 64), level);
    encoder.write_all(half)?;
    Ok(encoder.finish()?)
}
