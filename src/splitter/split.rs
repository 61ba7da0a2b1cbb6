//! src/splitter/split.rs
//! Two-part split compression over in-memory payloads.

use crate::consts::{PART_INDEX_FIRST, PART_INDEX_SECOND, TAGGED_HEADER_LEN};
use crate::error::GzsplitError;
use crate::header::PartHeader;
use crate::splitter::stream::compress_gzip;
use crate::utils::split_halves;
use flate2::Compression;

/// Compress `payload` into two independent raw gzip parts.
///
/// The payload is cut at `payload.len() / 2`; each half becomes its own
/// standard gzip stream with no added framing, so any conforming gzip
/// decompressor can open a part on its own. Joining the pair with
/// [`join_decompress`](crate::join_decompress) reproduces the payload byte
/// for byte.
///
/// Any input is valid, including an empty payload (both parts then encode
/// zero bytes) and a one-byte payload (the first part encodes zero bytes).
///
/// Raw parts carry no integrity metadata; see
/// [`split_compress_tagged`] for pairs that fail fast on swap or corruption
/// at join time.
///
/// # Errors
///
/// [`GzsplitError::Io`] if writing compressed output fails; with the
/// in-memory sinks used here this does not happen in practice.
#[inline(always)]
pub fn split_compress(payload: &[u8]) -> Result<(Vec<u8>, Vec<u8>), GzsplitError> {
    split_compress_with(payload, Compression::default())
}

/// [`split_compress`] with an explicit gzip compression level.
pub fn split_compress_with(
    payload: &[u8],
    level: Compression,
) -> Result<(Vec<u8>, Vec<u8>), GzsplitError> {
    let (first, second) = split_halves(payload);

    // The two halves compress independently; either could go first.
    let part_a = compress_gzip(first, level)?;
    let part_b = compress_gzip(second, level)?;

    Ok((part_a, part_b))
}

/// Compress `payload` into two tagged parts.
///
/// Same split and gzip encoding as [`split_compress`], but each part is
/// prefixed with a fixed 25-byte header carrying the format version, the
/// part index, the total and per-part lengths, and a CRC32 of the
/// uncompressed half. Joining a tagged pair verifies all of it, turning
/// swapped or mismatched parts into an error instead of a silently wrong
/// payload.
#[inline(always)]
pub fn split_compress_tagged(payload: &[u8]) -> Result<(Vec<u8>, Vec<u8>), GzsplitError> {
    split_compress_tagged_with(payload, Compression::default())
}

/// [`split_compress_tagged`] with an explicit gzip compression level.
pub fn split_compress_tagged_with(
    payload: &[u8],
    level: Compression,
) -> Result<(Vec<u8>, Vec<u8>), GzsplitError> {
    let (first, second) = split_halves(payload);
    let payload_len = payload.len() as u64;

    let part_a = tag_part(first, payload_len, PART_INDEX_FIRST, level)?;
    let part_b = tag_part(second, payload_len, PART_INDEX_SECOND, level)?;

    Ok((part_a, part_b))
}

fn tag_part(
    half: &[u8],
    payload_len: u64,
    index: u8,
    level: Compression,
) -> Result<Vec<u8>, GzsplitError> {
    let header = PartHeader::new(index, payload_len, half.len() as u64, crc32fast::hash(half));

    let compressed = compress_gzip(half, level)?;
    let mut part = Vec::with_capacity(TAGGED_HEADER_LEN + compressed.len());
    part.extend_from_slice(&header.encode());
    part.extend_from_slice(&compressed);

    Ok(part)
}
