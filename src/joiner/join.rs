//! src/joiner/join.rs
//! Pair decoding with per-part format detection and tagged verification.

use crate::consts::{PART_INDEX_FIRST, PART_INDEX_SECOND, TAGGED_HEADER_LEN, TAGGED_MAGIC};
use crate::error::GzsplitError;
use crate::header::PartHeader;
use crate::joiner::read::decompress_gzip;

/// Reconstruct the original payload from its two compressed parts.
///
/// Each part is decoded independently and the halves are concatenated
/// first-then-second; the order is part of the contract. The format of each
/// part is detected from its leading bytes:
///
/// - **Raw parts** (bare gzip streams, the [`split_compress`] output) decode
///   with no further checks. Swapped or unrelated raw parts therefore
///   reconstruct a wrong payload with **no error**: the pair carries no
///   metadata that would let this call notice the mix-up. Callers who need
///   that protection should produce tagged pairs.
/// - **Tagged parts** (the [`split_compress_tagged`] output) are verified:
///   part indices must run first-then-second, both headers must agree on the
///   total payload length, the half lengths must add up to it, and each
///   decoded half must match its CRC32. Any violation fails the call. Parts
///   taken from two different payloads of the same total length are the one
///   mix-up the per-part checks cannot see.
///
/// A literally empty blob is accepted as the encoding of a zero-length half.
///
/// [`split_compress`]: crate::split_compress
/// [`split_compress_tagged`]: crate::split_compress_tagged
///
/// # Errors
///
/// - [`GzsplitError::Decode`] - a part is not a valid gzip stream, or a
///   tagged half fails its length or CRC32 check
/// - [`GzsplitError::Header`] - malformed tagged header, swapped indices,
///   disagreeing lengths, or a tagged part paired with an untagged blob
/// - [`GzsplitError::UnsupportedVersion`] - a tagged part from a newer format
pub fn join_decompress(part_a: &[u8], part_b: &[u8]) -> Result<Vec<u8>, GzsplitError> {
    if is_tagged(part_a) || is_tagged(part_b) {
        return join_tagged(part_a, part_b);
    }

    let mut payload = decode_raw(part_a)?;
    payload.extend_from_slice(&decode_raw(part_b)?);
    Ok(payload)
}

fn is_tagged(blob: &[u8]) -> bool {
    // Unambiguous: gzip streams start 1f 8b, never 'G'
    blob.len() >= 3 && blob[..3] == TAGGED_MAGIC
}

fn decode_raw(blob: &[u8]) -> Result<Vec<u8>, GzsplitError> {
    if blob.is_empty() {
        // Zero-length half
        return Ok(Vec::new());
    }
    decompress_gzip(blob)
}

fn join_tagged(part_a: &[u8], part_b: &[u8]) -> Result<Vec<u8>, GzsplitError> {
    let (header_a, half_a) = decode_tagged(part_a)?;
    let (header_b, half_b) = decode_tagged(part_b)?;

    if header_a.index != PART_INDEX_FIRST || header_b.index != PART_INDEX_SECOND {
        return Err(GzsplitError::Header(format!(
            "parts out of order: got indices {} then {}",
            header_a.index, header_b.index
        )));
    }
    if header_a.payload_len != header_b.payload_len {
        return Err(GzsplitError::Header(format!(
            "parts disagree on payload length: {} vs {}",
            header_a.payload_len, header_b.payload_len
        )));
    }
    if header_a.part_len.checked_add(header_b.part_len) != Some(header_a.payload_len) {
        return Err(GzsplitError::Header(format!(
            "half lengths {} + {} do not add up to payload length {}",
            header_a.part_len, header_b.part_len, header_a.payload_len
        )));
    }

    let mut payload = half_a;
    payload.extend_from_slice(&half_b);
    Ok(payload)
}

fn decode_tagged(blob: &[u8]) -> Result<(PartHeader, Vec<u8>), GzsplitError> {
    if !is_tagged(blob) {
        // One tagged and one raw part cannot be a matching pair
        return Err(GzsplitError::Header(
            "tagged part paired with an untagged blob".into(),
        ));
    }

    let header = PartHeader::parse(blob)?;
    let half = decompress_gzip(&blob[TAGGED_HEADER_LEN..])?;

    if half.len() as u64 != header.part_len {
        return Err(GzsplitError::Decode(format!(
            "part {} decoded to {} bytes, header says {}",
            header.index,
            half.len(),
            header.part_len
        )));
    }

    let crc = crc32fast::hash(&half);
    if crc != header.checksum {
        return Err(GzsplitError::Decode(format!(
            "part {} checksum mismatch: computed {crc:08x}, header {:08x}",
            header.index, header.checksum
        )));
    }

    Ok((header, half))
}
