//! src/joiner/read.rs
//! Part readers: gzip decoding and the file-level join.

use crate::error::GzsplitError;
use crate::joiner::join::join_decompress;
use flate2::read::GzDecoder;
use log::info;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Decode a standalone gzip stream back into its uncompressed bytes.
///
/// # Errors
///
/// [`GzsplitError::Decode`] if `blob` is not a valid gzip stream (bad magic,
/// corrupt deflate data, truncation, or a failed gzip trailer check).
pub fn decompress_gzip(blob: &[u8]) -> Result<Vec<u8>, GzsplitError> {
    let mut decoder = GzDecoder::new(blob);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|e| GzsplitError::Decode(format!("invalid gzip stream: {e}")))?;
    Ok(out)
}

/// Join two part files back into the original payload file.
///
/// Both part paths are checked up front; the first missing one is reported
/// as [`GzsplitError::PartMissing`] before anything is opened or decoded.
/// Decoding follows the [`join_decompress`] contract, including its raw-pair
/// ordering caveat.
pub fn join_files(
    part_a: impl AsRef<Path>,
    part_b: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<(), GzsplitError> {
    let (part_a, part_b) = (part_a.as_ref(), part_b.as_ref());
    let output = output.as_ref();

    for path in [part_a, part_b] {
        if !path.exists() {
            return Err(GzsplitError::PartMissing(path.to_path_buf()));
        }
    }

    let blob_a = fs::read(part_a)?;
    let blob_b = fs::read(part_b)?;

    let payload = join_decompress(&blob_a, &blob_b)?;
    fs::write(output, &payload)?;
    info!(
        "joined {} and {} into {} ({} bytes)",
        part_a.display(),
        part_b.display(),
        output.display(),
        payload.len()
    );

    Ok(())
}
