//! src/splitter/write.rs
//! Part persistence: split a file on disk into two compressed part files.

use crate::error::GzsplitError;
use crate::splitter::split::{split_compress_tagged_with, split_compress_with};
use crate::utils::split_point;
use flate2::Compression;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Split-compress the file at `input` and persist the halves to `part_a`
/// and `part_b`.
///
/// The point of the exercise: each part file fits through a size-limited
/// storage or distribution channel that cannot hold the whole artifact.
/// Matching and ordering of the two files afterwards is the caller's
/// responsibility, by naming convention.
///
/// # Errors
///
/// [`GzsplitError::Io`] if the input cannot be read or a part cannot be
/// written.
pub fn split_file(
    input: impl AsRef<Path>,
    part_a: impl AsRef<Path>,
    part_b: impl AsRef<Path>,
) -> Result<(), GzsplitError> {
    split_file_with(input, part_a, part_b, Compression::default(), false)
}

pub(crate) fn split_file_with(
    input: impl AsRef<Path>,
    part_a: impl AsRef<Path>,
    part_b: impl AsRef<Path>,
    level: Compression,
    tagged: bool,
) -> Result<(), GzsplitError> {
    let input = input.as_ref();
    let (part_a, part_b) = (part_a.as_ref(), part_b.as_ref());

    let payload = fs::read(input)?;
    let mid = split_point(payload.len());
    info!(
        "splitting {} ({} bytes) into halves of {} and {} bytes",
        input.display(),
        payload.len(),
        mid,
        payload.len() - mid
    );

    let (blob_a, blob_b) = if tagged {
        split_compress_tagged_with(&payload, level)?
    } else {
        split_compress_with(&payload, level)?
    };
    debug!(
        "compressed part sizes: {} and {} bytes",
        blob_a.len(),
        blob_b.len()
    );

    fs::write(part_a, &blob_a)?;
    fs::write(part_b, &blob_b)?;
    info!("wrote {} and {}", part_a.display(), part_b.display());

    Ok(())
}
