//! src/artifact.rs
//! Artifact staging and lazy loading on top of the joiner.
//!
//! The reference workflow stores a serialized artifact as two part files,
//! reconstructs it into a scratch file, deserializes from there, and
//! discards the scratch copy. [`stage_parts_to_temp`] models the scratch
//! copy as a scoped temporary file that is removed on every exit path;
//! [`LazyArtifact`] is an explicit load-on-first-use handle for the
//! deserialized object.

use crate::error::GzsplitError;
use crate::joiner::join_decompress;
use log::debug;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;
use tempfile::NamedTempFile;

/// Reconstruct a payload from two part files into a named temporary file.
///
/// The file is deleted when the returned handle drops, whether or not the
/// caller's subsequent processing succeeds. Keep the handle alive for as
/// long as the staged path is in use.
///
/// # Errors
///
/// - [`GzsplitError::PartMissing`] - either part path does not exist
/// - decode and I/O failures from reading, joining, or writing
pub fn stage_parts_to_temp(
    part_a: impl AsRef<Path>,
    part_b: impl AsRef<Path>,
) -> Result<NamedTempFile, GzsplitError> {
    let (part_a, part_b) = (part_a.as_ref(), part_b.as_ref());

    for path in [part_a, part_b] {
        if !path.exists() {
            return Err(GzsplitError::PartMissing(path.to_path_buf()));
        }
    }

    let payload = join_decompress(&fs::read(part_a)?, &fs::read(part_b)?)?;

    let mut staged = NamedTempFile::new()?;
    staged.write_all(&payload)?;
    staged.flush()?;
    debug!(
        "staged {} bytes at {}",
        payload.len(),
        staged.path().display()
    );

    Ok(staged)
}

/// Reconstruct an artifact from its two part files.
///
/// Joins the parts into a temporary file, hands the staged path to
/// `deserialize`, and removes the staged file afterwards, on success and
/// failure alike. The payload format is the caller's business; this function
/// never interprets the reconstructed bytes.
///
/// # Errors
///
/// Staging errors (converted into `E` via `From`), or whatever
/// `deserialize` returns.
pub fn load_artifact_from_parts<T, E, F>(
    part_a: impl AsRef<Path>,
    part_b: impl AsRef<Path>,
    deserialize: F,
) -> Result<T, E>
where
    F: FnOnce(&Path) -> Result<T, E>,
    E: From<GzsplitError>,
{
    let staged = stage_parts_to_temp(part_a, part_b)?;
    let artifact = deserialize(staged.path())?;
    staged.close().map_err(GzsplitError::Io)?;
    Ok(artifact)
}

/// Load-on-first-use artifact handle.
///
/// Wraps an expensive load (reconstructing and deserializing a
/// multi-megabyte artifact) behind a handle that holds at most one value for
/// the lifetime of the process and never invalidates it.
///
/// # Thread Safety
///
/// `Send + Sync` for `T: Send + Sync`. Concurrent first calls may race to
/// load; the first stored value wins and every later caller observes the
/// same reference. A failed load stores nothing, so the next call retries.
#[derive(Debug)]
pub struct LazyArtifact<T> {
    slot: OnceLock<T>,
}

impl<T> LazyArtifact<T> {
    /// Create an empty handle; nothing is loaded until first use.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Value if already loaded
    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    /// Return the cached artifact, loading it with `load` on first use.
    pub fn get_or_load<E>(&self, load: impl FnOnce() -> Result<T, E>) -> Result<&T, E> {
        if let Some(value) = self.slot.get() {
            return Ok(value);
        }
        let value = load()?;
        Ok(self.slot.get_or_init(|| value))
    }
}

impl<T> Default for LazyArtifact<T> {
    fn default() -> Self {
        Self::new()
    }
}
