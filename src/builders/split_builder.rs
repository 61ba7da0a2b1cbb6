//! src/builders/split_builder.rs
//! Split-compression builder with strong defaults.

use crate::consts::MAX_COMPRESSION_LEVEL;
use crate::error::GzsplitError;
use crate::splitter::split::{split_compress_tagged_with, split_compress_with};
use crate::splitter::write::split_file_with;
use flate2::Compression;
use std::path::Path;

/// Split-compression configuration builder
///
/// Strong defaults: gzip level 6 and raw (untagged) output, for
/// compatibility with pairs produced before integrity tagging existed.
///
/// # Thread Safety
///
/// This type is **thread-safe** (`Send + Sync`). Builders can be created and
/// used concurrently from multiple threads. All operations are pure (no
/// shared mutable state).
#[derive(Debug, Clone)]
pub struct SplitBuilder {
    level: Compression,
    tagged: bool,
}

impl SplitBuilder {
    /// Create builder with strong defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Compression::default(),
            tagged: false,
        }
    }

    /// Set the gzip compression level, clamped to `0..=9`.
    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = Compression::new(level.min(MAX_COMPRESSION_LEVEL));
        self
    }

    /// Emit tagged parts that fail fast on swap or corruption at join time.
    #[must_use]
    pub fn with_tags(mut self) -> Self {
        self.tagged = true;
        self
    }

    /// Current compression level
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level.level()
    }

    /// Whether parts will carry integrity tags
    #[must_use]
    pub const fn tagged(&self) -> bool {
        self.tagged
    }

    /// Split `payload` into two parts with this configuration.
    pub fn split(&self, payload: &[u8]) -> Result<(Vec<u8>, Vec<u8>), GzsplitError> {
        if self.tagged {
            split_compress_tagged_with(payload, self.level)
        } else {
            split_compress_with(payload, self.level)
        }
    }

    /// Split the file at `input` into two part files with this configuration.
    pub fn split_file(
        &self,
        input: impl AsRef<Path>,
        part_a: impl AsRef<Path>,
        part_b: impl AsRef<Path>,
    ) -> Result<(), GzsplitError> {
        split_file_with(input, part_a, part_b, self.level, self.tagged)
    }
}

impl Default for SplitBuilder {
    fn default() -> Self {
        Self::new()
    }
}
