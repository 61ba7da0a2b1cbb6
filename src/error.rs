//! # Error Types
//!
//! This module defines the error types used throughout the library.
//! All operations return [`Result<T, GzsplitError>`](GzsplitError) for comprehensive error handling.

use std::path::PathBuf;
use thiserror::Error;

/// The error type for all split-archive operations.
///
/// This enum covers I/O errors, missing part files, stream decoding errors,
/// part header errors, and format version compatibility issues.
#[derive(Error, Debug)]
pub enum GzsplitError {
    /// I/O error occurred during file operations.
    ///
    /// This variant wraps [`std::io::Error`] and is automatically created
    /// when I/O operations fail (e.g., read/write errors on part files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An expected part file does not exist.
    ///
    /// Raised by the file-level join and staging operations before anything
    /// is opened or decoded, naming the first absent path.
    #[error("Missing part file: {0}")]
    PartMissing(PathBuf),

    /// A supplied blob is not a valid compressed stream, or its contents do
    /// not match the integrity data in its header:
    /// - invalid or truncated gzip stream
    /// - decoded half shorter or longer than the header claims
    /// - CRC32 mismatch on a tagged part
    #[error("Decode error: {0}")]
    Decode(String),

    /// Part header parsing or validation error.
    ///
    /// This variant is used for errors related to tagged part headers:
    /// - invalid magic bytes
    /// - truncated header
    /// - invalid part index
    /// - swapped or mismatched parts at join time
    #[error("Header error: {0}")]
    Header(String),

    /// Unsupported part format version.
    ///
    /// Returned when reading a tagged part whose version byte is newer than
    /// this build understands. The contained value is the version found.
    #[error("Unsupported part format version: {0}")]
    UnsupportedVersion(u8),
}

impl From<&'static str> for GzsplitError {
    fn from(msg: &'static str) -> Self {
        GzsplitError::Decode(msg.to_string())
    }
}
