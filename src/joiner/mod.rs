// src/joiner/mod.rs

//! High-level join-decompression facade.
//!
//! Core API: `join_decompress(part_a, part_b)?` with per-part format
//! detection.
//! File-level: `join_files(part_a, part_b, output)?`.

pub(crate) mod join;
pub(crate) mod read;

pub use join::join_decompress;
pub use read::{decompress_gzip, join_files};
