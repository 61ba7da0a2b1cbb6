// src/splitter/mod.rs

//! High-level split-compression facade.
//!
//! Core API: `split_compress(payload)?` for raw pairs, `split_compress_tagged(payload)?`
//! for integrity-tagged pairs.
//! File-level: `split_file(input, part_a, part_b)?`.

pub(crate) mod split;
pub(crate) mod stream;
pub(crate) mod write;

pub use split::{
    split_compress, split_compress_tagged, split_compress_tagged_with, split_compress_with,
};
pub use stream::compress_gzip;
pub use write::split_file;
