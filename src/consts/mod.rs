//! Global constants for the two-part archive format.
//!
//! Includes format magics, version numbers, header layout, and compression
//! level bounds.

/// Magic prefix of a tagged part header.
pub const TAGGED_MAGIC: [u8; 3] = *b"GZS";

/// First two bytes of every raw gzip stream (RFC 1952).
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Format version of a raw part: a bare gzip stream with no header.
pub const RAW_FORMAT_VERSION: u8 = 0;

/// Latest part format version, written by tagged split compression.
pub const LATEST_FORMAT_VERSION: u8 = 1;

/// Byte length of a tagged part header:
/// 3 (magic) + 1 (version) + 1 (part index) + 8 (payload length)
/// + 8 (part length) + 4 (CRC32).
pub const TAGGED_HEADER_LEN: usize = 25;

/// Part index of the first (lower offset) half.
pub const PART_INDEX_FIRST: u8 = 0;

/// Part index of the second half.
pub const PART_INDEX_SECOND: u8 = 1;

/// Default gzip compression level; matches `flate2::Compression::default()`.
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Maximum gzip compression level.
pub const MAX_COMPRESSION_LEVEL: u32 = 9;
