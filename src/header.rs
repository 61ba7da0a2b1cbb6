//! # Part Headers
//!
//! This module provides parsing and encoding of part headers.
//! A tagged part starts with the magic bytes "GZS", a format version, and
//! integrity metadata; a raw part is a bare gzip stream with no header.

use crate::consts::{
    GZIP_MAGIC, LATEST_FORMAT_VERSION, PART_INDEX_FIRST, PART_INDEX_SECOND, RAW_FORMAT_VERSION,
    TAGGED_HEADER_LEN, TAGGED_MAGIC,
};
use crate::error::GzsplitError;
use std::io::Read;

/// Decoded form of a tagged part header.
///
/// Layout on the wire (25 bytes, all integers big-endian):
///
/// | offset | bytes | field                                    |
/// |--------|-------|------------------------------------------|
/// | 0      | 3     | magic `"GZS"`                            |
/// | 3      | 1     | format version                           |
/// | 4      | 1     | part index (0 = first half, 1 = second)  |
/// | 5      | 8     | total payload length                     |
/// | 13     | 8     | this part's uncompressed length          |
/// | 21     | 4     | CRC32 of this part's uncompressed bytes  |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartHeader {
    pub version: u8,
    pub index: u8,
    pub payload_len: u64,
    pub part_len: u64,
    pub checksum: u32,
}

impl PartHeader {
    /// Header for a freshly produced part at the latest format version.
    #[must_use]
    pub fn new(index: u8, payload_len: u64, part_len: u64, checksum: u32) -> Self {
        Self {
            version: LATEST_FORMAT_VERSION,
            index,
            payload_len,
            part_len,
            checksum,
        }
    }

    /// Encode this header into its fixed wire form.
    #[must_use]
    pub fn encode(&self) -> [u8; TAGGED_HEADER_LEN] {
        let mut out = [0u8; TAGGED_HEADER_LEN];
        out[..3].copy_from_slice(&TAGGED_MAGIC);
        out[3] = self.version;
        out[4] = self.index;
        out[5..13].copy_from_slice(&self.payload_len.to_be_bytes());
        out[13..21].copy_from_slice(&self.part_len.to_be_bytes());
        out[21..25].copy_from_slice(&self.checksum.to_be_bytes());
        out
    }

    /// Parse a header from the leading bytes of a tagged part.
    ///
    /// `bytes` may be longer than the header; only the first
    /// [`TAGGED_HEADER_LEN`] bytes are inspected.
    ///
    /// # Errors
    ///
    /// - [`GzsplitError::Header`] - truncated input, wrong magic, raw version
    ///   byte under a tagged magic, or an index other than 0/1
    /// - [`GzsplitError::UnsupportedVersion`] - version newer than this build
    pub fn parse(bytes: &[u8]) -> Result<Self, GzsplitError> {
        if bytes.len() < TAGGED_HEADER_LEN {
            return Err(GzsplitError::Header("truncated part header".into()));
        }
        if bytes[..3] != TAGGED_MAGIC {
            return Err(GzsplitError::Header(
                "not a tagged part: invalid magic".into(),
            ));
        }

        let version = bytes[3];
        if version == RAW_FORMAT_VERSION {
            return Err(GzsplitError::Header(
                "tagged magic with raw version byte".into(),
            ));
        }
        if version > LATEST_FORMAT_VERSION {
            return Err(GzsplitError::UnsupportedVersion(version));
        }

        let index = bytes[4];
        if index != PART_INDEX_FIRST && index != PART_INDEX_SECOND {
            return Err(GzsplitError::Header(format!("invalid part index: {index}")));
        }

        let payload_len = u64::from_be_bytes(bytes[5..13].try_into().expect("span is 8 bytes"));
        let part_len = u64::from_be_bytes(bytes[13..21].try_into().expect("span is 8 bytes"));
        let checksum = u32::from_be_bytes(bytes[21..25].try_into().expect("span is 4 bytes"));

        Ok(Self {
            version,
            index,
            payload_len,
            part_len,
            checksum,
        })
    }
}

/// Read and validate the part format version from the leading bytes.
///
/// This function reads the minimal prefix needed to determine the format
/// version without decompressing anything. It's suited for fast format
/// detection in file management tools or batch operations.
///
/// # Thread Safety
///
/// This function is **thread-safe** and can be called concurrently from
/// multiple threads. All operations are pure (no shared mutable state).
///
/// # Recognized prefixes
///
/// - raw (v0): gzip magic `1f 8b` (RFC 1952)
/// - tagged (v1+): `"GZS"` followed by the version byte
///
/// # Arguments
///
/// * `reader` - A reader that implements `Read`, positioned at the start of
///   the part
///
/// # Returns
///
/// Returns the format version (0 for raw gzip, 1 for tagged) if the prefix
/// is recognized, or an error if:
/// - The leading bytes match neither gzip nor tagged magic
/// - A tagged part carries a version this build cannot read
/// - An I/O error occurs
///
/// # Errors
///
/// - [`GzsplitError::Io`] - If an I/O error occurs while reading
/// - [`GzsplitError::Header`] - If the prefix is unrecognized or malformed
/// - [`GzsplitError::UnsupportedVersion`] - If the tagged version is too new
///
/// # Example
///
/// ```
/// use gzsplit_rs::read_version;
/// use std::io::Cursor;
///
/// // Tagged part header prefix
/// let tagged = b"GZS\x01\x00";
/// let version = read_version(Cursor::new(&tagged[..]))?;
/// assert_eq!(version, 1);
///
/// // Raw gzip part (RFC 1952 magic, deflate method)
/// let raw = [0x1f, 0x8b, 0x08];
/// let version = read_version(Cursor::new(&raw[..]))?;
/// assert_eq!(version, 0);
/// # Ok::<(), gzsplit_rs::GzsplitError>(())
/// ```
pub fn read_version<R: Read>(mut reader: R) -> Result<u8, GzsplitError> {
    let mut magic = [0u8; 3];
    reader.read_exact(&mut magic).map_err(GzsplitError::Io)?;

    if magic == TAGGED_MAGIC {
        let mut version = [0u8; 1];
        reader.read_exact(&mut version).map_err(GzsplitError::Io)?;

        return match version[0] {
            RAW_FORMAT_VERSION => Err(GzsplitError::Header(
                "tagged magic with raw version byte".into(),
            )),
            v if v > LATEST_FORMAT_VERSION => Err(GzsplitError::UnsupportedVersion(v)),
            v => Ok(v),
        };
    }

    if magic[..2] == GZIP_MAGIC {
        // Raw part: a bare gzip stream, no header of our own
        return Ok(RAW_FORMAT_VERSION);
    }

    Err(GzsplitError::Header(
        "not a gzip stream or tagged part: invalid magic".into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn version_vectors() {
        let cases = &[
            ("1f8b08", 0u8), // raw gzip, deflate method
            ("1f8b0800", 0u8),
            ("475a5301", 1u8), // "GZS" + v1
            ("475a530100", 1u8),
        ];

        for &(hex_str, expected) in cases {
            let bytes = hex::decode(hex_str).unwrap();
            assert_eq!(
                read_version(Cursor::new(&bytes)).unwrap(),
                expected,
                "{hex_str}"
            );
        }
    }

    #[test]
    fn invalid_magic() {
        let err = read_version(Cursor::new(b"XYZ\x01\x00")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Header error: not a gzip stream or tagged part: invalid magic"
        );
    }

    #[test]
    fn tagged_magic_with_raw_version() {
        let err = read_version(Cursor::new(b"GZS\x00")).unwrap_err();
        assert!(matches!(err, GzsplitError::Header(_)));
    }

    #[test]
    fn future_version() {
        let err = read_version(Cursor::new(b"GZS\x07")).unwrap_err();
        assert!(matches!(err, GzsplitError::UnsupportedVersion(7)));
    }

    #[test]
    fn encode_parse_roundtrip() {
        let header = PartHeader::new(PART_INDEX_SECOND, 1_000_003, 500_002, 0xdead_beef);
        let parsed = PartHeader::parse(&header.encode()).unwrap();
        assert_eq!(parsed, header);
    }

    #[test]
    fn parse_known_bytes() {
        // 26-byte payload, 13-byte first half, checksum 0x01020304
        let expected = PartHeader::new(PART_INDEX_FIRST, 26, 13, 0x0102_0304);
        let bytes =
            hex::decode("475a530100000000000000001a000000000000000d01020304").unwrap();
        assert_eq!(PartHeader::parse(&bytes).unwrap(), expected);
        assert_eq!(expected.encode().to_vec(), bytes);
    }

    #[test]
    fn parse_rejects_truncation() {
        let encoded = PartHeader::new(PART_INDEX_FIRST, 10, 5, 0).encode();
        let err = PartHeader::parse(&encoded[..TAGGED_HEADER_LEN - 1]).unwrap_err();
        assert!(matches!(err, GzsplitError::Header(_)));
    }

    #[test]
    fn parse_rejects_bad_index() {
        let mut encoded = PartHeader::new(PART_INDEX_FIRST, 10, 5, 0).encode();
        encoded[4] = 2;
        let err = PartHeader::parse(&encoded).unwrap_err();
        assert!(matches!(err, GzsplitError::Header(_)));
    }
}
