//! tests/common.rs
//! Common constants and helpers shared across test files

/// 26-byte alphabet payload; splits 13/13 into "abcdefghijklm" / "nopqrstuvwxyz".
#[allow(dead_code)] // Used across multiple test files
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// One-byte payload; splits into an empty first half and a single byte.
#[allow(dead_code)] // Used across multiple test files
pub const SINGLE_BYTE: &[u8] = &[0x41];

/// Payload sizes exercised by round-trip tests: empty, tiny, odd, block-ish,
/// large (1 MB).
#[allow(dead_code)] // Used across multiple test files
pub const ROUNDTRIP_SIZES: &[usize] = &[0, 1, 2, 3, 26, 1024, 65_537, 1_000_000];

/// Deterministic pseudo-random payload; compressible but not trivial.
#[allow(dead_code)] // Used across multiple test files
pub fn patterned_payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + i / 7) as u8).collect()
}
