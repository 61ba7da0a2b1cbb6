//! tests/batch_ops_tests.rs
//! Parallel batch split/join (feature "batch-ops")

#![cfg(feature = "batch-ops")]

mod common;
use common::patterned_payload;

use gzsplit_rs::{
    join_decompress_batch, split_compress, split_compress_batch, GzsplitError,
};

#[test]
fn batch_roundtrip() {
    let payloads: Vec<Vec<u8>> = (0..32).map(|i| patterned_payload(i * 997)).collect();
    let refs: Vec<&[u8]> = payloads.iter().map(Vec::as_slice).collect();

    let pairs = split_compress_batch(&refs).unwrap();
    assert_eq!(pairs.len(), payloads.len());

    let pair_refs: Vec<(&[u8], &[u8])> = pairs
        .iter()
        .map(|(part_a, part_b)| (part_a.as_slice(), part_b.as_slice()))
        .collect();
    let rebuilt = join_decompress_batch(&pair_refs).unwrap();
    assert_eq!(rebuilt, payloads);
}

#[test]
fn batch_matches_sequential() {
    // Parallel and sequential compression must produce identical blobs;
    // each pair depends only on its own payload.
    let payloads: Vec<Vec<u8>> = (1..8).map(|i| patterned_payload(i * 10_000)).collect();
    let refs: Vec<&[u8]> = payloads.iter().map(Vec::as_slice).collect();

    let batched = split_compress_batch(&refs).unwrap();
    for (payload, pair) in payloads.iter().zip(&batched) {
        assert_eq!(&split_compress(payload).unwrap(), pair);
    }
}

#[test]
fn batch_surfaces_decode_failure() {
    let good = split_compress(b"fine").unwrap();
    let pairs: Vec<(&[u8], &[u8])> = vec![
        (good.0.as_slice(), good.1.as_slice()),
        (b"broken", b"pair"),
    ];
    let err = join_decompress_batch(&pairs).unwrap_err();
    assert!(matches!(err, GzsplitError::Decode(_)), "got {err:?}");
}

#[test]
fn empty_batch_is_fine() {
    assert!(split_compress_batch(&[]).unwrap().is_empty());
    assert!(join_decompress_batch(&[]).unwrap().is_empty());
}
