#[cfg(feature = "batch-ops")]
use rayon::prelude::*;

#[cfg(feature = "batch-ops")]
use crate::{join_decompress, split_compress, GzsplitError};

#[cfg(feature = "batch-ops")]
pub fn split_compress_batch(
    payloads: &[&[u8]],
) -> Result<Vec<(Vec<u8>, Vec<u8>)>, GzsplitError> {
    payloads
        .par_iter()
        .map(|payload| split_compress(payload))
        .collect()
}

#[cfg(feature = "batch-ops")]
pub fn join_decompress_batch(pairs: &[(&[u8], &[u8])]) -> Result<Vec<Vec<u8>>, GzsplitError> {
    pairs
        .par_iter()
        .map(|(part_a, part_b)| join_decompress(part_a, part_b))
        .collect()
}
