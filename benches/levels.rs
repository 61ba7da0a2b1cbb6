// benches/levels.rs
//! Benchmark gzip compression levels for split/join operations
//!
//! Tests the performance impact of different compression levels

use gzsplit_rs::{join_decompress, SplitBuilder};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

const MB: usize = 1024 * 1024;

fn patterned(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + i / 7) as u8).collect()
}

fn bench_split_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_levels");
    group.sample_size(10); // Fewer samples for slow levels

    let input = patterned(MB);
    let levels = vec![0u32, 1, 3, 6, 9];

    for &level in &levels {
        let id = BenchmarkId::new("level", level);
        group.bench_with_input(id, &level, |b, &level| {
            let builder = SplitBuilder::new().with_level(level);
            b.iter(|| {
                let pair = builder.split(black_box(&input)).unwrap();
                black_box(pair);
            });
        });
    }

    group.finish();
}

fn bench_roundtrip_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip_levels");
    group.sample_size(10); // Fewer samples for slow levels

    let input = patterned(MB);
    let levels = vec![1u32, 6, 9];

    for &level in &levels {
        let id = BenchmarkId::new("level", level);
        group.bench_with_input(id, &level, |b, &level| {
            let builder = SplitBuilder::new().with_level(level);
            b.iter(|| {
                let (part_a, part_b) = builder.split(black_box(&input)).unwrap();
                let rebuilt = join_decompress(black_box(&part_a), black_box(&part_b)).unwrap();
                black_box(rebuilt);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_split_levels, bench_roundtrip_levels);
criterion_main!(benches);
