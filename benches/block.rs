//! Criterion benchmarks for the block codec.
//!
//! Run with:
//!   cargo bench --bench block

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Synthetic corpus: repetitive enough to exercise RLE and back-reference
/// paths, large enough to approach the 64 KiB block ceiling.
fn synthetic_chunk(size: usize) -> Vec<u8> {
    let lorem = b"the quick brown fox jumps over the lazy dog ";
    lorem.iter().cycle().take(size).copied().collect()
}

fn bench_pack_unpack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_unpack");

    for &size in &[1024usize, 16 * 1024, packcore::MAX_BLOCK_SIZE] {
        let chunk = synthetic_chunk(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("pack", size), &chunk, |b, chunk| {
            b.iter(|| packcore::pack_to_vec(chunk, false).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("pack_fast", size), &chunk, |b, chunk| {
            b.iter(|| packcore::pack_to_vec(chunk, true).unwrap())
        });

        let packed = packcore::pack_to_vec(&chunk, false).unwrap();
        group.bench_with_input(BenchmarkId::new("unpack", size), &packed, |b, packed| {
            b.iter(|| packcore::unpack_to_vec(packed).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pack_unpack);
criterion_main!(benches);
