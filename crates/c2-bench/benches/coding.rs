//! Encoding benchmarks.
//!
//! Benchmarks the fixed, varint and length-prefixed formats.

use bytes::BytesMut;
use c2_bench::Workload;
use c2_coding::{
    decode_fixed64, encode_fixed64, get_length_prefixed, get_varint64, put_length_prefixed,
    put_varint64,
};
use c2_types::ByteView;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

const SEED: u64 = 301;

// ============================================================================
// Fixed Benchmarks
// ============================================================================

fn bench_fixed64(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed64");
    let values = Workload::new(SEED).varints(1024);
    group.throughput(Throughput::Bytes(8 * values.len() as u64));

    group.bench_function("encode", |b| {
        let mut buf = vec![0u8; 8 * values.len()];
        b.iter(|| {
            for (chunk, &v) in buf.chunks_exact_mut(8).zip(&values) {
                encode_fixed64(chunk, black_box(v));
            }
            black_box(&buf);
        });
    });

    let mut encoded = vec![0u8; 8 * values.len()];
    for (chunk, &v) in encoded.chunks_exact_mut(8).zip(&values) {
        encode_fixed64(chunk, v);
    }
    group.bench_function("decode", |b| {
        b.iter(|| {
            let sum = encoded
                .chunks_exact(8)
                .fold(0u64, |acc, chunk| acc.wrapping_add(decode_fixed64(black_box(chunk))));
            black_box(sum);
        });
    });

    group.finish();
}

// ============================================================================
// Varint Benchmarks
// ============================================================================

fn bench_varint64(c: &mut Criterion) {
    let mut group = c.benchmark_group("varint64");
    let values = Workload::new(SEED).varints(1024);

    let mut encoded = BytesMut::new();
    for &v in &values {
        put_varint64(&mut encoded, v);
    }
    group.throughput(Throughput::Bytes(encoded.len() as u64));

    group.bench_function("put", |b| {
        let mut buf = BytesMut::with_capacity(encoded.len());
        b.iter(|| {
            buf.clear();
            for &v in &values {
                put_varint64(&mut buf, black_box(v));
            }
            black_box(&buf);
        });
    });

    group.bench_function("get", |b| {
        b.iter(|| {
            let mut input = ByteView::from(&encoded[..]);
            let mut sum = 0u64;
            while let Some(v) = get_varint64(black_box(&mut input)) {
                sum = sum.wrapping_add(v);
            }
            black_box(sum);
        });
    });

    group.finish();
}

// ============================================================================
// Length-Prefixed Benchmarks
// ============================================================================

fn bench_length_prefixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("length_prefixed");

    for size in [16, 128, 1024, 16384] {
        let record = Workload::new(SEED).record(size);
        let mut encoded = Vec::new();
        put_length_prefixed(&mut encoded, ByteView::from(&record));
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("put", size), &record, |b, record| {
            let mut buf = Vec::with_capacity(encoded.len());
            b.iter(|| {
                buf.clear();
                put_length_prefixed(&mut buf, black_box(ByteView::from(record)));
                black_box(&buf);
            });
        });

        group.bench_with_input(BenchmarkId::new("get", size), &encoded, |b, encoded| {
            b.iter(|| {
                let mut input = ByteView::from(encoded);
                black_box(get_length_prefixed(black_box(&mut input)));
            });
        });
    }

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    coding_benches,
    bench_fixed64,
    bench_varint64,
    bench_length_prefixed
);

criterion_main!(coding_benches);
