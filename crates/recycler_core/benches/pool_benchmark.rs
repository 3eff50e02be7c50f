//! # Pool Benchmark
//!
//! Per-frame scratch buffers: fresh allocation vs pooled reuse.
//!
//! Run with: cargo bench --package recycler_core --bench pool_benchmark

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use recycler_core::{ObjectPool, SharedPool};

const BUFFER_LEN: usize = 256;

/// Allocate a new buffer for every use (the pattern pools replace).
fn bench_fresh_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("scratch_fresh");

    for per_frame in [1_usize, 16, 256] {
        group.throughput(Throughput::Elements(per_frame as u64));
        group.bench_with_input(BenchmarkId::new("alloc", per_frame), &per_frame, |b, &n| {
            b.iter(|| {
                for i in 0..n {
                    let mut buf: Vec<u32> = Vec::with_capacity(BUFFER_LEN);
                    buf.extend(0..BUFFER_LEN as u32);
                    black_box(&buf);
                    black_box(i);
                }
            });
        });
    }

    group.finish();
}

/// Check out and return a warm buffer.
fn bench_pooled(c: &mut Criterion) {
    let mut group = c.benchmark_group("scratch_pooled");

    for per_frame in [1_usize, 16, 256] {
        let mut pool: ObjectPool<Vec<u32>> = ObjectPool::new().with_reset(Vec::clear);

        group.throughput(Throughput::Elements(per_frame as u64));
        group.bench_with_input(BenchmarkId::new("object_pool", per_frame), &per_frame, |b, &n| {
            b.iter(|| {
                for _ in 0..n {
                    let mut buf = pool.acquire();
                    buf.extend(0..BUFFER_LEN as u32);
                    black_box(&buf);
                    pool.release(buf);
                }
            });
        });
    }

    group.finish();
}

/// Same as `bench_pooled`, paying for the mutex.
fn bench_shared(c: &mut Criterion) {
    let pool: SharedPool<Vec<u32>> =
        SharedPool::from_pool(ObjectPool::new().with_reset(Vec::clear));

    c.bench_function("scratch_shared_checkout", |b| {
        b.iter(|| {
            let mut buf = pool.checkout();
            buf.extend(0..BUFFER_LEN as u32);
            black_box(&*buf);
        });
    });
}

criterion_group!(benches, bench_fresh_allocation, bench_pooled, bench_shared);
criterion_main!(benches);
