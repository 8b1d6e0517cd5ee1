//! Benchmarks for fxbench storage backends
//!
//! Compares the three file-access strategies on write, sequential read,
//! and random read over the same seeded record set.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fxbench::backend::BackendKind;
use fxbench::record::{RateGenerator, RECORD_SIZE};

const RECORD_COUNT: usize = 1_000;

fn bench_write(c: &mut Criterion) {
    let records = RateGenerator::new(42).generate(RECORD_COUNT);

    let mut group = c.benchmark_group("write");
    group.throughput(Throughput::Bytes((RECORD_COUNT * RECORD_SIZE) as u64));

    for kind in BackendKind::ALL {
        let backend = kind.create();
        group.bench_with_input(
            BenchmarkId::new(backend.name(), RECORD_COUNT),
            &records,
            |b, records| {
                let tmp = tempfile::tempdir().expect("tempdir");
                let path = tmp.path().join("bench.dat");
                b.iter(|| backend.write_records(records, &path).expect("write"));
            },
        );
    }

    group.finish();
}

fn bench_sequential_read(c: &mut Criterion) {
    let records = RateGenerator::new(42).generate(RECORD_COUNT);

    let mut group = c.benchmark_group("sequential_read");
    group.throughput(Throughput::Bytes((RECORD_COUNT * RECORD_SIZE) as u64));

    for kind in BackendKind::ALL {
        let backend = kind.create();
        group.bench_with_input(
            BenchmarkId::new(backend.name(), RECORD_COUNT),
            &records,
            |b, records| {
                let tmp = tempfile::tempdir().expect("tempdir");
                let path = tmp.path().join("bench.dat");
                backend.write_records(records, &path).expect("setup write");
                b.iter(|| backend.read_sequential(&path).expect("read"));
            },
        );
    }

    group.finish();
}

fn bench_random_read(c: &mut Criterion) {
    let records = RateGenerator::new(42).generate(RECORD_COUNT);

    let mut group = c.benchmark_group("random_read");

    for kind in BackendKind::ALL {
        let backend = kind.create();
        group.bench_with_input(
            BenchmarkId::new(backend.name(), RECORD_COUNT),
            &records,
            |b, records| {
                let tmp = tempfile::tempdir().expect("tempdir");
                let path = tmp.path().join("bench.dat");
                backend.write_records(records, &path).expect("setup write");

                // Deterministic stride through the file, avoiding RNG
                // cost inside the measured loop
                let mut index = 0u64;
                b.iter(|| {
                    let record = backend.read_random(&path, index).expect("read");
                    index = (index + 7919) % RECORD_COUNT as u64;
                    record
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_write,
    bench_sequential_read,
    bench_random_read
);
criterion_main!(benches);
