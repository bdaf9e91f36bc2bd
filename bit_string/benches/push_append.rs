// benches/push_append.rs

use bit_string::BitString;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn random_bits(size: usize, seed: u64) -> BitString {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random::<bool>()).collect()
}

fn bench_push(c: &mut Criterion) {
    let sizes = vec![64, 1_000, 100_000];

    let mut group = c.benchmark_group("push");
    for size in sizes {
        let source: Vec<bool> = random_bits(size, 7).iter().collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut bits = BitString::new();
                for &bit in &source {
                    bits.push(black_box(bit));
                }
                bits
            });
        });
    }
    group.finish();
}

fn bench_append(c: &mut Criterion) {
    let sizes = vec![64, 1_000, 100_000];

    let mut group = c.benchmark_group("append");
    for size in sizes {
        let tail = random_bits(size, 11);
        let aligned = random_bits(64, 13);
        let misaligned = random_bits(61, 17);

        group.bench_with_input(BenchmarkId::new("aligned", size), &size, |b, _| {
            b.iter(|| {
                let mut bits = aligned.clone();
                bits.append(black_box(&tail));
                bits
            });
        });

        group.bench_with_input(BenchmarkId::new("misaligned", size), &size, |b, _| {
            b.iter(|| {
                let mut bits = misaligned.clone();
                bits.append(black_box(&tail));
                bits
            });
        });
    }
    group.finish();
}

fn bench_append_uint(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(23);
    let values: Vec<(u64, u32)> = (0..1_000)
        .map(|_| (rng.random::<u64>(), rng.random_range(1..=64)))
        .collect();

    c.bench_function("append_uint/1000", |b| {
        b.iter(|| {
            let mut bits = BitString::new();
            for &(value, width) in &values {
                bits.append_uint(value, width).unwrap();
            }
            bits
        });
    });
}

fn bench_iterate(c: &mut Criterion) {
    let sizes = vec![1_000, 100_000];

    let mut group = c.benchmark_group("iterate");
    for size in sizes {
        let bits = random_bits(size, 29);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| bits.iter().filter(|&bit| black_box(bit)).count());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_push,
    bench_append,
    bench_append_uint,
    bench_iterate
);
criterion_main!(benches);
