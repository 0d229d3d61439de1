//! Criterion benchmarks for the multiplication backends.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use fibmark_bignum::{Dft, Fft, Karatsuba, Multiplier, Nat, Schoolbook};

fn operand(len: usize, seed: u64) -> Nat<u8> {
    Nat::from_digits(
        (0..len)
            .map(|i| (seed.wrapping_mul(i as u64).wrapping_add(i as u64 >> 5)) as u8)
            .collect(),
    )
}

fn bench_backends(c: &mut Criterion) {
    let sizes = [64usize, 256, 1024];

    let mut group = c.benchmark_group("Schoolbook");
    for &len in &sizes {
        let a = operand(len, 0x9E37_79B9);
        let b = operand(len, 0x85EB_CA77);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
            let m = Schoolbook::new();
            bench.iter(|| m.multiply(&a, &b));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("Karatsuba");
    for &len in &sizes {
        let a = operand(len, 0x9E37_79B9);
        let b = operand(len, 0x85EB_CA77);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
            let m = Karatsuba::new();
            bench.iter(|| m.multiply(&a, &b));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("Dft");
    for &len in &[64usize, 256] {
        let a = operand(len, 0x9E37_79B9);
        let b = operand(len, 0x85EB_CA77);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
            let m = Dft::new();
            bench.iter(|| m.multiply(&a, &b));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("Fft");
    for &len in &sizes {
        let a = operand(len, 0x9E37_79B9);
        let b = operand(len, 0x85EB_CA77);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
            let m = Fft::new();
            bench.iter(|| m.multiply(&a, &b));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_backends);
criterion_main!(benches);
