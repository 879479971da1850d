//! Transform benchmarks
//!
//! Run with: cargo bench -p spectral-transform-core --bench transforms

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rustfft::FftPlanner;
use spectral_transform::spectrum::{analytic_signal, resample_real};
use spectral_transform::transform::{arbitrary_transform_in_place, forward_2d, forward_transform};
use spectral_transform::{Complex64, Direction};

fn signal(n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|i| Complex64::new((i as f64 * 0.37).sin(), (i as f64 * 0.11).cos()))
        .collect()
}

fn bench_radix2(c: &mut Criterion) {
    let mut group = c.benchmark_group("radix2");

    for n in [256usize, 1024, 4096, 16384].iter() {
        let input = signal(*n);
        group.throughput(Throughput::Elements(*n as u64));

        group.bench_with_input(BenchmarkId::new("forward", n), n, |b, _| {
            b.iter(|| {
                let mut buf = input.clone();
                forward_transform(black_box(&mut buf)).unwrap();
                buf
            })
        });

        // Planned rustfft as a baseline
        let fft = FftPlanner::<f64>::new().plan_fft_forward(*n);
        group.bench_with_input(BenchmarkId::new("rustfft", n), n, |b, _| {
            b.iter(|| {
                let mut buf = input.clone();
                fft.process(black_box(&mut buf));
                buf
            })
        });
    }

    group.finish();
}

fn bench_bluestein(c: &mut Criterion) {
    let mut group = c.benchmark_group("bluestein");

    for n in [100usize, 1000, 4095, 10007].iter() {
        let input = signal(*n);
        group.throughput(Throughput::Elements(*n as u64));

        group.bench_with_input(BenchmarkId::new("forward", n), n, |b, _| {
            b.iter(|| {
                let mut buf = input.clone();
                arbitrary_transform_in_place(black_box(&mut buf), Direction::Forward).unwrap();
                buf
            })
        });
    }

    group.finish();
}

fn bench_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("square_2d");

    for side in [64usize, 256].iter() {
        let input = signal(side * side);
        group.bench_with_input(BenchmarkId::new("forward", side), side, |b, &side| {
            b.iter(|| {
                let mut buf = input.clone();
                forward_2d(black_box(&mut buf), side).unwrap();
                buf
            })
        });
    }

    group.finish();
}

fn bench_spectral(c: &mut Criterion) {
    let mut group = c.benchmark_group("spectral");
    let real: Vec<f64> = signal(4800).iter().map(|c| c.re).collect();

    group.bench_function("resample_4800_to_4410", |b| {
        b.iter(|| resample_real(black_box(&real), 4410).unwrap())
    });

    group.bench_function("analytic_signal_4800", |b| {
        b.iter(|| analytic_signal(black_box(&real)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_radix2, bench_bluestein, bench_2d, bench_spectral);
criterion_main!(benches);
