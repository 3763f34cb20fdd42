//! Criterion benchmarks for the four pricing paths.
//!
//! The closed form is constant time; the lattice grows quadratically with
//! expiry, so it is measured across several maturities.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::instruments::{ExerciseStyle, MarketParameters, OptionKind, VanillaOption};
use pricer_models::pricing::{price_batch, PricerSettings, PricingMethod};

fn params(expiry: f64) -> MarketParameters {
    MarketParameters::new(100.0, 100.0, expiry, 0.05, 0.02, 0.2).unwrap()
}

/// Benchmark the Black-Scholes closed form.
fn bench_european(c: &mut Criterion) {
    let mut group = c.benchmark_group("european");
    let p = params(1.0);
    let settings = PricerSettings::default();

    for method in [PricingMethod::EuropeanCall, PricingMethod::EuropeanPut] {
        group.bench_function(method.label(), |b| {
            b.iter(|| method.evaluate(black_box(&p), &settings).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the binomial lattice across expiries.
fn bench_american(c: &mut Criterion) {
    let mut group = c.benchmark_group("american");
    let settings = PricerSettings::default();

    for expiry in [0.25, 1.0, 2.0] {
        let p = params(expiry);
        for method in [PricingMethod::AmericanCall, PricingMethod::AmericanPut] {
            group.bench_with_input(BenchmarkId::new(method.label(), expiry), &p, |b, p| {
                b.iter(|| method.evaluate(black_box(p), &settings).unwrap());
            });
        }
    }

    group.finish();
}

/// Benchmark parallel pricing of a mixed book.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let settings = PricerSettings::default();

    for size in [16, 128] {
        let book: Vec<VanillaOption> = (0..size)
            .map(|i| {
                let style = if i % 2 == 0 {
                    ExerciseStyle::European
                } else {
                    ExerciseStyle::American
                };
                let p = params(1.0).with_spot(80.0 + (i % 40) as f64).unwrap();
                VanillaOption::new(style, OptionKind::Put, p)
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("mixed_puts", size), &book, |b, book| {
            b.iter(|| price_batch(black_box(book), &settings));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_european, bench_american, bench_batch);
criterion_main!(benches);
