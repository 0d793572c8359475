use criterion::{black_box, criterion_group, criterion_main, Criterion};
use driftwatch::data::{Category, Column, Dataset};
use driftwatch::drift::align::align_samples;
use driftwatch::drift::stats::{chi2_goodness_of_fit, ks_2samp};
use driftwatch::{DriftConfig, DriftDetector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

fn churn_dataset(rng: &mut StdRng, n: usize, shift: f64) -> Dataset {
    let credit: Vec<f64> = (0..n).map(|_| rng.gen_range(300.0..850.0) + shift).collect();
    let balance: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..250_000.0)).collect();
    let age: Vec<i64> = (0..n).map(|_| rng.gen_range(18..=92)).collect();
    let products: Vec<i64> = (0..n).map(|_| rng.gen_range(1..=4)).collect();
    let active: Vec<i64> = (0..n).map(|_| rng.gen_range(0..=1)).collect();
    Dataset::from_columns([
        ("CreditScore", Column::from(credit)),
        ("Balance", Column::from(balance)),
        ("Age", Column::from(age)),
        ("NumOfProducts", Column::from(products)),
        ("IsActiveMember", Column::from(active)),
    ])
    .unwrap()
}

pub fn drift_benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1903);
    let reference = churn_dataset(&mut rng, 10_000, 0.0);
    let production = churn_dataset(&mut rng, 10_000, 25.0);

    let a: Vec<f64> = (0..100_000).map(|_| rng.gen_range(0.0..1.0)).collect();
    let b: Vec<f64> = (0..100_000).map(|_| rng.gen_range(0.05..1.05)).collect();
    c.bench_function("ks_2samp 100k", |bench| bench.iter(|| ks_2samp(black_box(&a), black_box(&b))));

    let ca: Vec<Category> = (0..100_000).map(|_| Category::number(rng.gen_range(0..8) as f64)).collect();
    let cb: Vec<Category> = (0..100_000).map(|_| Category::number(rng.gen_range(0..9) as f64)).collect();
    c.bench_function("chi2 100k", |bench| {
        bench.iter(|| {
            let aligned = align_samples(black_box(&ca), black_box(&cb));
            chi2_goodness_of_fit(&aligned, cb.len(), 1e-10)
        })
    });

    let detector = DriftDetector::new(DriftConfig::default().with_all_common(None)).unwrap();
    let mut group = c.benchmark_group("detect");
    group.measurement_time(Duration::from_secs(10));
    group.bench_function("detect 10k rows", |bench| {
        bench.iter(|| detector.detect(black_box(&reference), black_box(&production)))
    });
    group.finish();
}

criterion_group!(benches, drift_benchmarks);
criterion_main!(benches);
