//! Estimator and formatter benchmarks.
//!
//! Run with: `cargo bench --package coatcalc-bench`

use coatcalc_bench::{area_inputs, volume_inputs};
use coatcalc_lib::prelude::*;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn area_benchmark(c: &mut Criterion) {
    let inputs = area_inputs();
    let mut group = c.benchmark_group("area");
    group.throughput(Throughput::Elements(inputs.len() as u64));

    for &policy in RecommendationPolicy::all() {
        let estimator = AreaEstimator::new(Catalog::global(), policy);
        group.bench_with_input(BenchmarkId::new("policy", policy), &inputs, |b, inputs| {
            b.iter(|| {
                for &(area, coats, buffer) in inputs {
                    black_box(estimator.estimate(black_box(area), coats, buffer));
                }
            });
        });
    }

    group.finish();
}

fn volume_benchmark(c: &mut Criterion) {
    let inputs = volume_inputs();
    let estimator = VolumeEstimator::global();
    let mut group = c.benchmark_group("volume");
    group.throughput(Throughput::Elements(
        (inputs.len() * estimator.catalog().len()) as u64,
    ));

    group.bench_function("catalog", |b| {
        b.iter(|| {
            for sku in estimator.catalog() {
                for &(units, coats) in &inputs {
                    black_box(estimator.estimate(sku, black_box(units), coats, BufferPercent::ZERO));
                }
            }
        });
    });

    group.finish();
}

fn format_benchmark(c: &mut Criterion) {
    let estimate = estimate_area(Area::new(100.0), Coats::TWO, BufferPercent::ZERO);
    let mut group = c.benchmark_group("format");

    group.bench_function("text", |b| {
        let formatter = TextFormatter::new();
        b.iter(|| {
            let mut output = Vec::with_capacity(2048);
            formatter.write_area(black_box(&estimate), &mut output).unwrap();
            output
        });
    });

    group.bench_function("json", |b| {
        let formatter = JsonFormatter::new();
        b.iter(|| {
            let mut output = Vec::with_capacity(2048);
            formatter.write_area(black_box(&estimate), &mut output).unwrap();
            output
        });
    });

    group.bench_function("csv", |b| {
        let formatter = CsvFormatter::new();
        b.iter(|| {
            let mut output = Vec::with_capacity(512);
            formatter.write_area(black_box(&estimate), &mut output).unwrap();
            output
        });
    });

    group.finish();
}

criterion_group!(benches, area_benchmark, volume_benchmark, format_benchmark);
criterion_main!(benches);
