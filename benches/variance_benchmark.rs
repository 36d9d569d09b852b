//! Benchmark of the variance scan and SVG rendering
//!
//! Run with: cargo bench --bench variance_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use polars::prelude::*;
use rand::prelude::*;
use rand::SeedableRng;

use varprune::pipeline::filter_constant_columns;
use varprune::plot::{plot_relevant_columns, PlotOptions};

/// Generate synthetic data where every fourth column is constant and
/// every fourth is near-constant
fn generate_test_dataframe(n_rows: usize, n_features: usize, seed: u64) -> DataFrame {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let mut columns: Vec<Column> = Vec::with_capacity(n_features + 1);
    columns.push(Column::new(
        "index".into(),
        (0..n_rows).map(|i| i as f64).collect::<Vec<f64>>(),
    ));

    for i in 0..n_features {
        let values: Vec<f64> = match i % 4 {
            0 => vec![7.0; n_rows],
            1 => (0..n_rows).map(|_| 1.0 + rng.gen::<f64>() * 0.01).collect(),
            2 => (0..n_rows).map(|_| rng.gen::<f64>() * 100.0).collect(),
            _ => (0..n_rows)
                .map(|_| {
                    if rng.gen::<bool>() {
                        rng.gen::<f64>() * 30.0
                    } else {
                        70.0 + rng.gen::<f64>() * 30.0
                    }
                })
                .collect(),
        };
        columns.push(Column::new(format!("feature_{}", i).into(), values));
    }

    DataFrame::new(columns).expect("Failed to create DataFrame")
}

/// Benchmark the variance filter for varying column counts
fn benchmark_filter_by_columns(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by_columns");
    group.sample_size(30);

    let n_rows = 10_000;
    for n_cols in [10, 50, 200, 500] {
        let df = generate_test_dataframe(n_rows, n_cols, 42);
        group.throughput(Throughput::Elements((n_rows * n_cols) as u64));

        group.bench_with_input(BenchmarkId::new("filter", n_cols), &df, |b, df| {
            b.iter(|| {
                let _ = filter_constant_columns(black_box(df), black_box(&["index"]), 0.01);
            });
        });
    }

    group.finish();
}

/// Benchmark the variance filter for varying row counts
fn benchmark_filter_by_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by_rows");
    group.sample_size(20);

    let n_cols = 50;
    for n_rows in [1_000, 10_000, 100_000] {
        let df = generate_test_dataframe(n_rows, n_cols, 42);
        group.throughput(Throughput::Elements(n_rows as u64));

        group.bench_with_input(BenchmarkId::new("filter", n_rows), &df, |b, df| {
            b.iter(|| {
                let _ = filter_constant_columns(black_box(df), black_box(&["index"]), 0.01);
            });
        });
    }

    group.finish();
}

/// Benchmark building and serializing a chart
fn benchmark_plot_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("plot_render");
    group.sample_size(20);

    for n_rows in [1_000, 10_000] {
        let df = generate_test_dataframe(n_rows, 12, 7);

        group.bench_with_input(BenchmarkId::new("svg", n_rows), &df, |b, df| {
            b.iter(|| {
                let outcome =
                    plot_relevant_columns(black_box(df), "index", &PlotOptions::default())
                        .expect("plot");
                black_box(outcome.figure.to_svg());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_filter_by_columns,
    benchmark_filter_by_rows,
    benchmark_plot_render,
);
criterion_main!(benches);
