//! Decomposition and stacking benchmarks.
//!
//! Run with: cargo bench -p contrib-analysis --bench decompose_bench

use contrib_analysis::decomposition::decompose;
use contrib_analysis::stacking::StackBuilder;
use contrib_core::PeriodTable;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// Deterministic table with `periods` rows and `categories` columns.
fn make_table(periods: usize, categories: usize) -> PeriodTable {
    let rows = (0..periods)
        .map(|p| {
            (0..categories)
                .map(|c| 100.0 + ((p * 31 + c * 17) % 97) as f64)
                .collect()
        })
        .collect();
    PeriodTable::new(
        (0..periods).map(|p| p.to_string()),
        (0..categories).map(|c| format!("c{c}")),
        rows,
    )
    .unwrap()
}

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose");
    for periods in [100, 1_000, 10_000] {
        let table = make_table(periods, 20);
        group.bench_with_input(BenchmarkId::from_parameter(periods), &table, |b, t| {
            b.iter(|| decompose(t).unwrap())
        });
    }
    group.finish();
}

fn bench_stacking(c: &mut Criterion) {
    let mut group = c.benchmark_group("stacking");
    let contributions = decompose(&make_table(20_000, 20)).unwrap().contributions;
    group.bench_function("sequential", |b| {
        let builder = StackBuilder::new().with_parallel_threshold(usize::MAX);
        b.iter(|| builder.build(&contributions).unwrap())
    });
    group.bench_function("parallel", |b| {
        let builder = StackBuilder::new().with_parallel_threshold(1);
        b.iter(|| builder.build(&contributions).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_decompose, bench_stacking);
criterion_main!(benches);
