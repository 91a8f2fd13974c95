//! Criterion benchmarks for wealthwise_core projection
//!
//! Run with: cargo bench -p wealthwise_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use wealthwise_core::model::ReturnAssumptions;
use wealthwise_core::projection::{GoalProjection, project_seeded};

fn moderate_goal(years: f64) -> GoalProjection {
    GoalProjection {
        current_amount: 127_543.82,
        target_amount: 1_500_000.0,
        monthly_contribution: 1_500.0,
        years_until_target: years,
        assumptions: ReturnAssumptions::new(0.07, 0.12),
    }
}

fn bench_projection_horizons(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection_horizon");
    for years in [5.0, 15.0, 30.0] {
        let request = moderate_goal(years);
        group.bench_with_input(
            BenchmarkId::from_parameter(years as u32),
            &request,
            |b, req| b.iter(|| project_seeded(black_box(req), 10_000, 42)),
        );
    }
    group.finish();
}

fn bench_projection_sample_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection_samples");
    let request = moderate_goal(30.0);
    for samples in [1_000, 10_000, 50_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(samples),
            &samples,
            |b, &samples| b.iter(|| project_seeded(black_box(&request), samples, 42)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_projection_horizons, bench_projection_sample_counts);
criterion_main!(benches);
