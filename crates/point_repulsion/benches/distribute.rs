mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use point_repulsion::distribute::relax::{relax_step, ForceParams};
use point_repulsion::prelude::{DistributionConfig, PointDistributor};

const POINT_COUNTS: [usize; 4] = [64, 256, 1024, 2048];

fn relax_step_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("distribute/relax_step");
    let params = ForceParams {
        spread: 0.5,
        damping: 0.5,
        radius: 4.0,
    };

    for &count in &POINT_COUNTS {
        let current = common::random_points(count, 64.0, 0xA11CE ^ count as u64);
        let mut next = vec![DVec2::ZERO; count];
        group.throughput(common::elements_throughput(count * count));

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                relax_step(black_box(&current), &mut next, params);
                black_box(next[0]);
            });
        });
    }

    group.finish();
}

fn run_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("distribute/run");

    for keep_within_bounds in [false, true] {
        let config = DistributionConfig::new(0.5, 0.5, 4.0)
            .with_max_steps(10)
            .with_max_iterations(2)
            .with_keep_within_bounds(keep_within_bounds);
        let distributor = PointDistributor::new(config);
        let points = common::random_points(256, 32.0, 0xC0FFEE);
        let workload = distributor.workload(points.len());
        group.throughput(common::elements_throughput(workload.operations as usize));

        group.bench_with_input(
            BenchmarkId::new("keep_within_bounds", keep_within_bounds),
            &keep_within_bounds,
            |b, _| {
                b.iter(|| {
                    let out = distributor.distribute(black_box(&points)).expect("run");
                    black_box(out.len());
                });
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = relax_step_benches, run_benches
}
criterion_main!(benches);
