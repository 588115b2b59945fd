//! Criterion micro-benchmarks for single steps across kernel sizes and
//! thread modes.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hrot_bench::random_grid;
use hrot_core::{Neighborhood, Rule};
use hrot_engine::{Parallelism, Stepper};
use hrot_grid::{EdgeBehavior, Grid};

fn rule(range: u32, neighborhood: Neighborhood) -> Rule {
    let max = neighborhood.max_count(range);
    Rule::new(range, 4, neighborhood)
        .unwrap()
        .with_survive(max / 4..=max / 2)
        .with_birth(max / 3..=max / 2)
}

fn bench_step_by_range(c: &mut Criterion) {
    let current = random_grid(256, 256, 0.35, 1).unwrap();
    let mut next = Grid::new(256, 256).unwrap();
    let mut group = c.benchmark_group("step_256x256");
    for nb in [Neighborhood::Moore, Neighborhood::VonNeumann] {
        for range in [1u32, 3, 5, 8] {
            let stepper = Stepper::new(rule(range, nb), EdgeBehavior::Wrap);
            group.bench_with_input(
                BenchmarkId::new(nb.name(), range),
                &range,
                |b, _| {
                    b.iter(|| black_box(stepper.step(&current, &mut next).unwrap()));
                },
            );
        }
    }
    group.finish();
}

fn bench_step_by_parallelism(c: &mut Criterion) {
    let current = random_grid(512, 512, 0.35, 2).unwrap();
    let mut next = Grid::new(512, 512).unwrap();
    let mut group = c.benchmark_group("step_512x512_r2");
    let modes = [
        ("sequential", Parallelism::Sequential),
        ("global", Parallelism::Global),
        ("threads_2", Parallelism::Threads(2)),
    ];
    for (name, mode) in modes {
        let stepper =
            Stepper::with_parallelism(rule(2, Neighborhood::Moore), EdgeBehavior::Wrap, mode)
                .unwrap();
        group.bench_function(name, |b| {
            b.iter(|| black_box(stepper.step(&current, &mut next).unwrap()));
        });
    }
    group.finish();
}

fn bench_edge_behavior(c: &mut Criterion) {
    let current = random_grid(128, 128, 0.35, 3).unwrap();
    let mut next = Grid::new(128, 128).unwrap();
    for edge in [EdgeBehavior::Wrap, EdgeBehavior::Absorb] {
        let stepper = Stepper::new(rule(4, Neighborhood::Moore), edge);
        c.bench_function(&format!("step_128x128_r4_{edge:?}"), |b| {
            b.iter(|| black_box(stepper.step(&current, &mut next).unwrap()));
        });
    }
}

criterion_group!(
    benches,
    bench_step_by_range,
    bench_step_by_parallelism,
    bench_edge_behavior
);
criterion_main!(benches);
