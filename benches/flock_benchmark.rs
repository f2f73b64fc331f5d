/*
 * Flock Benchmark
 *
 * Measures one tick of the flock at several sizes, in both update modes,
 * and the collision pass on its own.
 */

use birdflock::population::spawn_flock;
use birdflock::{collision, Bounds, FlockConfig, FlockSimulator, PopulationParams, UpdateMode};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn population(flock_size: usize) -> PopulationParams {
    PopulationParams {
        flock_size,
        ..PopulationParams::default()
    }
}

fn bench_tick(c: &mut Criterion) {
    let bounds = Bounds::centered(1400.0, 800.0);
    let config = FlockConfig::default();

    for mode in [UpdateMode::Sequential, UpdateMode::Synchronous] {
        let mut group = c.benchmark_group(format!("tick_{mode:?}").to_lowercase());

        for num_birds in [80, 200, 500] {
            group.bench_with_input(BenchmarkId::from_parameter(num_birds), &num_birds, |b, &n| {
                let mut rng = StdRng::seed_from_u64(n as u64);
                let mut flock = spawn_flock(&bounds, &population(n), &mut rng);
                let mut simulator = FlockSimulator::with_rng(rng, mode);

                b.iter(|| black_box(simulator.tick(&bounds, &mut flock, &config)));
            });
        }

        group.finish();
    }
}

fn bench_collisions(c: &mut Criterion) {
    let mut group = c.benchmark_group("collisions");

    // A small world keeps many pairs overlapping
    let bounds = Bounds::centered(200.0, 200.0);

    for num_birds in [80, 200, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(num_birds), &num_birds, |b, &n| {
            let mut rng = StdRng::seed_from_u64(n as u64);
            let flock = spawn_flock(&bounds, &population(n), &mut rng);

            b.iter(|| {
                let mut flock = flock.clone();
                black_box(collision::resolve_all(&mut flock))
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_tick, bench_collisions
}

criterion_main!(benches);
