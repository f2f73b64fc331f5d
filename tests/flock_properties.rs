use birdflock::population::spawn_flock;
use birdflock::{Bird, Bounds, FlockConfig, FlockSimulator, PopulationParams, UpdateMode};
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn dense_population(flock_size: usize) -> PopulationParams {
    PopulationParams {
        flock_size,
        avg_speed: 3.0,
        ..PopulationParams::default()
    }
}

fn assert_invariants(flock: &[Bird], bounds: &Bounds, config: &FlockConfig, tick: usize) {
    for (i, bird) in flock.iter().enumerate() {
        assert!(
            bird.speed() <= config.max_speed + 1e-4,
            "tick {tick}: bird {i} too fast ({})",
            bird.speed()
        );
        assert!(
            bounds.contains(bird.position),
            "tick {tick}: bird {i} outside bounds at {:?}",
            bird.position
        );
    }
}

fn run_checked(mode: UpdateMode, config: FlockConfig, seed: u64) {
    let bounds = Bounds::centered(300.0, 200.0);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut flock = spawn_flock(&bounds, &dense_population(60), &mut rng);
    let mut simulator = FlockSimulator::with_rng(StdRng::seed_from_u64(seed + 1), mode);

    for tick in 0..500 {
        simulator.tick(&bounds, &mut flock, &config);
        assert_invariants(&flock, &bounds, &config, tick);
    }
}

#[test]
fn sequential_flock_stays_fast_bounded_and_inside() {
    run_checked(UpdateMode::Sequential, FlockConfig::default(), 10);
}

#[test]
fn synchronous_flock_stays_fast_bounded_and_inside() {
    run_checked(UpdateMode::Synchronous, FlockConfig::default(), 20);
}

#[test]
fn invariants_hold_without_noise_and_with_strong_rules() {
    let config = FlockConfig {
        add_noise: false,
        max_speed: 4.0,
        cohesion_strength: 0.5,
        separation_strength: 150.0,
        max_separation_force: 200.0,
        ..FlockConfig::default()
    };
    run_checked(UpdateMode::Sequential, config, 30);
}

#[test]
fn shrinking_bounds_pull_flock_inside() {
    let config = FlockConfig::default();
    let mut rng = StdRng::seed_from_u64(40);
    let mut flock = spawn_flock(&Bounds::centered(1400.0, 800.0), &dense_population(40), &mut rng);
    let mut simulator = FlockSimulator::with_rng(StdRng::seed_from_u64(41), UpdateMode::Sequential);

    // A window resize hands the next tick smaller bounds
    let small = Bounds::centered(400.0, 300.0);
    simulator.tick(&small, &mut flock, &config);

    assert_invariants(&flock, &small, &config, 0);
}

#[test]
fn modes_diverge_on_same_input() {
    let config = FlockConfig {
        add_noise: false,
        ..FlockConfig::default()
    };
    let bounds = Bounds::centered(600.0, 600.0);
    let mut rng = StdRng::seed_from_u64(50);
    let flock = spawn_flock(&bounds, &dense_population(20), &mut rng);

    let mut live = flock.clone();
    FlockSimulator::with_rng(StdRng::seed_from_u64(0), UpdateMode::Sequential)
        .tick(&bounds, &mut live, &config);

    let mut buffered = flock;
    FlockSimulator::with_rng(StdRng::seed_from_u64(0), UpdateMode::Synchronous)
        .tick(&bounds, &mut buffered, &config);

    assert!(live.iter().zip(&buffered).any(|(a, b)| a.velocity != b.velocity));
}

#[test]
fn sequential_tick_is_repeatable_without_noise() {
    let config = FlockConfig {
        add_noise: false,
        ..FlockConfig::default()
    };
    let bounds = Bounds::centered(600.0, 600.0);
    let mut rng = StdRng::seed_from_u64(60);
    let flock = spawn_flock(&bounds, &dense_population(25), &mut rng);

    let mut first = flock.clone();
    let mut second = flock;
    for _ in 0..20 {
        FlockSimulator::with_rng(StdRng::seed_from_u64(1), UpdateMode::Sequential)
            .tick(&bounds, &mut first, &config);
        FlockSimulator::with_rng(StdRng::seed_from_u64(2), UpdateMode::Sequential)
            .tick(&bounds, &mut second, &config);
    }

    assert_eq!(first, second);
}

#[test]
fn lone_bird_only_drifts_and_bounces() {
    let config = FlockConfig {
        add_noise: false,
        max_speed: 2.0,
        ..FlockConfig::default()
    };
    let bounds = Bounds::new(vec2(0.0, 0.0), vec2(10.0, 10.0));
    let mut flock = vec![Bird::new(vec2(9.0, 5.0), vec2(1.5, 0.0), 20.0)];
    let mut simulator = FlockSimulator::with_rng(StdRng::seed_from_u64(3), UpdateMode::Sequential);

    simulator.tick(&bounds, &mut flock, &config);

    assert!((flock[0].velocity - vec2(-1.5, 0.0)).length() < 1e-6);
    assert!((flock[0].position - vec2(10.0 - 0.015, 5.0)).length() < 1e-5);
}
