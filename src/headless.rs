/*
 * Headless Module
 *
 * Runs the flock without a window: spawn the population in a rectangle the
 * size of the configured window, tick it a fixed number of times and report.
 */

use rand::Rng;

use crate::bounds::Bounds;
use crate::config::Settings;
use crate::physics::{FlockSimulator, UpdateMode};
use crate::population;

/// Summary of a headless run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub birds: usize,
    pub mean_speed: f32,
    pub top_speed: f32,
    pub total_collisions: u64,
    pub total_reflections: u64,
    /// Whether every bird ended inside the bounds.
    pub contained: bool,
}

pub fn run<R: Rng>(
    settings: &Settings,
    simulator: &mut FlockSimulator<R>,
    rng: &mut impl Rng,
    ticks: u64,
) -> RunSummary {
    let bounds = Bounds::centered(settings.window.width as f32, settings.window.height as f32);
    let mut flock = population::spawn_flock(&bounds, &settings.population, rng);
    log::info!(
        "running {} {:?} ticks over {} birds in {:?}",
        ticks,
        simulator.mode(),
        flock.len(),
        bounds
    );

    let mut total_collisions = 0;
    let mut total_reflections = 0;
    for _ in 0..ticks {
        let report = simulator.tick(&bounds, &mut flock, &settings.flock);
        total_collisions += report.collisions as u64;
        total_reflections += report.reflections as u64;
    }

    let speeds: Vec<f32> = flock.iter().map(|bird| bird.speed()).collect();
    let mean_speed = if speeds.is_empty() {
        0.0
    } else {
        speeds.iter().sum::<f32>() / speeds.len() as f32
    };

    RunSummary {
        ticks,
        birds: flock.len(),
        mean_speed,
        top_speed: speeds.iter().copied().fold(0.0, f32::max),
        total_collisions,
        total_reflections,
        contained: flock.iter().all(|bird| bounds.contains(bird.position)),
    }
}

/// Headless run with entropy-seeded randomness.
pub fn run_default(settings: &Settings, update_mode: UpdateMode, ticks: u64) -> RunSummary {
    let mut simulator = FlockSimulator::new(update_mode);
    run(settings, &mut simulator, &mut rand::thread_rng(), ticks)
}
