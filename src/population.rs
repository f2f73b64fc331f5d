/*
 * Population Module
 *
 * Spawns the initial flock: uniform positions inside the bounds, a uniform
 * random heading at a common speed, and sizes jittered around an average.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::bird::Bird;
use crate::bounds::Bounds;
use crate::config::PopulationParams;

pub fn spawn_bird<R: Rng>(bounds: &Bounds, params: &PopulationParams, rng: &mut R) -> Bird {
    let min = bounds.min();
    let max = bounds.max();

    let position = vec2(sample(rng, min.x, max.x), sample(rng, min.y, max.y));
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    let velocity = vec2(angle.cos(), angle.sin()) * params.avg_speed;
    let size = sample(
        rng,
        params.avg_size - params.size_jitter,
        params.avg_size + params.size_jitter,
    );

    Bird::new(position, velocity, size)
}

pub fn spawn_flock<R: Rng>(bounds: &Bounds, params: &PopulationParams, rng: &mut R) -> Vec<Bird> {
    (0..params.flock_size)
        .map(|_| spawn_bird(bounds, params, rng))
        .collect()
}

// Grow or shrink an existing flock to `params.flock_size`, keeping the birds already there
pub fn resize_flock<R: Rng>(
    flock: &mut Vec<Bird>,
    bounds: &Bounds,
    params: &PopulationParams,
    rng: &mut R,
) {
    flock.resize_with(params.flock_size, || spawn_bird(bounds, params, rng));
}

// Uniform in [low, high); degenerate ranges collapse to `low`
fn sample<R: Rng>(rng: &mut R, low: f32, high: f32) -> f32 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}
