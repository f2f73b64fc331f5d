/*
 * Steering Module
 *
 * The three flocking rules plus noise and the speed clamp.
 * 1. Separation: Push away from neighbors inside the desired separation
 * 2. Cohesion: Pull toward the centroid of the rest of the flock
 * 3. Alignment: Rotate toward the mean heading of the rest of the flock
 *
 * Every rule returns the focal bird's *new* velocity rather than a force.
 * The caller writes it back before moving to the next bird, so later birds
 * see the velocities already updated in the same pass.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::bird::Bird;
use crate::config::FlockConfig;

/// New velocity of `flock[index]` after repulsion from neighbors closer than
/// `desired_separation`. Coincident birds are ignored.
pub fn separation(index: usize, flock: &[Bird], config: &FlockConfig) -> Vec2 {
    let bird = &flock[index];
    let radius_sq = config.desired_separation * config.desired_separation;

    let mut steer = Vec2::ZERO;
    let mut count = 0;

    for (i, other) in flock.iter().enumerate() {
        if i == index {
            continue;
        }

        let diff = bird.position - other.position;
        let dist_sq = diff.length_squared();

        // Weighting by 1/d^2 of the raw offset gives a 1/d magnitude
        if dist_sq > 0.0 && dist_sq < radius_sq {
            steer += diff / dist_sq;
            count += 1;
        }
    }

    if count == 0 {
        return bird.velocity;
    }

    steer /= count as f32;

    let len = steer.length();
    if len > 0.0 {
        let magnitude = (config.separation_strength * len).min(config.max_separation_force);
        bird.velocity + steer / len * magnitude
    } else {
        bird.velocity
    }
}

/// New velocity of `flock[index]` after a fixed-size pull toward the centroid
/// of every other bird. The whole flock counts, not only neighbors.
pub fn cohesion(index: usize, flock: &[Bird], config: &FlockConfig) -> Vec2 {
    let bird = &flock[index];

    let mut center = Vec2::ZERO;
    let mut count = 0;

    for (i, other) in flock.iter().enumerate() {
        if i != index {
            center += other.position;
            count += 1;
        }
    }

    if count == 0 {
        return bird.velocity;
    }

    center /= count as f32;

    let to_center = center - bird.position;
    let distance = to_center.length();
    if distance > 0.0 {
        bird.velocity + to_center / distance * config.cohesion_strength
    } else {
        bird.velocity
    }
}

/// New velocity of `flock[index]` with its heading turned a fraction
/// `alignment_strength` toward the arithmetic mean of the other headings.
///
/// This is an angular interpolation: speed is preserved exactly. The mean is
/// taken over raw `atan2` angles, not a circular mean.
pub fn alignment(index: usize, flock: &[Bird], config: &FlockConfig) -> Vec2 {
    let bird = &flock[index];

    let mut angle_sum = 0.0;
    let mut count = 0;

    for (i, other) in flock.iter().enumerate() {
        if i != index {
            angle_sum += other.heading();
            count += 1;
        }
    }

    if count == 0 {
        return bird.velocity;
    }

    let avg_angle = angle_sum / count as f32;
    let heading = bird.heading();
    let new_angle = heading + (avg_angle - heading) * config.alignment_strength;

    vec2(new_angle.cos(), new_angle.sin()) * bird.speed()
}

/// Add uniform noise in `[-randomness, randomness]` to each axis, then clamp
/// to `max_speed`.
pub fn noise<R: Rng>(velocity: Vec2, config: &FlockConfig, rng: &mut R) -> Vec2 {
    let mut velocity = velocity;
    if config.randomness > 0.0 {
        velocity.x += rng.gen_range(-config.randomness..=config.randomness);
        velocity.y += rng.gen_range(-config.randomness..=config.randomness);
    }
    clamp_speed(velocity, config.max_speed)
}

/// Rescale `velocity` to `max_speed` if it is faster, keeping its direction.
pub fn clamp_speed(velocity: Vec2, max_speed: f32) -> Vec2 {
    let speed = velocity.length();
    if speed > max_speed {
        velocity / speed * max_speed
    } else {
        velocity
    }
}
