/*
 * Physics Module
 *
 * This module advances the flock by one tick. A tick runs, in order:
 * - the separation, cohesion and alignment passes over the whole flock
 * - noise (or a plain speed clamp) for every bird
 * - integration, a second speed clamp and reflection off the bounds
 * - pairwise elastic collisions
 * - a final clamp of position and speed, since collisions can break both
 *
 * Two update modes exist. `Sequential` mutates the flock in place while a rule
 * pass runs, so bird i reads the already updated velocities of birds 0..i.
 * `Synchronous` double-buffers each rule pass: every bird reads the flock as
 * it was when the pass started, and the new velocities are computed in
 * parallel and committed together. The two modes give different numbers.
 */

use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bird::Bird;
use crate::bounds::Bounds;
use crate::collision;
use crate::config::FlockConfig;
use crate::steering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMode {
    /// Rules read the live, partially updated flock (index order matters).
    #[default]
    Sequential,
    /// Rules read a snapshot taken at the start of each pass.
    Synchronous,
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub collisions: usize,
    pub reflections: usize,
}

type Rule = fn(usize, &[Bird], &FlockConfig) -> Vec2;

const RULES: [Rule; 3] = [steering::separation, steering::cohesion, steering::alignment];

/// Drives ticks over a flock it does not own.
pub struct FlockSimulator<R = StdRng> {
    rng: R,
    mode: UpdateMode,
}

impl FlockSimulator<StdRng> {
    pub fn new(mode: UpdateMode) -> Self {
        Self::with_rng(StdRng::from_entropy(), mode)
    }
}

impl<R: Rng> FlockSimulator<R> {
    pub fn with_rng(rng: R, mode: UpdateMode) -> Self {
        Self { rng, mode }
    }

    pub fn mode(&self) -> UpdateMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: UpdateMode) {
        if mode != self.mode {
            log::debug!("update mode changed from {:?} to {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// Advance `flock` by one tick inside `bounds`.
    ///
    /// At return every bird is no faster than `config.max_speed` and lies
    /// inside `bounds`. An empty flock is a no-op.
    pub fn tick(&mut self, bounds: &Bounds, flock: &mut [Bird], config: &FlockConfig) -> TickReport {
        for rule in RULES {
            match self.mode {
                UpdateMode::Sequential => apply_live(rule, flock, config),
                UpdateMode::Synchronous => apply_buffered(rule, flock, config),
            }
        }

        for bird in flock.iter_mut() {
            bird.velocity = if config.add_noise {
                steering::noise(bird.velocity, config, &mut self.rng)
            } else {
                steering::clamp_speed(bird.velocity, config.max_speed)
            };
        }

        let mut report = TickReport::default();

        for bird in flock.iter_mut() {
            bird.advance();
            bird.velocity = steering::clamp_speed(bird.velocity, config.max_speed);
            if bird.bounce_off_edges(bounds).any() {
                report.reflections += 1;
            }
        }

        report.collisions = collision::resolve_all(flock);

        // Collisions may push a bird over an edge or past the speed cap
        for bird in flock.iter_mut() {
            bird.position = bounds.clamp(bird.position);
            bird.velocity = steering::clamp_speed(bird.velocity, config.max_speed);
        }

        log::trace!("tick over {} birds: {:?}", flock.len(), report);
        report
    }
}

// Write each new velocity back before the next bird reads the flock
fn apply_live(rule: Rule, flock: &mut [Bird], config: &FlockConfig) {
    for i in 0..flock.len() {
        let velocity = rule(i, flock, config);
        flock[i].velocity = velocity;
    }
}

// Compute every new velocity from the same view, then commit
fn apply_buffered(rule: Rule, flock: &mut [Bird], config: &FlockConfig) {
    let view: &[Bird] = flock;
    let velocities: Vec<Vec2> = (0..view.len())
        .into_par_iter()
        .map(|i| rule(i, view, config))
        .collect();

    for (bird, velocity) in flock.iter_mut().zip(velocities) {
        bird.velocity = velocity;
    }
}
