/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct: everything the control
 * panel can change while the window is open. It wraps the flock configuration
 * handed to every tick together with the app-level switches, and provides
 * snapshot-based change detection so edits are applied between ticks.
 */

use crate::config::{FlockConfig, PopulationParams, Settings};
use crate::physics::UpdateMode;

pub struct SimulationParams {
    pub flock: FlockConfig,
    pub population: PopulationParams,
    pub update_mode: UpdateMode,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
struct ParamSnapshot {
    flock: FlockConfig,
    flock_size: usize,
    update_mode: UpdateMode,
    show_debug: bool,
    pause_simulation: bool,
}

/// What changed since the last [`SimulationParams::take_snapshot`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParamChanges {
    pub flock_config: bool,
    pub flock_size: bool,
    pub update_mode: bool,
    pub display: bool,
}

impl ParamChanges {
    pub fn any(&self) -> bool {
        self.flock_config || self.flock_size || self.update_mode || self.display
    }
}

impl SimulationParams {
    pub fn new(settings: &Settings, update_mode: UpdateMode) -> Self {
        Self {
            flock: settings.flock.clone(),
            population: settings.population.clone(),
            update_mode,
            show_debug: settings.window.show_debug,
            pause_simulation: false,
            previous_values: None,
        }
    }

    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            flock: self.flock.clone(),
            flock_size: self.population.flock_size,
            update_mode: self.update_mode,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
        });
    }

    // Without a snapshot nothing counts as changed
    pub fn detect_changes(&self) -> ParamChanges {
        let Some(prev) = &self.previous_values else {
            return ParamChanges::default();
        };

        ParamChanges {
            flock_config: self.flock != prev.flock,
            flock_size: self.population.flock_size != prev.flock_size,
            update_mode: self.update_mode != prev.update_mode,
            display: self.show_debug != prev.show_debug
                || self.pause_simulation != prev.pause_simulation,
        }
    }

    // Slider ranges
    pub fn flock_size_range() -> std::ops::RangeInclusive<usize> {
        0..=1000
    }

    pub fn max_speed_range() -> std::ops::RangeInclusive<f32> {
        0.05..=10.0
    }

    pub fn fraction_range() -> std::ops::RangeInclusive<f32> {
        0.0..=1.0
    }

    pub fn cohesion_range() -> std::ops::RangeInclusive<f32> {
        0.0..=1.0
    }

    pub fn strength_range() -> std::ops::RangeInclusive<f32> {
        0.0..=200.0
    }

    pub fn radius_range() -> std::ops::RangeInclusive<f32> {
        0.0..=300.0
    }

    pub fn randomness_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.5
    }
}
