/*
 * Application Module
 *
 * This module defines the nannou model and update loop of the windowed
 * simulation. The window rectangle is the flock's bounds, so resizing the
 * window resizes the world on the next tick.
 *
 * Physics runs on a fixed timestep: each frame adds its elapsed time to an
 * accumulator and runs one tick per step, up to a per-frame cap. Ticks beyond
 * the cap are dropped rather than queued.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use crate::bird::Bird;
use crate::bounds::Bounds;
use crate::config::Settings;
use crate::debug::DebugInfo;
use crate::input;
use crate::params::SimulationParams;
use crate::physics::{FlockSimulator, UpdateMode};
use crate::population;
use crate::renderer;
use crate::ui::{self, UiResponse};

// nannou's model function takes no arguments, so startup settings are parked here
static STARTUP: OnceLock<(Settings, UpdateMode)> = OnceLock::new();

pub struct Model {
    pub flock: Vec<Bird>,
    pub params: SimulationParams,
    pub simulator: FlockSimulator,
    pub rng: StdRng,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub bounds: Bounds,
    pub reset_requested: bool,
    // Fixed timestep physics variables
    pub physics_accumulator: Duration,
    pub physics_step_size: Duration,
    pub max_ticks_per_frame: u32,
    pub last_update_time: Instant,
}

/// Open the simulation window and run until it is closed.
pub fn run(settings: Settings, update_mode: UpdateMode) {
    if STARTUP.set((settings, update_mode)).is_err() {
        log::warn!("window already started, ignoring new settings");
    }
    nannou::app(model).update(update).run();
}

pub fn model(app: &App) -> Model {
    let (settings, update_mode) = STARTUP
        .get()
        .cloned()
        .unwrap_or_else(|| (Settings::default(), UpdateMode::default()));

    let window_id = app
        .new_window()
        .title(&settings.window.title)
        .size(settings.window.width, settings.window.height)
        .view(renderer::view)
        .key_pressed(input::key_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .expect("failed to build the simulation window");

    let window = app.window(window_id).expect("simulation window closed during startup");
    let egui = Egui::from_window(&window);

    let bounds = Bounds::from(window.rect());
    log::info!(
        "opened {}x{} window, bounds {:?}",
        settings.window.width,
        settings.window.height,
        bounds
    );

    let params = SimulationParams::new(&settings, update_mode);

    let mut rng = StdRng::from_entropy();
    let flock = population::spawn_flock(&bounds, &params.population, &mut rng);
    log::info!("spawned {} birds", flock.len());

    Model {
        flock,
        params,
        simulator: FlockSimulator::new(update_mode),
        rng,
        egui,
        debug_info: DebugInfo::default(),
        bounds,
        reset_requested: false,
        physics_accumulator: Duration::ZERO,
        physics_step_size: Duration::from_secs_f32(1.0 / settings.window.physics_fps),
        max_ticks_per_frame: settings.window.max_ticks_per_frame,
        last_update_time: Instant::now(),
    }
}

pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.debug_info.begin_frame();

    let response = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);
    apply_ui_response(model, response);

    let bounds = Bounds::from(app.window_rect());
    if bounds != model.bounds {
        log::debug!("bounds changed to {:?}", bounds);
        model.bounds = bounds;
    }

    let now = Instant::now();
    let frame_time = now.duration_since(model.last_update_time);
    model.last_update_time = now;

    if model.params.pause_simulation {
        // Do not replay the paused time on resume
        model.physics_accumulator = Duration::ZERO;
        return;
    }

    model.physics_accumulator += frame_time;
    run_pending_ticks(model);
}

fn apply_ui_response(model: &mut Model, response: UiResponse) {
    let changes = response.changes;

    if changes.flock_config {
        log::debug!("flock configuration changed: {:?}", model.params.flock);
    }

    if changes.update_mode {
        model.simulator.set_mode(model.params.update_mode);
    }

    if response.reset_flock || std::mem::take(&mut model.reset_requested) {
        model.flock = population::spawn_flock(&model.bounds, &model.params.population, &mut model.rng);
        log::info!("flock reset with {} birds", model.flock.len());
    } else if changes.flock_size {
        population::resize_flock(&mut model.flock, &model.bounds, &model.params.population, &mut model.rng);
        log::debug!("flock resized to {} birds", model.flock.len());
    }
}

fn run_pending_ticks(model: &mut Model) {
    let mut ticks = 0;

    while model.physics_accumulator >= model.physics_step_size && ticks < model.max_ticks_per_frame {
        let report = model.simulator.tick(&model.bounds, &mut model.flock, &model.params.flock);
        model.debug_info.record_tick(report);
        model.physics_accumulator -= model.physics_step_size;
        ticks += 1;
    }

    if model.physics_accumulator >= model.physics_step_size {
        let dropped = model.physics_accumulator.as_nanos() / model.physics_step_size.as_nanos();
        model.debug_info.dropped_ticks += dropped as u64;
        model.physics_accumulator = Duration::ZERO;
        log::warn!("frame fell behind, dropped {dropped} ticks");
    }
}
