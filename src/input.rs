/*
 * Input Module
 *
 * Window event handlers: raw events are forwarded to egui, and a few keyboard
 * shortcuts mirror the control panel.
 * - Space: pause / resume
 * - D: toggle the debug overlay
 * - R: respawn the flock
 */

use nannou::prelude::*;

use crate::app::Model;

pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    // Keys typed into the panel belong to egui
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    match key {
        Key::Space => {
            model.params.pause_simulation = !model.params.pause_simulation;
            log::info!("simulation {}", if model.params.pause_simulation { "paused" } else { "resumed" });
        }
        Key::D => model.params.show_debug = !model.params.show_debug,
        Key::R => model.reset_requested = true,
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
