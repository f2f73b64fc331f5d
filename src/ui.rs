/*
 * UI Module
 *
 * This module contains the control panel built with nannou_egui and the
 * on-screen debug text. The panel edits SimulationParams; nothing here touches
 * the flock directly, the app applies the edits before the next tick.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{ParamChanges, SimulationParams};
use crate::physics::UpdateMode;

/// Outcome of one frame of the control panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiResponse {
    pub reset_flock: bool,
    pub changes: ParamChanges,
}

pub fn update_ui(egui: &mut Egui, params: &mut SimulationParams, debug_info: &DebugInfo) -> UiResponse {
    let mut reset_flock = false;

    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Flock Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.population.flock_size, SimulationParams::flock_size_range())
                        .text("Number of Birds"),
                );

                if ui.button("Reset Flock").clicked() {
                    reset_flock = true;
                }

                ui.add(
                    egui::Slider::new(&mut params.flock.max_speed, SimulationParams::max_speed_range())
                        .text("Max Speed"),
                );
            });

            ui.collapsing("Steering Rules", |ui| {
                let flock = &mut params.flock;
                ui.add(
                    egui::Slider::new(&mut flock.alignment_strength, SimulationParams::fraction_range())
                        .text("Alignment Strength"),
                );
                ui.add(
                    egui::Slider::new(&mut flock.cohesion_strength, SimulationParams::cohesion_range())
                        .text("Cohesion Strength"),
                );
                ui.add(
                    egui::Slider::new(&mut flock.separation_strength, SimulationParams::strength_range())
                        .text("Separation Strength"),
                );
                ui.add(
                    egui::Slider::new(&mut flock.desired_separation, SimulationParams::radius_range())
                        .text("Desired Separation"),
                );
                ui.add(
                    egui::Slider::new(&mut flock.max_separation_force, SimulationParams::strength_range())
                        .text("Max Separation Force"),
                );
                ui.add(
                    egui::Slider::new(&mut flock.neighbor_distance, SimulationParams::radius_range())
                        .text("Neighbor Distance"),
                );
            });

            ui.collapsing("Noise", |ui| {
                ui.checkbox(&mut params.flock.add_noise, "Add Noise");
                ui.add(
                    egui::Slider::new(&mut params.flock.randomness, SimulationParams::randomness_range())
                        .text("Randomness"),
                );
            });

            ui.collapsing("Update Mode", |ui| {
                ui.radio_value(&mut params.update_mode, UpdateMode::Sequential, "Sequential (live)");
                ui.radio_value(&mut params.update_mode, UpdateMode::Synchronous, "Synchronous (buffered)");

                ui.separator();

                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Ticks this frame: {}", debug_info.ticks_per_frame));
                ui.label(format!("Dropped ticks: {}", debug_info.dropped_ticks));
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    UiResponse {
        reset_flock,
        changes: params.detect_changes(),
    }
}

// Draw debug information in the top-left corner of the window
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    flock_len: usize,
) {
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 240.0;
    let lines = debug_info.lines(flock_len);
    let panel_height = line_height * lines.len() as f32 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in lines.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        draw.text(text)
            .x_y(text_x + 90.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
