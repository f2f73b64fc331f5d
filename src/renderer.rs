/*
 * Renderer Module
 *
 * This module draws the flock: one yellow triangle per bird, nose along its
 * velocity, and when debug is on the perception circle of every bird plus the
 * statistics panel.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::bird::Bird;
use crate::ui;

// Triangle with wings behind the position and the nose ahead, pointing along +y
pub fn bird_outline(size: f32) -> [Point2; 3] {
    [
        pt2(-size * 0.5, -size * 0.75),
        pt2(0.0, size * 0.75),
        pt2(size * 0.5, -size * 0.75),
    ]
}

fn draw_bird(draw: &Draw, bird: &Bird) {
    draw.polygon()
        .color(YELLOW)
        .points(bird_outline(bird.size()))
        .xy(bird.position)
        .rotate(bird.orientation().unwrap_or(0.0));
}

fn draw_perception(draw: &Draw, bird: &Bird, neighbor_distance: f32) {
    draw.ellipse()
        .xy(bird.position)
        .radius(neighbor_distance)
        .no_fill()
        .stroke(rgba(0.0, 1.0, 0.0, 50.0 / 255.0))
        .stroke_weight(1.0);
}

pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    draw.background().color(BLACK);

    for bird in &model.flock {
        draw_bird(&draw, bird);

        if model.params.show_debug {
            draw_perception(&draw, bird, model.params.flock.neighbor_distance);
        }
    }

    if model.params.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, app.window_rect(), model.flock.len());
    }

    if let Err(error) = draw.to_frame(app, &frame) {
        log::error!("failed to draw flock: {error:?}");
    }

    if let Err(error) = model.egui.draw_to_frame(&frame) {
        log::error!("failed to draw control panel: {error:?}");
    }
}
