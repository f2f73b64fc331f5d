/*
 * Bounds Module
 *
 * The axis-aligned rectangle a flock lives in. It is handed to every tick, so
 * a window resize simply produces different bounds on the next frame.
 */

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min: Vec2,
    size: Vec2,
}

impl Bounds {
    // Negative sizes are treated as empty along that axis
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            size: size.max(Vec2::ZERO),
        }
    }

    // Rectangle of the given dimensions centred on the origin, like a nannou window
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(vec2(-width / 2.0, -height / 2.0), vec2(width, height))
    }

    pub fn min(&self) -> Vec2 {
        self.min
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x <= max.x && point.y >= self.min.y && point.y <= max.y
    }

    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max())
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Self::new(vec2(rect.left(), rect.bottom()), vec2(rect.w(), rect.h()))
    }
}
