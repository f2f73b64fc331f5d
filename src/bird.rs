/*
 * Bird Module
 *
 * This module defines the Bird struct: the agent moved by the flock simulation.
 * A bird carries only continuous state (position, velocity) plus a fixed size.
 * Its orientation is never stored, it is derived from the velocity on demand.
 */

use nannou::prelude::*;

use crate::bounds::Bounds;

// Offset turning the velocity heading into the drawn "nose up" triangle's rotation
pub const ORIENTATION_OFFSET_DEGREES: f32 = 270.0;

// Fraction of the reflected velocity used to push a bounced bird off the edge
pub const BOUNCE_NUDGE: f32 = 0.01;

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub position: Vec2,
    pub velocity: Vec2,
    size: f32,
}

/// Which axes were reflected by [`Bird::bounce_off_edges`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounce {
    pub x: bool,
    pub y: bool,
}

impl Bounce {
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

impl Bird {
    pub fn new(position: Vec2, velocity: Vec2, size: f32) -> Self {
        Self {
            position,
            velocity,
            size,
        }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    // Collision radius
    pub fn radius(&self) -> f32 {
        self.size * 0.5
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    // Heading of the velocity in radians, in (-PI, PI]
    pub fn heading(&self) -> f32 {
        self.velocity.y.atan2(self.velocity.x)
    }

    /// Rotation (radians) of the drawn bird: the velocity heading turned by
    /// [`ORIENTATION_OFFSET_DEGREES`]. `None` while the bird is not moving.
    pub fn orientation(&self) -> Option<f32> {
        if self.velocity == Vec2::ZERO {
            return None;
        }
        Some(self.heading() + ORIENTATION_OFFSET_DEGREES.to_radians())
    }

    // Integrate one tick (unit time step)
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    /// Reflect the bird off the edges of `bounds`.
    ///
    /// On each axis where the bird left the rectangle its position is clamped to
    /// the edge and the velocity component is negated. Bounced axes are then
    /// nudged inward along the reflected velocity so the bird does not sit
    /// exactly on the edge next tick.
    pub fn bounce_off_edges(&mut self, bounds: &Bounds) -> Bounce {
        let min = bounds.min();
        let max = bounds.max();
        let mut bounce = Bounce::default();

        if self.position.x < min.x {
            self.position.x = min.x;
            self.velocity.x = -self.velocity.x;
            bounce.x = true;
        } else if self.position.x > max.x {
            self.position.x = max.x;
            self.velocity.x = -self.velocity.x;
            bounce.x = true;
        }

        if self.position.y < min.y {
            self.position.y = min.y;
            self.velocity.y = -self.velocity.y;
            bounce.y = true;
        } else if self.position.y > max.y {
            self.position.y = max.y;
            self.velocity.y = -self.velocity.y;
            bounce.y = true;
        }

        if bounce.x {
            self.position.x += self.velocity.x * BOUNCE_NUDGE;
        }
        if bounce.y {
            self.position.y += self.velocity.y * BOUNCE_NUDGE;
        }

        bounce
    }
}
