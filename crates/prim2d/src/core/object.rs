use glam::Vec2;

use crate::collision::pixel;
use crate::components::primitive::TexturedPrimitive;

/// A moving game object: a textured primitive plus a velocity.
///
/// The object owns its state; platforms mutate position/velocity only
/// through `&mut GameObject` during bounce resolution. Single-threaded,
/// frame-stepped — there is no shared-state locking anywhere.
#[derive(Debug, Clone)]
pub struct GameObject {
    prim: TexturedPrimitive,
    /// World units per simulation step.
    pub velocity: Vec2,
}

impl GameObject {
    pub fn new(prim: TexturedPrimitive) -> Self {
        Self {
            prim,
            velocity: Vec2::ZERO,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn prim(&self) -> &TexturedPrimitive {
        &self.prim
    }

    pub fn prim_mut(&mut self) -> &mut TexturedPrimitive {
        &mut self.prim
    }

    pub fn position(&self) -> Vec2 {
        self.prim.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.prim.position = position;
    }

    pub fn size(&self) -> Vec2 {
        self.prim.size
    }

    /// Advance one simulation step: add velocity to position.
    /// Bounce resolution runs after all objects have stepped, before drawing.
    pub fn step(&mut self) {
        self.prim.position += self.velocity;
    }

    /// Pixel-accurate touch query against another primitive. Accounts for
    /// rotation and transparency of both shapes; returns the world-space
    /// collision point when touching.
    pub fn pixel_touches(&self, other: &TexturedPrimitive) -> Option<Vec2> {
        pixel::pixel_touches(&self.prim, other)
    }
}
