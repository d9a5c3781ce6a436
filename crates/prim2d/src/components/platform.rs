use glam::Vec2;
use log::{debug, warn};

use crate::assets::registry::TextureRegistry;
use crate::assets::texture::TextureError;
use crate::components::primitive::TexturedPrimitive;
use crate::core::object::GameObject;

/// Fixed damping applied to the vertical velocity on every bounce, on top
/// of the platform's elasticity.
const VERTICAL_DAMPING: f32 = 0.25;

/// A static primitive that objects bounce off.
///
/// `friction` is the fraction of horizontal speed an object keeps per
/// contact, `elasticity` the fraction of vertical speed kept per bounce
/// before the fixed damping. The bounce model only resolves top/bottom
/// contact; side collisions are a known limitation and are left undefined.
#[derive(Debug, Clone)]
pub struct Platform {
    prim: TexturedPrimitive,
    friction: f32,
    elasticity: f32,
}

impl Platform {
    /// Construct a platform over a registered texture.
    /// Defaults: friction 0.98 (2% horizontal loss per contact),
    /// elasticity 0.7 (70% vertical retention before damping).
    pub fn new(
        registry: &TextureRegistry,
        texture_name: &str,
        center: Vec2,
        size: Vec2,
    ) -> Result<Self, TextureError> {
        Ok(Self {
            prim: TexturedPrimitive::new(registry, texture_name, center, size)?,
            friction: 0.98,
            elasticity: 0.7,
        })
    }

    pub fn from_prim(prim: TexturedPrimitive) -> Self {
        Self {
            prim,
            friction: 0.98,
            elasticity: 0.7,
        }
    }

    pub fn prim(&self) -> &TexturedPrimitive {
        &self.prim
    }

    pub fn prim_mut(&mut self) -> &mut TexturedPrimitive {
        &mut self.prim
    }

    pub fn friction(&self) -> f32 {
        self.friction
    }

    /// Not clamped: values outside (0, 1] amplify or invert horizontal
    /// speed and are caller misuse.
    pub fn set_friction(&mut self, friction: f32) {
        if friction <= 0.0 || friction > 1.0 {
            warn!("platform friction {} outside (0, 1]", friction);
        }
        self.friction = friction;
    }

    pub fn elasticity(&self) -> f32 {
        self.elasticity
    }

    /// Not clamped: values above 1 gain energy on every bounce.
    pub fn set_elasticity(&mut self, elasticity: f32) {
        if !(0.0..=1.0).contains(&elasticity) {
            warn!("platform elasticity {} outside [0, 1]", elasticity);
        }
        self.elasticity = elasticity;
    }

    /// Resolve a bounce against this platform.
    ///
    /// Queries the object's pixel-accurate touch; no touch is a no-op. On
    /// touch, vertical velocity is reversed and damped, horizontal velocity
    /// keeps its direction scaled by friction, and the object is snapped
    /// out of the platform vertically so it does not stay embedded.
    ///
    /// Call once per simulation step, after positions have been updated and
    /// before drawing. Repeated calls while still touching reapply damping.
    pub fn bounce_object(&self, obj: &mut GameObject) {
        let Some(point) = obj.pixel_touches(&self.prim) else {
            return;
        };
        debug!("bounce at {:?}", point);

        // limitation: only resolves contact from top/bottom, not the sides
        let v = obj.velocity;
        obj.velocity = Vec2::new(v.x * self.friction, v.y * -VERTICAL_DAMPING * self.elasticity);

        let mut p = obj.position();
        let snap = 0.5 * self.prim.size.y + 0.5 * obj.size().y;
        if p.y > self.prim.position.y {
            p.y = self.prim.position.y + snap;
        } else {
            p.y = self.prim.position.y - snap;
        }
        obj.set_position(p);
    }
}
