use std::sync::Arc;

use glam::Vec2;

use crate::api::types::{Color, TextureId};
use crate::assets::registry::TextureRegistry;
use crate::assets::texture::{TextureData, TextureError};
use crate::collision::mask::AlphaMask;
use crate::collision::pixel::{self, PixelSource};
use crate::renderer::camera::Camera;
use crate::renderer::instance::{DrawList, QuadInstance, TextCommand};

/// Which part of the texture the collision mask covers.
///
/// `Full` uses the whole image. `Region` restricts collision to a
/// sub-rectangle of a larger atlas image, for sprite-sheet-backed shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteSource {
    Full,
    Region {
        left: u32,
        top: u32,
        width: u32,
        height: u32,
    },
}

/// A renderable 2D shape: textured quad with center position, width/height,
/// clockwise rotation, an optional text label, and a per-pixel collision mask.
///
/// Size components are expected to be non-negative; a negative size produces
/// an inverted bounding box and is caller misuse, not checked here.
#[derive(Debug, Clone)]
pub struct TexturedPrimitive {
    texture: TextureId,
    data: Arc<TextureData>,
    source: SpriteSource,
    /// Center position in world space.
    pub position: Vec2,
    /// World-space width/height.
    pub size: Vec2,
    /// Rotation in radians, clockwise. Not normalized to any range.
    pub rotation: f32,
    /// Optional label drawn over the quad.
    pub label: Option<String>,
    pub label_color: Color,
}

impl TexturedPrimitive {
    /// Construct a primitive from a registered texture. Fails if the texture
    /// name cannot be resolved; the error is propagated, not recovered.
    pub fn new(
        registry: &TextureRegistry,
        texture_name: &str,
        position: Vec2,
        size: Vec2,
    ) -> Result<Self, TextureError> {
        let (texture, data) = registry.get(texture_name)?;
        Ok(Self {
            texture,
            data,
            source: SpriteSource::Full,
            position,
            size,
            rotation: 0.0,
            label: None,
            label_color: Color::BLACK,
        })
    }

    pub fn with_label(mut self, label: impl Into<String>, color: Color) -> Self {
        self.label = Some(label.into());
        self.label_color = color;
        self
    }

    /// Restrict collision to a sub-rectangle of the texture (atlas sprite).
    pub fn with_region(mut self, left: u32, top: u32, width: u32, height: u32) -> Self {
        self.source = SpriteSource::Region {
            left,
            top,
            width,
            height,
        };
        self
    }

    pub fn texture(&self) -> TextureId {
        self.texture
    }

    pub fn source(&self) -> SpriteSource {
        self.source
    }

    /// Apply per-frame deltas to position, size, and rotation. Zero deltas
    /// leave the corresponding attribute unchanged.
    pub fn update(&mut self, delta_translate: Vec2, delta_scale: Vec2, delta_angle: f32) {
        self.position += delta_translate;
        self.size += delta_scale;
        self.rotation += delta_angle;
    }

    /// Lower-left corner of the unrotated bounding box.
    pub fn min_bound(&self) -> Vec2 {
        self.position - 0.5 * self.size
    }

    /// Upper-right corner of the unrotated bounding box.
    pub fn max_bound(&self) -> Vec2 {
        self.position + 0.5 * self.size
    }

    /// Bounding-shape overlap test. Strict AABB when neither shape is
    /// rotated, conservative radius test otherwise; see `collision::pixel`.
    pub fn bounds_overlap(&self, other: &TexturedPrimitive) -> bool {
        pixel::bounds_overlap(self, other)
    }

    /// Emit this primitive's quad (and label, if any) into the draw list.
    /// Pure pass-through of current state; the external renderer owns all
    /// actual drawing.
    pub fn draw_into(&self, camera: &Camera, out: &mut DrawList) {
        let rect = camera.compute_pixel_rectangle(self.position, self.size);
        out.quads.push(QuadInstance {
            x: rect.x as f32,
            y: rect.y as f32,
            width: rect.width as f32,
            height: rect.height as f32,
            rotation: self.rotation,
            texture: self.texture.0 as f32,
            alpha: 1.0,
            _pad: 0.0,
        });
        if let Some(label) = &self.label {
            let anchor = camera.world_to_pixel(self.position);
            out.text.push(TextCommand {
                x: anchor.x,
                y: anchor.y,
                text: label.clone(),
                color: self.label_color,
            });
        }
    }
}

impl PixelSource for TexturedPrimitive {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn rotation(&self) -> f32 {
        self.rotation
    }

    fn left_pixel(&self) -> u32 {
        match self.source {
            SpriteSource::Full => 0,
            SpriteSource::Region { left, .. } => left,
        }
    }

    fn top_pixel(&self) -> u32 {
        match self.source {
            SpriteSource::Full => 0,
            SpriteSource::Region { top, .. } => top,
        }
    }

    fn image_width(&self) -> u32 {
        match self.source {
            SpriteSource::Full => self.data.width(),
            SpriteSource::Region { width, .. } => width,
        }
    }

    fn image_height(&self) -> u32 {
        match self.source {
            SpriteSource::Full => self.data.height(),
            SpriteSource::Region { height, .. } => height,
        }
    }

    fn mask(&self) -> &AlphaMask {
        self.data.mask()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_registry() -> TextureRegistry {
        let mut reg = TextureRegistry::new();
        reg.insert("box", TextureData::solid(10, 10));
        reg.insert("wide", TextureData::solid(100, 20));
        reg
    }

    fn prim(reg: &TextureRegistry, pos: Vec2, size: Vec2) -> TexturedPrimitive {
        TexturedPrimitive::new(reg, "box", pos, size).unwrap()
    }

    #[test]
    fn unknown_texture_propagates() {
        let reg = test_registry();
        let err = TexturedPrimitive::new(&reg, "missing", Vec2::ZERO, Vec2::ONE).unwrap_err();
        assert!(matches!(err, TextureError::NotFound(_)));
    }

    #[test]
    fn clones_share_texture_data() {
        let reg = test_registry();
        let a = prim(&reg, Vec2::ZERO, Vec2::ONE);
        let b = a.clone();
        assert_eq!(a.texture(), b.texture());
        assert_eq!(a.image_width(), b.image_width());
        assert_eq!(a.image_height(), b.image_height());
    }

    #[test]
    fn bounds_from_center_and_size() {
        let reg = test_registry();
        let p = prim(&reg, Vec2::new(10.0, 20.0), Vec2::new(4.0, 6.0));
        assert_eq!(p.min_bound(), Vec2::new(8.0, 17.0));
        assert_eq!(p.max_bound(), Vec2::new(12.0, 23.0));
    }

    #[test]
    fn update_round_trip_restores_state() {
        let reg = test_registry();
        let mut p = prim(&reg, Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        p.rotation = 0.5;

        let dt = Vec2::new(7.0, -3.0);
        let ds = Vec2::new(0.25, 0.75);
        let da = 1.25;
        p.update(dt, ds, da);
        p.update(-dt, -ds, -da);

        assert_eq!(p.position, Vec2::new(1.0, 2.0));
        assert_eq!(p.size, Vec2::new(3.0, 4.0));
        assert_eq!(p.rotation, 0.5);
    }

    #[test]
    fn zero_deltas_change_nothing() {
        let reg = test_registry();
        let mut p = prim(&reg, Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        p.update(Vec2::ZERO, Vec2::ZERO, 0.0);
        assert_eq!(p.position, Vec2::new(1.0, 2.0));
        assert_eq!(p.size, Vec2::new(3.0, 4.0));
        assert_eq!(p.rotation, 0.0);
    }

    #[test]
    fn overlap_is_symmetric() {
        let reg = test_registry();
        let a = prim(&reg, Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = prim(&reg, Vec2::new(3.0, 3.0), Vec2::new(10.0, 10.0));
        assert_eq!(a.bounds_overlap(&b), b.bounds_overlap(&a));
        assert!(a.bounds_overlap(&b));
    }

    #[test]
    fn edge_to_edge_is_not_overlap() {
        let reg = test_registry();
        let a = prim(&reg, Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        // a.max.x == 5.0 == b.min.x
        let b = prim(&reg, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.bounds_overlap(&b));
        assert!(!b.bounds_overlap(&a));
    }

    #[test]
    fn positive_margin_overlaps() {
        let reg = test_registry();
        let a = prim(&reg, Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = prim(&reg, Vec2::new(9.9, 9.9), Vec2::new(10.0, 10.0));
        assert!(a.bounds_overlap(&b));
    }

    #[test]
    fn rotated_overlap_uses_radius_rule() {
        let reg = test_registry();
        let mut a = prim(&reg, Vec2::new(0.0, 0.0), Vec2::new(10.0, 4.0));
        a.rotation = 0.3;
        let b = prim(&reg, Vec2::new(13.0, 0.0), Vec2::new(8.0, 8.0));

        // r1 = 0.71 * 10 = 7.1, r2 = 0.71 * 8 = 5.68, sum = 12.78
        // distance 13.0 > 12.78: no overlap
        assert!(!a.bounds_overlap(&b));
        assert!(!b.bounds_overlap(&a));

        let c = prim(&reg, Vec2::new(12.5, 0.0), Vec2::new(8.0, 8.0));
        // distance 12.5 < 12.78: overlap (conservative, even if the true
        // rotated rectangles miss)
        assert!(a.bounds_overlap(&c));
        assert!(c.bounds_overlap(&a));
    }

    #[test]
    fn region_restricts_pixel_source() {
        let reg = test_registry();
        let p = prim(&reg, Vec2::ZERO, Vec2::new(4.0, 4.0)).with_region(6, 2, 4, 4);
        assert_eq!(p.left_pixel(), 6);
        assert_eq!(p.top_pixel(), 2);
        assert_eq!(p.image_width(), 4);
        assert_eq!(p.image_height(), 4);
    }

    #[test]
    fn full_source_uses_texture_dimensions() {
        let reg = test_registry();
        let p = TexturedPrimitive::new(&reg, "wide", Vec2::ZERO, Vec2::new(100.0, 20.0)).unwrap();
        assert_eq!(p.left_pixel(), 0);
        assert_eq!(p.image_width(), 100);
        assert_eq!(p.image_height(), 20);
    }

    #[test]
    fn draw_into_emits_quad_and_label() {
        let reg = test_registry();
        let p = prim(&reg, Vec2::new(50.0, 50.0), Vec2::new(10.0, 10.0))
            .with_label("score: 10", Color::WHITE);
        let cam = Camera::new(Vec2::ZERO, 100.0, (100, 100));
        let mut out = DrawList::new();
        p.draw_into(&cam, &mut out);

        assert_eq!(out.quads.len(), 1);
        let quad = &out.quads[0];
        assert_eq!(quad.x, 45.0);
        assert_eq!(quad.y, 45.0);
        assert_eq!(quad.width, 10.0);
        assert_eq!(quad.height, 10.0);

        assert_eq!(out.text.len(), 1);
        assert_eq!(out.text[0].text, "score: 10");
        assert_eq!(out.text[0].color, Color::WHITE);
    }

    #[test]
    fn draw_without_label_emits_quad_only() {
        let reg = test_registry();
        let p = prim(&reg, Vec2::new(50.0, 50.0), Vec2::new(10.0, 10.0));
        let cam = Camera::new(Vec2::ZERO, 100.0, (100, 100));
        let mut out = DrawList::new();
        p.draw_into(&cam, &mut out);
        assert_eq!(out.quads.len(), 1);
        assert!(out.text.is_empty());
    }
}
