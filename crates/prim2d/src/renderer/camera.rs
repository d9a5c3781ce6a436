use glam::Vec2;

use crate::api::types::PixelRect;

/// Maps a world-space window onto a pixel viewport.
///
/// The world window is defined by its lower-left origin and width; height
/// follows from the viewport aspect ratio. World y grows upward, pixel y
/// grows downward.
pub struct Camera {
    /// Lower-left corner of the world window.
    pub origin: Vec2,
    /// Width of the world window in world units.
    pub width: f32,
    viewport_width: u32,
    viewport_height: u32,
}

impl Camera {
    pub fn new(origin: Vec2, width: f32, viewport: (u32, u32)) -> Self {
        Self {
            origin,
            width,
            viewport_width: viewport.0,
            viewport_height: viewport.1,
        }
    }

    /// World-to-pixel scale factor.
    pub fn ratio(&self) -> f32 {
        self.viewport_width as f32 / self.width
    }

    /// Map a world position to pixel coordinates (y flipped).
    pub fn world_to_pixel(&self, position: Vec2) -> Vec2 {
        let ratio = self.ratio();
        Vec2::new(
            (position.x - self.origin.x) * ratio,
            self.viewport_height as f32 - (position.y - self.origin.y) * ratio,
        )
    }

    /// Pixel rectangle covering a world-space rect centered at `position`.
    pub fn compute_pixel_rectangle(&self, position: Vec2, size: Vec2) -> PixelRect {
        let ratio = self.ratio();
        let width = size.x * ratio;
        let height = size.y * ratio;
        let center = self.world_to_pixel(position);
        PixelRect {
            x: (center.x - 0.5 * width) as i32,
            y: (center.y - 0.5 * height) as i32,
            width: width as u32,
            height: height as u32,
        }
    }
}
