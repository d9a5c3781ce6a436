//! Rotation-aware per-pixel touch query.
//!
//! Works on anything exposing the `PixelSource` contract: a world-space
//! center/size/rotation plus a collision sub-rectangle of an opacity mask.
//! Plain sprites expose their whole image; atlas sub-sprites restrict the
//! collision pixels to their region of the shared atlas mask.

use glam::Vec2;

use crate::collision::mask::AlphaMask;

/// Shape contract for collision queries.
pub trait PixelSource {
    /// World-space center.
    fn position(&self) -> Vec2;
    /// World-space width/height.
    fn size(&self) -> Vec2;
    /// Rotation in radians, clockwise.
    fn rotation(&self) -> f32;
    /// Left edge of the collision sub-rectangle within the mask.
    fn left_pixel(&self) -> u32;
    /// Top edge of the collision sub-rectangle within the mask.
    fn top_pixel(&self) -> u32;
    /// Width of the collision sub-rectangle in pixels.
    fn image_width(&self) -> u32;
    /// Height of the collision sub-rectangle in pixels.
    fn image_height(&self) -> u32;
    /// The opacity mask the sub-rectangle indexes into.
    fn mask(&self) -> &AlphaMask;

    /// Opacity of collision pixel (x, y), relative to the sub-rectangle.
    fn opaque(&self, x: u32, y: u32) -> bool {
        self.mask()
            .is_opaque(self.left_pixel() + x, self.top_pixel() + y)
    }
}

/// Rotate a vector clockwise by `angle` radians.
fn rotate_cw(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(-angle).rotate(v)
}

/// Bounding-shape overlap between two sources.
///
/// Unrotated shapes use a strict AABB test: edges that exactly touch do NOT
/// count as overlap. If either shape is rotated, each is approximated by a
/// circle of radius 0.71 * max(w, h) — 0.71 ≈ sqrt(1/2), the half-diagonal
/// of a square bounding box. Conservative: may report overlap where the true
/// rotated rectangles miss, never exact rotated-rectangle math.
pub fn bounds_overlap<A, B>(a: &A, b: &B) -> bool
where
    A: PixelSource + ?Sized,
    B: PixelSource + ?Sized,
{
    if a.rotation().abs() < f32::EPSILON && b.rotation().abs() < f32::EPSILON {
        let a_min = a.position() - 0.5 * a.size();
        let a_max = a.position() + 0.5 * a.size();
        let b_min = b.position() - 0.5 * b.size();
        let b_max = b.position() + 0.5 * b.size();
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    } else {
        let r1 = 0.71 * a.size().x.max(a.size().y);
        let r2 = 0.71 * b.size().x.max(b.size().y);
        (b.position() - a.position()).length() < r1 + r2
    }
}

/// World position of collision pixel (i, j), given the source's rotated unit
/// axes. Texture rows grow downward while world y grows upward, hence the
/// flip on the y term.
fn index_to_world<S: PixelSource + ?Sized>(src: &S, i: u32, j: u32, x_dir: Vec2, y_dir: Vec2) -> Vec2 {
    let size = src.size();
    let x = i as f32 * size.x / src.image_width() as f32;
    let y = j as f32 * size.y / src.image_height() as f32;
    src.position() + (x - 0.5 * size.x) * x_dir + (0.5 * size.y - y) * y_dir
}

/// Inverse of `index_to_world`: project a world point onto the source's
/// rotated axes and scale into pixel indices. Fractional; the caller
/// truncates and bounds-checks.
fn world_to_index<S: PixelSource + ?Sized>(src: &S, point: Vec2, x_dir: Vec2, y_dir: Vec2) -> Vec2 {
    let size = src.size();
    let delta = point - src.position();
    let x_offset = delta.dot(x_dir);
    let y_offset = delta.dot(y_dir);
    Vec2::new(
        src.image_width() as f32 * (x_offset + 0.5 * size.x) / size.x,
        src.image_height() as f32 * (0.5 * size.y - y_offset) / size.y,
    )
}

/// Pixel-accurate touch test between two sources.
///
/// Starts with the conservative `bounds_overlap` early-out, then scans `a`'s
/// collision pixels: each opaque pixel is mapped to world space (accounting
/// for `a`'s rotation) and back into `b`'s pixel grid (accounting for `b`'s).
/// Returns the world position of the first pixel opaque in both, or None.
pub fn pixel_touches<A, B>(a: &A, b: &B) -> Option<Vec2>
where
    A: PixelSource + ?Sized,
    B: PixelSource + ?Sized,
{
    if !bounds_overlap(a, b) {
        return None;
    }

    let a_x = rotate_cw(Vec2::X, a.rotation());
    let a_y = rotate_cw(Vec2::Y, a.rotation());
    let b_x = rotate_cw(Vec2::X, b.rotation());
    let b_y = rotate_cw(Vec2::Y, b.rotation());

    for i in 0..a.image_width() {
        for j in 0..a.image_height() {
            if !a.opaque(i, j) {
                continue;
            }
            let point = index_to_world(a, i, j, a_x, a_y);
            let index = world_to_index(b, point, b_x, b_y);
            let bi = index.x as i64;
            let bj = index.y as i64;
            if bi >= 0
                && bi < b.image_width() as i64
                && bj >= 0
                && bj < b.image_height() as i64
                && b.opaque(bi as u32, bj as u32)
            {
                return Some(point);
            }
        }
    }
    None
}
