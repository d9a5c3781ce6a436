use bytemuck::{Pod, Zeroable};

use crate::api::types::Color;

/// One textured quad handed to the external renderer. 8 floats = 32 bytes
/// stride, suitable for direct upload as an instance buffer.
///
/// `x`/`y` is the top-left pixel corner of the unrotated rectangle; the
/// renderer rotates around the rectangle center.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct QuadInstance {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Rotation in radians, clockwise.
    pub rotation: f32,
    /// TextureId as a float (renderer-side lookup).
    pub texture: f32,
    /// Opacity multiplier.
    pub alpha: f32,
    pub _pad: f32,
}

impl QuadInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// A label overlay to draw after the quads. Not Pod: carries the string.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    /// Pixel position of the text anchor.
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub color: Color,
}

/// Per-frame draw output: quads first, text overlays second.
pub struct DrawList {
    pub quads: Vec<QuadInstance>,
    pub text: Vec<TextCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            quads: Vec::with_capacity(256),
            text: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.quads.clear();
        self.text.clear();
    }

    pub fn quad_count(&self) -> u32 {
        self.quads.len() as u32
    }

    /// Raw pointer to quad data for buffer uploads.
    pub fn quads_ptr(&self) -> *const f32 {
        self.quads.as_ptr() as *const f32
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}
