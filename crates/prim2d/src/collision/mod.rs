pub mod mask;
pub mod pixel;

pub use mask::AlphaMask;
pub use pixel::{bounds_overlap, pixel_touches, PixelSource};
