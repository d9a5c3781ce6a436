pub mod api;
pub mod assets;
pub mod collision;
pub mod components;
pub mod core;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::types::{Color, PixelRect, TextureId};
pub use assets::registry::{TextureDescriptor, TextureManifest, TextureRegistry};
pub use assets::texture::{TextureData, TextureError};
pub use collision::mask::AlphaMask;
pub use collision::pixel::{bounds_overlap, pixel_touches, PixelSource};
pub use components::platform::Platform;
pub use components::primitive::{SpriteSource, TexturedPrimitive};
pub use crate::core::object::GameObject;
pub use renderer::camera::Camera;
pub use renderer::instance::{DrawList, QuadInstance, TextCommand};
