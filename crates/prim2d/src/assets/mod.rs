pub mod registry;
pub mod texture;

pub use registry::{TextureDescriptor, TextureManifest, TextureRegistry};
pub use texture::{TextureData, TextureError};
