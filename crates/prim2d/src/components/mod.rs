pub mod platform;
pub mod primitive;

pub use platform::Platform;
pub use primitive::{SpriteSource, TexturedPrimitive};
