pub mod camera;
pub mod instance;

pub use camera::Camera;
pub use instance::{DrawList, QuadInstance, TextCommand};
