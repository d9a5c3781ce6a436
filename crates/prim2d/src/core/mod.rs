pub mod object;

pub use object::GameObject;
