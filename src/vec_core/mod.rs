pub mod scalar;
pub mod vec2d;

mod operators;
