#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod vec_core;

pub use vec_core::scalar::{Float, Scalar};
pub use vec_core::vec2d::Vec2D;
