use num_traits::NumAssign;

pub use num_traits::Float;

/// Coordinate type of a [`Vec2D`](super::vec2d::Vec2D).
///
/// Vector arithmetic is built on the compound assignments `NumAssign`
/// guarantees; [`Float`] is needed on top only for euclidean length.
pub trait Scalar: NumAssign + Copy {}

impl<T> Scalar for T where T: NumAssign + Copy {}
