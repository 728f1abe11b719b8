//! Binary operators derived from the compound assignments on [`Vec2D`].
//!
//! Every operator here follows one rule: take the left operand by value,
//! apply the matching `op=` to that copy and return it.

use std::ops::{Add, Div, Mul, Sub};

use super::scalar::Scalar;
use super::vec2d::Vec2D;

impl<T: Scalar> Add for Vec2D<T> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl<T: Scalar> Sub for Vec2D<T> {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}

impl<T: Scalar> Mul<T> for Vec2D<T> {
    type Output = Self;

    fn mul(mut self, k: T) -> Self {
        self *= k;
        self
    }
}

impl<T: Scalar> Div<T> for Vec2D<T> {
    type Output = Self;

    fn div(mut self, k: T) -> Self {
        self /= k;
        self
    }
}

// `impl<T> Mul<Vec2D<T>> for T` is rejected by coherence, so scalar-on-the-left
// multiplication is stamped out per primitive.
macro_rules! scalar_times_vec2d {
    ($($t:ty),* $(,)?) => {
        $(
            impl Mul<Vec2D<$t>> for $t {
                type Output = Vec2D<$t>;

                fn mul(self, v: Vec2D<$t>) -> Vec2D<$t> {
                    v * self
                }
            }
        )*
    };
}

scalar_times_vec2d!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
