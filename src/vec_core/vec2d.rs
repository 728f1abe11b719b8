use std::fmt::{self, Display, Formatter};
use std::mem::size_of;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use super::scalar::{Float, Scalar};

/// A 2-D point or displacement with coordinates of type `T`.
///
/// The four compound assignments below are the only arithmetic written by
/// hand. `+`, `-`, `*` and `/` (including `k * v`) are derived from them in
/// the `operators` module.
#[derive(Default, PartialEq, Debug, Clone, Copy)]
pub struct Vec2D<T> {
    x: T,
    y: T,
}

// Deriving operators must not cost any storage.
const _: () = assert!(size_of::<Vec2D<f32>>() == 2 * size_of::<f32>());
const _: () = assert!(size_of::<Vec2D<f64>>() == 2 * size_of::<f64>());

impl<T: Copy> Vec2D<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }
}

impl<T: Scalar> Vec2D<T> {
    /// `self += other`, returning the updated value.
    pub fn plus(&mut self, other: Vec2D<T>) -> Vec2D<T> {
        *self += other;
        *self
    }

    /// `self -= other`, returning the updated value.
    pub fn minus(&mut self, other: Vec2D<T>) -> Vec2D<T> {
        *self -= other;
        *self
    }

    /// `self *= k`, returning the updated value.
    pub fn multiply(&mut self, k: T) -> Vec2D<T> {
        *self *= k;
        *self
    }

    /// `self /= k`, returning the updated value. A zero `k` is not checked.
    pub fn divide(&mut self, k: T) -> Vec2D<T> {
        *self /= k;
        *self
    }

    pub fn length_square(&self) -> T {
        self.x * self.x + self.y * self.y
    }
}

impl<T: Scalar + Float> Vec2D<T> {
    pub fn length(&self) -> T {
        self.length_square().sqrt()
    }

    /// Same direction, unit length. The zero vector yields NaN coordinates.
    pub fn normalized(&self) -> Vec2D<T> {
        *self / self.length()
    }
}

impl<T: AddAssign> AddAssign for Vec2D<T> {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl<T: SubAssign> SubAssign for Vec2D<T> {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl<T: MulAssign + Copy> MulAssign<T> for Vec2D<T> {
    fn mul_assign(&mut self, k: T) {
        self.x *= k;
        self.y *= k;
    }
}

impl<T: DivAssign + Copy> DivAssign<T> for Vec2D<T> {
    fn div_assign(&mut self, k: T) {
        self.x /= k;
        self.y /= k;
    }
}

impl<T> From<(T, T)> for Vec2D<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<Vec2D<T>> for (T, T) {
    fn from(v: Vec2D<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T: Display> Display for Vec2D<T> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructor_values() {
        let v = Vec2D::new(3, -4);
        assert_eq!(v.x(), 3);
        assert_eq!(v.y(), -4);
        assert_eq!(Vec2D::<i32>::default(), Vec2D::new(0, 0));
    }

    #[test]
    fn compound_assignments_work_componentwise() {
        let mut v = Vec2D::new(1.0_f32, 2.0);
        v += Vec2D::new(0.5, 0.5);
        assert_eq!(v, Vec2D::new(1.5, 2.5));
        v -= Vec2D::new(1.0, 1.0);
        assert_eq!(v, Vec2D::new(0.5, 1.5));
        v *= 4.0;
        assert_eq!(v, Vec2D::new(2.0, 6.0));
        v /= 2.0;
        assert_eq!(v, Vec2D::new(1.0, 3.0));
    }

    #[test]
    fn named_compound_ops_return_updated_copy() {
        let mut v = Vec2D::new(2, 3);

        let returned = v.plus(Vec2D::new(1, 1));
        assert_eq!(returned, Vec2D::new(3, 4));
        assert_eq!(v, returned);

        assert_eq!(v.minus(Vec2D::new(3, 0)), Vec2D::new(0, 4));
        assert_eq!(v.multiply(5), Vec2D::new(0, 20));
        assert_eq!(v.divide(4), Vec2D::new(0, 5));
        assert_eq!(v, Vec2D::new(0, 5));

        // the returned value is a copy, not a view into `v`
        let mut snapshot = v.plus(Vec2D::new(1, 1));
        snapshot.plus(Vec2D::new(10, 10));
        assert_eq!(v, Vec2D::new(1, 6));
    }

    #[test]
    fn length_of_three_four_five() {
        let v = Vec2D::new(3.0_f64, 4.0);
        assert_eq!(v.length_square(), 25.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(Vec2D::new(3, 4).length_square(), 25);

        let unit = v.normalized();
        assert!((unit.x() - 0.6).abs() < 1e-12);
        assert!((unit.y() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn normalizing_zero_vector_gives_nan() {
        let unit = Vec2D::new(0.0_f32, 0.0).normalized();
        assert!(unit.x().is_nan());
        assert!(unit.y().is_nan());
    }

    #[test]
    fn size_matches_raw_fields() {
        assert_eq!(size_of::<Vec2D<f32>>(), 8);
        assert_eq!(size_of::<Vec2D<f64>>(), 16);
        assert_eq!(size_of::<Vec2D<u8>>(), 2);
        assert_eq!(size_of::<Vec2D<i64>>(), 2 * size_of::<i64>());
    }

    #[test]
    fn tuple_conversions_and_display() {
        let v: Vec2D<i16> = (7, -2).into();
        assert_eq!(v, Vec2D::new(7, -2));

        let back: (i16, i16) = v.into();
        assert_eq!(back, (7, -2));

        assert_eq!(v.to_string(), "(7, -2)");
        assert_eq!(Vec2D::new(0.5_f32, 1.0).to_string(), "(0.5, 1)");
    }
}
