use crate::Vector2;

/// Operations on [`Vector2`] the kernel needs beyond what `glam` provides.
pub trait VectorExt {
    /// Scalar z-component of the 3D cross product: `self.x * other.y - self.y * other.x`.
    fn cross(self, other: Vector2) -> f64;

    /// Signed angle in `[-π, π]` rotating `self` onto `other`, counterclockwise positive in a y-up frame.
    /// Zero if either vector has zero length.
    fn signed_angle_to(self, other: Vector2) -> f64;
}

impl VectorExt for Vector2 {
    #[inline(always)]
    fn cross(self, other: Vector2) -> f64 {
        self.perp_dot(other)
    }

    #[inline(always)]
    fn signed_angle_to(self, other: Vector2) -> f64 {
        f64::atan2(self.cross(other), self.dot(other))
    }
}

/// Magnitude against which `a.cross(b)` is compared to zero, when `a` and `b` are differences of points
/// lying at most `reach` away from the origin.
///
/// Covers the rounding of the subtractions, which grows with `reach`, as well as that of the product itself.
pub fn cross_scale(a: Vector2, b: Vector2, reach: f64) -> f64 {
    let (len_a, len_b) = (a.length(), b.length());
    (reach + len_a.max(len_b)) * (len_a + len_b)
}
