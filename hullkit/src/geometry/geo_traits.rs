use crate::Vector2;
use crate::geometry::primitives::Aabb;

/// Capability every concrete shape exposes to the collision pipeline.
///
/// The farthest-point queries are the *support functions* consumed by separating-axis and GJK-style narrow-phase algorithms.
/// They must return the exact extreme point (not an approximation) and be deterministic for those algorithms to terminate.
///
/// Every shape distinguishes two boundaries:
/// * the *hull*: the outer boundary, including any rounding radius
/// * the *core*: the inner boundary without rounding, used by margin-based algorithms
///
/// All results are expressed in the local coordinates of the shape.
/// Queries never modify the shape.
pub trait Geometry {
    /// Half extents of the axis-aligned bounding box centered on the local origin.
    fn aabb(&self) -> Aabb;

    /// Point on the hull that maximizes the dot product with `dir`.
    fn farthest_hull_point(&self, dir: Vector2) -> Vector2;

    /// Point on the core that maximizes the dot product with `dir`.
    fn farthest_core_point(&self, dir: Vector2) -> Vector2;

    /// Writes [`Geometry::farthest_hull_point`] into `result` and returns it.
    fn farthest_hull_point_into(&self, dir: Vector2, result: &mut Vector2) -> Vector2 {
        *result = self.farthest_hull_point(dir);
        *result
    }

    /// Writes [`Geometry::farthest_core_point`] into `result` and returns it.
    fn farthest_core_point_into(&self, dir: Vector2, result: &mut Vector2) -> Vector2 {
        *result = self.farthest_core_point(dir);
        *result
    }
}
