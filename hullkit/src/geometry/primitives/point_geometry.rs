use crate::Vector2;
use crate::geometry::geo_traits::Geometry;
use crate::geometry::primitives::Aabb;

/// Shape without any extent, located at the local origin.
///
/// This is the stub behaviour of the [`Geometry`] capability: a zero-sized bounding box,
/// and the origin as both hull and core support point.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointGeometry;

impl Geometry for PointGeometry {
    fn aabb(&self) -> Aabb {
        Aabb::ZERO
    }

    fn farthest_hull_point(&self, _dir: Vector2) -> Vector2 {
        Vector2::ZERO
    }

    fn farthest_core_point(&self, _dir: Vector2) -> Vector2 {
        Vector2::ZERO
    }
}
