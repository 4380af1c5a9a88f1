use crate::Vector2;
use crate::geometry::geo_traits::Geometry;
use crate::geometry::primitives::{Aabb, Circle, ConvexPolygon, PointGeometry};

/// Closed set of geometries a body can carry, dispatching the [`Geometry`] capability to the variant.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryKind {
    Point(PointGeometry),
    Circle(Circle),
    ConvexPolygon(ConvexPolygon),
}

impl Geometry for GeometryKind {
    fn aabb(&self) -> Aabb {
        match self {
            GeometryKind::Point(p) => p.aabb(),
            GeometryKind::Circle(c) => c.aabb(),
            GeometryKind::ConvexPolygon(cp) => cp.aabb(),
        }
    }

    fn farthest_hull_point(&self, dir: Vector2) -> Vector2 {
        match self {
            GeometryKind::Point(p) => p.farthest_hull_point(dir),
            GeometryKind::Circle(c) => c.farthest_hull_point(dir),
            GeometryKind::ConvexPolygon(cp) => cp.farthest_hull_point(dir),
        }
    }

    fn farthest_core_point(&self, dir: Vector2) -> Vector2 {
        match self {
            GeometryKind::Point(p) => p.farthest_core_point(dir),
            GeometryKind::Circle(c) => c.farthest_core_point(dir),
            GeometryKind::ConvexPolygon(cp) => cp.farthest_core_point(dir),
        }
    }
}

impl From<PointGeometry> for GeometryKind {
    fn from(p: PointGeometry) -> Self {
        GeometryKind::Point(p)
    }
}

impl From<Circle> for GeometryKind {
    fn from(c: Circle) -> Self {
        GeometryKind::Circle(c)
    }
}

impl From<ConvexPolygon> for GeometryKind {
    fn from(cp: ConvexPolygon) -> Self {
        GeometryKind::ConvexPolygon(cp)
    }
}
