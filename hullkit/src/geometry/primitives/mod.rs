mod aabb;
mod circle;
mod convex_polygon;
mod geometry_kind;
mod point_geometry;

#[doc(inline)]
pub use aabb::Aabb;
#[doc(inline)]
pub use circle::Circle;
#[doc(inline)]
pub use convex_polygon::ConvexPolygon;
#[doc(inline)]
pub use geometry_kind::GeometryKind;
#[doc(inline)]
pub use point_geometry::PointGeometry;
