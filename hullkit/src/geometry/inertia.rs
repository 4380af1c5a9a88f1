use log::trace;

use crate::Vector2;
use crate::error::GeometryError;
use crate::geometry::geo_enums::Winding;
use crate::geometry::hull::chain_edges;
use crate::geometry::vector::VectorExt;
use crate::geometry::winding;

/// Moment of inertia of a lamina with unit mass, rotating around the **local origin**: <https://en.wikipedia.org/wiki/List_of_moments_of_inertia>
///
/// To obtain the inertia around the centroid, the hull must first be expressed relative to its centroid
/// (see [`MassProperties`](crate::geometry::MassProperties)).
///
/// * a point has no inertia
/// * a segment is treated as a thin rod: `length² / 12`
/// * a polygon is decomposed into the triangles spanned by the origin and each of its `l-1` edges starting at vertex 0.
///   The closing edge is left out, so for polygons not symmetric around the origin the result depends on which vertex is listed first.
///
/// Polygons enclosing no area, or for which all these triangles are flat, are reported as [`GeometryError::DegeneratePolygon`].
pub fn moment_of_inertia(hull: &[Vector2]) -> Result<f64, GeometryError> {
    match hull {
        [] | [_] => Ok(0.0),
        [p0, p1] => Ok(p0.distance_squared(*p1) / 12.0),
        _ => {
            let degenerate = GeometryError::DegeneratePolygon {
                n_points: hull.len(),
            };
            if winding(hull) == Winding::Degenerate {
                trace!("no inertia for zero-area hull: {hull:?}");
                return Err(degenerate);
            }

            let (num, denom) = chain_edges(hull).fold((0.0, 0.0), |(num, denom), (prev, next)| {
                let weight = next.cross(prev).abs();
                (
                    num + weight * (next.length_squared() + next.dot(prev) + prev.length_squared()),
                    denom + weight,
                )
            });

            if denom == 0.0 {
                trace!("no inertia for hull with every edge through the origin: {hull:?}");
                return Err(degenerate);
            }

            Ok(num / (6.0 * denom))
        }
    }
}
