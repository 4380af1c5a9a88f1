use log::trace;

use crate::Vector2;
use crate::error::GeometryError;
use crate::geometry::geo_enums::Winding;
use crate::geometry::hull::{Degeneracy, edges};
use crate::geometry::vector::VectorExt;
use crate::util::FPA;

//Per-edge shoelace term, positive for clockwise turning around the origin.
#[inline(always)]
fn shoelace_term(prev: Vector2, next: Vector2) -> f64 {
    next.cross(prev)
}

//Shoelace sum of the hull, along with the magnitude of the products it is computed from.
fn shoelace_sums(hull: &[Vector2]) -> (f64, f64) {
    edges(hull).fold((0.0, 0.0), |(sigma, magnitude), (prev, next)| {
        (
            sigma + shoelace_term(prev, next),
            magnitude + prev.length() * next.length(),
        )
    })
}

/// Signed area of the hull using the [shoelace formula](https://en.wikipedia.org/wiki/Shoelace_formula).
///
/// Positive for clockwise ordering, negative for counterclockwise.
/// Points and segments have no area.
pub fn signed_area(hull: &[Vector2]) -> f64 {
    match Degeneracy::of(hull) {
        Degeneracy::Point | Degeneracy::Segment => 0.0,
        Degeneracy::Polygon => shoelace_sums(hull).0 / 2.0,
    }
}

/// Orientation of the hull, see [`Winding`].
///
/// A polygon is [`Winding::Degenerate`] when its area vanishes relative to the products its shoelace sum is made of,
/// so the verdict is the same whatever the unit of the coordinates.
pub fn winding(hull: &[Vector2]) -> Winding {
    if Degeneracy::of(hull) != Degeneracy::Polygon {
        return Winding::Degenerate;
    }
    let (sigma, magnitude) = shoelace_sums(hull);
    if FPA(sigma).is_negligible(magnitude) {
        Winding::Degenerate
    } else if sigma > 0.0 {
        Winding::Clockwise
    } else {
        Winding::CounterClockwise
    }
}

/// Area-weighted centroid of the hull: <https://en.wikipedia.org/wiki/Centroid#Of_a_polygon>
///
/// A single point is its own centroid and a segment has its midpoint as centroid.
/// Polygons enclosing no area have no defined centroid and are reported as [`GeometryError::DegeneratePolygon`].
/// The result does not depend on the winding direction.
pub fn centroid(hull: &[Vector2]) -> Result<Vector2, GeometryError> {
    match hull {
        [] => Err(GeometryError::EmptyHull),
        [p] => Ok(*p),
        [p0, p1] => Ok((*p0 + *p1) / 2.0),
        _ => {
            if winding(hull) == Winding::Degenerate {
                trace!("no centroid for zero-area hull: {hull:?}");
                return Err(GeometryError::DegeneratePolygon {
                    n_points: hull.len(),
                });
            }
            let area = signed_area(hull);
            let weighted_sum: Vector2 = edges(hull)
                .map(|(prev, next)| (prev + next) * shoelace_term(prev, next))
                .sum();

            Ok(weighted_sum / (6.0 * area))
        }
    }
}
