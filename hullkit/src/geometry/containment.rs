use std::f64::consts::TAU;

use crate::Vector2;
use crate::geometry::geo_enums::GeoPosition;
use crate::geometry::hull::{Degeneracy, edges};
use crate::geometry::vector::{VectorExt, cross_scale};
use crate::util::FPA;

/// Checks whether `point` lies inside or on the boundary of the hull.
///
/// * empty hull: never
/// * single point: exact equality
/// * segment: `point` is collinear with, and between, the endpoints
/// * polygon: `point` lies on an edge, or the hull winds around it (non-zero [`winding_number`])
pub fn contains(point: Vector2, hull: &[Vector2]) -> bool {
    position(point, hull) != GeoPosition::Exterior
}

/// Classifies `point` as interior, boundary or exterior to the hull.
///
/// Points and segments have no interior: a point equal to the single hull point, or lying on the segment,
/// is reported as [`GeoPosition::Boundary`].
pub fn position(point: Vector2, hull: &[Vector2]) -> GeoPosition {
    match hull {
        [] => GeoPosition::Exterior,
        [p] => match point == *p {
            true => GeoPosition::Boundary,
            false => GeoPosition::Exterior,
        },
        [p0, p1] => match on_segment(point, *p0, *p1) {
            true => GeoPosition::Boundary,
            false => GeoPosition::Exterior,
        },
        _ => {
            if edges(hull).any(|(start, end)| on_segment(point, start, end)) {
                GeoPosition::Boundary
            } else if winding_number(point, hull) != 0 {
                GeoPosition::Interior
            } else {
                GeoPosition::Exterior
            }
        }
    }
}

/// Number of times the hull wraps around `point`: <https://en.wikipedia.org/wiki/Winding_number>
///
/// Computed by summing the signed angles subtended at `point` by every edge of the hull and counting the completed turns.
/// The sign follows the winding direction of the hull: negative for clockwise hulls (in a y-up frame).
///
/// A point on the boundary of a simple polygon sees less than a full turn (half a turn on an edge, the interior angle on a vertex)
/// and therefore always has winding number `0`.
pub fn winding_number(point: Vector2, hull: &[Vector2]) -> i32 {
    if Degeneracy::of(hull) != Degeneracy::Polygon {
        return 0;
    }

    let angle_sum: f64 = edges(hull)
        .map(|(prev, next)| (prev - point).signed_angle_to(next - point))
        .sum();

    let turns = angle_sum / TAU;
    ((turns.abs() + TURN_MARGIN).trunc() as i32) * (turns.signum() as i32)
}

//Shortfall of a full turn still counted as complete, absorbs the rounding of the angle sum
const TURN_MARGIN: f64 = 1e-9;

/// Whether `point` lies on the segment from `start` to `end`, endpoints included.
///
/// Equivalent to the angle subtended at `point` by both endpoints being `π`, or `point` coinciding with one of them.
/// Both the collinearity and the betweenness test are relative to the length of the segment and the magnitude of the coordinates.
fn on_segment(point: Vector2, start: Vector2, end: Vector2) -> bool {
    let (to_start, to_end) = (start - point, end - point);
    let reach = point.length().max(start.length()).max(end.length());
    let scale = cross_scale(to_start, to_end, reach);
    let dot = to_start.dot(to_end);
    FPA(to_start.cross(to_end)).is_negligible(scale) && (dot <= 0.0 || FPA(dot).is_negligible(scale))
}
