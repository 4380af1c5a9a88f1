use std::cmp::Ordering;

use log::trace;

use crate::Vector2;
use crate::geometry::hull::{Degeneracy, reach, turns};
use crate::geometry::vector::{VectorExt, cross_scale};
use crate::util::{CollinearPolicy, FPA};

/// Checks whether the hull describes a convex polygon, ignoring collinear vertices.
/// See [`is_convex_with`].
pub fn is_convex(hull: &[Vector2]) -> bool {
    is_convex_with(hull, CollinearPolicy::Ignore)
}

/// Checks whether the hull describes a convex polygon.
///
/// Points and segments are trivially convex.
/// Otherwise, every vertex must turn in the same direction, which is determined by the sign of the cross product
/// of its incoming and outgoing edge. A cross product which is [negligible](FPA::is_negligible) relative to the edges and
/// the coordinates it is computed from is neither positive nor negative, `policy` decides what such a collinear vertex means.
///
/// The result does not depend on the winding direction or on which vertex is listed first.
pub fn is_convex_with(hull: &[Vector2], policy: CollinearPolicy) -> bool {
    if Degeneracy::of(hull) != Degeneracy::Polygon {
        return true;
    }

    let reach = reach(hull);
    let mut established: Option<Ordering> = None;

    for (i, (e_prev, e_next)) in turns(hull).enumerate() {
        let turn = match e_prev.cross(e_next) {
            c if FPA(c).is_negligible(cross_scale(e_prev, e_next, reach)) => Ordering::Equal,
            c if c > 0.0 => Ordering::Greater,
            _ => Ordering::Less,
        };

        match (turn, established) {
            (Ordering::Equal, _) => match policy {
                CollinearPolicy::Ignore => continue,
                CollinearPolicy::Reject => {
                    trace!("collinear vertex at index {}", (i + 1) % hull.len());
                    return false;
                }
            },
            (_, None) => established = Some(turn),
            (_, Some(sign)) if sign != turn => {
                trace!("reflex vertex at index {}", (i + 1) % hull.len());
                return false;
            }
            _ => {}
        }
    }

    true
}
