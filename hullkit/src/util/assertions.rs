use log::error;

use crate::Vector2;
use crate::geometry::geo_enums::Winding;
use crate::geometry::winding;
use crate::util::FPA;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// Hulls with fewer than three points have no orientation and pass.
pub fn hull_is_clockwise(hull: &[Vector2]) -> bool {
    match winding(hull) {
        Winding::Clockwise => true,
        Winding::Degenerate => hull.len() < 3,
        Winding::CounterClockwise => {
            error!("counterclockwise hull: {hull:?}");
            false
        }
    }
}

/// Checks that no vertex of `hull` lies further along `dir` than `support`.
pub fn is_support_point(hull: &[Vector2], dir: Vector2, support: Vector2) -> bool {
    let support_proj = FPA(support.dot(dir));
    match hull.iter().find(|v| FPA(v.dot(dir)) > support_proj) {
        Some(v) => {
            error!("{v} lies further along {dir} than support point {support}");
            false
        }
        None => true,
    }
}
