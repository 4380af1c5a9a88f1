use itertools::Itertools;

use crate::Vector2;

/// Degeneracy class of a hull, determined solely by its number of points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Degeneracy {
    /// Zero or one point
    Point,
    /// Two points, a line segment
    Segment,
    /// Three or more points, assumed to form a simple polygon
    Polygon,
}

impl Degeneracy {
    pub fn of(hull: &[Vector2]) -> Self {
        match hull.len() {
            0 | 1 => Degeneracy::Point,
            2 => Degeneracy::Segment,
            _ => Degeneracy::Polygon,
        }
    }
}

/// Iterates over the edges `(prev, next)` of the implicitly closed hull, ending with the closing edge `(last, first)`.
///
/// A single point yields one zero-length edge, an empty hull yields nothing.
pub fn edges(hull: &[Vector2]) -> impl Iterator<Item = (Vector2, Vector2)> + '_ {
    hull.iter()
        .copied()
        .circular_tuple_windows::<(Vector2, Vector2)>()
}

/// Iterates over the `l-1` edges `(prev, next)` of the open chain starting at vertex 0, leaving out the closing edge.
pub fn chain_edges(hull: &[Vector2]) -> impl Iterator<Item = (Vector2, Vector2)> + '_ {
    hull.iter().copied().tuple_windows::<(Vector2, Vector2)>()
}

/// Distance from the origin to the farthest point of the hull.
pub fn reach(hull: &[Vector2]) -> f64 {
    hull.iter().map(|p| p.length()).fold(0.0, f64::max)
}

/// Iterates over consecutive edge vectors `(e_prev, e_next)` meeting at every vertex of the hull,
/// starting with the vertex at index 1. Requires at least 3 points to yield anything meaningful.
pub fn turns(hull: &[Vector2]) -> impl Iterator<Item = (Vector2, Vector2)> + '_ {
    hull.iter()
        .copied()
        .circular_tuple_windows::<(Vector2, Vector2, Vector2)>()
        .map(|(a, b, c)| (b - a, c - b))
}
