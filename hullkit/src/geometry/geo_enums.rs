/// Position of a point relative to a hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeoPosition {
    Exterior,
    /// On an edge or vertex of the hull
    Boundary,
    Interior,
}

/// Orientation of a hull, derived from the sign of its signed area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Winding {
    /// Positive signed area, the convention assumed by the whole crate
    Clockwise,
    /// Negative signed area
    CounterClockwise,
    /// Zero area: fewer than three points, or all points collinear
    Degenerate,
}

impl Winding {
    pub fn reverse(&self) -> Self {
        match self {
            Winding::Clockwise => Winding::CounterClockwise,
            Winding::CounterClockwise => Winding::Clockwise,
            Winding::Degenerate => Winding::Degenerate,
        }
    }
}
