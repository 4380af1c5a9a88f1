use thiserror::Error;

/// Inputs for which a kernel function has no defined answer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// The hull contains no points at all.
    #[error("hull contains no points")]
    EmptyHull,

    /// A hull with three or more points that encloses no area (all points collinear or coincident).
    #[error("degenerate polygon: {n_points} points enclose no area")]
    DegeneratePolygon { n_points: usize },
}
