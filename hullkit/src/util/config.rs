use serde::{Deserialize, Serialize};

/// How [`is_convex_with`](crate::geometry::is_convex_with) treats a vertex where the incoming and outgoing edges are collinear
/// (zero cross product, including repeated points).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CollinearPolicy {
    /// Collinear vertices neither establish nor contradict the turning direction.
    #[default]
    #[serde(rename = "ignore")]
    Ignore,
    /// Any collinear vertex makes the hull not strictly convex.
    #[serde(rename = "reject")]
    Reject,
}

///Configuration of [`ConvexPolygon`](crate::geometry::primitives::ConvexPolygon) construction
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct PolygonConfig {
    ///Treatment of collinear vertices during the convexity check
    pub collinear_edges: CollinearPolicy,
    ///Translate the vertices so that the centroid coincides with the local origin
    pub recenter: bool,
}

impl Default for PolygonConfig {
    fn default() -> Self {
        Self {
            collinear_edges: CollinearPolicy::Ignore,
            recenter: true,
        }
    }
}
