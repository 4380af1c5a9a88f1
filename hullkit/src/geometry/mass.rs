use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::Vector2;
use crate::geometry::{centroid, moment_of_inertia, signed_area};

/// Mass properties of a uniform lamina described by a hull.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MassProperties {
    pub mass: f64,
    /// Unsigned area of the hull (zero for points and segments)
    pub area: f64,
    /// Center of mass, in the coordinates of the hull
    pub centroid: Vector2,
    /// Moment of inertia around the centroid
    pub inertia: f64,
}

impl MassProperties {
    /// Computes the mass properties of a hull with `mass` spread uniformly over it.
    ///
    /// The inertia is taken around the centroid, not around the origin of the hull.
    pub fn from_hull(hull: &[Vector2], mass: f64) -> Result<Self> {
        ensure!(mass.is_finite() && mass >= 0.0, "invalid mass: {mass}");

        let centroid = centroid(hull)?;
        let centered = hull.iter().map(|p| *p - centroid).collect::<Vec<_>>();
        let inertia = mass * moment_of_inertia(&centered)?;

        Ok(Self {
            mass,
            area: signed_area(hull).abs(),
            centroid,
            inertia,
        })
    }
}
