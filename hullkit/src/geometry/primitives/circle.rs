use anyhow::{Result, ensure};
use std::f64::consts::PI;

use crate::Vector2;
use crate::geometry::geo_traits::Geometry;
use crate::geometry::primitives::Aabb;

/// Circle centered on the local origin.
///
/// Modelled as a point core rounded by `radius`: the core support point is always the center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn try_new(radius: f64) -> Result<Self> {
        ensure!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {radius}"
        );
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Moment of inertia of a solid disk with unit mass around its center
    pub fn moment_of_inertia(&self) -> f64 {
        self.radius * self.radius / 2.0
    }
}

impl Geometry for Circle {
    fn aabb(&self) -> Aabb {
        Aabb::new(self.radius, self.radius)
    }

    /// A zero direction has no farthest point, the center is returned.
    fn farthest_hull_point(&self, dir: Vector2) -> Vector2 {
        dir.normalize_or_zero() * self.radius
    }

    fn farthest_core_point(&self, _dir: Vector2) -> Vector2 {
        Vector2::ZERO
    }
}
