use anyhow::{Result, bail, ensure};
use log::debug;
use ordered_float::OrderedFloat;

use crate::Vector2;
use crate::error::GeometryError;
use crate::geometry::geo_enums::Winding;
use crate::geometry::geo_traits::Geometry;
use crate::geometry::hull::Degeneracy;
use crate::geometry::primitives::Aabb;
use crate::geometry::{MassProperties, centroid, is_convex_with, signed_area, winding};
use crate::util::PolygonConfig;
use crate::util::assertions;

/// Convex polygon, optionally rounded by a `radius`.
///
/// The vertices form the *core* and are always stored clockwise.
/// The *hull* is the core inflated by `radius` (a rounded polygon), identical to the core when `radius` is zero.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    vertices: Vec<Vector2>,
    radius: f64,
    area: f64,
    /// Translation that was subtracted from the input vertices
    offset: Vector2,
    aabb: Aabb,
}

impl ConvexPolygon {
    /// Validates and normalizes `vertices` into a convex polygon.
    ///
    /// Counterclockwise input is reversed, and the vertices are moved so their centroid
    /// becomes the local origin if [`PolygonConfig::recenter`] is set.
    /// Fails for empty, non-finite, non-convex or zero-area input.
    pub fn try_new(mut vertices: Vec<Vector2>, radius: f64, config: &PolygonConfig) -> Result<Self> {
        ensure!(
            !vertices.is_empty(),
            "convex polygon must have at least one vertex"
        );
        ensure!(
            vertices.iter().all(|v| v.is_finite()),
            "convex polygon has non-finite vertices: {vertices:?}"
        );
        ensure!(
            radius.is_finite() && radius >= 0.0,
            "invalid rounding radius: {radius}"
        );
        ensure!(
            is_convex_with(&vertices, config.collinear_edges),
            "polygon is not convex ({:?} collinear edges): {vertices:?}",
            config.collinear_edges
        );

        if Degeneracy::of(&vertices) == Degeneracy::Polygon {
            match winding(&vertices) {
                Winding::Clockwise => {}
                Winding::CounterClockwise => {
                    debug!("[CP] reversing counterclockwise polygon with {} vertices", vertices.len());
                    vertices.reverse();
                }
                Winding::Degenerate => bail!(GeometryError::DegeneratePolygon {
                    n_points: vertices.len()
                }),
            }
        }

        let offset = match config.recenter {
            true => centroid(&vertices)?,
            false => Vector2::ZERO,
        };
        if offset != Vector2::ZERO {
            debug!("[CP] moving centroid {offset} to the origin");
            vertices.iter_mut().for_each(|v| *v -= offset);
        }

        let area = signed_area(&vertices);

        let mut polygon = ConvexPolygon {
            vertices,
            radius,
            area,
            offset,
            aabb: Aabb::ZERO,
        };
        polygon.aabb = polygon.compute_aabb();

        debug_assert!(assertions::hull_is_clockwise(&polygon.vertices));

        Ok(polygon)
    }

    pub fn vertices(&self) -> &[Vector2] {
        &self.vertices
    }

    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Area of the core, rounding excluded
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Translation that was subtracted from the input vertices during construction
    pub fn offset(&self) -> Vector2 {
        self.offset
    }

    /// Mass properties of the core with `mass` spread uniformly over it
    pub fn mass_properties(&self, mass: f64) -> Result<MassProperties> {
        MassProperties::from_hull(&self.vertices, mass)
    }

    fn compute_aabb(&self) -> Aabb {
        let x_max = self.farthest_hull_point(Vector2::X).x;
        let x_min = self.farthest_hull_point(Vector2::NEG_X).x;
        let y_max = self.farthest_hull_point(Vector2::Y).y;
        let y_min = self.farthest_hull_point(Vector2::NEG_Y).y;

        Aabb::new(f64::max(x_max, -x_min), f64::max(y_max, -y_min))
    }
}

impl Geometry for ConvexPolygon {
    fn aabb(&self) -> Aabb {
        self.aabb
    }

    fn farthest_hull_point(&self, dir: Vector2) -> Vector2 {
        self.farthest_core_point(dir) + dir.normalize_or_zero() * self.radius
    }

    /// Ties between vertices resolve to the one listed first.
    fn farthest_core_point(&self, dir: Vector2) -> Vector2 {
        //max_by_key returns the last maximum, iterate in reverse to favor the lowest index
        let farthest = self
            .vertices
            .iter()
            .rev()
            .max_by_key(|v| OrderedFloat(v.dot(dir)))
            .copied()
            .expect("convex polygon has at least one vertex");

        debug_assert!(assertions::is_support_point(&self.vertices, dir, farthest));

        farthest
    }
}
