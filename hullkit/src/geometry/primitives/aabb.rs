use serde::{Deserialize, Serialize};

use crate::Vector2;

///Axis-aligned bounding box centered on the local origin of a shape, described by its half extents
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    pub half_width: f64,
    pub half_height: f64,
}

impl Aabb {
    /// Box without extent, for shapes with no area
    pub const ZERO: Aabb = Aabb {
        half_width: 0.0,
        half_height: 0.0,
    };

    pub fn new(half_width: f64, half_height: f64) -> Self {
        debug_assert!(
            half_width >= 0.0 && half_height >= 0.0,
            "invalid Aabb, half_width: {half_width}, half_height: {half_height}"
        );
        Aabb {
            half_width,
            half_height,
        }
    }

    pub fn width(&self) -> f64 {
        2.0 * self.half_width
    }

    pub fn height(&self) -> f64 {
        2.0 * self.half_height
    }

    /// Lower-left and upper-right corner when the box is placed at `center`.
    pub fn corners_at(&self, center: Vector2) -> (Vector2, Vector2) {
        let half = Vector2::new(self.half_width, self.half_height);
        (center - half, center + half)
    }

    /// Checks whether `point`, in local coordinates, lies inside or on the box.
    pub fn contains(&self, point: Vector2) -> bool {
        point.x.abs() <= self.half_width && point.y.abs() <= self.half_height
    }
}
