//! The polygon geometry kernel of a 2D rigid body physics engine.
//!
//! All algorithms operate on *hulls*: ordered, implicitly closed slices of [`Vector2`] wound **clockwise**.
//! Clockwise is defined by a positive [`signed_area`](geometry::signed_area).

/// Geometric kernel functions, the [`Geometry`](geometry::geo_traits::Geometry) capability and the shapes implementing it
pub mod geometry;

/// Error types reported by the kernel
pub mod error;

/// Helper functions and configuration which do not belong to any specific module
pub mod util;

/// External 2D vector type consumed by every function in this crate
pub use glam::DVec2 as Vector2;

#[doc(inline)]
pub use error::GeometryError;
