mod area;
mod containment;
mod convexity;
mod inertia;
mod mass;

/// Degeneracy classes of hulls and the edge iterators shared by all algorithms
pub mod hull;

/// Set of enums representing various geometric properties
pub mod geo_enums;

/// The [`Geometry`](geo_traits::Geometry) capability implemented by every shape
pub mod geo_traits;

/// Concrete shapes implementing the [`Geometry`](geo_traits::Geometry) capability
pub mod primitives;

/// Extension of the external vector type
pub mod vector;

#[doc(inline)]
pub use area::{centroid, signed_area, winding};
#[doc(inline)]
pub use containment::{contains, position, winding_number};
#[doc(inline)]
pub use convexity::{is_convex, is_convex_with};
#[doc(inline)]
pub use inertia::moment_of_inertia;
#[doc(inline)]
pub use mass::MassProperties;
