//! Spherical-geometry kernel: unit-sphere points, great-circle midpoints,
//! and spherical-triangle subdivision.

pub mod sphere;
pub mod vector;

pub use sphere::{slerp_midpoint, spherical_triangle_area, subdivide_triangle};
pub use vector::{Point3, from_lon_lat, normalize, to_lon_lat};
