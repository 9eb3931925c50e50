//! Spherical primitives: great-circle midpoints, triangle subdivision, and
//! spherical-triangle areas.
//!
//! All functions here are pure and operate on unit vectors; callers scale by
//! shell radii afterwards.

use crate::geometry::vector::{Point3, add, cross, dot, normalize};
use crate::mesh_error::ShellMeshError;

/// Great-circle midpoint of two unit vectors.
///
/// The midpoint is the normalized vector sum, which lies on the great circle
/// through `a` and `b` and is equidistant from both.
///
/// # Errors
/// Returns [`ShellMeshError::DegenerateInput`] when `a` and `b` are
/// antipodal: their sum vanishes and every point on the bisecting great
/// circle would qualify.
pub fn slerp_midpoint(a: Point3, b: Point3) -> Result<Point3, ShellMeshError> {
    normalize(add(a, b))
        .map_err(|_| ShellMeshError::degenerate("midpoint of antipodal points is undefined"))
}

/// One spherical triangle subdivided into four.
///
/// Index 0..=2 are the corner triangles keeping `v0`, `v1`, `v2`
/// respectively; index 3 is the center triangle of the three edge midpoints.
/// All four preserve the winding of the input triangle.
pub fn subdivide_triangle(
    v0: Point3,
    v1: Point3,
    v2: Point3,
) -> Result<[[Point3; 3]; 4], ShellMeshError> {
    let m01 = slerp_midpoint(v0, v1)?;
    let m12 = slerp_midpoint(v1, v2)?;
    let m20 = slerp_midpoint(v2, v0)?;
    Ok([
        [v0, m01, m20],
        [v1, m12, m01],
        [v2, m20, m12],
        [m01, m12, m20],
    ])
}

/// Area of the spherical triangle `abc` on the unit sphere.
///
/// Uses the numerically robust vector form
/// `2·atan2(|a·(b×c)|, 1 + a·b + b·c + c·a)`, which behaves well for the
/// small, nearly planar triangles produced at high refinement levels.
pub fn spherical_triangle_area(a: Point3, b: Point3, c: Point3) -> f64 {
    let numerator = dot(cross(a, b), c).abs();
    let denominator = 1.0 + dot(a, b) + dot(b, c) + dot(c, a);
    2.0 * numerator.atan2(denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::vector::norm;
    use std::f64::consts::PI;

    #[test]
    fn midpoint_is_equidistant() {
        let a = [1.0, 0.0, 0.0];
        let b = [0.0, 1.0, 0.0];
        let m = slerp_midpoint(a, b).unwrap();
        assert!((norm(m) - 1.0).abs() < 1e-15);
        // Equal angles to both endpoints.
        let da = dot(a, m).acos();
        let db = dot(b, m).acos();
        assert!((da - db).abs() < 1e-12);
        assert!((da - PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn midpoint_of_nearly_antipodal_is_finite() {
        // Adjacent-to-antipodal but not antipodal: must still resolve.
        let a = [1.0, 0.0, 0.0];
        let b = normalize([-1.0, 1e-6, 0.0]).unwrap();
        let m = slerp_midpoint(a, b).unwrap();
        assert!((norm(m) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn midpoint_of_antipodal_fails() {
        let a = [0.0, 0.0, 1.0];
        let b = [0.0, 0.0, -1.0];
        let err = slerp_midpoint(a, b).unwrap_err();
        assert!(matches!(err, ShellMeshError::DegenerateInput(_)));
    }

    #[test]
    fn subdivision_preserves_winding() {
        let v0 = [1.0, 0.0, 0.0];
        let v1 = [0.0, 1.0, 0.0];
        let v2 = [0.0, 0.0, 1.0];
        let parts = subdivide_triangle(v0, v1, v2).unwrap();
        // Outward-facing CCW triangles have positive triple product.
        for tri in parts {
            let n = dot(cross(tri[0], tri[1]), tri[2]);
            assert!(n > 0.0, "winding flipped: {n}");
        }
    }

    #[test]
    fn subdivision_areas_sum_to_parent() {
        let v0 = [1.0, 0.0, 0.0];
        let v1 = [0.0, 1.0, 0.0];
        let v2 = [0.0, 0.0, 1.0];
        let parent = spherical_triangle_area(v0, v1, v2);
        let parts = subdivide_triangle(v0, v1, v2).unwrap();
        let sum: f64 = parts
            .iter()
            .map(|t| spherical_triangle_area(t[0], t[1], t[2]))
            .sum();
        assert!((sum - parent).abs() < 1e-12);
    }

    #[test]
    fn octant_triangle_area() {
        // One octant of the sphere has area 4π/8.
        let a = spherical_triangle_area([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]);
        assert!((a - PI / 2.0).abs() < 1e-12);
    }
}
