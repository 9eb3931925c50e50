//! Bare `[f64; 3]` vector helpers shared by the geometry kernel.
//!
//! Coordinates are plain fixed-size arrays rather than a vector newtype so
//! that buffers of positions stay `memcpy`-friendly for solver consumers.

use crate::mesh_error::ShellMeshError;

/// A point or direction in 3-space.
pub type Point3 = [f64; 3];

/// Norms below this are treated as zero.
pub const EPS: f64 = 1e-12;

#[inline]
pub(crate) fn dot(a: Point3, b: Point3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
pub(crate) fn cross(a: Point3, b: Point3) -> Point3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
pub(crate) fn add(a: Point3, b: Point3) -> Point3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub(crate) fn scale(p: Point3, s: f64) -> Point3 {
    [p[0] * s, p[1] * s, p[2] * s]
}

/// Euclidean norm.
#[inline]
pub fn norm(p: Point3) -> f64 {
    dot(p, p).sqrt()
}

/// Project `p` onto the unit sphere.
///
/// # Errors
/// Returns [`ShellMeshError::DegenerateInput`] if `p` is the zero vector
/// (norm below [`EPS`]), for which no direction is defined.
pub fn normalize(p: Point3) -> Result<Point3, ShellMeshError> {
    let n = norm(p);
    if n < EPS {
        return Err(ShellMeshError::degenerate(
            "cannot normalize the zero vector",
        ));
    }
    Ok(scale(p, 1.0 / n))
}

/// Convert a point on (or off) the sphere to `(longitude, latitude)` in
/// radians. Longitude is measured from +x toward +y, latitude from the
/// equatorial plane toward +z.
#[inline]
pub fn to_lon_lat(p: Point3) -> (f64, f64) {
    let lon = p[1].atan2(p[0]);
    let lat = p[2].atan2((p[0] * p[0] + p[1] * p[1]).sqrt());
    (lon, lat)
}

/// Unit-sphere point for `(longitude, latitude)` in radians.
#[inline]
pub fn from_lon_lat(lon: f64, lat: f64) -> Point3 {
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();
    [cos_lat * cos_lon, cos_lat * sin_lon, sin_lat]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_unit_and_scaled() {
        let p = normalize([3.0, 0.0, 0.0]).unwrap();
        assert_eq!(p, [1.0, 0.0, 0.0]);
        let q = normalize([1.0, 1.0, 1.0]).unwrap();
        assert!((norm(q) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_zero_vector_fails() {
        let err = normalize([0.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(err, ShellMeshError::DegenerateInput(_)));
    }

    #[test]
    fn lon_lat_round_trip() {
        for &(lon, lat) in &[
            (0.0, 0.0),
            (1.0, 0.5),
            (-2.5, -1.2),
            (std::f64::consts::FRAC_PI_2, std::f64::consts::FRAC_PI_4),
        ] {
            let p = from_lon_lat(lon, lat);
            assert!((norm(p) - 1.0).abs() < 1e-15);
            let (lon2, lat2) = to_lon_lat(p);
            assert!((lon - lon2).abs() < 1e-12, "lon {lon} vs {lon2}");
            assert!((lat - lat2).abs() < 1e-12, "lat {lat} vs {lat2}");
        }
    }

    #[test]
    fn cross_is_orthogonal() {
        let a = [1.0, 2.0, 3.0];
        let b = [-1.0, 0.5, 2.0];
        let c = cross(a, b);
        assert!(dot(a, c).abs() < 1e-12);
        assert!(dot(b, c).abs() < 1e-12);
    }
}
