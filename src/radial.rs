//! Radial layer stack: distributes the canonical layer across shell radii.
//!
//! The horizontal topology never varies radially; a layer is the shared
//! [`LayerTopology`](crate::topology::LayerTopology) plus one radius. This
//! module owns the layer-count rule and the radius-distribution policies,
//! and validates everything before any node assembly starts.

use crate::mesh_error::ShellMeshError;
use itertools::Itertools;
use log::debug;
use std::fmt;
use std::sync::Arc;

/// Relative tolerance for matching a custom distribution's endpoints against
/// the requested inner/outer radii.
const ENDPOINT_TOL: f64 = 1e-9;

/// Radius-distribution policy: radius as a function of layer index and
/// layer count. A strategy value, not a trait hierarchy — the only variation
/// point is the mapping itself.
#[derive(Clone, Default)]
pub enum RadialSpacing {
    /// Linear spacing `r_i = inner + i·(outer − inner)/(L−1)`.
    #[default]
    Uniform,
    /// Caller-supplied mapping from `(layer_index, layer_count)` to a
    /// radius. The output must be strictly increasing with endpoints equal
    /// to the requested inner and outer radii; violations are rejected as
    /// [`ShellMeshError::InvalidResolution`] before construction.
    Custom(Arc<dyn Fn(usize, usize) -> f64 + Send + Sync>),
}

impl fmt::Debug for RadialSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadialSpacing::Uniform => f.write_str("Uniform"),
            RadialSpacing::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Number of radial layers at refinement level `k`: `m/2 + 1` with
/// `m = 2^k`, evaluated in integer arithmetic.
///
/// `k = 0` therefore yields a single layer (the `m = 1` degenerate case
/// rounds down), and `k ≥ 1` yields `2^(k−1) + 1`.
#[inline]
pub fn layer_count(subdivisions: u32) -> usize {
    let m = 1usize << subdivisions;
    m / 2 + 1
}

/// Compute and validate the layer radii for a shell.
///
/// All parameter checking happens here, before any construction work:
/// radii must be finite, the inner radius positive, the outer radius no
/// smaller than the inner. A multi-layer shell needs `outer > inner`; the
/// single-layer shell (`k = 0`) needs `outer == inner` and sits at `outer`,
/// since one layer cannot span a nonzero radial range.
///
/// # Errors
/// [`ShellMeshError::InvalidResolution`] for every parameter violation,
/// including a custom spacing whose output is not strictly increasing from
/// `inner` to `outer`.
pub fn layer_radii(
    subdivisions: u32,
    inner_radius: f64,
    outer_radius: f64,
    spacing: &RadialSpacing,
) -> Result<Vec<f64>, ShellMeshError> {
    if !inner_radius.is_finite() || !outer_radius.is_finite() {
        return Err(ShellMeshError::invalid_resolution(
            "shell radii must be finite",
        ));
    }
    if inner_radius <= 0.0 {
        return Err(ShellMeshError::invalid_resolution(format!(
            "inner radius must be positive, got {inner_radius}"
        )));
    }
    if outer_radius < inner_radius {
        return Err(ShellMeshError::invalid_resolution(format!(
            "outer radius {outer_radius} must not be smaller than inner radius {inner_radius}"
        )));
    }

    let count = layer_count(subdivisions);
    if count == 1 {
        if outer_radius > inner_radius {
            return Err(ShellMeshError::invalid_resolution(format!(
                "a single layer cannot span the radial range [{inner_radius}, {outer_radius}]; \
                 use equal radii or a higher subdivision level"
            )));
        }
        return Ok(vec![outer_radius]);
    }
    if outer_radius == inner_radius {
        return Err(ShellMeshError::invalid_resolution(format!(
            "{count} layers need a nonzero radial range, got inner == outer == {inner_radius}"
        )));
    }

    let radii: Vec<f64> = match spacing {
        RadialSpacing::Uniform => {
            let step = (outer_radius - inner_radius) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        // Land exactly on the boundary.
                        outer_radius
                    } else {
                        inner_radius + step * i as f64
                    }
                })
                .collect()
        }
        RadialSpacing::Custom(f) => {
            let radii: Vec<f64> = (0..count).map(|i| f(i, count)).collect();
            validate_custom_radii(&radii, inner_radius, outer_radius)?;
            radii
        }
    };

    debug!(
        "radial stack: {count} layers spanning [{inner_radius}, {outer_radius}] ({spacing:?})"
    );
    Ok(radii)
}

fn validate_custom_radii(
    radii: &[f64],
    inner_radius: f64,
    outer_radius: f64,
) -> Result<(), ShellMeshError> {
    if radii.iter().any(|r| !r.is_finite()) {
        return Err(ShellMeshError::invalid_resolution(
            "custom spacing produced a non-finite radius",
        ));
    }
    if !radii.iter().tuple_windows().all(|(a, b)| a < b) {
        return Err(ShellMeshError::invalid_resolution(
            "custom spacing must produce strictly increasing radii",
        ));
    }
    let tol = ENDPOINT_TOL * outer_radius.abs();
    let first = radii[0];
    let last = radii[radii.len() - 1];
    if (first - inner_radius).abs() > tol || (last - outer_radius).abs() > tol {
        return Err(ShellMeshError::invalid_resolution(format!(
            "custom spacing endpoints [{first}, {last}] do not match the requested \
             shell [{inner_radius}, {outer_radius}]"
        )));
    }
    Ok(())
}
