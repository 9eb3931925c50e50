//! `ShellMeshError`: unified error type for the shell-mesh public APIs.
//!
//! Every fallible operation in this crate reports through this enum, and all
//! errors are raised eagerly at the point of violation: a failed build never
//! hands back a partial mesh.

use thiserror::Error;

/// Unified error type for shell-mesh operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShellMeshError {
    /// Geometry input for which the requested primitive is undefined, such as
    /// normalizing the zero vector or bisecting an antipodal edge. The base
    /// icosahedron is fixed, so seeing this indicates a defect upstream, not
    /// bad user input.
    #[error("degenerate geometry input: {0}")]
    DegenerateInput(String),

    /// Post-construction entity count differs from the closed-form prediction.
    /// Always fatal: it means the midpoint deduplication produced a wrong
    /// topology and the build must be discarded.
    #[error("mesh invariant violated: expected {expected} {entity}, found {found}")]
    InvariantViolation {
        /// Entity kind whose count is wrong ("vertices", "triangles", ...).
        entity: &'static str,
        /// Count predicted by the refinement-level formula.
        expected: usize,
        /// Count actually produced.
        found: usize,
    },

    /// Resolution or radius parameters rejected before any construction work
    /// begins. Recoverable: the caller can retry with corrected parameters.
    #[error("invalid resolution: {0}")]
    InvalidResolution(String),
}

impl ShellMeshError {
    /// Shorthand used by validation code throughout the crate.
    pub(crate) fn degenerate(message: impl Into<String>) -> Self {
        ShellMeshError::DegenerateInput(message.into())
    }

    /// Shorthand used by parameter checks throughout the crate.
    pub(crate) fn invalid_resolution(message: impl Into<String>) -> Self {
        ShellMeshError::InvalidResolution(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        let e = ShellMeshError::degenerate("cannot normalize the zero vector");
        assert_eq!(
            e.to_string(),
            "degenerate geometry input: cannot normalize the zero vector"
        );

        let e = ShellMeshError::InvariantViolation {
            entity: "vertices",
            expected: 42,
            found: 41,
        };
        assert_eq!(
            e.to_string(),
            "mesh invariant violated: expected 42 vertices, found 41"
        );

        let e = ShellMeshError::invalid_resolution("outer radius must exceed inner radius");
        assert_eq!(
            e.to_string(),
            "invalid resolution: outer radius must exceed inner radius"
        );
    }

    #[test]
    fn errors_are_comparable() {
        let a = ShellMeshError::degenerate("x");
        let b = ShellMeshError::degenerate("x");
        assert_eq!(a, b);
        assert_ne!(a, ShellMeshError::invalid_resolution("x"));
    }
}
