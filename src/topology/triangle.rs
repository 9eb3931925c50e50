//! Triangles and edge keys over the canonical layer.

use crate::topology::ids::VertexId;
use serde::{Deserialize, Serialize};

/// An ordered vertex triple forming one face of the subdivided icosahedron.
///
/// Winding is counter-clockwise when viewed from outside the sphere, and is
/// preserved through every refinement pass so that surface normals computed
/// from `(v1 - v0) × (v2 - v0)` point outward across the whole mesh.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triangle([VertexId; 3]);

impl Triangle {
    /// Construct from three vertex IDs, keeping the given winding.
    #[inline]
    pub const fn new(v0: VertexId, v1: VertexId, v2: VertexId) -> Self {
        Triangle([v0, v1, v2])
    }

    /// The three vertices in winding order.
    #[inline]
    pub const fn vertices(&self) -> [VertexId; 3] {
        self.0
    }

    /// The three edges in winding order: `(v0,v1)`, `(v1,v2)`, `(v2,v0)`.
    #[inline]
    pub fn edges(&self) -> [EdgeKey; 3] {
        let [a, b, c] = self.0;
        [EdgeKey::new(a, b), EdgeKey::new(b, c), EdgeKey::new(c, a)]
    }

    /// True if `v` is one of this triangle's corners.
    #[inline]
    pub fn contains(&self, v: VertexId) -> bool {
        self.0.contains(&v)
    }
}

/// An undirected edge between two vertices, normalized so that the smaller
/// ID comes first.
///
/// This is the deduplication key of the refinement pass: both triangles
/// adjacent to an edge must resolve its midpoint to the same new vertex, so
/// the key must be independent of traversal direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    lo: VertexId,
    hi: VertexId,
}

impl EdgeKey {
    /// Normalized key for the edge `{a, b}`.
    ///
    /// Self-edges cannot occur in a valid triangulation; debug builds assert
    /// against them.
    #[inline]
    pub fn new(a: VertexId, b: VertexId) -> Self {
        debug_assert_ne!(a, b, "self-edge in triangulation");
        if a <= b {
            EdgeKey { lo: a, hi: b }
        } else {
            EdgeKey { lo: b, hi: a }
        }
    }

    /// The endpoint with the smaller ID.
    #[inline]
    pub const fn lo(self) -> VertexId {
        self.lo
    }

    /// The endpoint with the larger ID.
    #[inline]
    pub const fn hi(self) -> VertexId {
        self.hi
    }
}
