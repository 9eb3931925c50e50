//! Strong, zero-cost handles for mesh entities.
//!
//! All IDs are zero-based row indices into flat arrays: a `VertexId` indexes
//! the canonical layer's vertex arena, a `LayerId` indexes the radial stack,
//! and a `NodeId` is the flattened `layer · N + vertex` index a solver uses
//! to address its state vectors. Because they are row indices, no sentinel
//! value is reserved; `repr(transparent)` keeps each the size of its raw
//! integer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a vertex within the canonical horizontal layer.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct VertexId(pub(crate) u32);

/// Index of a radial layer, 0 at the inner boundary.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct LayerId(pub(crate) u32);

/// Flattened global node index: `layer · vertex_count + vertex`.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct NodeId(pub(crate) u64);

impl VertexId {
    /// Wrap a raw vertex index.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        VertexId(raw)
    }

    /// The raw index, for use as an array subscript.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl LayerId {
    /// Wrap a raw layer index.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        LayerId(raw)
    }

    /// The raw index, for use as an array subscript.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl NodeId {
    /// Wrap a raw global node index.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        NodeId(raw)
    }

    /// The raw index, for use as a solver row index.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VertexId").field(&self.0).finish()
    }
}

impl fmt::Debug for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LayerId").field(&self.0).finish()
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeId").field(&self.0).finish()
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
