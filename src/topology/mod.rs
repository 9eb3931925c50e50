//! Mesh topology: strongly-typed IDs, triangles, the base icosahedron, the
//! refinement machinery, and the canonical horizontal layer.

pub mod icosahedron;
pub mod ids;
pub mod layer;
pub mod refine;
pub mod triangle;

pub use icosahedron::{IcosahedronTable, base_icosahedron};
pub use ids::{LayerId, NodeId, VertexId};
pub use layer::LayerTopology;
pub use triangle::{EdgeKey, Triangle};
