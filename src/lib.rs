//! # shell-mesh
//!
//! shell-mesh is a deterministic generator and indexer for icosahedral
//! spherical-shell meshes, the horizontal-layer-times-radial-stack
//! discretization used by finite-difference and finite-volume codes for
//! planetary mantles. Given a refinement level `k` and an inner/outer
//! radius pair it produces every node position, the triangular horizontal
//! connectivity, the radial layer connectivity, and the lookup structures a
//! solver needs to iterate neighbors, layers, and per-node unknowns without
//! recomputation.
//!
//! ## Features
//! - Recursive icosahedron subdivision with shared-midpoint deduplication
//!   and closed-form count self-checks
//! - Radial layer stack with pluggable radius-distribution policies
//! - Flat, arena-style node indexing: global IDs double as solver row
//!   indices; adjacency is CSR over contiguous memory
//! - Fixed five-slot unknown layout per node (pressure, velocity x/y/z,
//!   temperature), zero-initialized for the solver
//!
//! ## Determinism
//!
//! Generation is a pure function of `(k, inner_radius, outer_radius,
//! spacing)`: two builds with identical parameters produce identical vertex
//! IDs, coordinates, and neighbor-list orderings. The optional `rayon`
//! feature parallelizes midpoint coordinate evaluation without changing any
//! output bit.
//!
//! ## Scope
//!
//! This crate only generates and indexes the mesh. Solving PDEs on it,
//! serializing it, and partitioning it across ranks are jobs for external
//! collaborators working through the [`Mesh`] accessors.
//!
//! ## Usage
//! ```rust
//! use shell_mesh::prelude::*;
//!
//! # fn try_main() -> Result<(), ShellMeshError> {
//! let mesh = build_mesh(2, 3480.0, 6370.0)?;
//! assert_eq!(mesh.layer_count(), 3);
//! assert_eq!(mesh.vertices_per_layer(), 162);
//! let node = mesh.node_id(LayerId::new(1), VertexId::new(0));
//! assert_eq!(mesh.radial_neighbors(node).count(), 2);
//! # Ok(())
//! # }
//! # try_main().unwrap();
//! ```

#![warn(missing_docs)]

pub mod data;
pub mod geometry;
pub mod index;
pub mod mesh;
pub mod mesh_error;
pub mod radial;
pub mod topology;

pub use mesh::{Mesh, build_mesh, build_mesh_with};
pub use mesh_error::ShellMeshError;

/// A convenient prelude to import the most-used types and entry points.
pub mod prelude {
    pub use crate::data::fields::{NodeFields, Unknown};
    pub use crate::data::storage::{Storage, VecStorage};
    pub use crate::index::{NodeIndex, RadialNeighbors};
    pub use crate::mesh::{Mesh, build_mesh, build_mesh_with};
    pub use crate::mesh_error::ShellMeshError;
    pub use crate::radial::{RadialSpacing, layer_count};
    pub use crate::topology::icosahedron::base_icosahedron;
    pub use crate::topology::ids::{LayerId, NodeId, VertexId};
    pub use crate::topology::layer::LayerTopology;
    pub use crate::topology::triangle::{EdgeKey, Triangle};
}
