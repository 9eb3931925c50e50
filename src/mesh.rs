//! The immutable mesh aggregate and its build entry points.
//!
//! [`build_mesh`] is the single way to obtain a [`Mesh`]: parameters are
//! validated before any construction work, the canonical layer is refined
//! and self-checked, and the finished aggregate is read-only apart from the
//! solver-facing unknown-slot buffer. A different resolution or radius range
//! means a new build; nothing is refined or mutated in place.

use crate::data::fields::NodeFields;
use crate::geometry::vector::{Point3, scale};
use crate::index::{NodeIndex, RadialNeighbors};
use crate::mesh_error::ShellMeshError;
use crate::radial::{RadialSpacing, layer_radii};
use crate::topology::ids::{LayerId, NodeId, VertexId};
use crate::topology::layer::LayerTopology;
use crate::topology::triangle::Triangle;
use log::debug;
use std::sync::Arc;

/// Build a spherical-shell mesh with uniform radial spacing.
///
/// `subdivisions` is the icosahedron refinement level `k`; the shell spans
/// `[inner_radius, outer_radius]` with `2^k/2 + 1` layers.
///
/// # Errors
/// - [`ShellMeshError::InvalidResolution`] for out-of-range `subdivisions`
///   or radius parameters (checked before any construction).
/// - [`ShellMeshError::InvariantViolation`] if the refinement self-check
///   fails; no partial mesh is ever returned.
/// - [`ShellMeshError::DegenerateInput`] if geometry primitives receive
///   undefined input, which the fixed base table rules out in practice.
pub fn build_mesh(
    subdivisions: u32,
    inner_radius: f64,
    outer_radius: f64,
) -> Result<Mesh, ShellMeshError> {
    build_mesh_with(
        subdivisions,
        inner_radius,
        outer_radius,
        RadialSpacing::Uniform,
    )
}

/// Build a spherical-shell mesh with a caller-chosen radial spacing policy.
///
/// See [`build_mesh`] for the error contract; a custom spacing whose output
/// is not strictly increasing from `inner_radius` to `outer_radius` is
/// rejected as [`ShellMeshError::InvalidResolution`] before assembly.
pub fn build_mesh_with(
    subdivisions: u32,
    inner_radius: f64,
    outer_radius: f64,
    spacing: RadialSpacing,
) -> Result<Mesh, ShellMeshError> {
    // Parameter validation first: no refinement work for bad inputs.
    let radii = layer_radii(subdivisions, inner_radius, outer_radius, &spacing)?;
    let layer = Arc::new(LayerTopology::build(subdivisions)?);
    let index = NodeIndex::new(Arc::clone(&layer), radii.len());
    let fields = NodeFields::zeroed(index.node_count());
    debug!(
        "built mesh: level {subdivisions}, {} layers, {} nodes, {} unknowns",
        radii.len(),
        index.node_count(),
        fields.scalar_count()
    );
    Ok(Mesh {
        subdivisions,
        layer,
        radii,
        index,
        fields,
    })
}

/// An immutable icosahedral spherical-shell mesh.
///
/// The aggregate owns the shared horizontal topology, the layer radii, the
/// node index, and the per-node unknown slots. Topology and geometry are
/// fixed after the build; only [`fields_mut`](Self::fields_mut) exposes
/// mutable state, and that buffer belongs to the solver. The finished mesh
/// is `Send + Sync` and safe to share read-only across threads.
#[derive(Debug, Clone)]
pub struct Mesh {
    subdivisions: u32,
    layer: Arc<LayerTopology>,
    radii: Vec<f64>,
    index: NodeIndex,
    fields: NodeFields,
}

impl Mesh {
    /// Refinement level `k` this mesh was built at.
    #[inline]
    pub fn subdivisions(&self) -> u32 {
        self.subdivisions
    }

    /// Number of radial layers.
    #[inline]
    pub fn layer_count(&self) -> usize {
        self.radii.len()
    }

    /// Vertices per horizontal layer.
    #[inline]
    pub fn vertices_per_layer(&self) -> usize {
        self.layer.vertex_count()
    }

    /// Triangles per horizontal layer.
    #[inline]
    pub fn triangles_per_layer(&self) -> usize {
        self.layer.triangle_count()
    }

    /// Total node count across all layers.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.index.node_count()
    }

    /// Radius of one layer.
    ///
    /// # Panics
    /// Panics if `layer` is out of range.
    #[inline]
    pub fn radius(&self, layer: LayerId) -> f64 {
        self.radii[layer.index()]
    }

    /// All layer radii, strictly increasing from the inner to the outer
    /// boundary.
    #[inline]
    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    /// Inner boundary radius.
    #[inline]
    pub fn inner_radius(&self) -> f64 {
        self.radii[0]
    }

    /// Outer boundary radius.
    #[inline]
    pub fn outer_radius(&self) -> f64 {
        self.radii[self.radii.len() - 1]
    }

    /// The shared horizontal topology (identical for every layer).
    #[inline]
    pub fn layer_topology(&self) -> &LayerTopology {
        &self.layer
    }

    /// The shared triangle list of every layer.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        self.layer.triangles()
    }

    /// The node index.
    #[inline]
    pub fn index(&self) -> &NodeIndex {
        &self.index
    }

    /// Flattened global ID of `(layer, vertex)`.
    #[inline]
    pub fn node_id(&self, layer: LayerId, vertex: VertexId) -> NodeId {
        self.index.node_id(layer, vertex)
    }

    /// Split a global node ID back into `(layer, vertex)`.
    #[inline]
    pub fn decompose(&self, node: NodeId) -> (LayerId, VertexId) {
        self.index.decompose(node)
    }

    /// All nodes in ascending global-ID order.
    #[inline]
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> {
        self.index.nodes()
    }

    /// Cartesian position of `node`: its layer's radius along the unit
    /// vector of its vertex, so the norm equals the layer radius.
    #[inline]
    pub fn node_position(&self, node: NodeId) -> Point3 {
        let (layer, vertex) = self.index.decompose(node);
        scale(self.layer.position(vertex), self.radii[layer.index()])
    }

    /// `(longitude, latitude)` of `node` in radians; radially aligned nodes
    /// share lateral coordinates.
    #[inline]
    pub fn node_lon_lat(&self, node: NodeId) -> (f64, f64) {
        let (_, vertex) = self.index.decompose(node);
        self.layer.lon_lat(vertex)
    }

    /// Horizontal (same-layer) neighbors of `node` in ascending order.
    #[inline]
    pub fn horizontal_neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.index.horizontal_neighbors(node)
    }

    /// Radial neighbors of `node` (at most one inward, one outward).
    #[inline]
    pub fn radial_neighbors(&self, node: NodeId) -> RadialNeighbors {
        self.index.radial_neighbors(node)
    }

    /// Vertex nearest to `(lon, lat)` in radians, on the shared layer.
    #[inline]
    pub fn nearest_vertex(&self, lon: f64, lat: f64) -> VertexId {
        self.layer.nearest_vertex(lon, lat)
    }

    /// The unknown-slot storage, zero-initialized by the build.
    #[inline]
    pub fn fields(&self) -> &NodeFields {
        &self.fields
    }

    /// Mutable unknown-slot storage, for solver collaborators. The mesh
    /// itself never writes through this.
    #[inline]
    pub fn fields_mut(&mut self) -> &mut NodeFields {
        &mut self.fields
    }
}
