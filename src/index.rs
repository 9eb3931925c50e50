//! Global node indexing over the assembled radial stack.
//!
//! A node is `(layer, vertex)`, flattened to
//! `node_id = layer · vertex_count + vertex` so global IDs double as row
//! indices into solver state vectors. Horizontal adjacency is the canonical
//! layer's CSR index re-based per layer; radial adjacency is pure index
//! arithmetic, at most one step inward and one outward.

use crate::topology::ids::{LayerId, NodeId, VertexId};
use crate::topology::layer::LayerTopology;
use std::sync::Arc;

/// Radial neighbors of one node: inward toward the inner boundary, outward
/// toward the outer boundary. Boundary layers have exactly one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RadialNeighbors {
    /// Same vertex on layer `i − 1`, if any.
    pub inward: Option<NodeId>,
    /// Same vertex on layer `i + 1`, if any.
    pub outward: Option<NodeId>,
}

impl RadialNeighbors {
    /// Number of radial neighbors (1 on boundary layers, 2 otherwise).
    #[inline]
    pub fn count(&self) -> usize {
        self.inward.is_some() as usize + self.outward.is_some() as usize
    }

    /// Inward neighbor first, then outward.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = NodeId> {
        self.inward.into_iter().chain(self.outward)
    }
}

/// Derived lookup structures over the full 3D node set.
///
/// Built once per mesh; all queries are O(1) plus the neighbor-list length,
/// with iteration order stable across repeated builds of identical inputs.
#[derive(Debug, Clone)]
pub struct NodeIndex {
    layer: Arc<LayerTopology>,
    layer_count: usize,
}

impl NodeIndex {
    pub(crate) fn new(layer: Arc<LayerTopology>, layer_count: usize) -> Self {
        debug_assert!(layer_count > 0);
        NodeIndex { layer, layer_count }
    }

    /// Vertices per layer.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.layer.vertex_count()
    }

    /// Radial layers in the stack.
    #[inline]
    pub fn layer_count(&self) -> usize {
        self.layer_count
    }

    /// Total nodes: `vertex_count · layer_count`.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.vertex_count() * self.layer_count
    }

    /// Flattened global ID of `(layer, vertex)`.
    ///
    /// The mapping is `layer · vertex_count + vertex`, stable across builds
    /// with identical inputs.
    #[inline]
    pub fn node_id(&self, layer: LayerId, vertex: VertexId) -> NodeId {
        debug_assert!(layer.index() < self.layer_count);
        debug_assert!(vertex.index() < self.vertex_count());
        NodeId::new(layer.get() as u64 * self.vertex_count() as u64 + vertex.get() as u64)
    }

    /// Inverse of [`node_id`](Self::node_id).
    #[inline]
    pub fn decompose(&self, node: NodeId) -> (LayerId, VertexId) {
        debug_assert!(node.index() < self.node_count());
        let n = self.vertex_count() as u64;
        (
            LayerId::new((node.get() / n) as u32),
            VertexId::new((node.get() % n) as u32),
        )
    }

    /// All nodes in ascending global-ID order.
    #[inline]
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> {
        (0..self.node_count()).map(|i| NodeId::new(i as u64))
    }

    /// Horizontal (same-layer) neighbors of `node`, in ascending vertex
    /// order. Deduplicated and self-free by construction.
    pub fn horizontal_neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let (layer, vertex) = self.decompose(node);
        let base = layer.get() as u64 * self.vertex_count() as u64;
        self.layer
            .neighbors(vertex)
            .iter()
            .map(move |n| NodeId::new(base + n.get() as u64))
    }

    /// Number of horizontal neighbors of `node`.
    pub fn horizontal_degree(&self, node: NodeId) -> usize {
        let (_, vertex) = self.decompose(node);
        self.layer.degree(vertex)
    }

    /// Radial neighbors of `node`: the same vertex one layer inward and one
    /// layer outward, where those layers exist. Never spans more than one
    /// layer step.
    pub fn radial_neighbors(&self, node: NodeId) -> RadialNeighbors {
        let (layer, vertex) = self.decompose(node);
        let inward = (layer.get() > 0)
            .then(|| self.node_id(LayerId::new(layer.get() - 1), vertex));
        let outward = ((layer.index() + 1) < self.layer_count)
            .then(|| self.node_id(LayerId::new(layer.get() + 1), vertex));
        RadialNeighbors { inward, outward }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::layer::LayerTopology;

    fn index(k: u32, layers: usize) -> NodeIndex {
        NodeIndex::new(Arc::new(LayerTopology::build(k).unwrap()), layers)
    }

    #[test]
    fn node_id_round_trip() {
        let idx = index(1, 2);
        for node in idx.nodes() {
            let (layer, vertex) = idx.decompose(node);
            assert_eq!(idx.node_id(layer, vertex), node);
        }
        assert_eq!(idx.node_count(), 2 * 42);
    }

    #[test]
    fn global_ids_are_layer_major() {
        let idx = index(1, 3);
        let n = idx.vertex_count() as u64;
        assert_eq!(
            idx.node_id(LayerId::new(2), VertexId::new(7)).get(),
            2 * n + 7
        );
    }

    #[test]
    fn horizontal_neighbors_stay_in_layer() {
        let idx = index(1, 3);
        for node in idx.nodes() {
            let (layer, _) = idx.decompose(node);
            for neighbor in idx.horizontal_neighbors(node) {
                assert_ne!(neighbor, node);
                let (nl, _) = idx.decompose(neighbor);
                assert_eq!(nl, layer);
            }
        }
    }

    #[test]
    fn radial_neighbor_counts() {
        let idx = index(2, 3);
        for node in idx.nodes() {
            let (layer, vertex) = idx.decompose(node);
            let radial = idx.radial_neighbors(node);
            let boundary = layer.get() == 0 || layer.index() == idx.layer_count() - 1;
            assert_eq!(radial.count(), if boundary { 1 } else { 2 });
            for neighbor in radial.iter() {
                let (nl, nv) = idx.decompose(neighbor);
                assert_eq!(nv, vertex, "radial neighbors keep the vertex");
                assert_eq!(nl.get().abs_diff(layer.get()), 1, "exactly one layer step");
            }
        }
    }

    #[test]
    fn single_layer_stack_has_no_radial_neighbors() {
        let idx = index(0, 1);
        for node in idx.nodes() {
            let radial = idx.radial_neighbors(node);
            assert_eq!(radial.count(), 0);
            assert_eq!(radial.inward, None);
            assert_eq!(radial.outward, None);
        }
    }

    #[test]
    fn neighbor_iteration_is_stable() {
        let a = index(2, 3);
        let b = index(2, 3);
        for node in a.nodes() {
            let na: Vec<_> = a.horizontal_neighbors(node).collect();
            let nb: Vec<_> = b.horizontal_neighbors(node).collect();
            assert_eq!(na, nb);
        }
    }
}
