//! Per-node unknown slots: one fixed-size record of solver scalars per
//! global node.
//!
//! Every node owns exactly [`Unknown::COUNT`] scalars — dynamic pressure,
//! three velocity components, temperature — packed at stride
//! `Unknown::COUNT` into one flat buffer indexed by global node ID. The
//! builder zero-initializes the buffer and never writes it again; filling in
//! values is the solver collaborator's job, through
//! [`Mesh::fields_mut`](crate::mesh::Mesh::fields_mut).

use crate::data::storage::{Storage, VecStorage};
use crate::topology::ids::NodeId;
use serde::{Deserialize, Serialize};

/// The unknowns carried by every node, in slot order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unknown {
    /// Dynamic pressure.
    Pressure,
    /// Velocity, x component.
    VelocityX,
    /// Velocity, y component.
    VelocityY,
    /// Velocity, z component.
    VelocityZ,
    /// Temperature.
    Temperature,
}

impl Unknown {
    /// Scalar slots per node.
    pub const COUNT: usize = 5;

    /// All unknowns in slot order.
    pub const ALL: [Unknown; Unknown::COUNT] = [
        Unknown::Pressure,
        Unknown::VelocityX,
        Unknown::VelocityY,
        Unknown::VelocityZ,
        Unknown::Temperature,
    ];

    /// Offset of this unknown inside a node's record.
    #[inline]
    pub const fn slot(self) -> usize {
        match self {
            Unknown::Pressure => 0,
            Unknown::VelocityX => 1,
            Unknown::VelocityY => 2,
            Unknown::VelocityZ => 3,
            Unknown::Temperature => 4,
        }
    }
}

/// Flat unknown-slot storage over all nodes of a mesh.
#[derive(Debug, Clone)]
pub struct NodeFields<S: Storage<f64> = VecStorage<f64>> {
    node_count: usize,
    data: S,
}

impl<S: Storage<f64>> NodeFields<S> {
    /// Zero-initialized storage for `node_count` nodes.
    pub(crate) fn zeroed(node_count: usize) -> Self {
        NodeFields {
            node_count,
            data: S::with_len(node_count * Unknown::COUNT, 0.0),
        }
    }

    /// Number of nodes covered.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Total scalar count, `node_count · Unknown::COUNT`.
    #[inline]
    pub fn scalar_count(&self) -> usize {
        self.data.len()
    }

    /// The record of `node`: one slice of [`Unknown::COUNT`] scalars in
    /// [`Unknown::ALL`] order.
    ///
    /// # Panics
    /// Panics if `node` is out of range.
    #[inline]
    pub fn node(&self, node: NodeId) -> &[f64] {
        let start = node.index() * Unknown::COUNT;
        &self.data.as_slice()[start..start + Unknown::COUNT]
    }

    /// Mutable record of `node`, for solver collaborators.
    ///
    /// # Panics
    /// Panics if `node` is out of range.
    #[inline]
    pub fn node_mut(&mut self, node: NodeId) -> &mut [f64] {
        let start = node.index() * Unknown::COUNT;
        &mut self.data.as_mut_slice()[start..start + Unknown::COUNT]
    }

    /// One scalar of one node.
    ///
    /// # Panics
    /// Panics if `node` is out of range.
    #[inline]
    pub fn get(&self, node: NodeId, unknown: Unknown) -> f64 {
        self.node(node)[unknown.slot()]
    }

    /// Write one scalar of one node.
    ///
    /// # Panics
    /// Panics if `node` is out of range.
    #[inline]
    pub fn set(&mut self, node: NodeId, unknown: Unknown, value: f64) {
        self.node_mut(node)[unknown.slot()] = value;
    }

    /// The whole buffer, node-major at stride [`Unknown::COUNT`] — the shape
    /// a solver assembles its state vector from.
    #[inline]
    pub fn values(&self) -> &[f64] {
        self.data.as_slice()
    }

    /// Mutable whole-buffer view, for bulk initialization by a solver.
    #[inline]
    pub fn values_mut(&mut self) -> &mut [f64] {
        self.data.as_mut_slice()
    }

    /// Iterate `(node, record)` pairs in ascending node order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[f64])> {
        self.data
            .as_slice()
            .chunks_exact(Unknown::COUNT)
            .enumerate()
            .map(|(i, chunk)| (NodeId::new(i as u64), chunk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(raw: u64) -> NodeId {
        NodeId::new(raw)
    }

    #[test]
    fn zeroed_layout() {
        let f: NodeFields = NodeFields::zeroed(3);
        assert_eq!(f.node_count(), 3);
        assert_eq!(f.scalar_count(), 15);
        assert!(f.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn slot_offsets_are_stable() {
        for (i, u) in Unknown::ALL.iter().enumerate() {
            assert_eq!(u.slot(), i);
        }
        assert_eq!(Unknown::ALL.len(), Unknown::COUNT);
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut f: NodeFields = NodeFields::zeroed(2);
        f.set(node(1), Unknown::Temperature, 1600.0);
        f.set(node(1), Unknown::VelocityY, -0.25);
        assert_eq!(f.get(node(1), Unknown::Temperature), 1600.0);
        assert_eq!(f.get(node(1), Unknown::VelocityY), -0.25);
        // Node 0 untouched.
        assert!(f.node(node(0)).iter().all(|&v| v == 0.0));
        assert_eq!(f.node(node(1)), &[0.0, 0.0, -0.25, 0.0, 1600.0]);
    }

    #[test]
    fn records_are_contiguous_node_major() {
        let mut f: NodeFields = NodeFields::zeroed(2);
        f.set(node(0), Unknown::Pressure, 1.0);
        f.set(node(1), Unknown::Pressure, 2.0);
        assert_eq!(f.values()[0], 1.0);
        assert_eq!(f.values()[Unknown::COUNT], 2.0);
    }

    #[test]
    fn iter_is_ordered() {
        let f: NodeFields = NodeFields::zeroed(3);
        let ids: Vec<u64> = f.iter().map(|(n, _)| n.get()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!(f.iter().all(|(_, rec)| rec.len() == Unknown::COUNT));
    }

    #[test]
    fn unknown_serde_round_trip() {
        let s = serde_json::to_string(&Unknown::VelocityZ).unwrap();
        let back: Unknown = serde_json::from_str(&s).unwrap();
        assert_eq!(back, Unknown::VelocityZ);
    }
}
