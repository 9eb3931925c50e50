//! The canonical horizontal layer: one subdivided icosahedron with its
//! vertex arena, triangle list, and horizontal-neighbor index.
//!
//! Every radial layer of a mesh shares one `LayerTopology` instance; only
//! the radius applied to the unit-sphere positions differs. Neighbor lists
//! are stored CSR-style (offsets plus one flat ID array) so solver stencils
//! iterate over contiguous memory.

use crate::geometry::sphere::spherical_triangle_area;
use crate::geometry::vector::{Point3, dot, from_lon_lat, to_lon_lat};
use crate::mesh_error::ShellMeshError;
use crate::topology::icosahedron::base_icosahedron;
use crate::topology::ids::VertexId;
use crate::topology::refine::refine;
use crate::topology::triangle::Triangle;
use log::debug;
use smallvec::SmallVec;

/// One horizontal layer's topology at a fixed refinement level.
#[derive(Debug, Clone)]
pub struct LayerTopology {
    subdivisions: u32,
    /// Unit-sphere position of each vertex, indexed by `VertexId`.
    positions: Vec<Point3>,
    /// All faces, consistently wound.
    triangles: Vec<Triangle>,
    /// CSR offsets into `neighbor_ids`, length `vertex_count + 1`.
    neighbor_offsets: Vec<u32>,
    /// Flattened neighbor lists, sorted ascending within each vertex.
    neighbor_ids: Vec<VertexId>,
}

impl LayerTopology {
    /// Build the canonical layer for `subdivisions` refinement passes.
    ///
    /// # Errors
    /// Propagates [`ShellMeshError::InvalidResolution`] for levels above the
    /// supported maximum and [`ShellMeshError::InvariantViolation`] if the
    /// refinement self-check fails.
    pub fn build(subdivisions: u32) -> Result<Self, ShellMeshError> {
        let refined = refine(base_icosahedron(), subdivisions)?;
        let (neighbor_offsets, neighbor_ids) =
            neighbor_index(refined.positions.len(), &refined.triangles);
        debug!(
            "layer topology at level {subdivisions}: {} vertices, {} triangles, {} adjacency entries",
            refined.positions.len(),
            refined.triangles.len(),
            neighbor_ids.len()
        );
        Ok(LayerTopology {
            subdivisions,
            positions: refined.positions,
            triangles: refined.triangles,
            neighbor_offsets,
            neighbor_ids,
        })
    }

    /// Refinement level this layer was built at.
    #[inline]
    pub fn subdivisions(&self) -> u32 {
        self.subdivisions
    }

    /// Number of vertices, `2 + 10·(2^k)²`.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles, `20·(2^k)²`.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// All vertices in ID order.
    #[inline]
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        (0..self.positions.len() as u32).map(VertexId::new)
    }

    /// The triangle list, in deterministic construction order.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Unit-sphere position of `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of range for this layer.
    #[inline]
    pub fn position(&self, v: VertexId) -> Point3 {
        self.positions[v.index()]
    }

    /// All unit-sphere positions, indexed by vertex ID.
    #[inline]
    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    /// `(longitude, latitude)` of `v` in radians.
    #[inline]
    pub fn lon_lat(&self, v: VertexId) -> (f64, f64) {
        to_lon_lat(self.position(v))
    }

    /// Horizontal neighbors of `v`: every vertex sharing a triangle with it,
    /// deduplicated, self-free, sorted ascending.
    ///
    /// # Panics
    /// Panics if `v` is out of range for this layer.
    #[inline]
    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        let lo = self.neighbor_offsets[v.index()] as usize;
        let hi = self.neighbor_offsets[v.index() + 1] as usize;
        &self.neighbor_ids[lo..hi]
    }

    /// Number of horizontal neighbors of `v` (5 for the twelve pentagonal
    /// vertices inherited from the icosahedron, 6 everywhere else).
    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        self.neighbors(v).len()
    }

    /// The vertex whose position is closest to `(lon, lat)` (radians), by
    /// great-circle distance. Ties resolve to the smallest ID.
    pub fn nearest_vertex(&self, lon: f64, lat: f64) -> VertexId {
        let target = from_lon_lat(lon, lat);
        let mut best = 0usize;
        let mut best_dot = f64::NEG_INFINITY;
        for (i, p) in self.positions.iter().enumerate() {
            let d = dot(*p, target);
            if d > best_dot {
                best_dot = d;
                best = i;
            }
        }
        VertexId::new(best as u32)
    }

    /// Dual (Voronoi-like) area of each vertex on the unit sphere: every
    /// triangle's spherical area contributes one third to each of its
    /// corners. The areas sum to the full sphere, `4π`.
    pub fn vertex_areas(&self) -> Vec<f64> {
        let mut areas = vec![0.0; self.positions.len()];
        for t in &self.triangles {
            let [i, j, k] = t.vertices();
            let area = spherical_triangle_area(
                self.positions[i.index()],
                self.positions[j.index()],
                self.positions[k.index()],
            );
            let share = area / 3.0;
            areas[i.index()] += share;
            areas[j.index()] += share;
            areas[k.index()] += share;
        }
        areas
    }
}

/// Build the CSR neighbor index from the triangle list.
///
/// Scratch lists are `SmallVec<[u32; 6]>`: everything except the twelve
/// base vertices has exactly six neighbors, so the scratch stays inline.
fn neighbor_index(
    vertex_count: usize,
    triangles: &[Triangle],
) -> (Vec<u32>, Vec<VertexId>) {
    let mut scratch: Vec<SmallVec<[u32; 6]>> = vec![SmallVec::new(); vertex_count];
    for t in triangles {
        let [a, b, c] = t.vertices();
        scratch[a.index()].push(b.get());
        scratch[a.index()].push(c.get());
        scratch[b.index()].push(a.get());
        scratch[b.index()].push(c.get());
        scratch[c.index()].push(a.get());
        scratch[c.index()].push(b.get());
    }

    let mut offsets = Vec::with_capacity(vertex_count + 1);
    let mut ids = Vec::with_capacity(vertex_count * 6);
    offsets.push(0u32);
    for list in &mut scratch {
        list.sort_unstable();
        list.dedup();
        ids.extend(list.iter().map(|&raw| VertexId::new(raw)));
        offsets.push(ids.len() as u32);
    }
    (offsets, ids)
}

/// Expected count of degree-5 vertices at any level: the twelve originals.
#[cfg(test)]
const PENTAGON_COUNT: usize = 12;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::refine::expected_vertex_count;
    use std::f64::consts::PI;

    #[test]
    fn base_layer_counts_and_degrees() {
        let layer = LayerTopology::build(0).unwrap();
        assert_eq!(layer.vertex_count(), 12);
        assert_eq!(layer.triangle_count(), 20);
        for v in layer.vertices() {
            assert_eq!(layer.degree(v), 5);
        }
    }

    #[test]
    fn refined_layer_has_twelve_pentagons() {
        for k in 1..=3 {
            let layer = LayerTopology::build(k).unwrap();
            let fives = layer.vertices().filter(|&v| layer.degree(v) == 5).count();
            let sixes = layer.vertices().filter(|&v| layer.degree(v) == 6).count();
            assert_eq!(fives, PENTAGON_COUNT, "k={k}");
            assert_eq!(fives + sixes, layer.vertex_count(), "k={k}");
        }
    }

    #[test]
    fn neighbors_are_sorted_self_free_and_symmetric() {
        let layer = LayerTopology::build(2).unwrap();
        for v in layer.vertices() {
            let neigh = layer.neighbors(v);
            assert!(neigh.windows(2).all(|w| w[0] < w[1]), "sorted, deduplicated");
            assert!(!neigh.contains(&v), "no self reference");
            for &n in neigh {
                assert!(layer.neighbors(n).contains(&v), "symmetry {v} <-> {n}");
            }
        }
    }

    #[test]
    fn first_ids_are_the_base_vertices() {
        let layer = LayerTopology::build(2).unwrap();
        let base = base_icosahedron();
        for (i, &p) in base.vertices.iter().enumerate() {
            assert_eq!(layer.position(VertexId::new(i as u32)), p);
        }
    }

    #[test]
    fn vertex_areas_partition_the_sphere() {
        for k in 0..=3 {
            let layer = LayerTopology::build(k).unwrap();
            let total: f64 = layer.vertex_areas().iter().sum();
            let rel_err = (total - 4.0 * PI).abs() / (4.0 * PI);
            assert!(rel_err < 1e-9, "k={k}: rel_err={rel_err}");
        }
    }

    #[test]
    fn nearest_vertex_recovers_each_vertex() {
        let layer = LayerTopology::build(1).unwrap();
        for v in layer.vertices() {
            let (lon, lat) = layer.lon_lat(v);
            assert_eq!(layer.nearest_vertex(lon, lat), v);
        }
    }

    #[test]
    fn expected_vertex_count_helper_agrees() {
        for k in 0..=3 {
            let layer = LayerTopology::build(k).unwrap();
            assert_eq!(layer.vertex_count(), expected_vertex_count(k));
        }
    }
}
