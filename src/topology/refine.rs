//! Recursive subdivision of the base icosahedron with shared-midpoint
//! deduplication.
//!
//! Each refinement pass owns a build-local edge-to-midpoint map that is
//! created at the start of the pass and dropped at its end; nothing is
//! shared across passes or across concurrent builds. Vertex IDs are assigned
//! in a fixed order (base vertices first, then midpoints in pass order,
//! visiting triangles by index and each triangle's edges in winding order),
//! so two builds at the same level produce identical ID assignments.

use crate::geometry::sphere::slerp_midpoint;
use crate::geometry::vector::Point3;
use crate::mesh_error::ShellMeshError;
use crate::topology::icosahedron::{BASE_TRIANGLE_COUNT, IcosahedronTable};
use crate::topology::ids::VertexId;
use crate::topology::triangle::{EdgeKey, Triangle};
use hashbrown::HashMap;
use log::debug;

/// Largest supported subdivision level.
///
/// Level 10 already means 10,485,762 vertices per layer; the cap keeps
/// vertex IDs comfortably inside `u32` and refuses absurd requests eagerly
/// instead of thrashing memory.
pub const MAX_SUBDIVISIONS: u32 = 10;

/// Vertices in the canonical layer at level `k`: `2 + 10·(2^k)²`.
#[inline]
pub fn expected_vertex_count(subdivisions: u32) -> usize {
    let m = 1usize << subdivisions;
    2 + 10 * m * m
}

/// Triangles in the canonical layer at level `k`: `20·(2^k)²`.
#[inline]
pub fn expected_triangle_count(subdivisions: u32) -> usize {
    let m = 1usize << subdivisions;
    20 * m * m
}

/// Undirected edges in the canonical layer at level `k`: `30·(2^k)²`.
#[inline]
pub fn expected_edge_count(subdivisions: u32) -> usize {
    let m = 1usize << subdivisions;
    30 * m * m
}

/// Flat vertex/triangle arenas produced by [`refine`].
#[derive(Debug, Clone)]
pub(crate) struct RefinedTopology {
    pub positions: Vec<Point3>,
    pub triangles: Vec<Triangle>,
}

/// Subdivide `table` `subdivisions` times.
///
/// # Errors
/// - [`ShellMeshError::InvalidResolution`] if `subdivisions` exceeds
///   [`MAX_SUBDIVISIONS`].
/// - [`ShellMeshError::InvariantViolation`] if the produced vertex or
///   triangle count disagrees with the closed-form prediction, which would
///   mean the midpoint deduplication is defective.
pub(crate) fn refine(
    table: &IcosahedronTable,
    subdivisions: u32,
) -> Result<RefinedTopology, ShellMeshError> {
    if subdivisions > MAX_SUBDIVISIONS {
        return Err(ShellMeshError::invalid_resolution(format!(
            "subdivision level {subdivisions} exceeds the supported maximum {MAX_SUBDIVISIONS}"
        )));
    }

    let mut positions: Vec<Point3> = Vec::with_capacity(expected_vertex_count(subdivisions));
    positions.extend_from_slice(&table.vertices);
    let mut triangles: Vec<Triangle> = Vec::with_capacity(BASE_TRIANGLE_COUNT);
    triangles.extend_from_slice(&table.triangles);

    for pass in 0..subdivisions {
        let edge_count = expected_edge_count(pass);
        // Pass-local dedup map: every edge's midpoint resolves to exactly
        // one new vertex, regardless of which adjacent triangle asks first.
        let mut midpoints: HashMap<EdgeKey, VertexId> = HashMap::with_capacity(edge_count);
        // Parent edges in ID-assignment order; positions are filled in
        // afterwards so the coordinate evaluation can run in parallel.
        let mut parents: Vec<EdgeKey> = Vec::with_capacity(edge_count);
        let mut next_id = positions.len() as u32;

        let mut subdivided: Vec<Triangle> = Vec::with_capacity(triangles.len() * 4);
        for tri in &triangles {
            let [a, b, c] = tri.vertices();
            let mab = midpoint_id(&mut midpoints, &mut parents, &mut next_id, a, b);
            let mbc = midpoint_id(&mut midpoints, &mut parents, &mut next_id, b, c);
            let mca = midpoint_id(&mut midpoints, &mut parents, &mut next_id, c, a);
            subdivided.extend_from_slice(&[
                Triangle::new(a, mab, mca),
                Triangle::new(b, mbc, mab),
                Triangle::new(c, mca, mbc),
                Triangle::new(mab, mbc, mca),
            ]);
        }

        let midpoint_positions = edge_midpoint_positions(&positions, &parents)?;
        positions.extend(midpoint_positions);
        triangles = subdivided;
        debug!(
            "refinement pass {}/{}: {} vertices, {} triangles",
            pass + 1,
            subdivisions,
            positions.len(),
            triangles.len()
        );
    }

    check_counts(subdivisions, positions.len(), triangles.len())?;
    Ok(RefinedTopology {
        positions,
        triangles,
    })
}

/// Midpoint vertex ID for the edge `{a, b}`, assigning the next ID on first
/// sight and recording the parent edge for later coordinate evaluation.
#[inline]
fn midpoint_id(
    midpoints: &mut HashMap<EdgeKey, VertexId>,
    parents: &mut Vec<EdgeKey>,
    next_id: &mut u32,
    a: VertexId,
    b: VertexId,
) -> VertexId {
    let key = EdgeKey::new(a, b);
    *midpoints.entry(key).or_insert_with(|| {
        let id = VertexId::new(*next_id);
        *next_id += 1;
        parents.push(key);
        id
    })
}

#[cfg(not(feature = "rayon"))]
fn edge_midpoint_positions(
    positions: &[Point3],
    parents: &[EdgeKey],
) -> Result<Vec<Point3>, ShellMeshError> {
    parents
        .iter()
        .map(|e| slerp_midpoint(positions[e.lo().index()], positions[e.hi().index()]))
        .collect()
}

/// Coordinate evaluation is independent per edge; the deterministic part of
/// the pass (ID assignment) already happened, so order of evaluation does
/// not affect the result.
#[cfg(feature = "rayon")]
fn edge_midpoint_positions(
    positions: &[Point3],
    parents: &[EdgeKey],
) -> Result<Vec<Point3>, ShellMeshError> {
    use rayon::prelude::*;
    parents
        .par_iter()
        .map(|e| slerp_midpoint(positions[e.lo().index()], positions[e.hi().index()]))
        .collect()
}

fn check_counts(
    subdivisions: u32,
    vertices: usize,
    triangles: usize,
) -> Result<(), ShellMeshError> {
    let expected_vertices = expected_vertex_count(subdivisions);
    if vertices != expected_vertices {
        return Err(ShellMeshError::InvariantViolation {
            entity: "vertices",
            expected: expected_vertices,
            found: vertices,
        });
    }
    let expected_triangles = expected_triangle_count(subdivisions);
    if triangles != expected_triangles {
        return Err(ShellMeshError::InvariantViolation {
            entity: "triangles",
            expected: expected_triangles,
            found: triangles,
        });
    }
    Ok(())
}
