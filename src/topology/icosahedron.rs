//! The fixed base icosahedron: 12 vertices and 20 CCW faces inscribed in
//! the unit sphere.
//!
//! The table is immutable constant data behind a `Lazy` static (the vertex
//! coordinates involve `sqrt`, which cannot be evaluated in a `const`
//! context). Builders take it by shared reference, so concurrent builds
//! never contend on mutable global state.

use crate::geometry::vector::Point3;
use crate::topology::ids::VertexId;
use crate::topology::triangle::Triangle;
use once_cell::sync::Lazy;

/// Vertex count of the base icosahedron.
pub const BASE_VERTEX_COUNT: usize = 12;
/// Face count of the base icosahedron.
pub const BASE_TRIANGLE_COUNT: usize = 20;

/// The base geometry handed to the mesh builder.
#[derive(Debug, Clone)]
pub struct IcosahedronTable {
    /// Unit-sphere positions of the 12 base vertices.
    pub vertices: [Point3; BASE_VERTEX_COUNT],
    /// The 20 faces, counter-clockwise seen from outside.
    pub triangles: [Triangle; BASE_TRIANGLE_COUNT],
}

static BASE: Lazy<IcosahedronTable> = Lazy::new(build_table);

/// The canonical base icosahedron.
pub fn base_icosahedron() -> &'static IcosahedronTable {
    &BASE
}

fn build_table() -> IcosahedronTable {
    // Golden-ratio construction: vertices are cyclic permutations of
    // (±1, ±1/φ, 0), normalized onto the unit sphere.
    let phi = (1.0 + 5.0_f64.sqrt()) * 0.5;
    let a = 1.0;
    let b = 1.0 / phi;
    let n = (a * a + b * b).sqrt();
    let (a, b) = (a / n, b / n);

    let vertices: [Point3; BASE_VERTEX_COUNT] = [
        [-a, b, 0.0],
        [a, b, 0.0],
        [-a, -b, 0.0],
        [a, -b, 0.0],
        [0.0, -a, b],
        [0.0, a, b],
        [0.0, -a, -b],
        [0.0, a, -b],
        [b, 0.0, -a],
        [b, 0.0, a],
        [-b, 0.0, -a],
        [-b, 0.0, a],
    ];

    const FACES: [[u32; 3]; BASE_TRIANGLE_COUNT] = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    let triangles = FACES.map(|[i, j, k]| {
        Triangle::new(VertexId::new(i), VertexId::new(j), VertexId::new(k))
    });

    IcosahedronTable {
        vertices,
        triangles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::vector::{cross, dot, norm};

    #[test]
    fn vertices_are_unit() {
        for v in base_icosahedron().vertices {
            assert!((norm(v) - 1.0).abs() < 1e-15);
        }
    }

    #[test]
    fn faces_reference_valid_vertices() {
        for t in base_icosahedron().triangles {
            for v in t.vertices() {
                assert!((v.get() as usize) < BASE_VERTEX_COUNT);
            }
        }
    }

    #[test]
    fn faces_wind_outward() {
        let table = base_icosahedron();
        for t in table.triangles {
            let [i, j, k] = t.vertices();
            let (a, b, c) = (
                table.vertices[i.index()],
                table.vertices[j.index()],
                table.vertices[k.index()],
            );
            // CCW from outside: the face normal points away from the origin.
            assert!(dot(cross(a, b), c) > 0.0);
        }
    }

    #[test]
    fn every_vertex_has_degree_five() {
        let table = base_icosahedron();
        let mut degree = [0usize; BASE_VERTEX_COUNT];
        for t in table.triangles {
            for v in t.vertices() {
                degree[v.index()] += 1;
            }
        }
        // Each vertex belongs to 5 faces on the icosahedron.
        assert!(degree.iter().all(|&d| d == 5));
    }

    #[test]
    fn edges_are_shared_by_two_faces() {
        use std::collections::HashMap;
        let mut counts = HashMap::new();
        for t in base_icosahedron().triangles {
            for e in t.edges() {
                *counts.entry(e).or_insert(0usize) += 1;
            }
        }
        assert_eq!(counts.len(), 30);
        assert!(counts.values().all(|&c| c == 2));
    }
}
