//! Mesh construction from face-vertex lists.
//!
//! This module builds closed half-edge meshes from the polygon lists found in
//! most mesh sources, and converts a mesh back to that form for renderers.

use std::collections::HashMap;

use nalgebra::Point3;

use super::halfedge::{HalfEdge, HalfEdgeMesh};
use super::index::{CornerId, HalfEdgeId, MeshIndex};
use crate::error::{MeshError, Result};

/// Build a closed half-edge mesh from corner positions and polygons.
///
/// # Arguments
/// * `positions` - Corner positions
/// * `polygons` - Corner index lists, counter-clockwise seen from outside
///
/// Every edge must be shared by exactly two polygons with opposite
/// directions, and every corner must be used by a single fan of polygons.
///
/// # Example
/// ```
/// use trellis::mesh::{build_from_polygons, HalfEdgeMesh};
/// use nalgebra::Point3;
///
/// let positions = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// // A triangle seen from both sides.
/// let polygons = vec![[0, 1, 2], [2, 1, 0]];
///
/// let mesh: HalfEdgeMesh = build_from_polygons(&positions, &polygons).unwrap();
/// assert_eq!(mesh.num_corners(), 3);
/// assert_eq!(mesh.num_polygons(), 2);
/// assert!(mesh.is_renderable());
/// ```
pub fn build_from_polygons<I: MeshIndex, P: AsRef<[usize]>>(
    positions: &[Point3<f64>],
    polygons: &[P],
) -> Result<HalfEdgeMesh<I>> {
    if polygons.is_empty() {
        return Err(MeshError::EmptyMesh);
    }

    let mut num_halfedges = 0;
    for (pi, polygon) in polygons.iter().enumerate() {
        let polygon = polygon.as_ref();
        if polygon.len() < 3 {
            return Err(MeshError::DegeneratePolygon { polygon: pi });
        }
        for (k, &ci) in polygon.iter().enumerate() {
            if ci >= positions.len() {
                return Err(MeshError::InvalidCornerIndex { polygon: pi, corner: ci });
            }
            if polygon[..k].contains(&ci) {
                return Err(MeshError::DegeneratePolygon { polygon: pi });
            }
        }
        num_halfedges += polygon.len();
    }

    let mut mesh = HalfEdgeMesh::with_capacity(positions.len(), num_halfedges, polygons.len());

    let corner_ids: Vec<CornerId<I>> = positions.iter().map(|&pos| mesh.add_corner(pos)).collect();

    // Directed edge (c0, c1) -> the half-edge leaving c0 along it.
    let mut edge_map: HashMap<(usize, usize), HalfEdgeId<I>> = HashMap::with_capacity(num_halfedges);
    let mut edges: Vec<(usize, usize)> = Vec::with_capacity(num_halfedges);
    // Successor of each half-edge along its polygon boundary.
    let mut polygon_next: Vec<HalfEdgeId<I>> = Vec::with_capacity(num_halfedges);
    let mut incidence = vec![0usize; positions.len()];

    // First pass: create half-edges and polygons
    for polygon in polygons {
        let polygon = polygon.as_ref();
        let n = polygon.len();
        let base = mesh.num_halfedges();
        let polygon_id = mesh.add_polygon(HalfEdgeId::new(base));

        for k in 0..n {
            let c0 = polygon[k];
            let c1 = polygon[(k + 1) % n];

            let he = mesh.add_halfedge(HalfEdge::with_incidence(corner_ids[c0], polygon_id));
            if edge_map.insert((c0, c1), he).is_some() {
                return Err(MeshError::NonManifoldEdge { c0, c1 });
            }
            edges.push((c0, c1));
            polygon_next.push(HalfEdgeId::new(base + (k + 1) % n));
            incidence[c0] += 1;

            let corner = mesh.corner_mut(corner_ids[c0]);
            if !corner.halfedge.is_valid() {
                corner.halfedge = he;
            }
        }
    }

    // Second pass: link twins
    for (i, &(c0, c1)) in edges.iter().enumerate() {
        let twin = edge_map
            .get(&(c1, c0))
            .copied()
            .ok_or(MeshError::OpenEdge { c0, c1 })?;
        mesh.halfedges[i].twin = twin;
    }

    // Third pass: the half-edge after `he` around its corner is the polygon
    // successor of its twin
    for i in 0..mesh.num_halfedges() {
        let twin = mesh.halfedges[i].twin;
        mesh.halfedges[i].next = polygon_next[twin.index()];
    }

    // Every corner must be reached by exactly one rotation
    for (ci, &count) in incidence.iter().enumerate() {
        if count == 0 {
            return Err(MeshError::IsolatedCorner { corner: ci });
        }
        let degree = mesh.corner_edge_count(corner_ids[ci]);
        if degree != Some(count) {
            return Err(MeshError::NonManifold {
                details: format!(
                    "corner {} has {} incident half-edges but its rotation visits {:?}",
                    ci, count, degree
                ),
            });
        }
    }

    log::debug!(
        "built mesh: {} corners, {} polygons, {} half-edges",
        mesh.num_corners(),
        mesh.num_polygons(),
        mesh.num_halfedges()
    );

    Ok(mesh)
}

/// Convert a half-edge mesh back to a face-vertex representation.
///
/// Returns the corner positions and, for every polygon, its corner indices in
/// boundary order. Triangulating the polygons is left to the consumer.
pub fn to_face_vertex<I: MeshIndex>(mesh: &HalfEdgeMesh<I>) -> (Vec<Point3<f64>>, Vec<Vec<usize>>) {
    let positions: Vec<Point3<f64>> = mesh.corner_ids().map(|c| *mesh.position(c)).collect();

    let polygons: Vec<Vec<usize>> = mesh
        .polygon_ids()
        .map(|p| mesh.polygon_corners(p).map(|c| c.index()).collect())
        .collect();

    (positions, polygons)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetrahedron() -> (Vec<Point3<f64>>, Vec<[usize; 3]>) {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
            Point3::new(0.5, 0.5, 1.0),
        ];
        let polygons = vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
        (positions, polygons)
    }

    #[test]
    fn test_tetrahedron() {
        let (positions, polygons) = tetrahedron();
        let mesh: HalfEdgeMesh<u32> = build_from_polygons(&positions, &polygons).unwrap();

        assert_eq!(mesh.num_corners(), 4);
        assert_eq!(mesh.num_polygons(), 4);
        assert_eq!(mesh.num_halfedges(), 12);
        assert!(mesh.is_renderable());

        for c in mesh.corner_ids() {
            assert_eq!(mesh.corner_edge_count(c), Some(3));
        }
        for p in mesh.polygon_ids() {
            assert_eq!(mesh.polygon_edge_count(p), Some(3));
        }
    }

    #[test]
    fn test_rotation_follows_polygon_successor_of_twin() {
        let (positions, polygons) = tetrahedron();
        let mesh: HalfEdgeMesh<u32> = build_from_polygons(&positions, &polygons).unwrap();

        for he in mesh.halfedge_ids() {
            let next = mesh.next(he);
            assert_eq!(mesh.corner_of(next), mesh.corner_of(he));
            // The polygon across `he` is the polygon of the next half-edge.
            assert_eq!(mesh.polygon_of(next), mesh.polygon_of(mesh.twin(he)));
        }
    }

    #[test]
    fn test_roundtrip() {
        let (positions, polygons) = tetrahedron();
        let mesh: HalfEdgeMesh<u32> = build_from_polygons(&positions, &polygons).unwrap();

        let (out_positions, out_polygons) = to_face_vertex(&mesh);

        assert_eq!(out_positions, positions);
        let expected: Vec<Vec<usize>> = polygons.iter().map(|p| p.to_vec()).collect();
        assert_eq!(out_polygons, expected);
    }

    #[test]
    fn test_empty() {
        let polygons: Vec<[usize; 3]> = Vec::new();
        let result: Result<HalfEdgeMesh<u32>> = build_from_polygons(&[], &polygons);
        assert_eq!(result.unwrap_err(), MeshError::EmptyMesh);
    }

    #[test]
    fn test_invalid_corner_index() {
        let positions = vec![Point3::new(0.0, 0.0, 0.0)];
        let result: Result<HalfEdgeMesh<u32>> = build_from_polygons(&positions, &[[0, 1, 2]]);
        assert_eq!(
            result.unwrap_err(),
            MeshError::InvalidCornerIndex { polygon: 0, corner: 1 }
        );
    }

    #[test]
    fn test_degenerate_polygons() {
        let (positions, _) = tetrahedron();

        let result: Result<HalfEdgeMesh<u32>> = build_from_polygons(&positions, &[vec![0, 1]]);
        assert_eq!(result.unwrap_err(), MeshError::DegeneratePolygon { polygon: 0 });

        let result: Result<HalfEdgeMesh<u32>> = build_from_polygons(&positions, &[[0, 1, 0]]);
        assert_eq!(result.unwrap_err(), MeshError::DegeneratePolygon { polygon: 0 });
    }

    #[test]
    fn test_open_edge() {
        let (positions, polygons) = tetrahedron();
        let result: Result<HalfEdgeMesh<u32>> = build_from_polygons(&positions, &polygons[..3]);
        assert!(matches!(result, Err(MeshError::OpenEdge { .. })));
    }

    #[test]
    fn test_repeated_directed_edge() {
        let (positions, _) = tetrahedron();
        let result: Result<HalfEdgeMesh<u32>> =
            build_from_polygons(&positions, &[[0, 1, 2], [0, 1, 3]]);
        assert_eq!(result.unwrap_err(), MeshError::NonManifoldEdge { c0: 0, c1: 1 });
    }

    #[test]
    fn test_isolated_corner() {
        let (mut positions, polygons) = tetrahedron();
        positions.push(Point3::new(9.0, 9.0, 9.0));
        let result: Result<HalfEdgeMesh<u32>> = build_from_polygons(&positions, &polygons);
        assert_eq!(result.unwrap_err(), MeshError::IsolatedCorner { corner: 4 });
    }

    #[test]
    fn test_bowtie_corner_is_non_manifold() {
        // Two double-sided triangles sharing only corner 0.
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(-1.0, -1.0, 0.0),
        ];
        let polygons = vec![[0, 1, 2], [2, 1, 0], [0, 3, 4], [4, 3, 0]];
        let result: Result<HalfEdgeMesh<u32>> = build_from_polygons(&positions, &polygons);
        assert!(matches!(result, Err(MeshError::NonManifold { .. })));
    }
}
