//! Known-valid starting meshes.

use nalgebra::Point3;

use super::builder::build_from_polygons;
use super::halfedge::{HalfEdge, HalfEdgeMesh};
use super::index::{HalfEdgeId, MeshIndex, PolygonId};

/// Faces of the unit cube, counter-clockwise seen from outside.
const CUBE_FACES: [[usize; 4]; 6] = [
    [0, 3, 2, 1], // bottom
    [4, 5, 6, 7], // top
    [0, 1, 5, 4], // front
    [2, 3, 7, 6], // back
    [0, 4, 7, 3], // left
    [1, 2, 6, 5], // right
];

/// Build a flat unit square in the z = 0 plane, seen from both sides.
///
/// Polygon 0 is the front (counter-clockwise from +z) and polygon 1 the back.
/// Half-edges `0..4` bound the front, one leaving each corner in order, and
/// half-edge `4 + i` is the twin of half-edge `i`. Each corner has exactly
/// two half-edges.
///
/// ```
/// use trellis::mesh::{make_square, HalfEdgeMesh};
///
/// let square: HalfEdgeMesh = make_square();
/// assert_eq!(square.num_corners(), 4);
/// assert_eq!(square.num_polygons(), 2);
/// assert_eq!(square.num_halfedges(), 8);
/// assert!(square.is_renderable());
/// ```
pub fn make_square<I: MeshIndex>() -> HalfEdgeMesh<I> {
    let mut mesh = HalfEdgeMesh::with_capacity(4, 8, 2);

    let corners = [
        mesh.add_corner(Point3::new(0.0, 0.0, 0.0)),
        mesh.add_corner(Point3::new(1.0, 0.0, 0.0)),
        mesh.add_corner(Point3::new(1.0, 1.0, 0.0)),
        mesh.add_corner(Point3::new(0.0, 1.0, 0.0)),
    ];
    let front: PolygonId<I> = mesh.add_polygon(HalfEdgeId::new(0));
    let back: PolygonId<I> = mesh.add_polygon(HalfEdgeId::new(4));

    let front_he = |i: usize| HalfEdgeId::<I>::new(i % 4);
    let back_he = |i: usize| HalfEdgeId::<I>::new(4 + i % 4);

    // Front side i runs from corner i to corner i + 1.
    for i in 0..4 {
        mesh.add_halfedge(HalfEdge {
            corner: corners[i],
            polygon: front,
            next: back_he(i + 3),
            twin: back_he(i),
        });
    }
    // Back side i runs the other way, from corner i + 1 to corner i.
    for i in 0..4 {
        mesh.add_halfedge(HalfEdge {
            corner: corners[(i + 1) % 4],
            polygon: back,
            next: front_he(i + 1),
            twin: front_he(i),
        });
    }
    for (i, &c) in corners.iter().enumerate() {
        mesh.corner_mut(c).halfedge = front_he(i);
    }

    mesh
}

/// Build the unit cube `[0, 1]^3` from six quads sharing their edges.
///
/// Corners 0-3 ring the bottom face `(0,0,0) (1,0,0) (1,1,0) (0,1,0)` and
/// corners 4-7 the top face above them. Every corner has three edges of
/// length 1.
pub fn make_cube<I: MeshIndex>() -> HalfEdgeMesh<I> {
    let positions: Vec<Point3<f64>> = (0..8)
        .map(|i| {
            let z = (i / 4) as f64;
            let (x, y) = match i % 4 {
                0 => (0.0, 0.0),
                1 => (1.0, 0.0),
                2 => (1.0, 1.0),
                _ => (0.0, 1.0),
            };
            Point3::new(x, y, z)
        })
        .collect();

    build_from_polygons(&positions, &CUBE_FACES).expect("cube faces form a closed two-manifold")
}
