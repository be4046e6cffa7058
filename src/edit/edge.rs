//! Edge splitting.

use crate::error::{MeshError, Result};
use crate::mesh::{HalfEdge, HalfEdgeId, HalfEdgeMesh, MeshIndex, PolygonId};

/// Duplicate an edge and put a new two-sided polygon between the copies.
///
/// Given `he` on polygon `P` whose twin lies on polygon `Q`, two new
/// half-edges `a` (at `he`'s corner) and `b` (at the twin's corner) are added
/// as each other's twins. `a` goes right after `he` in its corner's rotation
/// and `b` right before the twin in the twin's rotation. `b` takes over the
/// twin's place on `Q`. The twin and `a` bound the new polygon, which is
/// returned.
///
/// The new polygon has only two sides, so the mesh stays
/// [valid](HalfEdgeMesh::is_valid) but is no longer
/// [renderable](HalfEdgeMesh::is_renderable) until a corner split widens the
/// polygon (see [`split_edges`](super::split_edges)).
///
/// # Errors
///
/// - [`MeshError::TwinMismatch`] if `he` has no twin in the mesh
/// - [`MeshError::BrokenCornerCycle`] if the twin's rotation does not close
///
/// The mesh is not modified in either case.
///
/// # Example
///
/// ```
/// use trellis::edit::split_edge;
/// use trellis::mesh::{make_square, HalfEdgeId, HalfEdgeMesh};
///
/// let mut mesh: HalfEdgeMesh = make_square();
/// let strip = split_edge(&mut mesh, HalfEdgeId::new(0)).unwrap();
///
/// assert_eq!(mesh.polygon_edge_count(strip), Some(2));
/// assert_eq!(mesh.num_polygons(), 3);
/// assert!(mesh.is_valid());
/// ```
pub fn split_edge<I: MeshIndex>(mesh: &mut HalfEdgeMesh<I>, he: HalfEdgeId<I>) -> Result<PolygonId<I>> {
    let twin = mesh.twin(he);
    let twin_corner = mesh
        .try_halfedge(twin)
        .ok_or(MeshError::TwinMismatch { halfedge: he.index() })?
        .corner;
    let before_twin = mesh
        .prev_around_corner(twin)
        .ok_or(MeshError::BrokenCornerCycle {
            corner: twin_corner.index(),
        })?;

    let original = *mesh.halfedge(he);
    let original_twin = *mesh.halfedge(twin);

    let polygon = mesh.add_polygon(twin);
    let (a, b) = mesh.add_halfedge_pair(
        HalfEdge {
            polygon,
            ..original
        },
        HalfEdge {
            next: twin,
            ..original_twin
        },
    );

    mesh.halfedge_mut(he).next = a;
    mesh.halfedge_mut(before_twin).next = b;
    mesh.halfedge_mut(twin).polygon = polygon;
    mesh.polygon_mut(original_twin.polygon).halfedge = b;

    log::debug!(
        "split edge {:?}: new polygon {:?} between {:?} and {:?}",
        he,
        polygon,
        a,
        b
    );

    Ok(polygon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{make_cube, make_square, CornerId, Validity};

    #[test]
    fn test_split_square_edge() {
        let mut mesh: HalfEdgeMesh = make_square();
        let he = HalfEdgeId::new(0);
        let front = mesh.polygon_of(he);
        let back = mesh.polygon_of(mesh.twin(he));

        let strip = split_edge(&mut mesh, he).unwrap();

        assert_eq!(mesh.num_corners(), 4);
        assert_eq!(mesh.num_polygons(), 3);
        assert_eq!(mesh.num_halfedges(), 10);
        assert!(mesh.is_valid());
        assert_eq!(
            mesh.validate(Validity::Renderable),
            Err(MeshError::PolygonTooSmall { polygon: strip.index(), sides: 2, min: 3 })
        );

        // The original sides keep their size; the strip has two.
        assert_eq!(mesh.polygon_edge_count(front), Some(4));
        assert_eq!(mesh.polygon_edge_count(back), Some(4));
        assert_eq!(mesh.polygon_edge_count(strip), Some(2));

        // Both ends of the edge gained one half-edge.
        assert_eq!(mesh.corner_edge_count(CornerId::new(0)), Some(3));
        assert_eq!(mesh.corner_edge_count(CornerId::new(1)), Some(3));
        assert_eq!(mesh.corner_edge_count(CornerId::new(2)), Some(2));
    }

    #[test]
    fn test_split_edge_wiring() {
        let mut mesh: HalfEdgeMesh = make_square();
        let he = HalfEdgeId::new(0);
        let twin = mesh.twin(he);
        let old_next = mesh.next(he);

        let strip = split_edge(&mut mesh, he).unwrap();
        let a = mesh.next(he);
        let b = mesh.twin(a);

        assert_eq!(mesh.next(a), old_next);
        assert_eq!(mesh.next(b), twin);
        assert_eq!(mesh.corner_of(a), mesh.corner_of(he));
        assert_eq!(mesh.corner_of(b), mesh.corner_of(twin));
        assert_eq!(mesh.polygon_of(a), strip);
        assert_eq!(mesh.polygon_of(twin), strip);
        assert_eq!(mesh.polygon(PolygonId::new(1)).halfedge, b);
        assert_eq!(mesh.prev_around_corner(twin), Some(b));
    }

    #[test]
    fn test_split_every_cube_edge_stays_valid() {
        let mut mesh: HalfEdgeMesh = make_cube();
        let edges: Vec<HalfEdgeId> = mesh
            .halfedge_ids()
            .filter(|&he| he < mesh.twin(he))
            .collect();
        assert_eq!(edges.len(), 12);

        for he in edges {
            split_edge(&mut mesh, he).unwrap();
            assert!(mesh.is_valid());
        }
        assert_eq!(mesh.num_polygons(), 18);
        assert_eq!(mesh.num_halfedges(), 48);
        for c in mesh.corner_ids() {
            assert_eq!(mesh.corner_edge_count(c), Some(6));
        }
    }

    #[test]
    fn test_broken_rotation_is_reported() {
        let mut mesh: HalfEdgeMesh = make_square();
        let he = HalfEdgeId::new(0);
        let twin = mesh.twin(he);
        // Cut the rotation at the twin's corner so nothing leads back to it.
        let before = mesh.prev_around_corner(twin).unwrap();
        mesh.halfedge_mut(before).next = before;

        let result = split_edge(&mut mesh, he);
        assert_eq!(
            result,
            Err(MeshError::BrokenCornerCycle { corner: mesh.corner_of(twin).index() })
        );
        assert_eq!(mesh.num_halfedges(), 8);
        assert_eq!(mesh.num_polygons(), 2);
    }

    #[test]
    fn test_missing_twin_is_reported() {
        let mut mesh: HalfEdgeMesh = make_square();
        let he = HalfEdgeId::new(0);
        mesh.halfedge_mut(he).twin = HalfEdgeId::invalid();
        assert_eq!(
            split_edge(&mut mesh, he),
            Err(MeshError::TwinMismatch { halfedge: 0 })
        );

        mesh.halfedge_mut(he).twin = HalfEdgeId::new(99);
        assert_eq!(
            split_edge(&mut mesh, he),
            Err(MeshError::TwinMismatch { halfedge: 0 })
        );
        assert_eq!(mesh.num_halfedges(), 8);
        assert_eq!(mesh.num_polygons(), 2);
    }
}
