//! Corner splitting.

use crate::error::{MeshError, Result};
use crate::mesh::{CornerId, HalfEdge, HalfEdgeId, HalfEdgeMesh, MeshIndex, PolygonId};

/// How a half-edge relates to the polygon being searched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    /// The half-edge bounds the polygon.
    Bounding,
    /// The half-edge's twin bounds the polygon.
    Facing,
}

impl Role {
    fn as_str(self) -> &'static str {
        match self {
            Role::Bounding => "bounding",
            Role::Facing => "facing",
        }
    }
}

fn find_in_rotation<I: MeshIndex>(
    mesh: &HalfEdgeMesh<I>,
    rotation: &[HalfEdgeId<I>],
    corner: CornerId<I>,
    polygon: PolygonId<I>,
    role: Role,
) -> Result<HalfEdgeId<I>> {
    rotation
        .iter()
        .copied()
        .find(|&he| {
            let record = mesh.halfedge(he);
            match role {
                Role::Bounding => record.polygon == polygon,
                Role::Facing => mesh
                    .try_halfedge(record.twin)
                    .is_some_and(|twin| twin.polygon == polygon),
            }
        })
        .ok_or(MeshError::MissingHalfEdge {
            corner: corner.index(),
            polygon: polygon.index(),
            role: role.as_str(),
        })
}

/// Split a corner in two along the boundary between polygons `a` and `b`.
///
/// The rotation around `corner` is cut into two arcs. The arc that starts at
/// the half-edge bounding `a` and runs up to (not including) the half-edge
/// bounding `b` moves to a new corner at the same position. A new edge joins
/// the two corners. Its half-edge at `corner` bounds `a` and its half-edge at
/// the new corner bounds `b`, so both polygons gain one side.
///
/// The new corner is returned. Moving it away from the original is up to the
/// caller.
///
/// # Errors
///
/// All checks run before the mesh is touched:
/// - [`MeshError::InvalidParameter`] if `a == b`
/// - [`MeshError::BrokenCornerCycle`] if the rotation around `corner` does not close
/// - [`MeshError::MissingHalfEdge`] if either polygon is not incident to `corner`
/// - [`MeshError::NotAdjacent`] if the half-edges found do not delimit two arcs
///
/// # Example
///
/// ```
/// use trellis::edit::split_corner;
/// use trellis::mesh::{make_square, CornerId, HalfEdgeMesh, PolygonId};
///
/// let mut mesh: HalfEdgeMesh = make_square();
/// let front = PolygonId::new(0);
/// let back = PolygonId::new(1);
///
/// let copy = split_corner(&mut mesh, CornerId::new(0), [front, back]).unwrap();
///
/// assert_eq!(mesh.position(copy), mesh.position(CornerId::new(0)));
/// assert_eq!(mesh.polygon_edge_count(front), Some(5));
/// assert!(mesh.is_renderable());
/// ```
pub fn split_corner<I: MeshIndex>(
    mesh: &mut HalfEdgeMesh<I>,
    corner: CornerId<I>,
    polygons: [PolygonId<I>; 2],
) -> Result<CornerId<I>> {
    let [a, b] = polygons;
    if a == b {
        return Err(MeshError::invalid_param(
            "polygons",
            format!("[{:?}, {:?}]", a, b),
            "must be two different polygons",
        ));
    }

    if mesh.corner_edge_count(corner).is_none() {
        return Err(MeshError::BrokenCornerCycle {
            corner: corner.index(),
        });
    }
    let rotation: Vec<HalfEdgeId<I>> = mesh.corner_halfedges(corner).collect();

    // Remaining arc: h1 ..= h2. Moving arc: h3 ..= h4.
    let h1 = find_in_rotation(mesh, &rotation, corner, b, Role::Bounding)?;
    let h2 = find_in_rotation(mesh, &rotation, corner, a, Role::Facing)?;
    let h3 = find_in_rotation(mesh, &rotation, corner, a, Role::Bounding)?;
    let h4 = find_in_rotation(mesh, &rotation, corner, b, Role::Facing)?;
    if mesh.next(h2) != h3 || mesh.next(h4) != h1 {
        return Err(MeshError::NotAdjacent {
            corner: corner.index(),
            a: a.index(),
            b: b.index(),
        });
    }

    let position = mesh.corner(corner).position;
    let new_corner = mesh.add_corner(position);
    let (e1, e2) = mesh.add_halfedge_pair(
        HalfEdge {
            next: h1,
            ..HalfEdge::with_incidence(corner, a)
        },
        HalfEdge {
            next: h3,
            ..HalfEdge::with_incidence(new_corner, b)
        },
    );

    let mut he = h3;
    let mut moved = 1;
    loop {
        mesh.halfedge_mut(he).corner = new_corner;
        if he == h4 {
            break;
        }
        he = mesh.next(he);
        moved += 1;
    }

    mesh.halfedge_mut(h2).next = e1;
    mesh.halfedge_mut(h4).next = e2;
    mesh.corner_mut(corner).halfedge = h1;
    mesh.corner_mut(new_corner).halfedge = h3;

    log::trace!(
        "split corner {:?}: arc {:?}..={:?} ({} half-edges) moved",
        corner,
        h3,
        h4,
        moved
    );
    log::debug!(
        "split corner {:?} between {:?} and {:?}: new corner {:?}, edge ({:?}, {:?})",
        corner,
        a,
        b,
        new_corner,
        e1,
        e2
    );

    Ok(new_corner)
}
