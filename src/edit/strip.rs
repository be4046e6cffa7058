//! Batch strip insertion.
//!
//! A strip is a run of polygons inserted along a set of edges. Each input
//! edge is first duplicated with [`split_edge`], leaving a two-sided polygon
//! between the copies. Then every corner the input touches is split between
//! each pair of consecutive new polygons, which widens them into proper
//! polygons joined end to end.

use std::collections::HashSet;

use super::corner::split_corner;
use super::edge::split_edge;
use super::progress::Progress;
use crate::error::Result;
use crate::mesh::{CornerId, HalfEdgeId, HalfEdgeMesh, MeshIndex, PolygonId};

/// Insert a strip of polygons along `edges`.
///
/// Returns the new polygons, one per distinct input edge, in input order.
/// An edge listed more than once (directly or through its twin) is split
/// only once.
///
/// See [`split_edges_with_progress`] for details.
///
/// # Example
///
/// ```
/// use trellis::edit::split_edges;
/// use trellis::mesh::{make_square, HalfEdgeMesh, PolygonId};
///
/// let mut mesh: HalfEdgeMesh = make_square();
/// let edges: Vec<_> = mesh.polygon_halfedges(PolygonId::new(0)).take(2).collect();
///
/// let strip = split_edges(&mut mesh, &edges).unwrap();
///
/// assert_eq!(strip.len(), 2);
/// assert_eq!(mesh.num_corners(), 5);
/// assert!(mesh.is_renderable());
/// ```
pub fn split_edges<I: MeshIndex>(
    mesh: &mut HalfEdgeMesh<I>,
    edges: &[HalfEdgeId<I>],
) -> Result<Vec<PolygonId<I>>> {
    split_edges_with_progress(mesh, edges, &Progress::none())
}

/// Insert a strip of polygons along `edges`, with progress reporting.
///
/// Runs in two phases:
/// 1. Every distinct edge is split. The corners at both ends of each edge are
///    recorded in first-seen order.
/// 2. For each recorded corner, the new polygons around it are listed in
///    rotation order and the corner is split between each consecutive pair.
///    The pairs do not wrap around, so `n` polygons at a corner give `n - 1`
///    splits.
///
/// # Errors
///
/// Any error from [`split_edge`] or [`split_corner`] is returned as is.
/// Splits completed before the failing one stay in the mesh.
pub fn split_edges_with_progress<I: MeshIndex>(
    mesh: &mut HalfEdgeMesh<I>,
    edges: &[HalfEdgeId<I>],
    progress: &Progress,
) -> Result<Vec<PolygonId<I>>> {
    let mut seen: HashSet<HalfEdgeId<I>> = HashSet::with_capacity(edges.len());
    let mut unique = Vec::with_capacity(edges.len());
    for &he in edges {
        if seen.contains(&he) || seen.contains(&mesh.twin(he)) {
            log::warn!("edge {:?} listed more than once, splitting it once", he);
            continue;
        }
        seen.insert(he);
        unique.push(he);
    }

    let mut touched: Vec<CornerId<I>> = Vec::new();
    let mut touched_set: HashSet<CornerId<I>> = HashSet::new();
    for &he in &unique {
        for c in [mesh.corner_of(he), mesh.far_corner(he)] {
            if touched_set.insert(c) {
                touched.push(c);
            }
        }
    }

    let mut strip = Vec::with_capacity(unique.len());
    for (i, &he) in unique.iter().enumerate() {
        progress.report_sub(i, unique.len(), 0, 2, "Splitting edges");
        strip.push(split_edge(mesh, he)?);
    }
    let new_polygons: HashSet<PolygonId<I>> = strip.iter().copied().collect();

    let mut corner_splits = 0;
    for (i, &c) in touched.iter().enumerate() {
        progress.report_sub(i, touched.len(), 1, 2, "Splitting corners");
        let around: Vec<PolygonId<I>> = mesh
            .corner_polygons(c)
            .filter(|p| new_polygons.contains(p))
            .collect();
        log::trace!("corner {:?}: {} strip polygons", c, around.len());
        for pair in around.windows(2) {
            split_corner(mesh, c, [pair[0], pair[1]])?;
            corner_splits += 1;
        }
    }

    log::debug!(
        "strip of {} polygons: {} edges requested, {} corners touched, {} corner splits",
        strip.len(),
        edges.len(),
        touched.len(),
        corner_splits
    );

    Ok(strip)
}
