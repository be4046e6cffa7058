//! Cycle-safe traversal of corner rotations and polygon boundaries.
//!
//! Both cycles are encoded in the same half-edge links: a corner rotation
//! follows `next`, a polygon boundary follows `twin` and then `next`. Every
//! walk here stops after [`MeshOptions::max_cycle_length`] steps, so a
//! corrupted graph yields a short or failed walk instead of a hang.
//!
//! [`MeshOptions::max_cycle_length`]: super::MeshOptions::max_cycle_length

use super::halfedge::{HalfEdge, HalfEdgeMesh};
use super::index::{CornerId, HalfEdgeId, MeshIndex, PolygonId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    AroundCorner,
    AlongPolygon,
}

impl<I: MeshIndex> HalfEdgeMesh<I> {
    fn step(&self, he: HalfEdgeId<I>, step: Step) -> Option<HalfEdgeId<I>> {
        let record = self.try_halfedge(he)?;
        match step {
            Step::AroundCorner => Some(record.next),
            Step::AlongPolygon => self.try_halfedge(record.twin).map(|t| t.next),
        }
    }

    /// Walk a cycle from `start` and return its length, or `None` if the walk
    /// leaves the cycle's owner, meets a dangling handle, or runs past the
    /// cycle limit.
    fn measure_cycle(
        &self,
        start: HalfEdgeId<I>,
        step: Step,
        belongs: impl Fn(&HalfEdge<I>) -> bool,
    ) -> Option<usize> {
        let mut current = start;
        for count in 1..=self.options.max_cycle_length {
            if !belongs(self.try_halfedge(current)?) {
                return None;
            }
            current = self.step(current, step)?;
            if current == start {
                return Some(count);
            }
        }
        None
    }

    /// Number of half-edges in the rotation around a corner.
    ///
    /// Returns `None` when the rotation is broken: it does not close within
    /// the cycle limit, it reaches an unlinked half-edge, or it visits a
    /// half-edge belonging to another corner.
    pub fn corner_edge_count(&self, c: CornerId<I>) -> Option<usize> {
        let start = self.corners.get(c.index())?.halfedge;
        self.measure_cycle(start, Step::AroundCorner, |he| he.corner == c)
    }

    /// Number of sides of a polygon.
    ///
    /// Returns `None` under the same conditions as
    /// [`corner_edge_count`](Self::corner_edge_count), checked against the
    /// polygon.
    pub fn polygon_edge_count(&self, p: PolygonId<I>) -> Option<usize> {
        let start = self.polygons.get(p.index())?.halfedge;
        self.measure_cycle(start, Step::AlongPolygon, |he| he.polygon == p)
    }

    /// Find the half-edge whose `next` is `he`.
    ///
    /// No back-pointers are stored, so this scans the rotation: O(degree).
    pub fn prev_around_corner(&self, he: HalfEdgeId<I>) -> Option<HalfEdgeId<I>> {
        let mut current = he;
        for _ in 0..self.options.max_cycle_length {
            let next = self.try_halfedge(current)?.next;
            if next == he {
                return Some(current);
            }
            current = next;
        }
        None
    }

    /// Iterate over the half-edges around a corner, starting at its anchor.
    pub fn corner_halfedges(&self, c: CornerId<I>) -> CycleIter<'_, I> {
        CycleIter::new(self, self.corner(c).halfedge, Step::AroundCorner)
    }

    /// Iterate over the half-edges bounding a polygon, starting at its anchor.
    pub fn polygon_halfedges(&self, p: PolygonId<I>) -> CycleIter<'_, I> {
        CycleIter::new(self, self.polygon(p).halfedge, Step::AlongPolygon)
    }

    /// Iterate over the polygons around a corner, in rotation order.
    pub fn corner_polygons(&self, c: CornerId<I>) -> impl Iterator<Item = PolygonId<I>> + '_ {
        self.corner_halfedges(c).map(move |he| self.polygon_of(he))
    }

    /// Iterate over the corners of a polygon, in boundary order.
    pub fn polygon_corners(&self, p: PolygonId<I>) -> impl Iterator<Item = CornerId<I>> + '_ {
        self.polygon_halfedges(p).map(move |he| self.corner_of(he))
    }

    /// Iterate over the corners joined to `c` by an edge.
    pub fn corner_neighbors(&self, c: CornerId<I>) -> impl Iterator<Item = CornerId<I>> + '_ {
        self.corner_halfedges(c)
            .filter_map(move |he| self.try_halfedge(self.twin(he)).map(|t| t.corner))
    }
}

/// Bounded iterator over one rotation or boundary cycle.
///
/// Created by [`HalfEdgeMesh::corner_halfedges`] and
/// [`HalfEdgeMesh::polygon_halfedges`]. Only half-edges that exist in the
/// mesh are yielded.
pub struct CycleIter<'a, I: MeshIndex = u32> {
    mesh: &'a HalfEdgeMesh<I>,
    start: HalfEdgeId<I>,
    current: HalfEdgeId<I>,
    step: Step,
    remaining: usize,
    done: bool,
}

impl<'a, I: MeshIndex> CycleIter<'a, I> {
    fn new(mesh: &'a HalfEdgeMesh<I>, start: HalfEdgeId<I>, step: Step) -> Self {
        Self {
            mesh,
            start,
            current: start,
            step,
            // A zero limit still yields the start half-edge.
            remaining: mesh.options.max_cycle_length.max(1),
            done: mesh.try_halfedge(start).is_none(),
        }
    }
}

impl<'a, I: MeshIndex> Iterator for CycleIter<'a, I> {
    type Item = HalfEdgeId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current;
        self.remaining -= 1;

        match self.mesh.step(self.current, self.step) {
            Some(next) if next != self.start && self.remaining > 0 => {
                if self.mesh.try_halfedge(next).is_some() {
                    self.current = next;
                } else {
                    self.done = true;
                }
            }
            _ => self.done = true,
        }

        Some(result)
    }
}
