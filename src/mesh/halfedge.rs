//! Half-edge mesh store.
//!
//! This module holds the arena-backed storage for corners, polygons, and
//! half-edges, plus the accessors every other module builds on.
//!
//! # Structure
//!
//! - A **half-edge** is one side of a polygon leaving one corner. It knows its
//!   **corner**, its **polygon**, its **twin** (the opposite side of the same
//!   edge, on the neighbouring polygon) and **next**, the following half-edge
//!   around the *same corner*.
//! - Each corner stores one of its half-edges as a traversal anchor.
//! - Each polygon stores one half-edge on its boundary.
//!
//! Rotation around a corner follows `next`. The boundary of a polygon follows
//! `twin` and then `next`. There are no separate edge records and no
//! boundary loops: every half-edge has a twin and a polygon.

use nalgebra::{Point3, Vector3};

use super::index::{CornerId, HalfEdgeId, MeshIndex, PolygonId};
use super::options::MeshOptions;

/// A corner (vertex) of the mesh.
#[derive(Debug, Clone)]
pub struct Corner<I: MeshIndex = u32> {
    /// The 3D position of this corner.
    pub position: Point3<f64>,

    /// One half-edge leaving this corner. Any member of the rotation works;
    /// editors move it when the old anchor leaves the corner.
    pub halfedge: HalfEdgeId<I>,
}

impl<I: MeshIndex> Corner<I> {
    /// Create a new unlinked corner at the given position.
    pub fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            halfedge: HalfEdgeId::invalid(),
        }
    }

    /// Create a new unlinked corner from coordinates.
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }
}

/// A half-edge in the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfEdge<I: MeshIndex = u32> {
    /// The corner this half-edge leaves.
    pub corner: CornerId<I>,

    /// The polygon this half-edge bounds.
    pub polygon: PolygonId<I>,

    /// The next half-edge around `corner`.
    pub next: HalfEdgeId<I>,

    /// The opposite half-edge of the same edge.
    pub twin: HalfEdgeId<I>,
}

impl<I: MeshIndex> HalfEdge<I> {
    /// Create a new unlinked half-edge.
    pub fn new() -> Self {
        Self {
            corner: CornerId::invalid(),
            polygon: PolygonId::invalid(),
            next: HalfEdgeId::invalid(),
            twin: HalfEdgeId::invalid(),
        }
    }

    /// Create a half-edge with corner and polygon set and links unset.
    pub fn with_incidence(corner: CornerId<I>, polygon: PolygonId<I>) -> Self {
        Self {
            corner,
            polygon,
            ..Self::new()
        }
    }
}

impl<I: MeshIndex> Default for HalfEdge<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// A polygon (face) of the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Polygon<I: MeshIndex = u32> {
    /// One half-edge on the boundary of this polygon.
    pub halfedge: HalfEdgeId<I>,
}

impl<I: MeshIndex> Polygon<I> {
    /// Create a new polygon anchored at the given half-edge.
    pub fn new(halfedge: HalfEdgeId<I>) -> Self {
        Self { halfedge }
    }
}

impl<I: MeshIndex> Default for Polygon<I> {
    fn default() -> Self {
        Self {
            halfedge: HalfEdgeId::invalid(),
        }
    }
}

/// A half-edge polygon mesh.
///
/// Entities are only ever added. Handles stay valid for the lifetime of the
/// mesh.
#[derive(Debug, Clone)]
pub struct HalfEdgeMesh<I: MeshIndex = u32> {
    /// All corners in the mesh.
    pub(crate) corners: Vec<Corner<I>>,

    /// All half-edges in the mesh.
    pub(crate) halfedges: Vec<HalfEdge<I>>,

    /// All polygons in the mesh.
    pub(crate) polygons: Vec<Polygon<I>>,

    pub(crate) options: MeshOptions,
}

impl<I: MeshIndex> Default for HalfEdgeMesh<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: MeshIndex> HalfEdgeMesh<I> {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self::with_options(MeshOptions::default())
    }

    /// Create a new empty mesh with the given options.
    pub fn with_options(options: MeshOptions) -> Self {
        Self {
            corners: Vec::new(),
            halfedges: Vec::new(),
            polygons: Vec::new(),
            options,
        }
    }

    /// Create a mesh with pre-allocated capacity.
    pub fn with_capacity(num_corners: usize, num_halfedges: usize, num_polygons: usize) -> Self {
        Self {
            corners: Vec::with_capacity(num_corners),
            halfedges: Vec::with_capacity(num_halfedges),
            polygons: Vec::with_capacity(num_polygons),
            options: MeshOptions::default(),
        }
    }

    /// The options this mesh was configured with.
    #[inline]
    pub fn options(&self) -> &MeshOptions {
        &self.options
    }

    /// Replace the mesh options.
    pub fn set_options(&mut self, options: MeshOptions) {
        self.options = options;
    }

    // ==================== Accessors ====================

    /// Get the number of corners.
    #[inline]
    pub fn num_corners(&self) -> usize {
        self.corners.len()
    }

    /// Get the number of half-edges.
    #[inline]
    pub fn num_halfedges(&self) -> usize {
        self.halfedges.len()
    }

    /// Get the number of polygons.
    #[inline]
    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    /// Get the number of edges (half-edge pairs).
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.halfedges.len() / 2
    }

    /// Get a corner by ID.
    #[inline]
    pub fn corner(&self, id: CornerId<I>) -> &Corner<I> {
        &self.corners[id.index()]
    }

    /// Get a mutable corner by ID.
    #[inline]
    pub fn corner_mut(&mut self, id: CornerId<I>) -> &mut Corner<I> {
        &mut self.corners[id.index()]
    }

    /// Get a half-edge by ID.
    #[inline]
    pub fn halfedge(&self, id: HalfEdgeId<I>) -> &HalfEdge<I> {
        &self.halfedges[id.index()]
    }

    /// Get a mutable half-edge by ID.
    #[inline]
    pub fn halfedge_mut(&mut self, id: HalfEdgeId<I>) -> &mut HalfEdge<I> {
        &mut self.halfedges[id.index()]
    }

    /// Get a polygon by ID.
    #[inline]
    pub fn polygon(&self, id: PolygonId<I>) -> &Polygon<I> {
        &self.polygons[id.index()]
    }

    /// Get a mutable polygon by ID.
    #[inline]
    pub fn polygon_mut(&mut self, id: PolygonId<I>) -> &mut Polygon<I> {
        &mut self.polygons[id.index()]
    }

    /// Look up a half-edge without panicking on a dangling handle.
    #[inline]
    pub fn try_halfedge(&self, id: HalfEdgeId<I>) -> Option<&HalfEdge<I>> {
        if id.is_valid() {
            self.halfedges.get(id.index())
        } else {
            None
        }
    }

    /// Get the position of a corner.
    #[inline]
    pub fn position(&self, c: CornerId<I>) -> &Point3<f64> {
        &self.corner(c).position
    }

    /// Set the position of a corner.
    #[inline]
    pub fn set_position(&mut self, c: CornerId<I>, pos: Point3<f64>) {
        self.corner_mut(c).position = pos;
    }

    /// Move a corner by an offset.
    #[inline]
    pub fn translate_corner(&mut self, c: CornerId<I>, offset: &Vector3<f64>) {
        self.corner_mut(c).position += *offset;
    }

    // ==================== Links ====================

    /// Get the twin (opposite) half-edge.
    #[inline]
    pub fn twin(&self, he: HalfEdgeId<I>) -> HalfEdgeId<I> {
        self.halfedge(he).twin
    }

    /// Get the next half-edge around the same corner.
    #[inline]
    pub fn next(&self, he: HalfEdgeId<I>) -> HalfEdgeId<I> {
        self.halfedge(he).next
    }

    /// Get the following half-edge along the polygon boundary.
    #[inline]
    pub fn next_in_polygon(&self, he: HalfEdgeId<I>) -> HalfEdgeId<I> {
        self.next(self.twin(he))
    }

    /// Get the corner a half-edge leaves.
    #[inline]
    pub fn corner_of(&self, he: HalfEdgeId<I>) -> CornerId<I> {
        self.halfedge(he).corner
    }

    /// Get the corner at the far end of a half-edge's edge.
    #[inline]
    pub fn far_corner(&self, he: HalfEdgeId<I>) -> CornerId<I> {
        self.corner_of(self.twin(he))
    }

    /// Get the polygon a half-edge bounds.
    #[inline]
    pub fn polygon_of(&self, he: HalfEdgeId<I>) -> PolygonId<I> {
        self.halfedge(he).polygon
    }

    // ==================== Iteration ====================

    /// Iterate over all corner IDs.
    pub fn corner_ids(&self) -> impl Iterator<Item = CornerId<I>> + '_ {
        (0..self.corners.len()).map(CornerId::new)
    }

    /// Iterate over all corners with their IDs.
    pub fn corners(&self) -> impl Iterator<Item = (CornerId<I>, &Corner<I>)> + '_ {
        self.corners
            .iter()
            .enumerate()
            .map(|(i, c)| (CornerId::new(i), c))
    }

    /// Iterate over all half-edge IDs.
    pub fn halfedge_ids(&self) -> impl Iterator<Item = HalfEdgeId<I>> + '_ {
        (0..self.halfedges.len()).map(HalfEdgeId::new)
    }

    /// Iterate over all half-edges with their IDs.
    pub fn halfedges(&self) -> impl Iterator<Item = (HalfEdgeId<I>, &HalfEdge<I>)> + '_ {
        self.halfedges
            .iter()
            .enumerate()
            .map(|(i, he)| (HalfEdgeId::new(i), he))
    }

    /// Iterate over all polygon IDs.
    pub fn polygon_ids(&self) -> impl Iterator<Item = PolygonId<I>> + '_ {
        (0..self.polygons.len()).map(PolygonId::new)
    }

    /// Iterate over all polygons with their IDs.
    pub fn polygons(&self) -> impl Iterator<Item = (PolygonId<I>, &Polygon<I>)> + '_ {
        self.polygons
            .iter()
            .enumerate()
            .map(|(i, p)| (PolygonId::new(i), p))
    }

    // ==================== Geometry ====================

    /// Compute the edge vector (from this half-edge's corner to the far corner).
    pub fn edge_vector(&self, he: HalfEdgeId<I>) -> Vector3<f64> {
        self.position(self.far_corner(he)) - self.position(self.corner_of(he))
    }

    /// Compute the length of an edge.
    pub fn edge_length(&self, he: HalfEdgeId<I>) -> f64 {
        nalgebra::distance(self.position(self.corner_of(he)), self.position(self.far_corner(he)))
    }

    /// Compute the average of a polygon's corner positions.
    pub fn polygon_centroid(&self, p: PolygonId<I>) -> Point3<f64> {
        let mut sum = Vector3::zeros();
        let mut count = 0usize;
        for c in self.polygon_corners(p) {
            sum += self.position(c).coords;
            count += 1;
        }
        if count == 0 {
            return Point3::origin();
        }
        Point3::from(sum / count as f64)
    }

    /// Compute the bounding box of the mesh.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = self.corners.first()?;
        let mut min = first.position;
        let mut max = first.position;

        for c in &self.corners {
            for i in 0..3 {
                min[i] = min[i].min(c.position[i]);
                max[i] = max[i].max(c.position[i]);
            }
        }

        Some((min, max))
    }

    // ==================== Construction ====================

    /// Add a new unlinked corner and return its ID.
    pub fn add_corner(&mut self, position: Point3<f64>) -> CornerId<I> {
        let id = CornerId::new(self.corners.len());
        self.corners.push(Corner::new(position));
        id
    }

    /// Add a new polygon anchored at `halfedge` (which may be invalid for now).
    pub fn add_polygon(&mut self, halfedge: HalfEdgeId<I>) -> PolygonId<I> {
        let id = PolygonId::new(self.polygons.len());
        self.polygons.push(Polygon::new(halfedge));
        id
    }

    /// Add a half-edge record as-is and return its ID.
    ///
    /// No links are checked. Use [`is_valid`](Self::is_valid) once the
    /// surrounding wiring is complete.
    pub fn add_halfedge(&mut self, halfedge: HalfEdge<I>) -> HalfEdgeId<I> {
        let id = HalfEdgeId::new(self.halfedges.len());
        self.halfedges.push(halfedge);
        id
    }

    /// Add two half-edges that are each other's twin.
    pub fn add_halfedge_pair(
        &mut self,
        first: HalfEdge<I>,
        second: HalfEdge<I>,
    ) -> (HalfEdgeId<I>, HalfEdgeId<I>) {
        let a = self.add_halfedge(first);
        let b = self.add_halfedge(second);
        self.halfedge_mut(a).twin = b;
        self.halfedge_mut(b).twin = a;
        (a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_creation() {
        let c = Corner::<u32>::from_coords(1.0, 2.0, 3.0);
        assert_eq!(c.position, Point3::new(1.0, 2.0, 3.0));
        assert!(!c.halfedge.is_valid());
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = HalfEdgeMesh::<u32>::new();
        assert_eq!(mesh.num_corners(), 0);
        assert_eq!(mesh.num_halfedges(), 0);
        assert_eq!(mesh.num_polygons(), 0);
        assert!(mesh.bounding_box().is_none());
    }

    #[test]
    fn test_add_entities() {
        let mut mesh = HalfEdgeMesh::<u32>::new();
        let c0 = mesh.add_corner(Point3::new(0.0, 0.0, 0.0));
        let c1 = mesh.add_corner(Point3::new(3.0, 4.0, 0.0));
        let p = mesh.add_polygon(HalfEdgeId::invalid());

        let (a, b) = mesh.add_halfedge_pair(
            HalfEdge::with_incidence(c0, p),
            HalfEdge::with_incidence(c1, p),
        );

        assert_eq!(mesh.num_corners(), 2);
        assert_eq!(mesh.num_halfedges(), 2);
        assert_eq!(mesh.num_edges(), 1);
        assert_eq!(mesh.twin(a), b);
        assert_eq!(mesh.twin(b), a);
        assert_eq!(mesh.far_corner(a), c1);
        assert!((mesh.edge_length(a) - 5.0).abs() < 1e-12);
        assert_eq!(mesh.edge_vector(b), Vector3::new(-3.0, -4.0, 0.0));
    }

    #[test]
    fn test_try_halfedge() {
        let mut mesh = HalfEdgeMesh::<u16>::new();
        let he = mesh.add_halfedge(HalfEdge::new());
        assert!(mesh.try_halfedge(he).is_some());
        assert!(mesh.try_halfedge(HalfEdgeId::new(5)).is_none());
        assert!(mesh.try_halfedge(HalfEdgeId::invalid()).is_none());
    }

    #[test]
    fn test_translate_and_bounds() {
        let mut mesh = HalfEdgeMesh::<u32>::new();
        let c0 = mesh.add_corner(Point3::new(0.0, 0.0, 0.0));
        mesh.add_corner(Point3::new(1.0, -1.0, 2.0));
        mesh.translate_corner(c0, &Vector3::new(0.0, 0.0, -1.0));

        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min, Point3::new(0.0, -1.0, -1.0));
        assert_eq!(max, Point3::new(1.0, 0.0, 2.0));
    }
}
