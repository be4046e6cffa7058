//! Manifold consistency checks.
//!
//! A mesh is valid when every twin link is an involution, every corner
//! rotation closes on its own corner with at least two half-edges, and every
//! polygon boundary closes on its own polygon. How many sides a polygon needs
//! depends on the [`Validity`] level: two while an edit is in progress, three
//! for a mesh that will be drawn.

use super::halfedge::HalfEdgeMesh;
use super::index::MeshIndex;
use super::options::Validity;
use crate::error::{MeshError, Result};

/// Minimum rotation length of a corner.
const MIN_CORNER_DEGREE: usize = 2;

impl<I: MeshIndex> HalfEdgeMesh<I> {
    /// Check topological validity. Two-sided polygons are accepted.
    pub fn is_valid(&self) -> bool {
        self.validate(Validity::Topological).is_ok()
    }

    /// Check that the mesh is valid and every polygon has at least three sides.
    pub fn is_renderable(&self) -> bool {
        self.validate(Validity::Renderable).is_ok()
    }

    /// Check the mesh at the given level and report the first violation.
    ///
    /// Half-edges are checked first, then corners, then polygons.
    pub fn validate(&self, level: Validity) -> Result<()> {
        for (heid, he) in self.halfedges() {
            let involution = self
                .try_halfedge(he.twin)
                .is_some_and(|twin| twin.twin == heid);
            if !involution {
                return Err(MeshError::TwinMismatch {
                    halfedge: heid.index(),
                });
            }
        }

        for c in self.corner_ids() {
            match self.corner_edge_count(c) {
                None => return Err(MeshError::BrokenCornerCycle { corner: c.index() }),
                Some(degree) if degree < MIN_CORNER_DEGREE => {
                    return Err(MeshError::CornerDegree {
                        corner: c.index(),
                        degree,
                    })
                }
                Some(_) => {}
            }
        }

        let min = level.min_polygon_sides();
        for p in self.polygon_ids() {
            match self.polygon_edge_count(p) {
                None => return Err(MeshError::BrokenPolygonCycle { polygon: p.index() }),
                Some(sides) if sides < min => {
                    return Err(MeshError::PolygonTooSmall {
                        polygon: p.index(),
                        sides,
                        min,
                    })
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Point3;

    use super::*;
    use crate::mesh::{make_square, HalfEdge, HalfEdgeId};

    #[test]
    fn test_empty_mesh_is_valid() {
        let mesh = HalfEdgeMesh::<u32>::new();
        assert!(mesh.is_valid());
        assert!(mesh.is_renderable());
    }

    #[test]
    fn test_square_is_valid() {
        let mesh: HalfEdgeMesh = make_square();
        assert_eq!(mesh.validate(Validity::Renderable), Ok(()));
    }

    #[test]
    fn test_twin_mismatch() {
        let mut mesh: HalfEdgeMesh = make_square();
        let he = HalfEdgeId::new(0);
        let other = HalfEdgeId::new(1);
        mesh.halfedge_mut(he).twin = other;
        assert!(!mesh.is_valid());
        assert!(matches!(
            mesh.validate(Validity::Topological),
            Err(MeshError::TwinMismatch { .. })
        ));
    }

    #[test]
    fn test_corner_without_halfedge() {
        let mut mesh: HalfEdgeMesh = make_square();
        mesh.add_corner(Point3::new(5.0, 5.0, 5.0));
        assert_eq!(
            mesh.validate(Validity::Topological),
            Err(MeshError::BrokenCornerCycle { corner: 4 })
        );
    }

    #[test]
    fn test_corner_degree_one() {
        let mut mesh = HalfEdgeMesh::<u32>::new();
        let c = mesh.add_corner(Point3::origin());
        let p = mesh.add_polygon(HalfEdgeId::invalid());
        let he = mesh.add_halfedge(HalfEdge::with_incidence(c, p));
        {
            let record = mesh.halfedge_mut(he);
            record.next = he;
            record.twin = he;
        }
        mesh.corner_mut(c).halfedge = he;
        mesh.polygon_mut(p).halfedge = he;

        assert_eq!(
            mesh.validate(Validity::Topological),
            Err(MeshError::CornerDegree { corner: 0, degree: 1 })
        );
    }

    #[test]
    fn test_two_sided_polygon_levels() {
        // Two corners joined by one edge, both sides on the same polygon.
        let mut mesh = HalfEdgeMesh::<u32>::new();
        let c0 = mesh.add_corner(Point3::origin());
        let c1 = mesh.add_corner(Point3::new(1.0, 0.0, 0.0));
        let p = mesh.add_polygon(HalfEdgeId::invalid());
        let q = mesh.add_polygon(HalfEdgeId::invalid());

        // Corner c0 holds a (p) and b (q); corner c1 holds d (p) and e (q).
        let (a, e) = mesh.add_halfedge_pair(HalfEdge::with_incidence(c0, p), HalfEdge::with_incidence(c1, q));
        let (d, b) = mesh.add_halfedge_pair(HalfEdge::with_incidence(c1, p), HalfEdge::with_incidence(c0, q));
        mesh.halfedge_mut(a).next = b;
        mesh.halfedge_mut(b).next = a;
        mesh.halfedge_mut(d).next = e;
        mesh.halfedge_mut(e).next = d;
        mesh.corner_mut(c0).halfedge = a;
        mesh.corner_mut(c1).halfedge = d;
        mesh.polygon_mut(p).halfedge = a;
        mesh.polygon_mut(q).halfedge = b;

        assert_eq!(mesh.polygon_edge_count(p), Some(2));
        assert_eq!(mesh.polygon_edge_count(q), Some(2));
        assert!(mesh.is_valid());
        assert!(!mesh.is_renderable());
        assert_eq!(
            mesh.validate(Validity::Renderable),
            Err(MeshError::PolygonTooSmall { polygon: 0, sides: 2, min: 3 })
        );
    }
}
