//! # Trellis
//!
//! Half-edge polygon meshes with local split editing.
//!
//! Trellis stores a closed polygon mesh as corners, polygons, and half-edges
//! held in flat arenas and addressed by type-safe handles. Each half-edge
//! knows the next half-edge around its corner and its twin on the
//! neighbouring polygon. From those two links both corner rotations and
//! polygon boundaries can be walked.
//!
//! ## Features
//!
//! - **Half-edge data structure**: arena storage with typed handles
//! - **Flexible indexing**: Support for 16-bit, 32-bit, and 64-bit indices
//! - **Bounded traversal**: corrupt cycles are reported, never looped on
//! - **Two validity levels**: topological, and renderable (no two-sided polygons)
//! - **Split editors**: edge split, corner split, and batch strip insertion
//!
//! ## Quick Start
//!
//! ```
//! use trellis::prelude::*;
//!
//! let mut mesh: HalfEdgeMesh = make_square();
//! assert_eq!(mesh.num_corners(), 4);
//! assert_eq!(mesh.num_polygons(), 2);
//!
//! // Insert a strip along two consecutive sides of the front polygon.
//! let edges: Vec<_> = mesh.polygon_halfedges(PolygonId::new(0)).take(2).collect();
//! let strip = split_edges(&mut mesh, &edges).unwrap();
//!
//! assert_eq!(strip.len(), 2);
//! assert_eq!(mesh.num_corners(), 5);
//! assert!(mesh.is_renderable());
//! ```
//!
//! ## Building Meshes Programmatically
//!
//! ```
//! use trellis::prelude::*;
//! use nalgebra::Point3;
//!
//! let positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//!     Point3::new(0.5, 0.5, 1.0),
//! ];
//!
//! let polygons = vec![
//!     vec![0, 2, 1], // bottom
//!     vec![0, 1, 3], // front
//!     vec![1, 2, 3], // right
//!     vec![2, 0, 3], // left
//! ];
//!
//! let mesh: HalfEdgeMesh = build_from_polygons(&positions, &polygons).unwrap();
//! assert_eq!(mesh.num_corners(), 4);
//! assert_eq!(mesh.num_halfedges(), 12);
//! assert!(mesh.is_renderable());
//! ```
//!
//! ## Mesh Traversal
//!
//! ```
//! use trellis::prelude::*;
//!
//! let mesh: HalfEdgeMesh = make_cube();
//! let c = CornerId::new(0);
//!
//! // Edges leaving a corner, in rotation order
//! assert_eq!(mesh.corner_edge_count(c), Some(3));
//! for neighbor in mesh.corner_neighbors(c) {
//!     println!("Neighbor: {:?}", neighbor);
//! }
//!
//! // Corners of a polygon, in boundary order
//! let corners: Vec<_> = mesh.polygon_corners(PolygonId::new(0)).collect();
//! assert_eq!(corners.len(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod edit;
pub mod error;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use trellis::prelude::*;
/// ```
pub mod prelude {
    pub use crate::edit::{split_corner, split_edge, split_edges, Progress};
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{
        build_from_polygons, make_cube, make_square, to_face_vertex, CornerId, HalfEdgeId,
        HalfEdgeMesh, MeshIndex, MeshOptions, PolygonId, Validity,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_small_index_type() {
        let mut mesh: HalfEdgeMesh<u16> = make_cube();
        let edges: Vec<HalfEdgeId<u16>> = mesh.polygon_halfedges(PolygonId::new(1)).collect();

        split_edges(&mut mesh, &edges).unwrap();

        assert_eq!(mesh.num_corners(), 12);
        assert_eq!(mesh.num_polygons(), 10);
        assert!(mesh.is_renderable());
    }

    #[test]
    fn test_short_cycle_limit_reports_broken_corner() {
        let mut mesh: HalfEdgeMesh = make_cube();
        mesh.set_options(MeshOptions::new().with_max_cycle_length(2));

        assert!(!mesh.is_valid());
        let result = split_corner(
            &mut mesh,
            CornerId::new(0),
            [PolygonId::new(0), PolygonId::new(2)],
        );
        assert_eq!(result, Err(MeshError::BrokenCornerCycle { corner: 0 }));
    }
}
