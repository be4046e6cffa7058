//! Core mesh data structures.
//!
//! This module provides the half-edge polygon mesh and everything needed to
//! build, walk, and check it.
//!
//! # Overview
//!
//! The primary type is [`HalfEdgeMesh`]. It stores corners, polygons, and
//! half-edges in flat arenas. Each half-edge links to the next half-edge
//! around its corner and to its twin on the neighbouring polygon, which is
//! enough to recover both corner rotations and polygon boundaries.
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe handles:
//! - [`CornerId`] - Identifies a corner
//! - [`HalfEdgeId`] - Identifies a half-edge
//! - [`PolygonId`] - Identifies a polygon
//!
//! These are generic over the underlying integer type ([`MeshIndex`]), so
//! you can choose `u16`, `u32`, or `u64`.
//!
//! # Construction
//!
//! ```
//! use trellis::mesh::{make_cube, HalfEdgeMesh};
//!
//! let cube: HalfEdgeMesh = make_cube();
//! assert_eq!(cube.num_corners(), 8);
//! assert!(cube.is_renderable());
//! ```

mod builder;
mod halfedge;
mod index;
mod options;
mod primitives;
mod traverse;
mod validate;

pub use builder::{build_from_polygons, to_face_vertex};
pub use halfedge::{Corner, HalfEdge, HalfEdgeMesh, Polygon};
pub use index::{CornerId, HalfEdgeId, MeshIndex, PolygonId};
pub use options::{MeshOptions, Validity, DEFAULT_MAX_CYCLE_LENGTH};
pub use primitives::{make_cube, make_square};
pub use traverse::CycleIter;
