//! Local topology editors.
//!
//! Every editor rewrites a constant-size neighbourhood of the mesh and only
//! ever adds entities:
//!
//! - [`split_edge`] duplicates an edge and puts a two-sided polygon between
//!   the copies
//! - [`split_corner`] separates a corner into two joined by a new edge
//! - [`split_edges`] combines both to insert a strip of polygons along a set
//!   of edges
//!
//! Misuse is reported through [`MeshError`](crate::error::MeshError) before
//! the mesh is touched.

mod corner;
mod edge;
mod progress;
mod strip;

pub use corner::split_corner;
pub use edge::split_edge;
pub use progress::Progress;
pub use strip::{split_edges, split_edges_with_progress};
