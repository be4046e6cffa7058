//! Error types for trellis.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur during mesh construction, validation, and editing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The input has no polygons.
    #[error("mesh has no polygons")]
    EmptyMesh,

    /// A polygon references a corner index outside the position list.
    #[error("polygon {polygon} references invalid corner index {corner}")]
    InvalidCornerIndex {
        /// The polygon index.
        polygon: usize,
        /// The invalid corner index.
        corner: usize,
    },

    /// A polygon has fewer than three corners or repeats a corner.
    #[error("polygon {polygon} is degenerate")]
    DegeneratePolygon {
        /// The polygon index.
        polygon: usize,
    },

    /// The same directed edge appears in more than one polygon.
    #[error("directed edge ({c0}, {c1}) is used by more than one polygon")]
    NonManifoldEdge {
        /// First corner of the edge.
        c0: usize,
        /// Second corner of the edge.
        c1: usize,
    },

    /// An edge has no polygon on its opposite side.
    #[error("edge ({c0}, {c1}) has no opposite polygon")]
    OpenEdge {
        /// First corner of the edge.
        c0: usize,
        /// Second corner of the edge.
        c1: usize,
    },

    /// A corner is not used by any polygon.
    #[error("corner {corner} is not used by any polygon")]
    IsolatedCorner {
        /// The corner index.
        corner: usize,
    },

    /// The mesh has non-manifold topology.
    #[error("mesh has non-manifold topology: {details}")]
    NonManifold {
        /// Description of the non-manifold condition.
        details: String,
    },

    /// A half-edge's twin does not point back to it.
    #[error("half-edge {halfedge} is not the twin of its twin")]
    TwinMismatch {
        /// The half-edge index.
        halfedge: usize,
    },

    /// A corner rotation does not close, or leaves the corner.
    #[error("rotation around corner {corner} is broken")]
    BrokenCornerCycle {
        /// The corner index.
        corner: usize,
    },

    /// A corner rotation closes with too few half-edges.
    #[error("corner {corner} has {degree} half-edges, expected at least 2")]
    CornerDegree {
        /// The corner index.
        corner: usize,
        /// The rotation length.
        degree: usize,
    },

    /// A polygon boundary does not close, or leaves the polygon.
    #[error("boundary of polygon {polygon} is broken")]
    BrokenPolygonCycle {
        /// The polygon index.
        polygon: usize,
    },

    /// A polygon boundary closes with too few sides.
    #[error("polygon {polygon} has {sides} sides, expected at least {min}")]
    PolygonTooSmall {
        /// The polygon index.
        polygon: usize,
        /// The boundary length.
        sides: usize,
        /// The required minimum.
        min: usize,
    },

    /// An editor could not find a boundary half-edge it requires.
    #[error("no half-edge around corner {corner} {role} polygon {polygon}")]
    MissingHalfEdge {
        /// The corner being edited.
        corner: usize,
        /// The polygon that was searched for.
        polygon: usize,
        /// How the half-edge relates to the polygon.
        role: &'static str,
    },

    /// Two polygons are not neighbours in a corner's rotation.
    #[error("polygons {a} and {b} are not adjacent around corner {corner}")]
    NotAdjacent {
        /// The corner being edited.
        corner: usize,
        /// First polygon.
        a: usize,
        /// Second polygon.
        b: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },
}

impl MeshError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        MeshError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}
