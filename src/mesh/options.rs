//! Mesh configuration.

/// Default upper bound on the length of any corner rotation or polygon
/// boundary walk.
pub const DEFAULT_MAX_CYCLE_LENGTH: usize = 1000;

/// Options carried by a [`HalfEdgeMesh`](super::HalfEdgeMesh).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshOptions {
    /// Number of steps after which a traversal that has not returned to its
    /// start is reported as broken.
    pub max_cycle_length: usize,
}

impl MeshOptions {
    /// Create options with the default cycle limit.
    pub fn new() -> Self {
        Self {
            max_cycle_length: DEFAULT_MAX_CYCLE_LENGTH,
        }
    }

    /// Set the traversal cycle limit. A limit of zero is clamped to one.
    pub fn with_max_cycle_length(mut self, max_cycle_length: usize) -> Self {
        self.max_cycle_length = max_cycle_length.max(1);
        self
    }
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// How strict a validity check is about polygon size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    /// Polygons need at least two sides. Two-sided polygons appear between
    /// [`split_edge`](crate::edit::split_edge) and the corner split that
    /// widens them.
    #[default]
    Topological,
    /// Polygons need at least three sides, so every polygon can be drawn.
    Renderable,
}

impl Validity {
    /// Minimum polygon boundary length at this level.
    pub fn min_polygon_sides(self) -> usize {
        match self {
            Validity::Topological => 2,
            Validity::Renderable => 3,
        }
    }
}
