//! Progress callbacks for batch edits.
//!
//! [`split_edges_with_progress`](super::split_edges_with_progress) runs in
//! phases (edge splits, then corner splits) and reports after each step.
//!
//! ```
//! use trellis::edit::{split_edges_with_progress, Progress};
//! use trellis::mesh::{make_cube, HalfEdgeMesh, PolygonId};
//!
//! let mut mesh: HalfEdgeMesh = make_cube();
//! let edges: Vec<_> = mesh.polygon_halfedges(PolygonId::new(0)).collect();
//!
//! let progress = Progress::new(|done, out_of, phase| {
//!     eprintln!("{phase}: {done}/{out_of}");
//! });
//! split_edges_with_progress(&mut mesh, &edges, &progress).unwrap();
//! ```

type Callback = dyn Fn(usize, usize, &str) + Send + Sync;

/// Resolution of one phase in [`Progress::report_sub`] updates.
const PHASE_STEPS: usize = 1000;

/// Receives `(done, out_of, phase_name)` updates from an editor.
pub struct Progress {
    callback: Box<Callback>,
}

impl Progress {
    /// Wrap a callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(usize, usize, &str) + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }

    /// Forward an update unchanged.
    #[inline]
    pub fn report(&self, done: usize, out_of: usize, message: &str) {
        (self.callback)(done, out_of, message);
    }

    /// Report step `step` of `steps` inside phase `phase` of `phases`.
    ///
    /// Every phase spans the same share of the total. Updates are sent as
    /// `(phase * 1000 + fraction, phases * 1000)`. Empty phases report
    /// nothing.
    #[inline]
    pub fn report_sub(&self, step: usize, steps: usize, phase: usize, phases: usize, message: &str) {
        if steps == 0 || phases == 0 {
            return;
        }
        let within = step * PHASE_STEPS / steps;
        self.report(phase * PHASE_STEPS + within, phases * PHASE_STEPS, message);
    }

    /// A reporter that ignores every update.
    pub fn none() -> Self {
        Self::new(|_, _, _| {})
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::none()
    }
}

impl std::fmt::Debug for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Progress").finish_non_exhaustive()
    }
}
