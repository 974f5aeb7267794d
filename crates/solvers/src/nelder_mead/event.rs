use super::{Simplex, Step, Vertex};

/// Iteration event emitted by the Nelder-Mead solver.
///
/// Emitted after each transformation, so `simplex` is the updated simplex.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The transformation applied this iteration.
    pub step: Step,

    /// The simplex after the transformation.
    pub simplex: &'a Simplex,
}

impl<'a> Event<'a> {
    /// Returns the best vertex after this iteration.
    #[must_use]
    pub fn best(&self) -> &'a Vertex {
        self.simplex.best()
    }
}
