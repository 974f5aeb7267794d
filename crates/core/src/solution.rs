/// Indicates why a solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    ///
    /// This is a soft stop: the solution holds the last point reached.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The outcome of a successful solver run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<X> {
    /// Final solver status.
    pub status: Status,

    /// Best point found (a root for root finders, a minimizer for minimizers).
    pub x: X,

    /// Function or objective value at `x`.
    pub value: f64,

    /// Number of iterations consumed.
    pub iters: usize,
}

impl<X> Solution<X> {
    /// Returns true if the solver met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
