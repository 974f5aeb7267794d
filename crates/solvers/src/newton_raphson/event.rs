/// Iteration event emitted by the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Current iterate.
    pub x: f64,

    /// Function value at `x`.
    pub value: f64,

    /// Derivative at `x`.
    pub derivative: f64,
}

impl Event {
    /// Returns the Newton step this iterate would take.
    ///
    /// Non-finite when the derivative is zero.
    #[must_use]
    pub fn step(&self) -> f64 {
        -self.value / self.derivative
    }
}
