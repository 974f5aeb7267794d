//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so one
//! observer can watch either solver.
//!
//! # Event traits
//!
//! - [`HasIteration`] — events that know which iteration produced them
//! - [`HasObjective`] — events that carry a value the solver drives down
//! - [`HasResidual`] — events that carry a signed residual
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use optima_core::{Config, Observer, Status};
//! use optima_observers::traits::{CanStopEarly, HasResidual};
//! use optima_solvers::newton_raphson;
//!
//! /// Stops as soon as the residual is small enough for the caller.
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//!
//! let f = |x: f64| x * x - 4.0;
//! let df = |x: f64| 2.0 * x;
//! let solution =
//!     newton_raphson::solve(&f, &df, 1.0, &Config::default(), GoodEnough { tolerance: 1e-2 })
//!         .unwrap();
//!
//! assert_eq!(solution.status, Status::StoppedByObserver);
//! assert!((solution.x - 2.0).abs() < 1e-2);
//! ```

use optima_solvers::{nelder_mead, newton_raphson};

/// An event tagged with the 1-based iteration that produced it.
pub trait HasIteration {
    /// Returns the iteration counter.
    fn iteration(&self) -> usize;
}

/// An event that carries an objective value.
///
/// Lower is better for every solver in this workspace.
pub trait HasObjective {
    /// Returns the objective for this event.
    fn objective(&self) -> f64;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- newton_raphson ---

impl HasIteration for newton_raphson::Event {
    fn iteration(&self) -> usize {
        self.iter
    }
}

/// The residual magnitude `|f(x)|`.
impl HasObjective for newton_raphson::Event {
    fn objective(&self) -> f64 {
        self.value.abs()
    }
}

impl HasResidual for newton_raphson::Event {
    fn residual(&self) -> f64 {
        self.value
    }
}

impl CanStopEarly for newton_raphson::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- nelder_mead ---

impl HasIteration for nelder_mead::Event<'_> {
    fn iteration(&self) -> usize {
        self.iter
    }
}

/// The best vertex value after the iteration's step.
impl HasObjective for nelder_mead::Event<'_> {
    fn objective(&self) -> f64 {
        self.best().value()
    }
}

impl CanStopEarly for nelder_mead::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
