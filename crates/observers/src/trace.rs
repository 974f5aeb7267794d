use optima_core::Observer;
use tracing::Level;

use crate::traits::{HasIteration, HasObjective};

/// Logs every iteration through `tracing`.
///
/// Each event becomes one record with `solver`, `iter`, and `objective`
/// fields, emitted at the configured level (`TRACE` unless changed). The
/// observer never steers the solver.
#[derive(Debug, Clone, Copy)]
pub struct Trace {
    solver: &'static str,
    level: Level,
}

impl Trace {
    /// Creates a trace labelled with `solver`, logging at `TRACE`.
    #[must_use]
    pub fn new(solver: &'static str) -> Self {
        Self {
            solver,
            level: Level::TRACE,
        }
    }

    /// Logs at `level` instead.
    #[must_use]
    pub fn at(self, level: Level) -> Self {
        Self { level, ..self }
    }

    /// Returns the solver label.
    #[must_use]
    pub fn solver(&self) -> &'static str {
        self.solver
    }

    /// Returns the log level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl<E, A> Observer<E, A> for Trace
where
    E: HasIteration + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let (solver, iter, objective) = (self.solver, event.iteration(), event.objective());
        // Tracing macros need a constant level.
        if self.level == Level::ERROR {
            tracing::error!(solver, iter, objective, "iteration");
        } else if self.level == Level::WARN {
            tracing::warn!(solver, iter, objective, "iteration");
        } else if self.level == Level::INFO {
            tracing::info!(solver, iter, objective, "iteration");
        } else if self.level == Level::DEBUG {
            tracing::debug!(solver, iter, objective, "iteration");
        } else {
            tracing::trace!(solver, iter, objective, "iteration");
        }
        None
    }
}
