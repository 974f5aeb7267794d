//! Newton-Raphson root finding for scalar functions.
//!
//! # Algorithm
//!
//! Starting from `x0`, each iteration evaluates `f(x)` and `f'(x)` and takes
//! the Newton step `x - f(x) / f'(x)`. The search stops when either
//!
//! - `|f(x)|` drops below the tolerance (converged on value), or
//! - the step length drops below the tolerance (converged on step; the
//!   stepped-to point is reported with `f` at the iterate it was taken
//!   from, so no extra evaluation is spent).
//!
//! If `|f'(x)|` falls below `1e-12` the step is numerically meaningless and
//! the solver fails with [`Error::DerivativeNearZero`]. Running out of
//! iterations is not an error: the last evaluated point is returned with
//! [`Status::MaxIters`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after evaluating `f` and
//! `f'` and before any convergence check. Observers can return
//! [`Action::StopEarly`] to return the current point immediately.
//!
//! # Lazy facade
//!
//! [`NewtonRaphson`] wraps [`solve_unobserved`] in the [`Lazy`] base: the
//! solve runs on the first result read and is cached until a setter changes
//! the configuration, and failures surface as NaN results plus
//! [`NewtonRaphson::error`].
//!
//! [`Status::MaxIters`]: optima_core::Status::MaxIters
//! [`Lazy`]: optima_core::Lazy

mod action;
mod error;
mod event;
mod solver;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solver::NewtonRaphson;

use optima_core::{Config, Observer, Solution, Status, Univariate};

/// Derivative magnitude below which a Newton step is refused.
pub const DERIVATIVE_FLOOR: f64 = 1e-12;

/// Finds a root of `f` starting from `x0`, using its derivative `f_deriv`.
///
/// The observer receives an [`Event`] for every iteration.
/// See the [module docs](self) for stopping rules.
///
/// # Errors
///
/// Returns [`Error::DerivativeNearZero`] if the derivative vanishes at an
/// iterate, or an evaluation error if `f` or `f_deriv` fails.
pub fn solve<F, D, Obs>(
    f: &F,
    f_deriv: &D,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<f64>, Error>
where
    F: Univariate,
    D: Univariate,
    Obs: Observer<Event, Action>,
{
    let tol = config.tolerance();
    let mut x = x0;

    for iter in 1..=config.max_iters() {
        let value = f.call(x).map_err(|e| Error::function(iter, e))?;
        let derivative = f_deriv.call(x).map_err(|e| Error::derivative(iter, e))?;
        tracing::trace!(iter, x, value, derivative, "newton-raphson iterate");

        let event = Event {
            iter,
            x,
            value,
            derivative,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(solution(Status::StoppedByObserver, x, value, iter));
        }

        if value.abs() < tol {
            return Ok(solution(Status::Converged, x, value, iter));
        }

        if derivative.abs() < DERIVATIVE_FLOOR {
            return Err(Error::DerivativeNearZero {
                iter,
                x,
                derivative,
            });
        }

        let next = x - value / derivative;
        if (next - x).abs() < tol {
            return Ok(solution(Status::Converged, next, value, iter));
        }

        if iter == config.max_iters() {
            return Ok(solution(Status::MaxIters, x, value, iter));
        }

        x = next;
    }

    // Only reached with a zero iteration budget.
    let value = f.call(x).map_err(|e| Error::function(0, e))?;
    Ok(solution(Status::MaxIters, x, value, 0))
}

/// Finds a root of `f` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F, D>(
    f: &F,
    f_deriv: &D,
    x0: f64,
    config: &Config,
) -> Result<Solution<f64>, Error>
where
    F: Univariate,
    D: Univariate,
{
    solve(f, f_deriv, x0, config, ())
}

fn solution(status: Status, x: f64, value: f64, iters: usize) -> Solution<f64> {
    Solution {
        status,
        x,
        value,
        iters,
    }
}
