//! Nelder-Mead simplex minimization over `ℝⁿ`.
//!
//! # Algorithm
//!
//! The search keeps `n + 1` [`Vertex`]es in a [`Simplex`] sorted by
//! objective value. Each iteration computes the centroid of every vertex
//! except the worst, reflects the worst vertex through it, and then either
//! expands, accepts the reflection, contracts, or shrinks the whole simplex
//! toward the best vertex. The coefficients live in [`Params`].
//!
//! The search stops when the simplex is small (every vertex within the
//! tolerance of the best) or flat (every value within the tolerance of the
//! best). Running out of iterations is not an error: the best vertex found
//! is returned with [`Status::MaxIters`].
//!
//! Nelder-Mead never needs derivatives, which makes it a good fit for noisy
//! or piecewise objectives such as negative log-likelihoods.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the transformation,
//! carrying the [`Step`] taken and the updated simplex. Observers can return
//! [`Action::StopEarly`] to return the current best vertex.
//!
//! # Example
//!
//! ```
//! use optima_core::{Config, Status};
//! use optima_solvers::nelder_mead::{self, Params};
//!
//! let bowl = |x: &[f64]| (x[0] - 1.0).powi(2) + (x[1] + 2.0).powi(2);
//!
//! let solution =
//!     nelder_mead::minimize_unobserved(&bowl, &[0.0, 0.0], &Params::default(), &Config::default())
//!         .unwrap();
//!
//! assert_eq!(solution.status, Status::Converged);
//! assert!((solution.x[0] - 1.0).abs() < 1e-3);
//! assert!((solution.x[1] + 2.0).abs() < 1e-3);
//! ```
//!
//! [`Status::MaxIters`]: optima_core::Status::MaxIters

mod action;
mod error;
mod event;
mod init;
mod params;
mod simplex;
mod solver;
mod step;
mod vertex;


pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use params::{InitMethod, Params, ParamsError};
pub use simplex::Simplex;
pub use solver::NelderMead;
pub use step::Step;
pub use vertex::Vertex;

use optima_core::{Config, Multivariate, Observer, Solution, Status};

use crate::negate::Negate;

/// Minimizes `objective` starting from `x0`.
///
/// The observer receives an [`Event`] for every iteration.
/// See the [module docs](self) for stopping rules.
///
/// # Errors
///
/// Returns [`Error::InvalidParams`] if `params` fails validation, or
/// [`Error::Objective`] if the objective fails at any evaluated point.
pub fn minimize<F, Obs>(
    objective: &F,
    x0: &[f64],
    params: &Params,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<Vec<f64>>, Error>
where
    F: Multivariate,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    params.validate()?;

    let tol = config.tolerance();
    let mut simplex = init::initial_simplex(objective, x0, params)?;

    for iter in 1..=config.max_iters() {
        if simplex.is_converged(tol) {
            return Ok(solution(Status::Converged, simplex, iter - 1));
        }

        let (next, step) = step::step(simplex, objective, params).map_err(|e| e.at(iter))?;
        simplex = next;
        tracing::trace!(iter, ?step, best = simplex.best().value(), "nelder-mead step");

        let event = Event {
            iter,
            step,
            simplex: &simplex,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(solution(Status::StoppedByObserver, simplex, iter));
        }
    }

    let status = if simplex.is_converged(tol) {
        Status::Converged
    } else {
        Status::MaxIters
    };
    Ok(solution(status, simplex, config.max_iters()))
}

/// Minimizes `objective` without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`minimize`].
pub fn minimize_unobserved<F: Multivariate>(
    objective: &F,
    x0: &[f64],
    params: &Params,
    config: &Config,
) -> Result<Solution<Vec<f64>>, Error> {
    minimize(objective, x0, params, config, ())
}

/// Maximizes `objective` starting from `x0`.
///
/// Internally minimizes the negated objective. Events therefore carry
/// negated values, while the returned solution reports the objective's own
/// value at the maximizer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`minimize`].
pub fn maximize<F, Obs>(
    objective: &F,
    x0: &[f64],
    params: &Params,
    config: &Config,
    observer: Obs,
) -> Result<Solution<Vec<f64>>, Error>
where
    F: Multivariate,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut solution = minimize(&Negate(objective), x0, params, config, observer)?;
    solution.value = -solution.value;
    Ok(solution)
}

/// Maximizes `objective` without observer support.
///
/// # Errors
///
/// Returns an error under the same conditions as [`minimize`].
pub fn maximize_unobserved<F: Multivariate>(
    objective: &F,
    x0: &[f64],
    params: &Params,
    config: &Config,
) -> Result<Solution<Vec<f64>>, Error> {
    maximize(objective, x0, params, config, ())
}

fn solution(status: Status, simplex: Simplex, iters: usize) -> Solution<Vec<f64>> {
    let best = simplex.into_best();
    Solution {
        status,
        value: best.value(),
        x: best.into_coords(),
        iters,
    }
}
