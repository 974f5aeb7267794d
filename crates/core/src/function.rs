//! Objective callables consumed by the solvers.
//!
//! Solvers only ever call these; they never inspect how a function is built.
//! Plain closures work directly and can never fail. Wrap a closure that
//! returns a `Result` in [`Fallible`] to let its errors surface through the
//! solver's error type instead.

use std::{convert::Infallible, error::Error as StdError};

/// A scalar function `f: ℝ → ℝ`.
pub trait Univariate {
    type Error: StdError + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the function cannot be evaluated at `x`.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

/// A scalar objective over `ℝⁿ`.
pub trait Multivariate {
    type Error: StdError + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be evaluated at `x`.
    fn call(&self, x: &[f64]) -> Result<f64, Self::Error>;
}

impl<F> Univariate for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

impl<F> Multivariate for F
where
    F: Fn(&[f64]) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: &[f64]) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

/// Adapter for closures that report their own failures.
///
/// ```
/// use optima_core::{Fallible, Univariate};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("log of non-positive value")]
/// struct Domain;
///
/// let ln = Fallible(|x: f64| if x > 0.0 { Ok(x.ln()) } else { Err(Domain) });
/// assert!(ln.call(1.0).is_ok());
/// assert!(ln.call(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> Univariate for Fallible<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (self.0)(x)
    }
}

impl<F, E> Multivariate for Fallible<F>
where
    F: Fn(&[f64]) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, x: &[f64]) -> Result<f64, Self::Error> {
        (self.0)(x)
    }
}
