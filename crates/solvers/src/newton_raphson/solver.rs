use std::time::Duration;

use optima_core::{Config, ConfigError, Lazy, Optimize, Solution, Univariate};

use super::{Error, solve_unobserved};

/// The root-finding problem as the lazy base sees it.
struct Problem<F, D> {
    x0: f64,
    f: F,
    f_deriv: D,
}

impl<F: Univariate, D: Univariate> Optimize for Problem<F, D> {
    type Point = f64;
    type Error = Error;

    const NAME: &'static str = "newton-raphson";

    fn optimize(&self, config: &Config) -> Result<Solution<f64>, Error> {
        solve_unobserved(&self.f, &self.f_deriv, self.x0, config)
    }

    fn unavailable(&self) -> f64 {
        f64::NAN
    }

    fn failed_iterations(error: &Error) -> usize {
        error.iterations()
    }
}

/// Newton-Raphson root finder with lazily computed, cached results.
///
/// Construction does no work. The first call to a result accessor
/// ([`result`](Self::result), [`function_result`](Self::function_result),
/// [`iterations`](Self::iterations), [`solution`](Self::solution)) runs the
/// solver; later calls reuse that run until a setter changes the start value
/// or configuration.
///
/// A failed run never panics or returns an error from the accessors: results
/// read as NaN and the failure is available from [`error`](Self::error).
///
/// `f` and `f_deriv` may be closures or references to closures. They should
/// be pure, since results are cached.
///
/// # Example
///
/// ```
/// use optima_solvers::NewtonRaphson;
///
/// let mut solver = NewtonRaphson::new(1.0, |x: f64| x * x - 4.0, |x: f64| 2.0 * x);
/// solver.set_tolerance(1e-6).unwrap();
///
/// assert!((solver.result() - 2.0).abs() < 1e-4);
/// assert!(solver.error().is_none());
/// ```
pub struct NewtonRaphson<F: Univariate, D: Univariate> {
    inner: Lazy<Problem<F, D>>,
}

impl<F: Univariate, D: Univariate> NewtonRaphson<F, D> {
    /// Creates a solver starting at `x0` with the default [`Config`].
    #[must_use]
    pub fn new(x0: f64, f: F, f_deriv: D) -> Self {
        Self::with_config(x0, f, f_deriv, Config::default())
    }

    /// Creates a solver starting at `x0` with the given [`Config`].
    #[must_use]
    pub fn with_config(x0: f64, f: F, f_deriv: D, config: Config) -> Self {
        Self {
            inner: Lazy::with_config(Problem { x0, f, f_deriv }, config),
        }
    }

    /// Runs the solver if no cached result exists.
    pub fn run(&mut self) {
        self.inner.run();
    }

    /// Returns the root estimate, or NaN if the run failed.
    pub fn result(&mut self) -> f64 {
        self.inner.result()
    }

    /// Returns `f` at the root estimate, or NaN if the run failed.
    pub fn function_result(&mut self) -> f64 {
        self.inner.function_result()
    }

    /// Returns the number of iterations consumed, including those spent by a
    /// run that failed.
    pub fn iterations(&mut self) -> usize {
        self.inner.iterations()
    }

    /// Returns the full solution, including its [`Status`](optima_core::Status).
    ///
    /// # Errors
    ///
    /// Returns the captured error if the run failed.
    pub fn solution(&mut self) -> Result<&Solution<f64>, &Error> {
        self.inner.solution()
    }

    /// Returns the error captured by the most recent run, if any.
    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        self.inner.error()
    }

    /// Returns true if a result for the current configuration is cached.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.inner.is_ready()
    }

    /// Returns the wall-clock duration of the most recent run.
    #[must_use]
    pub fn time_taken(&self) -> Duration {
        self.inner.time_taken()
    }

    /// Returns the start value.
    #[must_use]
    pub fn start_value(&self) -> f64 {
        self.inner.algorithm().x0
    }

    /// Sets the start value and invalidates the cached result.
    pub fn set_start_value(&mut self, x0: f64) {
        self.inner.update(|problem| problem.x0 = x0);
    }

    /// Evaluates `f` at `x` without touching the cached result.
    ///
    /// # Errors
    ///
    /// Returns the function's own error if evaluation fails.
    pub fn evaluate_function(&self, x: f64) -> Result<f64, F::Error> {
        self.inner.algorithm().f.call(x)
    }

    /// Evaluates the derivative at `x` without touching the cached result.
    ///
    /// # Errors
    ///
    /// Returns the derivative's own error if evaluation fails.
    pub fn evaluate_derivative(&self, x: f64) -> Result<f64, D::Error> {
        self.inner.algorithm().f_deriv.call(x)
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        self.inner.config()
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.inner.tolerance()
    }

    /// Returns the iteration budget.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.inner.max_iters()
    }

    /// Sets the convergence tolerance and invalidates the cached result.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is negative or non-finite.
    pub fn set_tolerance(&mut self, tolerance: f64) -> Result<(), ConfigError> {
        self.inner.set_tolerance(tolerance)
    }

    /// Sets the iteration budget and invalidates the cached result.
    pub fn set_max_iters(&mut self, max_iters: usize) {
        self.inner.set_max_iters(max_iters);
    }

    /// Replaces the configuration and invalidates the cached result.
    pub fn set_config(&mut self, config: Config) {
        self.inner.set_config(config);
    }
}
