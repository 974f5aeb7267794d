use std::time::Duration;

use optima_core::{Config, ConfigError, Lazy, Multivariate, Optimize, Solution};

use super::{Error, InitMethod, Params, ParamsError, minimize_unobserved};

/// The minimization problem as the lazy base sees it.
struct Problem<F> {
    x0: Vec<f64>,
    objective: F,
    params: Params,
}

impl<F: Multivariate> Optimize for Problem<F> {
    type Point = Vec<f64>;
    type Error = Error;

    const NAME: &'static str = "nelder-mead";

    fn optimize(&self, config: &Config) -> Result<Solution<Vec<f64>>, Error> {
        minimize_unobserved(&self.objective, &self.x0, &self.params, config)
    }

    fn unavailable(&self) -> Vec<f64> {
        vec![f64::NAN; self.x0.len()]
    }

    fn failed_iterations(error: &Error) -> usize {
        error.iterations()
    }
}

/// Nelder-Mead minimizer with lazily computed, cached results.
///
/// Construction does no work and fixes the problem dimension to the length
/// of the start vector. The first result read runs the minimization; later
/// reads reuse it until a setter changes the start point, a coefficient, or
/// the configuration.
///
/// A failed run reads as a NaN vector of the problem dimension, with the
/// failure available from [`error`](Self::error).
///
/// # Example
///
/// ```
/// use optima_solvers::NelderMead;
///
/// let rosenbrock = |x: &[f64]| (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0] * x[0]).powi(2);
///
/// let mut solver = NelderMead::new([-1.2, 1.0], rosenbrock);
/// solver.set_tolerance(1e-10).unwrap();
/// solver.set_max_iters(500);
///
/// let x = solver.result();
/// assert!((x[0] - 1.0).abs() < 1e-3);
/// assert!((x[1] - 1.0).abs() < 1e-3);
/// ```
pub struct NelderMead<F: Multivariate> {
    inner: Lazy<Problem<F>>,
}

impl<F: Multivariate> NelderMead<F> {
    /// Creates a minimizer starting at `x0` with default [`Params`] and [`Config`].
    #[must_use]
    pub fn new(x0: impl Into<Vec<f64>>, objective: F) -> Self {
        Self::with_config(x0, objective, Config::default())
    }

    /// Creates a minimizer starting at `x0` with the given [`Config`].
    #[must_use]
    pub fn with_config(x0: impl Into<Vec<f64>>, objective: F, config: Config) -> Self {
        let problem = Problem {
            x0: x0.into(),
            objective,
            params: Params::default(),
        };
        Self {
            inner: Lazy::with_config(problem, config),
        }
    }

    /// Runs the minimization if no cached result exists.
    pub fn run(&mut self) {
        self.inner.run();
    }

    /// Returns the best point found, or a NaN vector if the run failed.
    pub fn result(&mut self) -> Vec<f64> {
        self.inner.result()
    }

    /// Returns the objective at the best point, or NaN if the run failed.
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
    pub fn solution(&mut self) -> Result<&Solution<Vec<f64>>, &Error> {
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

    /// Returns the problem dimension.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.inner.algorithm().x0.len()
    }

    /// Returns the start point.
    #[must_use]
    pub fn start_values(&self) -> &[f64] {
        &self.inner.algorithm().x0
    }

    /// Replaces the start point and invalidates the cached result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `x0` has a different length
    /// than the current start point. Nothing changes in that case.
    pub fn set_start_values(&mut self, x0: impl Into<Vec<f64>>) -> Result<(), Error> {
        let x0 = x0.into();
        self.inner.try_update(|problem| {
            if x0.len() != problem.x0.len() {
                return Err(Error::DimensionMismatch {
                    expected: problem.x0.len(),
                    actual: x0.len(),
                });
            }
            problem.x0 = x0;
            Ok(())
        })
    }

    /// Evaluates the objective at `x` without touching the cached result.
    ///
    /// # Errors
    ///
    /// Returns the objective's own error if evaluation fails.
    pub fn evaluate(&self, x: &[f64]) -> Result<f64, F::Error> {
        self.inner.algorithm().objective.call(x)
    }

    /// Returns the current coefficients.
    #[must_use]
    pub fn params(&self) -> &Params {
        &self.inner.algorithm().params
    }

    /// Returns the initial simplex construction method.
    #[must_use]
    pub fn init_method(&self) -> InitMethod {
        self.params().init
    }

    /// Returns the initial simplex size `ε`.
    #[must_use]
    pub fn perturbation(&self) -> f64 {
        self.params().perturbation
    }

    /// Returns the reflection coefficient `α`.
    #[must_use]
    pub fn reflection(&self) -> f64 {
        self.params().reflection
    }

    /// Returns the expansion coefficient `β`.
    #[must_use]
    pub fn expansion(&self) -> f64 {
        self.params().expansion
    }

    /// Returns the contraction coefficient `γ`.
    #[must_use]
    pub fn contraction(&self) -> f64 {
        self.params().contraction
    }

    /// Returns the shrink coefficient `δ`.
    #[must_use]
    pub fn shrink(&self) -> f64 {
        self.params().shrink
    }

    /// Replaces every coefficient and invalidates the cached result.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` fails validation. Nothing changes in
    /// that case.
    pub fn set_params(&mut self, params: Params) -> Result<(), ParamsError> {
        params.validate()?;
        self.inner.update(|problem| problem.params = params);
        Ok(())
    }

    /// Sets the initial simplex construction method.
    pub fn set_init_method(&mut self, init: InitMethod) {
        self.inner.update(|problem| problem.params.init = init);
    }

    /// Sets the initial simplex size `ε`.
    ///
    /// # Errors
    ///
    /// Returns an error unless `perturbation` is finite and positive.
    pub fn set_perturbation(&mut self, perturbation: f64) -> Result<(), ParamsError> {
        self.set_params(Params {
            perturbation,
            ..*self.params()
        })
    }

    /// Sets the reflection coefficient `α`.
    ///
    /// # Errors
    ///
    /// Returns an error unless `reflection` is finite and positive.
    pub fn set_reflection(&mut self, reflection: f64) -> Result<(), ParamsError> {
        self.set_params(Params {
            reflection,
            ..*self.params()
        })
    }

    /// Sets the expansion coefficient `β`.
    ///
    /// # Errors
    ///
    /// Returns an error unless `expansion` is finite and positive.
    pub fn set_expansion(&mut self, expansion: f64) -> Result<(), ParamsError> {
        self.set_params(Params {
            expansion,
            ..*self.params()
        })
    }

    /// Sets the contraction coefficient `γ`.
    ///
    /// # Errors
    ///
    /// Returns an error unless `contraction` lies in `(0, 1)`.
    pub fn set_contraction(&mut self, contraction: f64) -> Result<(), ParamsError> {
        self.set_params(Params {
            contraction,
            ..*self.params()
        })
    }

    /// Sets the shrink coefficient `δ`.
    ///
    /// # Errors
    ///
    /// Returns an error unless `shrink` lies in `(0, 1)`.
    pub fn set_shrink(&mut self, shrink: f64) -> Result<(), ParamsError> {
        self.set_params(Params {
            shrink,
            ..*self.params()
        })
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
