//! Run-once, timed, error-capturing solver base.
//!
//! [`Lazy`] wraps any [`Optimize`] implementation and adds three things the
//! algorithms themselves don't care about:
//!
//! - **Caching**: the algorithm runs on the first read of a result and the
//!   outcome is reused until a setter changes the configuration.
//! - **Timing**: the wall-clock duration of the last run is kept.
//! - **Error capture**: a failed run never propagates. The error is stored,
//!   result reads return NaN sentinels, and [`Lazy::error`] exposes it.
//!
//! Result accessors take `&mut self` because they may run the algorithm.
//! A `Lazy` therefore has a single writer at a time; sharing one across
//! threads requires external synchronization.

use std::{
    error::Error as StdError,
    time::{Duration, Instant},
};

use crate::{Config, ConfigError, Solution};

/// An iterative algorithm that [`Lazy`] can run and cache.
pub trait Optimize {
    /// The point type the algorithm searches over.
    type Point: Clone;

    /// Failure raised by a run.
    type Error: StdError + Send + Sync + 'static;

    /// Solver name used in log output.
    const NAME: &'static str;

    /// Runs the algorithm to completion under `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the algorithm cannot produce a point.
    fn optimize(&self, config: &Config) -> Result<Solution<Self::Point>, Self::Error>;

    /// The "not a number" point reported when a run has failed.
    fn unavailable(&self) -> Self::Point;

    /// Iterations a failed run consumed before `error` stopped it.
    fn failed_iterations(_error: &Self::Error) -> usize {
        0
    }
}

struct Run<P, E> {
    outcome: Result<Solution<P>, E>,
    elapsed: Duration,
}

/// Caches, times, and captures errors from an [`Optimize`] implementation.
pub struct Lazy<A: Optimize> {
    algorithm: A,
    config: Config,
    ready: bool,
    last: Option<Run<A::Point, A::Error>>,
}

impl<A: Optimize> Lazy<A> {
    /// Wraps an algorithm with the default [`Config`].
    #[must_use]
    pub fn new(algorithm: A) -> Self {
        Self::with_config(algorithm, Config::default())
    }

    /// Wraps an algorithm with the given [`Config`].
    #[must_use]
    pub fn with_config(algorithm: A, config: Config) -> Self {
        Self {
            algorithm,
            config,
            ready: false,
            last: None,
        }
    }

    /// Runs the algorithm unless a result for the current configuration is
    /// already cached.
    pub fn run(&mut self) {
        self.current();
    }

    /// Returns true if a result for the current configuration is cached.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Returns the solution, running the algorithm if needed.
    ///
    /// # Errors
    ///
    /// Returns the captured error if the run failed.
    pub fn solution(&mut self) -> Result<&Solution<A::Point>, &A::Error> {
        self.current().outcome.as_ref()
    }

    /// Returns the best point found, or the NaN sentinel if the run failed.
    pub fn result(&mut self) -> A::Point {
        let x = self.current().outcome.as_ref().ok().map(|s| s.x.clone());
        x.unwrap_or_else(|| self.algorithm.unavailable())
    }

    /// Returns the function value at the result, or NaN if the run failed.
    pub fn function_result(&mut self) -> f64 {
        self.current()
            .outcome
            .as_ref()
            .map_or(f64::NAN, |s| s.value)
    }

    /// Returns the number of iterations consumed.
    ///
    /// A failed run reports the iterations it used before failing.
    pub fn iterations(&mut self) -> usize {
        match &self.current().outcome {
            Ok(solution) => solution.iters,
            Err(error) => A::failed_iterations(error),
        }
    }

    /// Returns the error captured by the most recent run, if any.
    ///
    /// This never triggers a run. After a setter invalidates the cache, the
    /// error from the previous run stays visible until the next run.
    #[must_use]
    pub fn error(&self) -> Option<&A::Error> {
        self.last.as_ref().and_then(|run| run.outcome.as_ref().err())
    }

    /// Returns the wall-clock duration of the most recent run.
    ///
    /// Returns [`Duration::ZERO`] before the first run.
    #[must_use]
    pub fn time_taken(&self) -> Duration {
        self.last.as_ref().map_or(Duration::ZERO, |run| run.elapsed)
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.config.tolerance()
    }

    /// Returns the iteration budget.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.config.max_iters()
    }

    /// Sets the convergence tolerance and invalidates the cached result.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is negative or non-finite, in which
    /// case nothing changes.
    pub fn set_tolerance(&mut self, tolerance: f64) -> Result<(), ConfigError> {
        self.config = self.config.with_tolerance(tolerance)?;
        self.invalidate();
        Ok(())
    }

    /// Sets the iteration budget and invalidates the cached result.
    pub fn set_max_iters(&mut self, max_iters: usize) {
        self.config = self.config.with_max_iters(max_iters);
        self.invalidate();
    }

    /// Replaces the configuration and invalidates the cached result.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
        self.invalidate();
    }

    /// Returns the wrapped algorithm.
    #[must_use]
    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    /// Mutates the wrapped algorithm and invalidates the cached result.
    pub fn update<T>(&mut self, f: impl FnOnce(&mut A) -> T) -> T {
        let out = f(&mut self.algorithm);
        self.invalidate();
        out
    }

    /// Mutates the wrapped algorithm, invalidating only if `f` succeeds.
    ///
    /// # Errors
    ///
    /// Returns the error from `f`, leaving the cached result in place.
    pub fn try_update<T, E>(&mut self, f: impl FnOnce(&mut A) -> Result<T, E>) -> Result<T, E> {
        let out = f(&mut self.algorithm)?;
        self.invalidate();
        Ok(out)
    }

    /// Forces the next result read to rerun the algorithm.
    pub fn invalidate(&mut self) {
        self.ready = false;
    }

    /// Unwraps the algorithm, discarding any cached result.
    pub fn into_inner(self) -> A {
        self.algorithm
    }

    fn current(&mut self) -> &Run<A::Point, A::Error> {
        if !self.ready {
            self.last = None;
        }
        self.ready = true;
        let (algorithm, config) = (&self.algorithm, &self.config);
        self.last.get_or_insert_with(|| execute(algorithm, config))
    }
}

fn execute<A: Optimize>(algorithm: &A, config: &Config) -> Run<A::Point, A::Error> {
    let span = tracing::debug_span!("optimize", solver = A::NAME);
    let _guard = span.enter();

    let start = Instant::now();
    let outcome = algorithm.optimize(config);
    let elapsed = start.elapsed();

    match &outcome {
        Ok(solution) => tracing::debug!(
            status = ?solution.status,
            iters = solution.iters,
            value = solution.value,
            ?elapsed,
            "run finished"
        ),
        Err(error) => tracing::warn!(%error, ?elapsed, "run failed, results unavailable"),
    }

    Run { outcome, elapsed }
}
