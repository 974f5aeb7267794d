use thiserror::Error;

/// Stopping criteria shared by every solver.
///
/// The tolerance means different things to different algorithms (function
/// value and step size for Newton-Raphson, simplex size and value spread for
/// Nelder-Mead), but the iteration budget is always a soft stop: running out
/// of iterations returns the best point reached, never an error.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawConfig"))]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("tolerance must be finite and non-negative, got {0}")]
    Tolerance(f64),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-9,
            max_iters: 100,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is negative or non-finite.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        validate_tolerance(tolerance)?;
        Ok(Self {
            tolerance,
            max_iters,
        })
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns a copy with a different tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is negative or non-finite.
    pub fn with_tolerance(self, tolerance: f64) -> Result<Self, ConfigError> {
        Self::new(tolerance, self.max_iters)
    }

    /// Returns a copy with a different iteration budget.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }
}

fn validate_tolerance(tolerance: f64) -> Result<(), ConfigError> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(ConfigError::Tolerance(tolerance));
    }
    Ok(())
}

/// Unvalidated form used for deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct RawConfig {
    tolerance: f64,
    max_iters: usize,
}

#[cfg(feature = "serde")]
impl Default for RawConfig {
    fn default() -> Self {
        let config = Config::default();
        Self {
            tolerance: config.tolerance,
            max_iters: config.max_iters,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Config::new(raw.tolerance, raw.max_iters)
    }
}
