use thiserror::Error;

/// How the initial simplex is built around the start point.
///
/// Each method adds `n` vertices to `x0`, one per coordinate, using the
/// perturbation size `ε` from [`Params::perturbation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InitMethod {
    /// Vertex `i` moves coordinate `i` by `+ε`.
    #[default]
    Basic,

    /// Vertex `i` moves coordinate `i` by `+ε·(1 + |x0[i]|)`, so the step
    /// grows with the coordinate's magnitude.
    Scaled,

    /// Vertex `i` moves coordinate `i` by `+a` and every other coordinate by
    /// `-a/(n-1)`, where `a = ε / (2√n)`.
    ///
    /// The offsets of the perturbed vertices sum to zero, which keeps their
    /// centroid at `x0`. For `n > 1` this also means the whole simplex lies in
    /// the hyperplane through `x0` normal to `(1, …, 1)`, and every Nelder-Mead
    /// transformation keeps it there.
    Symmetric,
}

/// Tunable coefficients of the Nelder-Mead method.
///
/// Fields are public; [`Params::validate`] checks them and runs at the start
/// of every minimization.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Params {
    /// Initial simplex construction.
    pub init: InitMethod,

    /// Initial simplex size `ε`.
    pub perturbation: f64,

    /// Reflection coefficient `α`.
    pub reflection: f64,

    /// Expansion coefficient `β`.
    pub expansion: f64,

    /// Contraction coefficient `γ`.
    pub contraction: f64,

    /// Shrink coefficient `δ`.
    pub shrink: f64,
}

/// Errors that can occur when validating Nelder-Mead parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParamsError {
    #[error("perturbation must be finite and positive, got {0}")]
    Perturbation(f64),

    #[error("reflection must be finite and positive, got {0}")]
    Reflection(f64),

    #[error("expansion must be finite and positive, got {0}")]
    Expansion(f64),

    #[error("contraction must lie in (0, 1), got {0}")]
    Contraction(f64),

    #[error("shrink must lie in (0, 1), got {0}")]
    Shrink(f64),
}

impl Default for Params {
    fn default() -> Self {
        Self {
            init: InitMethod::Basic,
            perturbation: 0.05,
            reflection: 1.0,
            expansion: 2.0,
            contraction: 0.5,
            shrink: 0.5,
        }
    }
}

impl Params {
    /// Validates every coefficient.
    ///
    /// # Errors
    ///
    /// Returns the first coefficient found out of range.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !is_positive(self.perturbation) {
            return Err(ParamsError::Perturbation(self.perturbation));
        }
        if !is_positive(self.reflection) {
            return Err(ParamsError::Reflection(self.reflection));
        }
        if !is_positive(self.expansion) {
            return Err(ParamsError::Expansion(self.expansion));
        }
        if !is_unit_open(self.contraction) {
            return Err(ParamsError::Contraction(self.contraction));
        }
        if !is_unit_open(self.shrink) {
            return Err(ParamsError::Shrink(self.shrink));
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn is_unit_open(value: f64) -> bool {
    value > 0.0 && value < 1.0
}
