use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during Newton-Raphson iteration.
#[derive(Debug, Error)]
pub enum Error {
    /// The derivative at iterate `iter` is too small for a stable Newton step.
    #[error(
        "derivative {derivative:e} at x = {x} (iteration {iter}) is too close to zero for a stable Newton step"
    )]
    DerivativeNearZero { iter: usize, x: f64, derivative: f64 },

    #[error("function evaluation failed at iteration {iter}")]
    Function {
        iter: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("derivative evaluation failed at iteration {iter}")]
    Derivative {
        iter: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    /// Returns the iterations consumed before the failure, counting the one
    /// that failed.
    #[must_use]
    pub fn iterations(&self) -> usize {
        match self {
            Self::DerivativeNearZero { iter, .. }
            | Self::Function { iter, .. }
            | Self::Derivative { iter, .. } => *iter,
        }
    }

    pub(super) fn function<E: StdError + Send + Sync + 'static>(iter: usize, err: E) -> Self {
        Self::Function {
            iter,
            source: Box::new(err),
        }
    }

    pub(super) fn derivative<E: StdError + Send + Sync + 'static>(iter: usize, err: E) -> Self {
        Self::Derivative {
            iter,
            source: Box::new(err),
        }
    }
}
