use std::error::Error as StdError;

use thiserror::Error;

use super::ParamsError;

/// Errors that can occur during Nelder-Mead minimization.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] ParamsError),

    #[error("expected {expected} start values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The objective failed. `iter` is zero while building the initial
    /// simplex.
    #[error("objective evaluation failed at iteration {iter}")]
    Objective {
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
            Self::Objective { iter, .. } => *iter,
            Self::InvalidParams(_) | Self::DimensionMismatch { .. } => 0,
        }
    }

    pub(super) fn objective<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Objective {
            iter: 0,
            source: Box::new(err),
        }
    }

    /// Stamps an objective failure with the iteration it happened in.
    pub(super) fn at(self, iteration: usize) -> Self {
        match self {
            Self::Objective { source, .. } => Self::Objective {
                iter: iteration,
                source,
            },
            other => other,
        }
    }
}
