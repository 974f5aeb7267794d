//! Iterative solvers built on `optima-core`.
//!
//! - [`newton_raphson`] — derivative-based root finding for `f: ℝ → ℝ`
//! - [`nelder_mead`] — derivative-free simplex minimization over `ℝⁿ`
//!
//! Each module offers eager free functions that take a [`Config`] and an
//! [`Observer`] and return a `Result`, plus a stateful facade
//! ([`NewtonRaphson`], [`NelderMead`]) that runs lazily, caches its result,
//! and captures failures instead of returning them.
//!
//! [`Config`]: optima_core::Config
//! [`Observer`]: optima_core::Observer

pub mod nelder_mead;
pub mod newton_raphson;

mod negate;

pub use nelder_mead::NelderMead;
pub use newton_raphson::NewtonRaphson;
