//! Core traits and types shared by optima's solvers.
//!
//! - [`Univariate`], [`Multivariate`] — objective callables the solvers
//!   evaluate, with [`Fallible`] for closures that can fail
//! - [`Config`] — tolerance and iteration budget common to every solver
//! - [`Solution`], [`Status`] — what a successful run produces
//! - [`Observer`] — receives solver events and optionally returns actions
//! - [`Optimize`], [`Lazy`] — the run-once, timed, error-capturing base the
//!   stateful solver facades are built on

mod config;
mod function;
mod lazy;
mod observer;
mod solution;

pub use config::{Config, ConfigError};
pub use function::{Fallible, Multivariate, Univariate};
pub use lazy::{Lazy, Optimize};
pub use observer::Observer;
pub use solution::{Solution, Status};
