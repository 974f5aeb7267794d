//! Reusable observers for optima solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across both solvers in `optima-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasObjective`], [`HasResidual`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`History`] — records the objective of every iteration
//! - [`Trace`] — logs every iteration through `tracing`
//!
//! [`Observer`]: optima_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasObjective`]: traits::HasObjective
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod trace;

pub use history::{History, Record};
pub use trace::Trace;
