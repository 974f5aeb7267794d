//! Shared fixtures for optima's integration tests.

pub mod benchmarks;
pub mod settings;
