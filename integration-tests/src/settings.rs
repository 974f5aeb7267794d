//! Solver settings as they appear in configuration files.

use optima_core::Config;
use optima_solvers::nelder_mead::Params;
use serde::{Deserialize, Serialize};

/// Everything needed to configure both solvers, read from one file.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub newton_raphson: Config,
    pub nelder_mead: NelderMeadSettings,
}

/// Nelder-Mead stopping criteria and coefficients.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NelderMeadSettings {
    pub config: Config,
    pub params: Params,
}
