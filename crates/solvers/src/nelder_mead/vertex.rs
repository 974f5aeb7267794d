use optima_core::Multivariate;

use super::Error;

/// A candidate point and its objective value.
///
/// Vertices are immutable: every simplex transformation builds new ones.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    coords: Vec<f64>,
    value: f64,
}

impl Vertex {
    /// Creates a vertex from coordinates and an already-known value.
    #[must_use]
    pub fn new(coords: Vec<f64>, value: f64) -> Self {
        Self { coords, value }
    }

    /// Evaluates the objective at `coords`.
    pub(super) fn evaluate<F: Multivariate>(objective: &F, coords: Vec<f64>) -> Result<Self, Error> {
        let value = objective.call(&coords).map_err(Error::objective)?;
        Ok(Self { coords, value })
    }

    /// Returns the coordinates.
    #[must_use]
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Returns the objective value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Consumes the vertex, returning its coordinates.
    #[must_use]
    pub fn into_coords(self) -> Vec<f64> {
        self.coords
    }

    /// Returns the Euclidean distance to another vertex.
    #[must_use]
    pub fn distance(&self, other: &Vertex) -> f64 {
        self.coords
            .iter()
            .zip(&other.coords)
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

/// Returns `origin + t·(target − origin)`.
///
/// Every Nelder-Mead move is one of these: reflection uses `t = −α` toward
/// the worst vertex, expansion `β`, contraction `γ`, shrink `δ`.
pub(super) fn affine(origin: &[f64], target: &[f64], t: f64) -> Vec<f64> {
    origin
        .iter()
        .zip(target)
        .map(|(o, p)| o + t * (p - o))
        .collect()
}
