use std::cmp::Ordering;

use optima_core::Multivariate;

use super::{
    Error,
    vertex::{Vertex, affine},
};

/// The `n + 1` vertices of a Nelder-Mead simplex, sorted best first.
///
/// Construction and every transformation re-sort by objective value
/// (ascending, stable, NaN last), so [`best`](Self::best),
/// [`second_worst`](Self::second_worst), and [`worst`](Self::worst) are
/// positional reads.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Simplex {
    vertices: Vec<Vertex>,
}

impl Simplex {
    /// Builds a simplex from vertices, sorting them by value.
    ///
    /// The caller guarantees at least one vertex.
    pub(super) fn new(mut vertices: Vec<Vertex>) -> Self {
        debug_assert!(!vertices.is_empty(), "a simplex needs at least one vertex");
        vertices.sort_by(|a, b| by_value(a.value(), b.value()));
        Self { vertices }
    }

    /// Returns the vertices, best first.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the problem dimension `n`.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.vertices.len() - 1
    }

    /// Returns the vertex with the lowest value.
    #[must_use]
    pub fn best(&self) -> &Vertex {
        &self.vertices[0]
    }

    /// Returns the vertex with the highest value.
    #[must_use]
    pub fn worst(&self) -> &Vertex {
        &self.vertices[self.vertices.len() - 1]
    }

    /// Returns the vertex with the second-highest value.
    ///
    /// In a one-vertex simplex this is the only vertex.
    #[must_use]
    pub fn second_worst(&self) -> &Vertex {
        &self.vertices[self.vertices.len().saturating_sub(2)]
    }

    /// Returns the coordinate-wise mean of every vertex except the worst.
    #[must_use]
    pub fn centroid(&self) -> Vec<f64> {
        let pivots = &self.vertices[..self.dimension().max(1)];
        let mut centroid = vec![0.0; self.best().coords().len()];
        for vertex in pivots {
            for (c, x) in centroid.iter_mut().zip(vertex.coords()) {
                *c += x;
            }
        }
        #[allow(clippy::cast_precision_loss)]
        let count = pivots.len() as f64;
        centroid.iter_mut().for_each(|c| *c /= count);
        centroid
    }

    /// Returns the largest distance from the best vertex to any other.
    #[must_use]
    pub fn max_distance(&self) -> f64 {
        let best = self.best();
        self.vertices[1..]
            .iter()
            .map(|v| v.distance(best))
            .fold(0.0, f64::max)
    }

    /// Returns the largest objective gap between the best vertex and any other.
    ///
    /// A NaN value counts as an infinite gap.
    #[must_use]
    pub fn max_value_gap(&self) -> f64 {
        let best = self.best().value();
        self.vertices[1..]
            .iter()
            .map(|v| {
                let gap = (v.value() - best).abs();
                if gap.is_nan() { f64::INFINITY } else { gap }
            })
            .fold(0.0, f64::max)
    }

    /// Returns true if the simplex is small in space or flat in value.
    ///
    /// Either signal alone is enough. A single-vertex simplex is converged.
    #[must_use]
    pub fn is_converged(&self, tol: f64) -> bool {
        self.vertices.len() == 1 || self.max_distance() < tol || self.max_value_gap() < tol
    }

    /// Replaces the worst vertex and re-sorts.
    #[must_use]
    pub(super) fn replace_worst(mut self, vertex: Vertex) -> Self {
        let last = self.vertices.len() - 1;
        self.vertices[last] = vertex;
        Self::new(self.vertices)
    }

    /// Moves every vertex except the best to `best + δ·(v − best)`.
    pub(super) fn shrink<F: Multivariate>(self, objective: &F, delta: f64) -> Result<Self, Error> {
        let mut vertices = self.vertices.into_iter();
        let Some(best) = vertices.next() else {
            return Ok(Self { vertices: Vec::new() });
        };

        let mut shrunk = Vec::with_capacity(vertices.len() + 1);
        for vertex in vertices {
            let coords = affine(best.coords(), vertex.coords(), delta);
            shrunk.push(Vertex::evaluate(objective, coords)?);
        }
        shrunk.insert(0, best);

        Ok(Self::new(shrunk))
    }

    /// Consumes the simplex, returning its best vertex.
    #[must_use]
    pub fn into_best(self) -> Vertex {
        let mut vertices = self.vertices;
        vertices.swap_remove(0)
    }
}

/// Ascending order with NaN after every number.
fn by_value(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn simplex(points: &[(&[f64], f64)]) -> Simplex {
        Simplex::new(
            points
                .iter()
                .map(|(coords, value)| Vertex::new(coords.to_vec(), *value))
                .collect(),
        )
    }

    #[test]
    fn sorts_best_first() {
        let s = simplex(&[(&[0.0, 0.0], 3.0), (&[1.0, 0.0], 1.0), (&[0.0, 1.0], 2.0)]);

        assert_eq!(s.dimension(), 2);
        assert_relative_eq!(s.best().value(), 1.0);
        assert_relative_eq!(s.second_worst().value(), 2.0);
        assert_relative_eq!(s.worst().value(), 3.0);
    }

    #[test]
    fn nan_sorts_last() {
        let s = simplex(&[(&[0.0], f64::NAN), (&[1.0], 5.0)]);

        assert_relative_eq!(s.best().value(), 5.0);
        assert!(s.worst().value().is_nan());
    }

    #[test]
    fn ties_keep_insertion_order() {
        let s = simplex(&[(&[0.0], 1.0), (&[1.0], 1.0)]);
        assert_eq!(s.best().coords(), &[0.0]);
    }

    #[test]
    fn centroid_excludes_worst() {
        let s = simplex(&[(&[0.0, 0.0], 0.0), (&[2.0, 0.0], 1.0), (&[9.0, 9.0], 5.0)]);
        assert_eq!(s.centroid(), vec![1.0, 0.0]);
    }

    #[test]
    fn replace_worst_resorts() {
        let s = simplex(&[(&[0.0], 1.0), (&[1.0], 2.0), (&[2.0], 3.0)]);
        let s = s.replace_worst(Vertex::new(vec![5.0], 0.5));

        assert_eq!(s.best().coords(), &[5.0]);
        assert_relative_eq!(s.worst().value(), 2.0);
        assert_eq!(s.vertices().len(), 3);
    }

    #[test]
    fn shrink_pulls_toward_best() {
        let objective = |x: &[f64]| x[0].abs() + x[1].abs();
        let s = simplex(&[(&[0.0, 0.0], 0.0), (&[2.0, 0.0], 2.0), (&[0.0, 4.0], 4.0)]);

        let s = s.shrink(&objective, 0.5).unwrap();

        assert_eq!(s.best().coords(), &[0.0, 0.0]);
        assert_eq!(s.vertices()[1].coords(), &[1.0, 0.0]);
        assert_eq!(s.vertices()[2].coords(), &[0.0, 2.0]);
        assert_relative_eq!(s.worst().value(), 2.0);
    }

    #[test]
    fn converged_when_small_or_flat() {
        let small = simplex(&[(&[0.0], 0.0), (&[1e-12], 5.0)]);
        assert!(small.is_converged(1e-9));

        let flat = simplex(&[(&[0.0], 1.0), (&[10.0], 1.0 + 1e-12)]);
        assert!(flat.is_converged(1e-9));

        let neither = simplex(&[(&[0.0], 0.0), (&[1.0], 1.0)]);
        assert!(!neither.is_converged(1e-9));
        assert_relative_eq!(neither.max_distance(), 1.0);
        assert_relative_eq!(neither.max_value_gap(), 1.0);
    }

    #[test]
    fn single_vertex_is_converged() {
        let point = simplex(&[(&[], 7.0)]);
        assert_eq!(point.dimension(), 0);
        assert!(point.is_converged(0.0));
        assert_relative_eq!(point.into_best().value(), 7.0);
    }
}
