use optima_core::Multivariate;

/// Adapter that negates an objective's value.
///
/// Used to implement maximization by minimizing the negated objective.
pub(crate) struct Negate<'a, F>(pub &'a F);

impl<F: Multivariate> Multivariate for Negate<'_, F> {
    type Error = F::Error;

    fn call(&self, x: &[f64]) -> Result<f64, Self::Error> {
        self.0.call(x).map(|v| -v)
    }
}
