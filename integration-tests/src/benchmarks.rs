//! Standard test functions with known optima.

/// Rosenbrock's banana function, minimized at `(1, 1)` with value 0.
#[must_use]
pub fn rosenbrock(x: &[f64]) -> f64 {
    (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0] * x[0]).powi(2)
}

/// Himmelblau's function, with four minima of value 0.
#[must_use]
pub fn himmelblau(x: &[f64]) -> f64 {
    (x[0] * x[0] + x[1] - 11.0).powi(2) + (x[0] + x[1] * x[1] - 7.0).powi(2)
}

/// The four minimizers of [`himmelblau`].
pub const HIMMELBLAU_MINIMA: [[f64; 2]; 4] = [
    [3.0, 2.0],
    [-2.805_118, 3.131_312],
    [-3.779_310, -3.283_186],
    [3.584_428, -1.848_126],
];

/// Returns the Himmelblau minimum closest to `x`, with its distance.
#[must_use]
pub fn nearest_himmelblau_minimum(x: &[f64]) -> ([f64; 2], f64) {
    HIMMELBLAU_MINIMA
        .iter()
        .map(|m| (*m, ((x[0] - m[0]).powi(2) + (x[1] - m[1]).powi(2)).sqrt()))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap_or(([f64::NAN; 2], f64::NAN))
}

/// The negative Gaussian log-likelihood of `samples`, up to a constant.
///
/// Parameters are `[mean, ln(sigma)]`. The minimum lies at the sample mean
/// and the log of the population standard deviation.
#[must_use]
pub fn gaussian_nll(samples: &[f64]) -> impl Fn(&[f64]) -> f64 + '_ {
    move |params: &[f64]| {
        let (mean, log_sigma) = (params[0], params[1]);
        let sigma = log_sigma.exp();
        samples
            .iter()
            .map(|x| log_sigma + 0.5 * ((x - mean) / sigma).powi(2))
            .sum()
    }
}
