use optima_core::Multivariate;

use super::{Error, InitMethod, Params, Simplex, Vertex};

/// Builds and evaluates the initial simplex around `x0`.
pub(super) fn initial_simplex<F: Multivariate>(
    objective: &F,
    x0: &[f64],
    params: &Params,
) -> Result<Simplex, Error> {
    let mut vertices = Vec::with_capacity(x0.len() + 1);
    vertices.push(Vertex::evaluate(objective, x0.to_vec())?);

    for i in 0..x0.len() {
        let coords = perturbed(x0, i, params.init, params.perturbation);
        vertices.push(Vertex::evaluate(objective, coords)?);
    }

    Ok(Simplex::new(vertices))
}

/// Returns the `i`-th perturbed copy of `x0`.
fn perturbed(x0: &[f64], i: usize, method: InitMethod, epsilon: f64) -> Vec<f64> {
    let mut coords = x0.to_vec();
    match method {
        InitMethod::Basic => coords[i] += epsilon,
        InitMethod::Scaled => coords[i] += epsilon * (1.0 + x0[i].abs()),
        InitMethod::Symmetric => {
            #[allow(clippy::cast_precision_loss)]
            let n = x0.len() as f64;
            let a = epsilon / (2.0 * n.sqrt());
            for (j, c) in coords.iter_mut().enumerate() {
                if j == i {
                    *c += a;
                } else {
                    *c -= a / (n - 1.0);
                }
            }
        }
    }
    coords
}
