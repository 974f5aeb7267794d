use optima_core::Multivariate;

use super::{
    Error, Params, Simplex,
    vertex::{Vertex, affine},
};

/// The transformation applied to the simplex in one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Step {
    /// The reflected point replaced the worst vertex.
    Reflect,

    /// The expanded point replaced the worst vertex.
    Expand,

    /// A contraction toward the reflected point replaced the worst vertex.
    ContractOutside,

    /// A contraction toward the worst vertex replaced it.
    ContractInside,

    /// Every vertex except the best moved toward the best.
    Shrink,
}

/// Performs one Nelder-Mead iteration.
pub(super) fn step<F: Multivariate>(
    simplex: Simplex,
    objective: &F,
    params: &Params,
) -> Result<(Simplex, Step), Error> {
    let centroid = simplex.centroid();
    let worst = simplex.worst();

    let reflected = Vertex::evaluate(
        objective,
        affine(&centroid, worst.coords(), -params.reflection),
    )?;

    if reflected.value() < simplex.best().value() {
        let expanded = Vertex::evaluate(
            objective,
            affine(&centroid, reflected.coords(), params.expansion),
        )?;
        return Ok(if expanded.value() < reflected.value() {
            (simplex.replace_worst(expanded), Step::Expand)
        } else {
            (simplex.replace_worst(reflected), Step::Reflect)
        });
    }

    if reflected.value() <= simplex.second_worst().value() {
        return Ok((simplex.replace_worst(reflected), Step::Reflect));
    }

    let (reference, kind) = if reflected.value() < worst.value() {
        (&reflected, Step::ContractOutside)
    } else {
        (worst, Step::ContractInside)
    };

    let contracted = Vertex::evaluate(
        objective,
        affine(&centroid, reference.coords(), params.contraction),
    )?;
    if contracted.value() < reference.value() {
        return Ok((simplex.replace_worst(contracted), kind));
    }

    Ok((simplex.shrink(objective, params.shrink)?, Step::Shrink))
}
