use approx::assert_relative_eq;

use integration_tests::benchmarks::{himmelblau, rosenbrock};
use optima_core::{Config, Observer, Status};
use optima_observers::{
    History, Trace,
    traits::{CanStopEarly, HasIteration, HasObjective},
};
use optima_solvers::{
    nelder_mead::{self, Params},
    newton_raphson,
};

/// Stops once the objective drops below a threshold.
struct Below(f64);

impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for Below {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.objective() < self.0).then(A::stop_early)
    }
}

/// Stops after a fixed number of iterations.
struct After(usize);

impl<E: HasIteration, A: CanStopEarly> Observer<E, A> for After {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.iteration() >= self.0).then(A::stop_early)
    }
}

#[test]
fn one_observer_stops_both_solvers() {
    let nr = newton_raphson::solve(
        &|x: f64| x * x - 4.0,
        &|x: f64| 2.0 * x,
        1.0,
        &Config::default(),
        Below(1e-3),
    )
    .unwrap();
    assert_eq!(nr.status, Status::StoppedByObserver);
    assert!(nr.value.abs() < 1e-3);

    let nm = nelder_mead::minimize(
        &himmelblau,
        &[-5.0, 5.0],
        &Params::default(),
        &Config::default(),
        Below(1.0),
    )
    .unwrap();
    assert_eq!(nm.status, Status::StoppedByObserver);
    assert!(nm.value < 1.0);
}

#[test]
fn iteration_cap_observer() {
    let nm = nelder_mead::minimize(
        &rosenbrock,
        &[-1.2, 1.0],
        &Params::default(),
        &Config::default(),
        After(3),
    )
    .unwrap();

    assert_eq!(nm.status, Status::StoppedByObserver);
    assert_eq!(nm.iters, 3);
}

#[test]
fn history_records_nelder_mead_progress() {
    let mut history = History::new();
    let config = Config::new(1e-10, 500).unwrap();

    let solution = nelder_mead::minimize(
        &rosenbrock,
        &[-1.2, 1.0],
        &Params::default(),
        &config,
        &mut history,
    )
    .unwrap();

    assert_eq!(history.records().len(), solution.iters);
    assert!(history.is_monotone());
    assert_eq!(history.records()[0].iter, 1);
    assert_relative_eq!(history.records()[0].objective, 8.149_414_062_5, epsilon = 1e-9);
    assert_relative_eq!(
        history.last().map_or(f64::NAN, |r| r.objective),
        solution.value
    );
}

#[test]
fn history_records_newton_raphson_residuals() {
    let mut history = History::new();

    let solution = newton_raphson::solve(
        &|x: f64| x * x - 4.0,
        &|x: f64| 2.0 * x,
        1.0,
        &Config::new(1e-6, 100).unwrap(),
        &mut history,
    )
    .unwrap();

    let residuals: Vec<f64> = history.objectives().collect();
    assert_eq!(residuals.len(), solution.iters);
    assert_relative_eq!(residuals[0], 3.0);
    assert_relative_eq!(residuals[1], 2.25);
    assert!(history.is_monotone());
}

#[test]
fn trace_observes_without_steering() {
    let solution = nelder_mead::minimize(
        &himmelblau,
        &[-5.0, 5.0],
        &Params::default(),
        &Config::default(),
        Trace::new("nelder-mead"),
    )
    .unwrap();
    let untraced = nelder_mead::minimize_unobserved(
        &himmelblau,
        &[-5.0, 5.0],
        &Params::default(),
        &Config::default(),
    )
    .unwrap();

    assert_eq!(solution, untraced);
}
