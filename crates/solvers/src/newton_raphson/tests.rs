use approx::assert_relative_eq;
use thiserror::Error;

use optima_core::{Config, Fallible, Status};

use super::{Action, Error, Event, NewtonRaphson, solve, solve_unobserved};

fn square_minus_four(x: f64) -> f64 {
    x * x - 4.0
}

fn two_x(x: f64) -> f64 {
    2.0 * x
}

#[test]
fn finds_positive_root() {
    let config = Config::new(1e-6, 100).unwrap();
    let solution =
        solve_unobserved(&square_minus_four, &two_x, 1.0, &config).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 2.0, epsilon = 1e-4);
    assert!(solution.value.abs() < 1e-6);
    assert_eq!(solution.iters, 5);
}

#[test]
fn finds_negative_root_from_negative_start() {
    let solution = solve_unobserved(&square_minus_four, &two_x, -1.0, &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, -2.0, epsilon = 1e-9);
}

#[test]
fn start_at_root_converges_in_one_iteration() {
    let f = |x: f64| x - 3.0;
    let df = |_: f64| 1.0;

    let solution = solve_unobserved(&f, &df, 3.0, &Config::default()).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 1);
    assert_relative_eq!(solution.x, 3.0);
}

#[test]
fn converges_on_step_size_and_reports_stepped_point_with_prior_value() {
    // Steep line: |f| is well above tolerance while the step is tiny.
    let f = |x: f64| 1e6 * (x - 1.0);
    let df = |_: f64| 1e6;

    let solution = solve_unobserved(&f, &df, 1.0 + 1e-10, &Config::default()).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 1);
    assert_relative_eq!(solution.x, 1.0, epsilon = 1e-12);
    // The value comes from the iterate the step was taken from.
    assert_relative_eq!(solution.value, 1e-4, epsilon = 1e-9);
}

#[test]
fn step_convergence_does_not_reevaluate() {
    let calls = std::cell::Cell::new(0);
    let f = |x: f64| {
        calls.set(calls.get() + 1);
        1e6 * (x - 1.0)
    };
    let df = |_: f64| 1e6;

    solve_unobserved(&f, &df, 1.0 + 1e-10, &Config::default()).unwrap();

    assert_eq!(calls.get(), 1);
}

#[test]
fn zero_derivative_is_an_error() {
    let f = |x: f64| x * x + 1.0;
    let df = |x: f64| 2.0 * x;

    let result = solve_unobserved(&f, &df, 0.0, &Config::default());

    match result {
        Err(Error::DerivativeNearZero {
            iter,
            x,
            derivative,
        }) => {
            assert_eq!(iter, 1);
            assert_relative_eq!(x, 0.0);
            assert_relative_eq!(derivative, 0.0);
        }
        other => panic!("expected DerivativeNearZero, got {other:?}"),
    }
}

#[test]
fn tiny_derivative_is_an_error() {
    let f = |_: f64| 1.0;
    let df = |_: f64| 1e-13;

    let result = solve_unobserved(&f, &df, 5.0, &Config::default());

    assert!(matches!(result, Err(Error::DerivativeNearZero { .. })));
}

#[test]
fn budget_exhaustion_returns_last_evaluated_point() {
    let config = Config::default().with_max_iters(1);
    let solution = solve_unobserved(&square_minus_four, &two_x, 1.0, &config).unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 1);
    assert_relative_eq!(solution.x, 1.0);
    assert_relative_eq!(solution.value, -3.0);
}

#[test]
fn oscillation_is_a_soft_stop() {
    // x³ - 2x + 2 from 0 cycles between 0 and 1 forever.
    let f = |x: f64| x.powi(3) - 2.0 * x + 2.0;
    let df = |x: f64| 3.0 * x * x - 2.0;
    let config = Config::default().with_max_iters(10);

    let solution = solve_unobserved(&f, &df, 0.0, &config).unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 10);
    assert_relative_eq!(solution.x, 1.0);
    assert_relative_eq!(solution.value, 1.0);
}

#[test]
fn zero_budget_evaluates_start() {
    let config = Config::default().with_max_iters(0);
    let solution = solve_unobserved(&square_minus_four, &two_x, 1.0, &config).unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 0);
    assert_relative_eq!(solution.x, 1.0);
    assert_relative_eq!(solution.value, -3.0);
}

#[test]
fn observer_sees_each_iteration_and_can_stop() {
    let mut seen = Vec::new();
    let observer = |event: &Event| {
        seen.push(event.iter);
        (event.iter == 3).then_some(Action::StopEarly)
    };

    let solution = solve(
        &square_minus_four,
        &two_x,
        1.0,
        &Config::default(),
        observer,
    )
    .unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
    assert_eq!(seen, vec![1, 2, 3]);
    // Iterates: 1 → 2.5 → 2.05
    assert_relative_eq!(solution.x, 2.05, epsilon = 1e-12);
}

#[test]
fn event_step_matches_newton_update() {
    let event = Event {
        iter: 1,
        x: 1.0,
        value: -3.0,
        derivative: 2.0,
    };
    assert_relative_eq!(event.step(), 1.5);
}

#[derive(Debug, Error)]
#[error("undefined for x <= 0")]
struct Domain;

#[test]
fn function_failure_is_reported() {
    let ln = Fallible(|x: f64| if x > 0.0 { Ok(x.ln()) } else { Err(Domain) });
    let d_ln = |x: f64| 1.0 / x;

    // ln(x) from 3: step lands at 3 - 3·ln(3) < 0.
    let result = solve_unobserved(&ln, &d_ln, 3.0, &Config::default());

    let error = result.unwrap_err();
    assert!(matches!(error, Error::Function { iter: 2, .. }));
    assert_eq!(error.iterations(), 2);
}

#[test]
fn derivative_failure_is_reported() {
    let f = |x: f64| x - 1.0;
    let df = Fallible(|_: f64| Err::<f64, _>(Domain));

    let result = solve_unobserved(&f, &df, 0.0, &Config::default());

    assert!(matches!(result, Err(Error::Derivative { iter: 1, .. })));
}

// --- Lazy facade ---

#[test]
fn facade_matches_free_function() {
    let mut solver = NewtonRaphson::new(1.0, square_minus_four, two_x);
    solver.set_tolerance(1e-6).unwrap();

    assert!(!solver.is_ready());
    assert_relative_eq!(solver.result(), 2.0, epsilon = 1e-4);
    assert!(solver.is_ready());
    assert_eq!(solver.iterations(), 5);
    assert!(solver.function_result().abs() < 1e-6);
    assert!(solver.error().is_none());
    assert_eq!(
        solver.solution().map(|s| s.status).ok(),
        Some(Status::Converged)
    );
}

#[test]
fn facade_reads_are_cached() {
    let mut solver = NewtonRaphson::new(1.0, square_minus_four, two_x);

    let first = solver.result();
    let elapsed = solver.time_taken();
    let second = solver.result();

    assert_eq!(first.to_bits(), second.to_bits());
    assert_eq!(solver.time_taken(), elapsed);
}

#[test]
fn facade_setters_force_recompute() {
    let mut solver = NewtonRaphson::new(1.0, square_minus_four, two_x);
    assert_eq!(solver.iterations(), 6);

    solver.set_max_iters(3);
    assert!(!solver.is_ready());
    assert_eq!(solver.iterations(), 3);
    assert_relative_eq!(solver.result(), 2.05, epsilon = 1e-12);

    solver.set_start_value(-1.0);
    assert_relative_eq!(solver.start_value(), -1.0);
    assert_relative_eq!(solver.result(), -2.05, epsilon = 1e-12);

    solver.set_max_iters(100);
    solver.set_tolerance(1e-6).unwrap();
    assert_eq!(solver.iterations(), 5);
}

#[test]
fn facade_captures_derivative_near_zero() {
    let mut solver = NewtonRaphson::new(0.0, |x: f64| x * x + 1.0, |x: f64| 2.0 * x);

    assert!(solver.result().is_nan());
    assert!(solver.function_result().is_nan());
    assert_eq!(solver.iterations(), 1);
    assert!(matches!(
        solver.error(),
        Some(Error::DerivativeNearZero { iter: 1, .. })
    ));

    // Moving off the stationary point allows a fresh attempt.
    solver.set_start_value(1.0);
    assert!(solver.result().is_nan(), "x² + 1 has no real root");
    // 1 steps to 0, where the derivative vanishes on the second iteration.
    assert_eq!(solver.iterations(), 2);
    solver.set_max_iters(1);
    assert_relative_eq!(solver.result(), 1.0);
    assert!(solver.error().is_none());
}

#[test]
fn facade_evaluations_do_not_run_solver() {
    let solver = NewtonRaphson::new(1.0, square_minus_four, two_x);

    assert_relative_eq!(solver.evaluate_function(3.0).unwrap(), 5.0);
    assert_relative_eq!(solver.evaluate_derivative(3.0).unwrap(), 6.0);
    assert!(!solver.is_ready());
}

#[test]
fn facade_accepts_borrowed_functions() {
    let f = |x: f64| x * x - 9.0;
    let df = |x: f64| 2.0 * x;

    let mut solver = NewtonRaphson::new(1.0, &f, &df);

    assert_relative_eq!(solver.result(), 3.0, epsilon = 1e-9);
    assert_relative_eq!(f(solver.result()), 0.0, epsilon = 1e-9);
}
