//! Gradient descent integration tests.
//!
//! Focused on the optimization invariants: cost never rises on a
//! well-conditioned problem, converged fits stay put, and both solvers land
//! on the same least-squares optimum.

use approx::assert_abs_diff_eq;
use ndarray::Array1;
use rand::prelude::*;
use rstest::rstest;

use regfit::data::{ExperimentalData, RegressionType};
use regfit::testing::data::{linear_univariate, quadratic_bivariate};
use regfit::training::{
    DivergenceError, GradientDescentOptimizer, GradientDescentParams, NormalEquationSolver,
    OptimizerState, SquaredError, StepOutcome, Verbosity,
};

fn params(learning_rate: f64, precision: u32) -> GradientDescentParams {
    GradientDescentParams {
        learning_rate,
        precision,
        verbosity: Verbosity::Silent,
        ..Default::default()
    }
}

fn line() -> ExperimentalData {
    ExperimentalData::from_rows(linear_univariate(5, 1.0, 2.0)).unwrap()
}

fn parabola() -> ExperimentalData {
    // y = 1 + x + x²
    let x = vec![-1.0, -0.5, 0.0, 0.5, 1.0];
    let y = x.iter().map(|&x| 1.0 + x + x * x).collect();
    ExperimentalData::from_rows(vec![x, y]).unwrap()
}

#[test]
fn cost_is_non_increasing_until_convergence() {
    let data = ExperimentalData::from_rows(linear_univariate(21, 1.0, 2.0)).unwrap();
    let design = RegressionType::Linear.design_matrix(&data);
    let mut optimizer = GradientDescentOptimizer::new(design.n_columns(), params(0.01, 8));

    let mut previous = f64::INFINITY;
    loop {
        let outcome = optimizer.step(&design, data.targets()).unwrap();
        let cost = optimizer.last_cost().unwrap();
        assert!(
            cost <= previous + 1e-9,
            "cost rose from {previous} to {cost} at iteration {}",
            optimizer.iteration()
        );
        previous = cost;
        if outcome.is_terminal() {
            assert_eq!(outcome, StepOutcome::Converged);
            break;
        }
    }
}

#[test]
fn converged_fit_is_stable() {
    let data = ExperimentalData::from_rows(linear_univariate(9, -0.5, 0.25)).unwrap();
    let design = RegressionType::Linear.design_matrix(&data);
    let mut optimizer = GradientDescentOptimizer::new(design.n_columns(), params(0.05, 6));
    optimizer.run(&design, data.targets()).unwrap();
    assert_eq!(optimizer.state(), OptimizerState::Converged);

    let beta = optimizer.beta().to_owned();
    for _ in 0..10 {
        assert_eq!(optimizer.step(&design, data.targets()).unwrap(), StepOutcome::Converged);
    }
    assert_eq!(optimizer.beta(), beta);
}

#[rstest]
#[case::line(RegressionType::Linear, line(), 0.1)]
#[case::parabola(RegressionType::Quadratic, parabola(), 0.5)]
fn agrees_with_normal_equation(
    #[case] regression_type: RegressionType,
    #[case] data: ExperimentalData,
    #[case] learning_rate: f64,
) {
    let design = regression_type.design_matrix(&data);

    let mut optimizer =
        GradientDescentOptimizer::new(design.n_columns(), params(learning_rate, 10));
    let summary = optimizer.run(&design, data.targets()).unwrap();
    assert_eq!(summary.outcome, StepOutcome::Converged);

    let exact = NormalEquationSolver::new(10)
        .solve(&design, data.targets())
        .unwrap();
    assert_abs_diff_eq!(optimizer.beta().to_owned(), exact, epsilon = 5e-3);
}

#[test]
fn large_learning_rate_reports_divergence() {
    let data = ExperimentalData::from_rows(quadratic_bivariate(11)).unwrap();
    let design = RegressionType::Quadratic.design_matrix(&data);
    let mut optimizer = GradientDescentOptimizer::new(design.n_columns(), params(1.0, 4));

    let err = optimizer.run(&design, data.targets()).unwrap_err();
    assert!(err.to_string().contains("learning rate smaller"));
    assert_eq!(optimizer.state(), OptimizerState::Diverged(err));
    assert!(matches!(
        err,
        DivergenceError::NonFiniteHypothesis { .. } | DivergenceError::NonFiniteCost
    ));
}

#[test]
fn iteration_cap_keeps_best_effort_weights() {
    let data = line();
    let design = RegressionType::Linear.design_matrix(&data);
    let capped = GradientDescentParams {
        max_iterations: 10,
        ..params(1e-3, 8)
    };
    let mut optimizer = GradientDescentOptimizer::new(design.n_columns(), capped);

    let summary = optimizer.run(&design, data.targets()).unwrap();
    assert_eq!(summary.outcome, StepOutcome::IterationLimit);
    assert_eq!(summary.iterations, 10);

    let initial_cost = SquaredError
        .cost(design.view(), Array1::zeros(2).view(), data.targets())
        .unwrap();
    assert!(summary.cost < initial_cost);
}

#[test]
fn cost_is_never_negative() {
    let data = ExperimentalData::from_rows(quadratic_bivariate(5)).unwrap();
    let design = RegressionType::Quadratic.design_matrix(&data);
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..50 {
        let beta: Array1<f64> = (0..design.n_columns())
            .map(|_| rng.gen_range(-10.0..10.0))
            .collect();
        let cost = SquaredError
            .cost(design.view(), beta.view(), data.targets())
            .unwrap();
        assert!(cost >= 0.0);
    }
}

#[test]
fn design_matrix_columns() {
    let data = ExperimentalData::from_rows(quadratic_bivariate(3)).unwrap();

    let linear = RegressionType::Linear.design_matrix(&data);
    let quadratic = RegressionType::Quadratic.design_matrix(&data);

    for design in [&linear, &quadratic] {
        assert!(design.column(0).iter().all(|&v| v == 1.0));
        assert_eq!(design.n_samples(), data.n_samples());
    }
    assert_eq!(linear.n_columns(), 3);
    assert_eq!(quadratic.n_columns(), 5);
    for i in 0..data.n_features() {
        assert_eq!(quadratic.column(2 * i + 2), quadratic.column(2 * i + 1).mapv(|x| x * x));
    }
}
