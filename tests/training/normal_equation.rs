//! Normal equation integration tests.

use approx::assert_abs_diff_eq;
use ndarray::{array, Array1};
use rstest::rstest;

use regfit::data::{ExperimentalData, RegressionType};
use regfit::testing::data::{linear_trivariate, linear_univariate};
use regfit::training::{NormalEquationSolver, SquaredError};

#[rstest]
#[case(0.0, 1.0)]
#[case(3.5, -2.0)]
#[case(-10.0, 0.125)]
fn recovers_exact_lines(#[case] intercept: f64, #[case] slope: f64) {
    let data = ExperimentalData::from_rows(linear_univariate(12, intercept, slope)).unwrap();
    let design = RegressionType::Linear.design_matrix(&data);

    let beta = NormalEquationSolver::new(6)
        .solve(&design, data.targets())
        .unwrap();

    assert_abs_diff_eq!(beta, array![intercept, slope], epsilon = 1e-9);
}

#[test]
fn recovers_two_feature_paraboloid() {
    // y = 2 - x1 + 0.5·x1² + 3·x2 - 0.25·x2²
    let mut rows = vec![Vec::new(), Vec::new(), Vec::new()];
    for i in -3..=3 {
        for j in -2..=2 {
            let (x1, x2) = (f64::from(i), f64::from(j));
            rows[0].push(x1);
            rows[1].push(x2);
            rows[2].push(2.0 - x1 + 0.5 * x1 * x1 + 3.0 * x2 - 0.25 * x2 * x2);
        }
    }
    let data = ExperimentalData::from_rows(rows).unwrap();
    let design = RegressionType::Quadratic.design_matrix(&data);

    let beta = NormalEquationSolver::new(8)
        .solve(&design, data.targets())
        .unwrap();

    assert_abs_diff_eq!(beta, array![2.0, -1.0, 0.5, 3.0, -0.25], epsilon = 1e-7);
}

#[test]
fn noisy_fit_beats_any_perturbation() {
    let data = ExperimentalData::from_rows(linear_trivariate(9)).unwrap();
    let design = RegressionType::Linear.design_matrix(&data);
    let beta = NormalEquationSolver::new(8)
        .solve(&design, data.targets())
        .unwrap();

    let best = SquaredError
        .cost(design.view(), beta.view(), data.targets())
        .unwrap();
    for j in 0..beta.len() {
        for delta in [-0.01, 0.01] {
            let mut moved = beta.clone();
            moved[j] += delta;
            let cost = SquaredError
                .cost(design.view(), moved.view(), data.targets())
                .unwrap();
            assert!(cost >= best - 1e-9);
        }
    }
}

#[test]
fn duplicated_feature_gives_minimum_norm_solution() {
    let x: Vec<f64> = (0..6).map(f64::from).collect();
    let y: Vec<f64> = x.iter().map(|&x| 1.0 + 4.0 * x).collect();
    let data = ExperimentalData::from_rows(vec![x.clone(), x, y]).unwrap();
    let design = RegressionType::Linear.design_matrix(&data);

    let beta = NormalEquationSolver::new(8)
        .solve(&design, data.targets())
        .unwrap();

    assert_abs_diff_eq!(beta, array![1.0, 2.0, 2.0], epsilon = 1e-6);
    let cost = SquaredError
        .cost(design.view(), beta.view(), data.targets())
        .unwrap();
    assert_abs_diff_eq!(cost, 0.0, epsilon = 1e-10);
}

#[rstest]
#[case(1, array![0.2, 0.5])]
#[case(3, array![0.167, 0.5])]
fn weights_are_rounded(#[case] precision: u32, #[case] expected: Array1<f64>) {
    // Least squares: intercept 1/6, slope 1/2.
    let data = ExperimentalData::from_rows(vec![vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 1.0]]).unwrap();
    let design = RegressionType::Linear.design_matrix(&data);

    let beta = NormalEquationSolver::new(precision)
        .solve(&design, data.targets())
        .unwrap();

    assert_eq!(beta, expected);
}
