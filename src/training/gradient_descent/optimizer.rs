//! Gradient descent state machine.

use ndarray::{Array1, ArrayView1};

use crate::data::DesignMatrix;
use crate::training::cost::{DivergenceError, SquaredError};
use crate::training::TrainingLogger;
use crate::utils::{precision_threshold, round_in_place};

use super::convergence::{ConvergenceAction, ConvergenceMonitor};
use super::params::GradientDescentParams;

/// Lifecycle of an optimizer.
///
/// ```text
/// Initialized ──step──▶ Iterating ──step──▶ Converged
///                           │
///                           └──non-finite──▶ Diverged
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizerState {
    /// Zero weights, no step taken yet.
    Initialized,
    /// At least one step taken, cost still changing.
    Iterating,
    /// Cost change fell within the precision threshold.
    Converged,
    /// A step produced non-finite values; the weights are no longer usable.
    Diverged(DivergenceError),
}

/// What a single [`step`](GradientDescentOptimizer::step) call achieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Weights updated, not converged yet.
    Continue,
    /// Converged (on this step or earlier). Weights are unchanged by further steps.
    Converged,
    /// Iteration cap reached without convergence. Weights are a best-effort fit.
    IterationLimit,
}

impl StepOutcome {
    /// Whether further steps can still change the weights.
    pub fn is_terminal(self) -> bool {
        !matches!(self, StepOutcome::Continue)
    }
}

/// Result of running an optimizer to termination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingSummary {
    /// Iterations performed.
    pub iterations: usize,
    /// How training ended.
    pub outcome: StepOutcome,
    /// Cost of the final weights.
    pub cost: f64,
}

/// Batch gradient descent over a fixed design matrix.
///
/// Owns its weights exclusively; nothing is shared between optimizers.
#[derive(Debug, Clone)]
pub struct GradientDescentOptimizer {
    params: GradientDescentParams,
    beta: Array1<f64>,
    state: OptimizerState,
    monitor: ConvergenceMonitor,
    iteration: usize,
    cost: Option<f64>,
    objective: SquaredError,
    logger: TrainingLogger,
}

impl GradientDescentOptimizer {
    /// Create an optimizer with `n_weights` zero-initialized weights.
    pub fn new(n_weights: usize, params: GradientDescentParams) -> Self {
        let monitor = ConvergenceMonitor::new(precision_threshold(params.precision));
        let logger = TrainingLogger::new(params.verbosity, params.log_interval);
        Self {
            params,
            beta: Array1::zeros(n_weights),
            state: OptimizerState::Initialized,
            monitor,
            iteration: 0,
            cost: None,
            objective: SquaredError,
            logger,
        }
    }

    /// Advance one iteration.
    ///
    /// Computes the gradient, updates and rounds the weights, then checks the
    /// cost change against the threshold. Once converged or capped, further
    /// calls leave the weights untouched. Once diverged, further calls return
    /// the same error.
    ///
    /// # Errors
    ///
    /// Returns [`DivergenceError`] if the hypothesis or cost is not finite.
    pub fn step(
        &mut self,
        design: &DesignMatrix,
        targets: ArrayView1<'_, f64>,
    ) -> Result<StepOutcome, DivergenceError> {
        match self.state {
            OptimizerState::Converged => return Ok(StepOutcome::Converged),
            OptimizerState::Diverged(error) => return Err(error),
            OptimizerState::Initialized => {
                self.logger.start_gradient_descent(
                    self.beta.len(),
                    self.params.learning_rate,
                    self.params.max_iterations,
                    self.monitor.threshold(),
                );
                self.state = OptimizerState::Iterating;
            }
            OptimizerState::Iterating => {}
        }

        if self.iteration >= self.params.max_iterations {
            return Ok(StepOutcome::IterationLimit);
        }

        let cost = match self.update_weights(design, targets) {
            Ok(cost) => cost,
            Err(error) => {
                self.logger.log_divergence(self.iteration, self.params.learning_rate, &error);
                self.state = OptimizerState::Diverged(error);
                return Err(error);
            }
        };
        self.cost = Some(cost);
        self.logger.log_progress(self.iteration, cost);

        match self.monitor.update(cost) {
            ConvergenceAction::Converged => {
                self.logger.log_converged(self.iteration, cost);
                self.state = OptimizerState::Converged;
                Ok(StepOutcome::Converged)
            }
            ConvergenceAction::Continue if self.iteration >= self.params.max_iterations => {
                self.logger.log_iteration_limit(self.params.max_iterations, cost);
                Ok(StepOutcome::IterationLimit)
            }
            ConvergenceAction::Continue => Ok(StepOutcome::Continue),
        }
    }

    /// Step until convergence, divergence, or the iteration cap.
    ///
    /// # Errors
    ///
    /// Returns [`DivergenceError`] if any step diverges.
    pub fn run(
        &mut self,
        design: &DesignMatrix,
        targets: ArrayView1<'_, f64>,
    ) -> Result<TrainingSummary, DivergenceError> {
        let outcome = loop {
            let outcome = self.step(design, targets)?;
            if outcome.is_terminal() {
                break outcome;
            }
        };

        let cost = match self.cost {
            Some(cost) => cost,
            None => self.objective.cost(design.view(), self.beta.view(), targets)?,
        };

        Ok(TrainingSummary {
            iterations: self.iteration,
            outcome,
            cost,
        })
    }

    /// `beta ← round(beta − alpha·g)`, returning the new cost.
    fn update_weights(
        &mut self,
        design: &DesignMatrix,
        targets: ArrayView1<'_, f64>,
    ) -> Result<f64, DivergenceError> {
        let gradients = self
            .objective
            .gradients(design.view(), self.beta.view(), targets)?;

        self.beta.scaled_add(-self.params.learning_rate, &gradients);
        round_in_place(&mut self.beta, self.params.precision);
        self.iteration += 1;

        self.objective.cost(design.view(), self.beta.view(), targets)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current weights.
    pub fn beta(&self) -> ArrayView1<'_, f64> {
        self.beta.view()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> OptimizerState {
        self.state
    }

    /// Iterations performed so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Cost after the most recent step, if any.
    pub fn last_cost(&self) -> Option<f64> {
        self.cost
    }

    /// Parameters this optimizer was created with.
    pub fn params(&self) -> &GradientDescentParams {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ExperimentalData, RegressionType};
    use crate::training::Verbosity;
    use approx::assert_abs_diff_eq;

    fn centered_line() -> (DesignMatrix, ExperimentalData) {
        // y = 1 + 2x
        let data = ExperimentalData::from_rows(vec![
            vec![-2.0, -1.0, 0.0, 1.0, 2.0],
            vec![-3.0, -1.0, 1.0, 3.0, 5.0],
        ])
        .unwrap();
        (RegressionType::Linear.design_matrix(&data), data)
    }

    fn params(learning_rate: f64, precision: u32) -> GradientDescentParams {
        GradientDescentParams {
            learning_rate,
            precision,
            verbosity: Verbosity::Silent,
            ..Default::default()
        }
    }

    #[test]
    fn starts_initialized_with_zero_weights() {
        let optimizer = GradientDescentOptimizer::new(3, GradientDescentParams::default());
        assert_eq!(optimizer.state(), OptimizerState::Initialized);
        assert_eq!(optimizer.beta().to_vec(), vec![0.0, 0.0, 0.0]);
        assert_eq!(optimizer.iteration(), 0);
        assert!(optimizer.last_cost().is_none());
    }

    #[test]
    fn first_step_matches_hand_computation() {
        let (design, data) = centered_line();
        let mut optimizer = GradientDescentOptimizer::new(2, params(0.1, 4));

        let outcome = optimizer.step(&design, data.targets()).unwrap();
        assert_eq!(outcome, StepOutcome::Continue);
        assert_eq!(optimizer.state(), OptimizerState::Iterating);

        // g = [-mean(y), -mean(x*y)] = [-1, -4]
        assert_abs_diff_eq!(optimizer.beta()[0], 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(optimizer.beta()[1], 0.4, epsilon = 1e-12);
    }

    #[test]
    fn converges_to_least_squares_line() {
        let (design, data) = centered_line();
        let mut optimizer = GradientDescentOptimizer::new(2, params(0.1, 8));

        let summary = optimizer.run(&design, data.targets()).unwrap();

        assert_eq!(summary.outcome, StepOutcome::Converged);
        assert_eq!(optimizer.state(), OptimizerState::Converged);
        assert!(summary.iterations < 1000);
        assert_abs_diff_eq!(optimizer.beta()[0], 1.0, epsilon = 1e-3);
        assert_abs_diff_eq!(optimizer.beta()[1], 2.0, epsilon = 1e-3);
    }

    #[test]
    fn converged_steps_are_no_ops() {
        let (design, data) = centered_line();
        let mut optimizer = GradientDescentOptimizer::new(2, params(0.1, 6));
        optimizer.run(&design, data.targets()).unwrap();

        let beta = optimizer.beta().to_owned();
        let iterations = optimizer.iteration();
        for _ in 0..5 {
            assert_eq!(optimizer.step(&design, data.targets()).unwrap(), StepOutcome::Converged);
        }
        assert_eq!(optimizer.beta(), beta);
        assert_eq!(optimizer.iteration(), iterations);
    }

    #[test]
    fn iteration_cap_is_best_effort() {
        let (design, data) = centered_line();
        let mut optimizer = GradientDescentOptimizer::new(
            2,
            GradientDescentParams {
                max_iterations: 3,
                ..params(1e-3, 8)
            },
        );

        let summary = optimizer.run(&design, data.targets()).unwrap();
        assert_eq!(summary.outcome, StepOutcome::IterationLimit);
        assert_eq!(summary.iterations, 3);
        assert_eq!(optimizer.state(), OptimizerState::Iterating);

        let beta = optimizer.beta().to_owned();
        assert_eq!(optimizer.step(&design, data.targets()).unwrap(), StepOutcome::IterationLimit);
        assert_eq!(optimizer.beta(), beta);
    }

    #[test]
    fn large_learning_rate_diverges() {
        let (design, data) = centered_line();
        let mut optimizer = GradientDescentOptimizer::new(2, params(10.0, 4));

        let err = optimizer.run(&design, data.targets()).unwrap_err();
        assert!(matches!(optimizer.state(), OptimizerState::Diverged(_)));
        assert_eq!(optimizer.step(&design, data.targets()).unwrap_err(), err);
    }
}
