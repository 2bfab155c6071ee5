//! Weight fitting for least-squares regression.
//!
//! This module provides the numerical core:
//!
//! - [`SquaredError`]: hypothesis, cost, residuals and gradients
//! - [`GradientDescentOptimizer`]: iterative fit with convergence detection
//! - [`NormalEquationSolver`]: closed-form fit via the pseudo-inverse
//! - [`TrainingLogger`], [`Verbosity`]: structured logging
//!
//! ## Failure modes
//!
//! Gradient descent can diverge when the learning rate is too large for the
//! scale of the data. Divergence is detected as soon as the hypothesis (or
//! cost) stops being finite and surfaces as [`DivergenceError`]. Hitting the
//! iteration cap is *not* an error.

pub mod cost;
pub mod gradient_descent;
mod logger;
pub mod normal;

pub use cost::{DivergenceError, SquaredError};
pub use gradient_descent::{
    ConvergenceAction, ConvergenceMonitor, GradientDescentOptimizer, GradientDescentParams,
    GradientDescentParamsBuilder, OptimizerState, ParamValidationError, StepOutcome,
    TrainingSummary,
};
pub use logger::{TrainingLogger, Verbosity};
pub use normal::{NormalEquationSolver, SolveError};
