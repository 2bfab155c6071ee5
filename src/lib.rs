//! regfit: linear and quadratic least-squares regression.
//!
//! This crate fits regression models to small experimental data sets, using
//! either batch gradient descent or the closed-form normal equation.
//!
//! - [`data`]: input validation, CSV I/O and design matrices
//! - [`training`]: cost function, optimizers and solvers
//! - [`model`]: the [`RegressionModel`] orchestrator and its configuration

pub mod data;
pub mod model;
pub mod testing;
pub mod training;
pub mod utils;

pub use data::{DatasetError, DesignMatrix, ExperimentalData, RegressionType};
pub use model::{
    ConfigError, Equation, ModelError, RegressionConfig, RegressionMethod, RegressionModel, Solver,
};
pub use training::{
    DivergenceError, GradientDescentParams, OptimizerState, StepOutcome, TrainingSummary,
    Verbosity,
};
