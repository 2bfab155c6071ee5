//! High-level regression model.
//!
//! [`RegressionModel`] owns the data, the design matrix and the weights. It
//! combines two independent choices:
//!
//! - a feature expansion, [`RegressionType`] (linear or quadratic)
//! - a [`Solver`] (normal equation or gradient descent)
//!
//! # Example
//!
//! ```
//! use regfit::data::{ExperimentalData, RegressionType};
//! use regfit::model::{RegressionModel, Solver};
//!
//! let data = ExperimentalData::from_rows(vec![
//!     vec![1.0, 2.0, 3.0],
//!     vec![2.0, 4.0, 6.0],
//! ])?;
//! let model = RegressionModel::new(data, RegressionType::Linear, Solver::normal_equation(4))?;
//!
//! assert_eq!(model.beta().to_vec(), vec![0.0, 2.0]);
//! assert_eq!(model.equation().to_string(), "y = 0 + 2(x_1)");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
mod equation;
mod regression;

use serde::{Deserialize, Serialize};

use crate::data::io::LoadError;
use crate::data::DatasetError;
use crate::training::{
    DivergenceError, GradientDescentParams, NormalEquationSolver, SolveError, TrainingLogger,
    Verbosity,
};

pub use config::{ConfigError, ModelSpec, RegressionConfig};
pub use equation::Equation;
pub use regression::RegressionModel;

// =============================================================================
// Method & solver
// =============================================================================

/// How the weights are fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegressionMethod {
    /// Iterative batch gradient descent.
    Gradient,
    /// Closed-form pseudo-inverse solve.
    Normal,
}

impl RegressionMethod {
    /// Parse the configuration spelling (`"gradient"` / `"normal"`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "gradient" => Some(Self::Gradient),
            "normal" => Some(Self::Normal),
            _ => None,
        }
    }

    /// Configuration spelling of this method.
    pub fn name(self) -> &'static str {
        match self {
            Self::Gradient => "gradient",
            Self::Normal => "normal",
        }
    }
}

/// Weight-fitting strategy injected into a [`RegressionModel`].
#[derive(Debug, Clone)]
pub enum Solver {
    NormalEquation(NormalEquationSolver),
    GradientDescent(GradientDescentParams),
}

impl Solver {
    /// Normal equation with weights rounded to `precision` decimals.
    pub fn normal_equation(precision: u32) -> Self {
        Self::NormalEquation(NormalEquationSolver::new(precision))
    }

    /// Gradient descent with the given parameters.
    pub fn gradient_descent(params: GradientDescentParams) -> Self {
        Self::GradientDescent(params)
    }

    pub fn method(&self) -> RegressionMethod {
        match self {
            Self::NormalEquation(_) => RegressionMethod::Normal,
            Self::GradientDescent(_) => RegressionMethod::Gradient,
        }
    }

    /// Decimal places kept in the fitted weights.
    pub fn precision(&self) -> u32 {
        match self {
            Self::NormalEquation(solver) => solver.precision(),
            Self::GradientDescent(params) => params.precision,
        }
    }

    /// Override the training verbosity.
    pub fn with_verbosity(self, verbosity: Verbosity) -> Self {
        match self {
            Self::NormalEquation(solver) => {
                Self::NormalEquation(solver.with_logger(TrainingLogger::new(verbosity, 0)))
            }
            Self::GradientDescent(params) => Self::GradientDescent(GradientDescentParams {
                verbosity,
                ..params
            }),
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Anything that can go wrong between reading a configuration and producing
/// a fit.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to load experimental data: {0}")]
    Load(#[from] LoadError),

    #[error("malformed experimental data: {0}")]
    Malformed(#[from] DatasetError),

    #[error(transparent)]
    Diverged(#[from] DivergenceError),

    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error("expected {expected} feature values, got {got}")]
    FeatureCount { expected: usize, got: usize },
}
