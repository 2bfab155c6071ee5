//! JSON run configuration.
//!
//! # Example
//!
//! ```json
//! {
//!   "regression_method": "gradient",
//!   "regression_type": "quadratic",
//!   "input_file_path": "generated.csv",
//!   "parameter_precision": 4
//! }
//! ```
//!
//! `learning_rate` and `max_iterations` are optional and only used by
//! gradient descent.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::RegressionType;
use crate::training::gradient_descent::{DEFAULT_LEARNING_RATE, DEFAULT_MAX_ITERATIONS};
use crate::training::{GradientDescentParams, NormalEquationSolver, ParamValidationError};

use super::{RegressionMethod, Solver};

/// Configuration errors. Raised before any data is read.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "invalid configuration: regression_method={method:?}, regression_type={regression_type:?}; \
         'regression_method' must be either 'gradient' or 'normal', \
         'regression_type' must be either 'linear' or 'quadratic'"
    )]
    InvalidCombination {
        method: String,
        regression_type: String,
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParamValidationError),

    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read configuration: {0}")]
    Io(#[from] io::Error),
}

/// Raw run configuration as found in the JSON file.
///
/// Method and type stay strings until [`validate`](Self::validate), so an
/// unknown spelling is reported as a configuration error rather than a JSON
/// syntax error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionConfig {
    /// `"gradient"` or `"normal"`.
    pub regression_method: String,
    /// `"linear"` or `"quadratic"`.
    pub regression_type: String,
    /// CSV file with one variable per line.
    pub input_file_path: PathBuf,
    /// Decimal places kept in the fitted weights.
    pub parameter_precision: u32,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

fn default_learning_rate() -> f64 {
    DEFAULT_LEARNING_RATE
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

/// Validated choice of feature expansion and solver.
#[derive(Debug, Clone)]
pub struct ModelSpec {
    pub regression_type: RegressionType,
    pub solver: Solver,
}

impl RegressionConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Resolve method and type into a [`ModelSpec`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCombination`] unless the method is
    /// `gradient`/`normal` and the type is `linear`/`quadratic`, and
    /// [`ConfigError::InvalidParameter`] for an unusable learning rate or
    /// iteration cap.
    pub fn validate(&self) -> Result<ModelSpec, ConfigError> {
        let method = RegressionMethod::from_name(&self.regression_method);
        let regression_type = RegressionType::from_name(&self.regression_type);
        let (Some(method), Some(regression_type)) = (method, regression_type) else {
            return Err(ConfigError::InvalidCombination {
                method: self.regression_method.clone(),
                regression_type: self.regression_type.clone(),
            });
        };

        let solver = match method {
            RegressionMethod::Normal => {
                Solver::NormalEquation(NormalEquationSolver::new(self.parameter_precision))
            }
            RegressionMethod::Gradient => {
                let params = GradientDescentParams {
                    learning_rate: self.learning_rate,
                    max_iterations: self.max_iterations,
                    precision: self.parameter_precision,
                    ..Default::default()
                };
                params.validate()?;
                Solver::GradientDescent(params)
            }
        };

        Ok(ModelSpec {
            regression_type,
            solver,
        })
    }
}
