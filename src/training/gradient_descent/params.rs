//! Gradient descent parameters.

use derive_builder::Builder;

use crate::training::Verbosity;

/// Default learning rate (alpha).
pub const DEFAULT_LEARNING_RATE: f64 = 1e-3;

/// Default hard cap on iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

/// Parameters for [`GradientDescentOptimizer`](super::GradientDescentOptimizer).
///
/// Use struct construction with `..Default::default()` or the builder.
///
/// # Example
///
/// ```
/// use regfit::training::{GradientDescentParams, Verbosity};
///
/// let params = GradientDescentParams::builder()
///     .learning_rate(0.01)
///     .precision(6u32)
///     .verbosity(Verbosity::Silent)
///     .build()
///     .unwrap();
///
/// assert_eq!(params.max_iterations, 100_000);
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(setter(into), default, build_fn(validate = "Self::validate_fields"))]
pub struct GradientDescentParams {
    /// Step size applied to the gradient. Default: `1e-3`.
    pub learning_rate: f64,

    /// Hard cap on iterations. Reaching it is not an error; the weights
    /// reached so far are kept. Default: `100_000`.
    pub max_iterations: usize,

    /// Decimal places kept in the weights after every update. Also sets the
    /// convergence threshold `10^(-precision)`. Default: `4`.
    pub precision: u32,

    /// Verbosity level for training output.
    pub verbosity: Verbosity,

    /// Iterations between progress lines at [`Verbosity::Debug`].
    pub log_interval: usize,
}

impl Default for GradientDescentParams {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            precision: 4,
            verbosity: Verbosity::default(),
            log_interval: 1000,
        }
    }
}

impl GradientDescentParams {
    /// Create a builder for configuring the parameters.
    pub fn builder() -> GradientDescentParamsBuilder {
        GradientDescentParamsBuilder::default()
    }

    /// Validate parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the learning rate is not a positive finite number
    /// or the iteration cap is zero.
    pub fn validate(&self) -> Result<(), ParamValidationError> {
        check_learning_rate(self.learning_rate)?;
        check_max_iterations(self.max_iterations)
    }
}

impl GradientDescentParamsBuilder {
    fn validate_fields(&self) -> Result<(), String> {
        if let Some(learning_rate) = self.learning_rate {
            check_learning_rate(learning_rate).map_err(|e| e.to_string())?;
        }
        if let Some(max_iterations) = self.max_iterations {
            check_max_iterations(max_iterations).map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}

fn check_learning_rate(learning_rate: f64) -> Result<(), ParamValidationError> {
    if learning_rate > 0.0 && learning_rate.is_finite() {
        Ok(())
    } else {
        Err(ParamValidationError::InvalidLearningRate(learning_rate))
    }
}

fn check_max_iterations(max_iterations: usize) -> Result<(), ParamValidationError> {
    if max_iterations > 0 {
        Ok(())
    } else {
        Err(ParamValidationError::InvalidMaxIterations(max_iterations))
    }
}

/// Parameter validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamValidationError {
    /// learning_rate must be finite and > 0.
    #[error("learning_rate must be finite and > 0, got {0}")]
    InvalidLearningRate(f64),

    /// max_iterations must be > 0.
    #[error("max_iterations must be > 0, got {0}")]
    InvalidMaxIterations(usize),
}
