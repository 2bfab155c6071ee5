//! Batch gradient descent for least-squares weights.
//!
//! Weights start at zero and move against the full-batch gradient of the
//! squared-error cost. After every update the weights are rounded to the
//! configured decimal precision; this bounds numeric drift and makes the
//! output reproducible for a given precision.
//!
//! # Example
//!
//! ```ignore
//! use regfit::training::{GradientDescentOptimizer, GradientDescentParams};
//!
//! let params = GradientDescentParams::builder()
//!     .learning_rate(1e-3)
//!     .precision(4u32)
//!     .build()
//!     .unwrap();
//!
//! let mut optimizer = GradientDescentOptimizer::new(design.n_columns(), params);
//! let summary = optimizer.run(&design, data.targets())?;
//! ```
//!
//! # Driving step by step
//!
//! [`GradientDescentOptimizer::step`] performs exactly one update and returns
//! immediately, so a redraw loop can call it between frames and stop calling
//! it whenever it wants.

mod convergence;
mod optimizer;
mod params;

pub use convergence::{ConvergenceAction, ConvergenceMonitor};
pub use optimizer::{GradientDescentOptimizer, OptimizerState, StepOutcome, TrainingSummary};
pub use params::{
    GradientDescentParams, GradientDescentParamsBuilder, ParamValidationError,
    DEFAULT_LEARNING_RATE, DEFAULT_MAX_ITERATIONS,
};
