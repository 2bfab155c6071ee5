//! Squared-error cost function.
//!
//! For design matrix `X` (`[m, k]`), weights `beta` (`k`) and labels `y` (`m`):
//!
//! - hypothesis: `h = X · beta`
//! - cost: `J = Σ (h - y)² / (2m)`
//! - gradient: `g[j] = Σ (h - y) · X[:, j] / m`
//!
//! Every entry point checks the hypothesis for NaN/infinity and reports a
//! [`DivergenceError`] instead of returning corrupted numbers.

use ndarray::{Array1, ArrayView1, ArrayView2};

/// The optimization blew up: weights produced non-finite predictions.
///
/// Training must stop when this is returned. The usual cause is a learning
/// rate that is too large for the scale of the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DivergenceError {
    #[error(
        "failed to converge: hypothesis is not finite at sample {sample}; \
         try making the learning rate smaller"
    )]
    NonFiniteHypothesis { sample: usize },

    #[error("failed to converge: cost is not finite; try making the learning rate smaller")]
    NonFiniteCost,
}

/// Mean squared error with the conventional `1/2` factor.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredError;

impl SquaredError {
    /// Predicted labels `X · beta`.
    pub fn hypothesis(
        &self,
        design: ArrayView2<'_, f64>,
        beta: ArrayView1<'_, f64>,
    ) -> Result<Array1<f64>, DivergenceError> {
        let hypothesis = design.dot(&beta);
        match hypothesis.iter().position(|h| !h.is_finite()) {
            Some(sample) => Err(DivergenceError::NonFiniteHypothesis { sample }),
            None => Ok(hypothesis),
        }
    }

    /// Signed residuals `h - y`.
    pub fn residuals(
        &self,
        design: ArrayView2<'_, f64>,
        beta: ArrayView1<'_, f64>,
        targets: ArrayView1<'_, f64>,
    ) -> Result<Array1<f64>, DivergenceError> {
        Ok(self.hypothesis(design, beta)? - &targets)
    }

    /// Cost `Σ (h - y)² / (2m)`. Always `>= 0`.
    pub fn cost(
        &self,
        design: ArrayView2<'_, f64>,
        beta: ArrayView1<'_, f64>,
        targets: ArrayView1<'_, f64>,
    ) -> Result<f64, DivergenceError> {
        let residuals = self.residuals(design, beta, targets)?;
        let n_samples = targets.len() as f64;
        let cost = residuals.mapv(|r| r * r).sum() / (2.0 * n_samples);
        if cost.is_finite() {
            Ok(cost)
        } else {
            Err(DivergenceError::NonFiniteCost)
        }
    }

    /// Gradient of the cost with respect to each weight.
    pub fn gradients(
        &self,
        design: ArrayView2<'_, f64>,
        beta: ArrayView1<'_, f64>,
        targets: ArrayView1<'_, f64>,
    ) -> Result<Array1<f64>, DivergenceError> {
        let residuals = self.residuals(design, beta, targets)?;
        let n_samples = targets.len() as f64;
        Ok(design.t().dot(&residuals) / n_samples)
    }
}
