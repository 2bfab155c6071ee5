//! Closed-form least squares via the normal equation.
//!
//! `beta = pinv(Xᵀ·X) · Xᵀ·y`
//!
//! The Moore–Penrose pseudo-inverse is used instead of a plain inverse, so a
//! singular `XᵀX` (collinear or constant features) still yields the
//! minimum-norm least-squares solution. Cost is `O(k³ + m·k²)`.

use nalgebra::{DMatrix, SVD};
use ndarray::{Array1, Array2, ArrayView1};

use crate::data::DesignMatrix;
use crate::training::TrainingLogger;
use crate::utils::round_in_place;

/// Singular values below `RCOND * largest_singular_value` are treated as zero.
///
/// Forming `XᵀX` squares the condition number of `X`, so the cutoff sits well
/// above machine epsilon.
const RCOND: f64 = 1e-12;

/// Upper bound on SVD sweeps before the solve is abandoned.
const MAX_SVD_ITERATIONS: usize = 10_000;

/// The pseudo-inverse could not be formed, or the system is too large in
/// magnitude to be represented in `f64`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("pseudo-inverse failed: {0}")]
pub struct SolveError(pub String);

/// One-shot normal-equation solver.
#[derive(Debug, Clone)]
pub struct NormalEquationSolver {
    precision: u32,
    logger: TrainingLogger,
}

impl NormalEquationSolver {
    /// Create a solver that rounds weights to `precision` decimal places.
    pub fn new(precision: u32) -> Self {
        Self {
            precision,
            logger: TrainingLogger::default(),
        }
    }

    /// Replace the logger.
    pub fn with_logger(mut self, logger: TrainingLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Decimal places kept in the weights.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Solve for the weights.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError`] if the SVD-based pseudo-inverse is rejected.
    pub fn solve(
        &self,
        design: &DesignMatrix,
        targets: ArrayView1<'_, f64>,
    ) -> Result<Array1<f64>, SolveError> {
        let x = design.view();
        let xtx = x.t().dot(&x);
        let xty = x.t().dot(&targets);
        if !xtx.iter().chain(xty.iter()).all(|v| v.is_finite()) {
            return Err(SolveError("XᵀX or Xᵀy overflows f64".to_string()));
        }

        let mut beta = pseudo_inverse(&xtx)?.dot(&xty);
        if !beta.iter().all(|v| v.is_finite()) {
            return Err(SolveError("weights are not finite".to_string()));
        }
        round_in_place(&mut beta, self.precision);

        self.logger.log_normal_equation(design.n_columns(), design.n_samples());
        Ok(beta)
    }
}

/// Moore–Penrose pseudo-inverse of a square matrix.
fn pseudo_inverse(matrix: &Array2<f64>) -> Result<Array2<f64>, SolveError> {
    let (rows, cols) = matrix.dim();
    let dense = DMatrix::from_fn(rows, cols, |i, j| matrix[[i, j]]);

    let svd = SVD::try_new_unordered(dense, true, true, f64::EPSILON, MAX_SVD_ITERATIONS)
        .ok_or_else(|| SolveError("SVD did not converge".to_string()))?;
    if !svd.singular_values.iter().all(|v| v.is_finite()) {
        return Err(SolveError("singular values are not finite".to_string()));
    }
    let largest = svd.singular_values.iter().copied().fold(0.0f64, f64::max);
    let inverse = svd
        .pseudo_inverse(RCOND * largest)
        .map_err(|e| SolveError(e.to_string()))?;

    Ok(Array2::from_shape_fn((inverse.nrows(), inverse.ncols()), |(i, j)| {
        inverse[(i, j)]
    }))
}
