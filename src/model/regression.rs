//! The [`RegressionModel`] orchestrator.

use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::data::io::load_csv;
use crate::data::{DesignMatrix, ExperimentalData, RegressionType};
use crate::training::{
    DivergenceError, GradientDescentOptimizer, OptimizerState, SquaredError, StepOutcome,
    TrainingSummary,
};

use super::{Equation, ModelError, RegressionConfig, RegressionMethod, Solver};

/// Weights and how they evolve.
#[derive(Debug, Clone)]
enum Fit {
    /// Solved once at construction.
    Closed { beta: Array1<f64> },
    /// Refined by repeated steps.
    Iterative(GradientDescentOptimizer),
}

/// A regression model over one fixed data set.
///
/// Data and design matrix are built once and never change. The weights are
/// owned by this instance alone: solved at construction for the normal
/// equation, or starting at zero and advanced through [`step`](Self::step)
/// for gradient descent.
#[derive(Debug, Clone)]
pub struct RegressionModel {
    data: ExperimentalData,
    design: DesignMatrix,
    regression_type: RegressionType,
    fit: Fit,
    objective: SquaredError,
}

impl RegressionModel {
    /// Build a model and, for the normal equation, solve it right away.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Solve`] if the pseudo-inverse cannot be formed,
    /// or [`ModelError::Config`] for invalid gradient descent parameters.
    pub fn new(
        data: ExperimentalData,
        regression_type: RegressionType,
        solver: Solver,
    ) -> Result<Self, ModelError> {
        let design = regression_type.design_matrix(&data);
        let fit = match solver {
            Solver::NormalEquation(solver) => Fit::Closed {
                beta: solver.solve(&design, data.targets())?,
            },
            Solver::GradientDescent(params) => {
                params
                    .validate()
                    .map_err(|e| ModelError::Config(e.into()))?;
                Fit::Iterative(GradientDescentOptimizer::new(design.n_columns(), params))
            }
        };

        Ok(Self {
            data,
            design,
            regression_type,
            fit,
            objective: SquaredError,
        })
    }

    /// Validate `config`, load its input file and build the model.
    ///
    /// The configuration is checked before the file is touched.
    pub fn from_config(config: &RegressionConfig) -> Result<Self, ModelError> {
        let spec = config.validate()?;
        let data = load_csv(&config.input_file_path)?;
        Self::new(data, spec.regression_type, spec.solver)
    }

    // =========================================================================
    // Training
    // =========================================================================

    /// Advance gradient descent by one iteration.
    ///
    /// A normal-equation model is already solved and always reports
    /// [`StepOutcome::Converged`].
    pub fn step(&mut self) -> Result<StepOutcome, ModelError> {
        match &mut self.fit {
            Fit::Closed { .. } => Ok(StepOutcome::Converged),
            Fit::Iterative(optimizer) => Ok(optimizer.step(&self.design, self.data.targets())?),
        }
    }

    /// Step until convergence, divergence or the iteration cap.
    pub fn fit(&mut self) -> Result<TrainingSummary, ModelError> {
        match &mut self.fit {
            Fit::Closed { beta } => Ok(TrainingSummary {
                iterations: 0,
                outcome: StepOutcome::Converged,
                cost: self
                    .objective
                    .cost(self.design.view(), beta.view(), self.data.targets())?,
            }),
            Fit::Iterative(optimizer) => Ok(optimizer.run(&self.design, self.data.targets())?),
        }
    }

    /// Training state. A normal-equation model is always converged.
    pub fn state(&self) -> OptimizerState {
        match &self.fit {
            Fit::Closed { .. } => OptimizerState::Converged,
            Fit::Iterative(optimizer) => optimizer.state(),
        }
    }

    // =========================================================================
    // Results
    // =========================================================================

    /// Current weights, one per design column.
    pub fn beta(&self) -> ArrayView1<'_, f64> {
        match &self.fit {
            Fit::Closed { beta } => beta.view(),
            Fit::Iterative(optimizer) => optimizer.beta(),
        }
    }

    /// Predicted labels for the training samples.
    pub fn hypothesis(&self) -> Result<Array1<f64>, DivergenceError> {
        self.objective.hypothesis(self.design.view(), self.beta())
    }

    /// Cost of the current weights.
    pub fn cost(&self) -> Result<f64, DivergenceError> {
        self.objective
            .cost(self.design.view(), self.beta(), self.data.targets())
    }

    /// Absolute residuals `|h - y|` per sample.
    pub fn residuals(&self) -> Result<Array1<f64>, DivergenceError> {
        let residuals =
            self.objective
                .residuals(self.design.view(), self.beta(), self.data.targets())?;
        Ok(residuals.mapv(f64::abs))
    }

    /// Evaluate the fit on one raw feature vector.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FeatureCount`] if `features` does not hold one
    /// value per input feature.
    pub fn predict_row(&self, features: &[f64]) -> Result<f64, ModelError> {
        self.check_feature_count(features.len())?;
        let row = self
            .regression_type
            .expand_row(ArrayView1::from(features));
        Ok(row.dot(&self.beta()))
    }

    /// Evaluate the fit on feature-major inputs (`[n_features, n_points]`).
    pub fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Array1<f64>, ModelError> {
        self.check_feature_count(features.nrows())?;
        let beta = self.beta();
        Ok(features
            .columns()
            .into_iter()
            .map(|point| self.regression_type.expand_row(point).dot(&beta))
            .collect())
    }

    /// The fitted equation in text form.
    pub fn equation(&self) -> Equation<'_> {
        Equation::new(self.regression_type, self.beta())
    }

    fn check_feature_count(&self, got: usize) -> Result<(), ModelError> {
        let expected = self.n_features();
        if got == expected {
            Ok(())
        } else {
            Err(ModelError::FeatureCount { expected, got })
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of input features (`n`). Presentation picks a plot from this.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.data.n_features()
    }

    /// Number of samples (`m`).
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.data.n_samples()
    }

    /// Number of weights (`k`).
    #[inline]
    pub fn n_weights(&self) -> usize {
        self.design.n_columns()
    }

    pub fn regression_type(&self) -> RegressionType {
        self.regression_type
    }

    pub fn method(&self) -> RegressionMethod {
        match self.fit {
            Fit::Closed { .. } => RegressionMethod::Normal,
            Fit::Iterative(_) => RegressionMethod::Gradient,
        }
    }

    pub fn data(&self) -> &ExperimentalData {
        &self.data
    }

    pub fn design(&self) -> &DesignMatrix {
        &self.design
    }
}
