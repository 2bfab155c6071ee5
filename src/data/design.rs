//! Design matrix construction.
//!
//! The design matrix always starts with a bias column of ones. The remaining
//! columns depend on the [`RegressionType`]:
//!
//! | Type | Columns | Layout |
//! |------|---------|--------|
//! | Linear | `n + 1` | `1, x_1, ..., x_n` |
//! | Quadratic | `2n + 1` | `1, x_1, x_1², ..., x_n, x_n²` |

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use super::ExperimentalData;

/// Feature expansion applied when building the design matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegressionType {
    /// Bias plus one column per feature.
    #[default]
    Linear,
    /// Bias plus a raw and a squared column per feature.
    Quadratic,
}

impl RegressionType {
    /// Parse the configuration spelling (`"linear"` / `"quadratic"`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(Self::Linear),
            "quadratic" => Some(Self::Quadratic),
            _ => None,
        }
    }

    /// Configuration spelling of this type.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Quadratic => "quadratic",
        }
    }

    /// Number of design columns (`k`) for `n_features` inputs.
    #[inline]
    pub fn n_columns(self, n_features: usize) -> usize {
        match self {
            Self::Linear => n_features + 1,
            Self::Quadratic => 2 * n_features + 1,
        }
    }

    /// Build the `[n_samples, k]` design matrix for `data`.
    pub fn design_matrix(self, data: &ExperimentalData) -> DesignMatrix {
        let features = data.features();
        let n_samples = data.n_samples();
        let mut matrix = Array2::ones((n_samples, self.n_columns(data.n_features())));

        for (i, series) in features.outer_iter().enumerate() {
            match self {
                Self::Linear => {
                    matrix.column_mut(i + 1).assign(&series);
                }
                Self::Quadratic => {
                    matrix.column_mut(2 * i + 1).assign(&series);
                    matrix.column_mut(2 * i + 2).assign(&series.mapv(|x| x * x));
                }
            }
        }

        DesignMatrix { matrix }
    }

    /// Expand a single raw feature vector into a design row.
    ///
    /// Used to evaluate a fitted model away from the training samples.
    pub fn expand_row(self, features: ArrayView1<'_, f64>) -> Array1<f64> {
        let mut row = Array1::ones(self.n_columns(features.len()));
        for (i, &x) in features.iter().enumerate() {
            match self {
                Self::Linear => row[i + 1] = x,
                Self::Quadratic => {
                    row[2 * i + 1] = x;
                    row[2 * i + 2] = x * x;
                }
            }
        }
        row
    }
}

/// Design matrix `X` with shape `[n_samples, n_columns]`.
///
/// Column 0 is the bias term and is all ones.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignMatrix {
    matrix: Array2<f64>,
}

impl DesignMatrix {
    /// Number of rows (`m`).
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.matrix.nrows()
    }

    /// Number of columns (`k`), including the bias.
    #[inline]
    pub fn n_columns(&self) -> usize {
        self.matrix.ncols()
    }

    /// Matrix view.
    #[inline]
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.matrix.view()
    }

    /// A single design column.
    #[inline]
    pub fn column(&self, index: usize) -> ArrayView1<'_, f64> {
        self.matrix.column(index)
    }
}
