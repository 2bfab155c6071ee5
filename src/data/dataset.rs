//! Validated experimental data.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Malformed input errors.
///
/// Raised when raw rows cannot form a regression problem. These are fatal:
/// no model is constructed from malformed data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
    #[error("input must have at least two rows (one feature and one label), got {got}")]
    TooFewRows { got: usize },

    #[error("ragged input: row {row} has {got} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("input must have at least two samples per row, got {got}")]
    TooFewSamples { got: usize },

    #[error("non-finite value at row {row}, column {column}")]
    NonFinite { row: usize, column: usize },
}

/// Input features and labels of a regression problem.
///
/// Features are stored feature-major with shape `[n_features, n_samples]`;
/// labels have length `n_samples`. Immutable after construction.
///
/// Invariants: `n_features >= 1`, `n_samples >= 2`, all values finite.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentalData {
    features: Array2<f64>,
    targets: Array1<f64>,
}

impl ExperimentalData {
    /// Build from row-major-by-variable rows: every row but the last is a
    /// feature series, the last row is the label series.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if fewer than two rows are given, if rows have
    /// different lengths, if rows hold fewer than two values, or if any value
    /// is NaN or infinite.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, DatasetError> {
        if rows.len() < 2 {
            return Err(DatasetError::TooFewRows { got: rows.len() });
        }

        let n_samples = rows[0].len();
        for (row, values) in rows.iter().enumerate() {
            if values.len() != n_samples {
                return Err(DatasetError::RaggedRow {
                    row,
                    expected: n_samples,
                    got: values.len(),
                });
            }
            if let Some(column) = values.iter().position(|v| !v.is_finite()) {
                return Err(DatasetError::NonFinite { row, column });
            }
        }
        if n_samples < 2 {
            return Err(DatasetError::TooFewSamples { got: n_samples });
        }

        let n_features = rows.len() - 1;
        let mut flat: Vec<f64> = rows.into_iter().flatten().collect();
        let targets = Array1::from(flat.split_off(n_features * n_samples));
        let features = Array2::from_shape_vec((n_features, n_samples), flat)
            .map_err(|_| DatasetError::TooFewRows { got: n_features + 1 })?;

        Ok(Self { features, targets })
    }

    /// Build from an existing feature-major matrix and label vector.
    ///
    /// # Errors
    ///
    /// Same conditions as [`from_rows`](Self::from_rows).
    pub fn from_arrays(features: Array2<f64>, targets: Array1<f64>) -> Result<Self, DatasetError> {
        let rows: Vec<Vec<f64>> = features
            .outer_iter()
            .map(|row| row.to_vec())
            .chain(std::iter::once(targets.to_vec()))
            .collect();
        Self::from_rows(rows)
    }

    /// Number of input features (`n`).
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.nrows()
    }

    /// Number of samples (`m`).
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.targets.len()
    }

    /// Feature-major view `[n_features, n_samples]`.
    #[inline]
    pub fn features(&self) -> ArrayView2<'_, f64> {
        self.features.view()
    }

    /// Series of a single feature.
    #[inline]
    pub fn feature(&self, index: usize) -> ArrayView1<'_, f64> {
        self.features.row(index)
    }

    /// Label vector `y`.
    #[inline]
    pub fn targets(&self) -> ArrayView1<'_, f64> {
        self.targets.view()
    }

    /// All variables in file order: features first, labels last.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.features
            .outer_iter()
            .map(|row| row.to_vec())
            .chain(std::iter::once(self.targets.to_vec()))
            .collect()
    }
}
