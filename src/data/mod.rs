//! Experimental data and design matrices.
//!
//! Input files store one variable per line: the first `n` lines are feature
//! series and the last line is the label series. [`ExperimentalData`] keeps the
//! features feature-major `[n_features, n_samples]` so a whole variable is one
//! contiguous row.
//!
//! # Overview
//!
//! - [`ExperimentalData`]: validated features + labels
//! - [`DesignMatrix`]: `[n_samples, n_columns]` matrix with a leading bias column
//! - [`RegressionType`]: linear or quadratic feature expansion
//! - [`io`]: CSV loading and writing

mod dataset;
mod design;
pub mod io;

pub use dataset::{DatasetError, ExperimentalData};
pub use design::{DesignMatrix, RegressionType};
