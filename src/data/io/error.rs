//! Shared error types for dataset I/O.

use std::io;

use crate::data::DatasetError;

/// Errors that can occur when loading a dataset.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid number {value:?} at row {row}, column {column}")]
    Parse {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("malformed input: {0}")]
    Malformed(#[from] DatasetError),
}
