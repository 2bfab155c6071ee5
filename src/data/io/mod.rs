//! Dataset file I/O.
//!
//! Input files are headerless CSV with one variable per line: every line but
//! the last is a feature series, the last line is the label series. All lines
//! must hold the same number of values.
//!
//! ```text
//! 1,2,3
//! 2,4,6
//! ```

mod error;
mod text;

pub use error::LoadError;
pub use text::{load_csv, read_csv, write_csv};
