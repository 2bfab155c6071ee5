//! Headerless CSV reading and writing.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Trim, WriterBuilder};

use super::LoadError;
use crate::data::ExperimentalData;

/// Load experimental data from a CSV file.
///
/// # Errors
///
/// Returns [`LoadError`] if the file cannot be read, a cell is not a number,
/// or the rows do not form valid [`ExperimentalData`].
pub fn load_csv(path: impl AsRef<Path>) -> Result<ExperimentalData, LoadError> {
    let file = File::open(path.as_ref())?;
    read_csv(file)
}

/// Read experimental data from any CSV source.
///
/// Whitespace around values is ignored, so `1.0 , 2.0` is accepted.
pub fn read_csv<R: Read>(reader: R) -> Result<ExperimentalData, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let values = record
            .iter()
            .enumerate()
            .map(|(column, cell)| {
                cell.parse::<f64>().map_err(|_| LoadError::Parse {
                    row,
                    column,
                    value: cell.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(values);
    }

    Ok(ExperimentalData::from_rows(rows)?)
}

/// Write variable series as CSV, one series per line.
pub fn write_csv<W: Write>(writer: W, rows: &[Vec<f64>]) -> Result<(), LoadError> {
    let mut writer = WriterBuilder::new().has_headers(false).flexible(true).from_writer(writer);
    for row in rows {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}
