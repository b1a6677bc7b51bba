use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{CarRecord, RecordStore};
use crate::error::LoadError;

pub const HORSEPOWER_COLUMN: &str = "hp";
pub const MPG_COLUMN: &str = "mpg";
pub const CYLINDERS_COLUMN: &str = "cyl";

/// Parser settings for the tabular input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Field delimiter byte, `b','` by default.
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl LoadOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

pub fn load_path(path: impl AsRef<Path>, options: LoadOptions) -> Result<RecordStore, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading dataset");
    let file = File::open(path)?;
    load_reader(file, options)
}

/// Parses a header row plus data rows into a record store.
///
/// `hp`, `mpg` and `cyl` are coerced to finite numbers; the remaining columns
/// are kept verbatim as passthrough fields.
pub fn load_reader<R: Read>(reader: R, options: LoadOptions) -> Result<RecordStore, LoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let hp_index = column_index(&headers, HORSEPOWER_COLUMN)?;
    let mpg_index = column_index(&headers, MPG_COLUMN)?;
    let cyl_index = column_index(&headers, CYLINDERS_COLUMN)?;

    let mut records = Vec::new();
    for (offset, row) in csv_reader.records().enumerate() {
        let row = row?;
        let row_number = offset + 1;

        let mut record = CarRecord::new(
            numeric_field(&row, hp_index, HORSEPOWER_COLUMN, row_number)?,
            numeric_field(&row, mpg_index, MPG_COLUMN, row_number)?,
            numeric_field(&row, cyl_index, CYLINDERS_COLUMN, row_number)?,
        );
        for (index, (name, value)) in headers.iter().zip(row.iter()).enumerate() {
            if index != hp_index && index != mpg_index && index != cyl_index {
                record.extra.insert(name.to_owned(), value.to_owned());
            }
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(LoadError::EmptyDataset);
    }

    debug!(
        records = records.len(),
        columns = headers.len(),
        "dataset loaded"
    );
    Ok(RecordStore::from_validated(records))
}

fn column_index(headers: &StringRecord, column: &'static str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|name| name == column)
        .ok_or(LoadError::MissingColumn { column })
}

fn numeric_field(
    row: &StringRecord,
    index: usize,
    column: &'static str,
    row_number: usize,
) -> Result<f64, LoadError> {
    let raw = row.get(index).unwrap_or_default();
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LoadError::InvalidField {
            row: row_number,
            column,
            value: raw.to_owned(),
        }),
    }
}
