use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ViewError, ViewResult};

/// Stable identity of a loaded record: its zero-based data row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub usize);

/// One vehicle row with its numeric fields already coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarRecord {
    pub horsepower: f64,
    pub mpg: f64,
    pub cylinders: f64,
    /// Passthrough columns in header order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub extra: IndexMap<String, String>,
}

impl CarRecord {
    #[must_use]
    pub fn new(horsepower: f64, mpg: f64, cylinders: f64) -> Self {
        Self {
            horsepower,
            mpg,
            cylinders,
            extra: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    pub fn validate(&self) -> ViewResult<()> {
        for (field, value) in [
            ("horsepower", self.horsepower),
            ("mpg", self.mpg),
            ("cylinders", self.cylinders),
        ] {
            if !value.is_finite() {
                return Err(ViewError::InvalidData(format!(
                    "record field `{field}` must be finite"
                )));
            }
        }
        Ok(())
    }
}

/// Immutable, non-empty collection of loaded records.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore {
    records: Vec<CarRecord>,
}

impl RecordStore {
    pub fn from_records(records: Vec<CarRecord>) -> ViewResult<Self> {
        if records.is_empty() {
            return Err(ViewError::InvalidData(
                "record store must contain at least one record".to_owned(),
            ));
        }
        for record in &records {
            record.validate()?;
        }
        Ok(Self { records })
    }

    /// Skips validation for rows the loader has already checked.
    pub(crate) fn from_validated(records: Vec<CarRecord>) -> Self {
        debug_assert!(!records.is_empty());
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[CarRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&CarRecord> {
        self.records.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &CarRecord)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| (RecordId(index), record))
    }

    #[must_use]
    pub fn horsepower_extent(&self) -> (f64, f64) {
        extent(self.records.iter().map(|record| record.horsepower))
    }

    #[must_use]
    pub fn mpg_extent(&self) -> (f64, f64) {
        extent(self.records.iter().map(|record| record.mpg))
    }
}

fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
        (min.min(value), max.max(value))
    })
}
