use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Field;
use crate::error::{ScatterError, ScatterResult};

/// One row of the loaded dataset. Immutable once the dataset is built.
///
/// Parsing and numeric coercion happen on the host side; the engine only
/// receives already-typed records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Full state name shown in tooltips.
    pub name: String,
    /// Short state abbreviation, used as point label and record key.
    pub abbr: String,
    pub age: f64,
    pub income: f64,
    pub poverty: f64,
    pub healthcare: f64,
    pub smokes: f64,
}

impl Record {
    #[must_use]
    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::Age => self.age,
            Field::Income => self.income,
            Field::Poverty => self.poverty,
            Field::Healthcare => self.healthcare,
            Field::Smokes => self.smokes,
        }
    }

    pub fn validate(&self) -> ScatterResult<()> {
        if self.name.is_empty() || self.abbr.is_empty() {
            return Err(ScatterError::InvalidData(
                "record name and abbreviation must not be empty".to_owned(),
            ));
        }
        for field in Field::ALL {
            if !self.value(field).is_finite() {
                return Err(ScatterError::InvalidData(format!(
                    "record `{}`: field `{field}` must be finite",
                    self.abbr
                )));
            }
        }
        Ok(())
    }
}

/// Insertion-ordered record collection keyed by state abbreviation.
///
/// Built once at load time; the engine never mutates it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: IndexMap<String, Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> ScatterResult<Self> {
        if records.is_empty() {
            return Err(ScatterError::EmptyDataset);
        }

        let mut keyed = IndexMap::with_capacity(records.len());
        for record in records {
            record.validate()?;
            if keyed.contains_key(&record.abbr) {
                return Err(ScatterError::InvalidData(format!(
                    "duplicate record abbreviation `{}`",
                    record.abbr
                )));
            }
            keyed.insert(record.abbr.clone(), record);
        }

        Ok(Self { records: keyed })
    }

    #[must_use]
    pub fn get(&self, abbr: &str) -> Option<&Record> {
        self.records.get(abbr)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
