use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScatterError;

/// Axis slot a field can be mapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Fields selectable on this axis. The X and Y sets do not overlap by
    /// convention; nothing forbids plotting the same field on both axes.
    #[must_use]
    pub fn allowed_fields(self) -> &'static [Field] {
        match self {
            Axis::X => &[Field::Age, Field::Income, Field::Poverty],
            Axis::Y => &[Field::Healthcare, Field::Smokes],
        }
    }

    #[must_use]
    pub fn allows(self, field: Field) -> bool {
        self.allowed_fields().contains(&field)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// One numeric column of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Age,
    Income,
    Poverty,
    Healthcare,
    Smokes,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Age,
        Field::Income,
        Field::Poverty,
        Field::Healthcare,
        Field::Smokes,
    ];

    /// CSV header spelling of the column.
    #[must_use]
    pub fn column_name(self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Income => "income",
            Field::Poverty => "poverty",
            Field::Healthcare => "healthcare",
            Field::Smokes => "smokes",
        }
    }

    /// Human caption drawn next to the axis label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::Income => "Income",
            Field::Poverty => "In Poverty (%)",
            Field::Healthcare => "Healthcare Index",
            Field::Smokes => "Smoking Index",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for Field {
    type Err = ScatterError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.column_name() == input)
            .ok_or_else(|| ScatterError::UnknownField(input.to_owned()))
    }
}
