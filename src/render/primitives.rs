use serde::{Deserialize, Serialize};

use crate::error::{ScatterError, ScatterResult};

/// Positioned marker for one record: circle centre plus its text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointPlacement {
    /// Record key; also the label drawn over the circle.
    pub abbr: String,
    pub x: f64,
    pub y: f64,
}

impl PointPlacement {
    #[must_use]
    pub fn new(abbr: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            abbr: abbr.into(),
            x,
            y,
        }
    }

    pub fn validate(&self) -> ScatterResult<()> {
        if self.abbr.is_empty() {
            return Err(ScatterError::InvalidData(
                "point label must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ScatterError::InvalidData(
                "point coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
