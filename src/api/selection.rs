use serde::{Deserialize, Serialize};

use crate::core::{Axis, AxisScale, Field};

/// The (x-field, y-field) pair currently driving the plot.
///
/// This is the sole piece of mutable selection state; it only changes through
/// `ScatterEngine::select_axis`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSelection {
    x_field: Field,
    y_field: Field,
}

impl AxisSelection {
    #[must_use]
    pub fn new(x_field: Field, y_field: Field) -> Self {
        Self { x_field, y_field }
    }

    #[must_use]
    pub fn x_field(self) -> Field {
        self.x_field
    }

    #[must_use]
    pub fn y_field(self) -> Field {
        self.y_field
    }

    #[must_use]
    pub fn field_on(self, axis: Axis) -> Field {
        match axis {
            Axis::X => self.x_field,
            Axis::Y => self.y_field,
        }
    }

    pub(crate) fn set_field(&mut self, axis: Axis, field: Field) {
        match axis {
            Axis::X => self.x_field = field,
            Axis::Y => self.y_field = field,
        }
    }
}

impl Default for AxisSelection {
    fn default() -> Self {
        Self::new(Field::Age, Field::Healthcare)
    }
}

/// Outcome of one axis-label selection request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SelectionChange {
    /// The requested field was already active; nothing was refitted.
    Unchanged,
    /// The selection moved and the named axis was refitted.
    Changed { axis: Axis, scale: AxisScale },
}
