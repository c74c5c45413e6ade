use serde::{Deserialize, Serialize};

use crate::core::Field;

/// Tooltip payload for the hovered record, carrying the two values the
/// current selection plots plus the record's display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub name: String,
    pub abbr: String,
    pub x_field: Field,
    pub x_value: f64,
    pub y_field: Field,
    pub y_value: f64,
}

/// Public hover state exposed to host applications.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HoverState {
    pub visible: bool,
    pub tooltip: Option<Tooltip>,
}

/// Pointer-hover bookkeeping. Hover reads engine state but never mutates
/// the axis selection or the fitted scales.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    hover: HoverState,
}

impl InteractionState {
    #[must_use]
    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    pub fn on_pointer_enter(&mut self, tooltip: Tooltip) {
        self.hover.visible = true;
        self.hover.tooltip = Some(tooltip);
    }

    pub fn on_pointer_leave(&mut self) {
        self.hover = HoverState::default();
    }
}
