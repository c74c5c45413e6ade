use crate::core::{
    Axis, AxisScale, Dataset, DomainPadding, Field, PlotPoint, Record, Viewport, project_record,
};
use crate::error::{ScatterError, ScatterResult};
use crate::interaction::{HoverState, InteractionState, Tooltip};
use crate::render::{AxisRedraw, PointPlacement, RenderFrame, Renderer};

use super::{AxisSelection, SelectionChange};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterEngineConfig {
    pub viewport: Viewport,
    pub x_field: Field,
    pub y_field: Field,
    pub padding: DomainPadding,
}

impl Default for ScatterEngineConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(800, 400),
            x_field: Field::Age,
            y_field: Field::Healthcare,
            padding: DomainPadding::default(),
        }
    }
}

impl ScatterEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_fields(mut self, x_field: Field, y_field: Field) -> Self {
        self.x_field = x_field;
        self.y_field = y_field;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: DomainPadding) -> Self {
        self.padding = padding;
        self
    }
}

pub struct ScatterEngine<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    padding: DomainPadding,
    dataset: Dataset,
    selection: AxisSelection,
    x_scale: AxisScale,
    y_scale: AxisScale,
    interaction: InteractionState,
    pending_redraw: Option<AxisRedraw>,
}

impl<R: Renderer> ScatterEngine<R> {
    pub fn new(renderer: R, config: ScatterEngineConfig, dataset: Dataset) -> ScatterResult<Self> {
        if !config.viewport.is_valid() {
            return Err(ScatterError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }
        ensure_allowed(Axis::X, config.x_field)?;
        ensure_allowed(Axis::Y, config.y_field)?;

        let x_scale = AxisScale::fit_tuned(&dataset, Axis::X, config.x_field, config.padding)?;
        let y_scale = AxisScale::fit_tuned(&dataset, Axis::Y, config.y_field, config.padding)?;

        Ok(Self {
            renderer,
            viewport: config.viewport,
            padding: config.padding,
            dataset,
            selection: AxisSelection::new(config.x_field, config.y_field),
            x_scale,
            y_scale,
            interaction: InteractionState::default(),
            pending_redraw: Some(AxisRedraw::Both),
        })
    }

    #[must_use]
    pub fn selection(&self) -> AxisSelection {
        self.selection
    }

    #[must_use]
    pub fn x_scale(&self) -> AxisScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> AxisScale {
        self.y_scale
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn hover(&self) -> &HoverState {
        self.interaction.hover()
    }

    /// Handles one axis-label click.
    ///
    /// Rejected requests leave selection and scales untouched. Re-selecting
    /// the active field reports `Unchanged` without refitting. Otherwise only
    /// the clicked axis is refitted; the other axis keeps its exact scale.
    pub fn select_axis(&mut self, axis: Axis, field: Field) -> ScatterResult<SelectionChange> {
        ensure_allowed(axis, field)?;

        if self.selection.field_on(axis) == field {
            return Ok(SelectionChange::Unchanged);
        }

        let scale = AxisScale::fit_tuned(&self.dataset, axis, field, self.padding)?;
        self.selection.set_field(axis, field);
        match axis {
            Axis::X => self.x_scale = scale,
            Axis::Y => self.y_scale = scale,
        }
        self.note_axis_change(axis);
        tracing::debug!(%axis, %field, "axis selection changed");

        Ok(SelectionChange::Changed { axis, scale })
    }

    pub fn project_record(&self, record: &Record) -> ScatterResult<PlotPoint> {
        project_record(record, self.x_scale, self.y_scale, self.viewport)
    }

    /// Handles the pointer entering a data point.
    ///
    /// Reads the current selection and the hovered record; never mutates
    /// either. An unknown abbreviation yields `None`.
    pub fn pointer_enter(&mut self, abbr: &str) -> Option<Tooltip> {
        let record = self.dataset.get(abbr)?;
        let tooltip = Tooltip {
            name: record.name.clone(),
            abbr: record.abbr.clone(),
            x_field: self.selection.x_field(),
            x_value: record.value(self.selection.x_field()),
            y_field: self.selection.y_field(),
            y_value: record.value(self.selection.y_field()),
        };
        self.interaction.on_pointer_enter(tooltip.clone());
        Some(tooltip)
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    /// Builds the scene for the current selection without consuming the
    /// pending redraw hint.
    pub fn build_frame(&self) -> ScatterResult<RenderFrame> {
        let redraw = self.pending_redraw.unwrap_or(AxisRedraw::Both);
        let mut frame = RenderFrame::new(self.viewport, self.x_scale, self.y_scale, redraw);
        for record in self.dataset.iter() {
            let point = self.project_record(record)?;
            frame = frame.with_point(PointPlacement::new(record.abbr.clone(), point.x, point.y));
        }
        Ok(frame)
    }

    pub fn render(&mut self) -> ScatterResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)?;
        self.pending_redraw = None;
        Ok(())
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn note_axis_change(&mut self, axis: Axis) {
        self.pending_redraw = Some(match self.pending_redraw {
            None => AxisRedraw::Only(axis),
            Some(AxisRedraw::Only(pending)) if pending == axis => AxisRedraw::Only(axis),
            Some(_) => AxisRedraw::Both,
        });
    }
}

fn ensure_allowed(axis: Axis, field: Field) -> ScatterResult<()> {
    if axis.allows(field) {
        Ok(())
    } else {
        Err(ScatterError::FieldNotOnAxis { field, axis })
    }
}
