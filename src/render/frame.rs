use serde::{Deserialize, Serialize};

use crate::core::{Axis, AxisScale, Viewport};
use crate::error::{ScatterError, ScatterResult};
use crate::render::PointPlacement;

/// Which axis groups the drawing collaborator must rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisRedraw {
    Both,
    Only(Axis),
}

/// Backend-agnostic scene for one scatter draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub x_scale: AxisScale,
    pub y_scale: AxisScale,
    pub points: Vec<PointPlacement>,
    pub redraw: AxisRedraw,
}

impl RenderFrame {
    #[must_use]
    pub fn new(
        viewport: Viewport,
        x_scale: AxisScale,
        y_scale: AxisScale,
        redraw: AxisRedraw,
    ) -> Self {
        Self {
            viewport,
            x_scale,
            y_scale,
            points: Vec::new(),
            redraw,
        }
    }

    #[must_use]
    pub fn with_point(mut self, point: PointPlacement) -> Self {
        self.points.push(point);
        self
    }

    pub fn validate(&self) -> ScatterResult<()> {
        if !self.viewport.is_valid() {
            return Err(ScatterError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.x_scale.axis() != Axis::X || self.y_scale.axis() != Axis::Y {
            return Err(ScatterError::InvalidData(
                "frame scales must carry matching axis orientations".to_owned(),
            ));
        }

        for point in &self.points {
            point.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
