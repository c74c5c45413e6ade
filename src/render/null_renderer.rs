use crate::error::ScatterResult;
use crate::render::{AxisRedraw, RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_point_count: usize,
    pub last_redraw: Option<AxisRedraw>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ScatterResult<()> {
        frame.validate()?;
        self.last_point_count = frame.points.len();
        self.last_redraw = Some(frame.redraw);
        Ok(())
    }
}
