mod frame;
mod null_renderer;
mod primitives;

pub use frame::{AxisRedraw, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::PointPlacement;

use crate::error::ScatterResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame`, so
/// drawing code stays isolated from selection and scale logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ScatterResult<()>;
}
