mod engine;
mod json_contract;
mod selection;

pub use engine::{ScatterEngine, ScatterEngineConfig};
pub use json_contract::{RENDER_FRAME_JSON_SCHEMA_V1, RenderFrameJsonContractV1};
pub use selection::{AxisSelection, SelectionChange};
