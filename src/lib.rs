//! scatter-rs: headless scatter-plot engine.
//!
//! The engine owns the current (x-field, y-field) axis selection over a fixed
//! tabular dataset, refits padded linear scales whenever that selection
//! changes, and emits a backend-agnostic render frame. Drawing and data
//! loading stay on the host side of the `Renderer` seam.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ScatterEngine, ScatterEngineConfig};
pub use error::{ScatterError, ScatterResult};
