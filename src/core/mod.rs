pub mod field;
pub mod record;
pub mod scale;
pub mod types;

pub use field::{Axis, Field};
pub use record::{Dataset, Record};
pub use scale::{AxisScale, DomainPadding, ScaleParameters, project_record};
pub use types::{PlotPoint, Viewport};
