use thiserror::Error;

use crate::core::{Axis, Field};

pub type ScatterResult<T> = Result<T, ScatterError>;

#[derive(Debug, Error)]
pub enum ScatterError {
    #[error("dataset contains no records")]
    EmptyDataset,

    #[error("unknown field name `{0}`")]
    UnknownField(String),

    #[error("field `{field}` is not selectable on the {axis} axis")]
    FieldNotOnAxis { field: Field, axis: Axis },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
