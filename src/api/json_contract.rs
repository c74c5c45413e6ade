use serde::{Deserialize, Serialize};

use crate::error::{ScatterError, ScatterResult};
use crate::render::{RenderFrame, Renderer};

use super::ScatterEngine;

pub const RENDER_FRAME_JSON_SCHEMA_V1: u32 = 1;

/// Versioned wire wrapper so a browser host can consume engine frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrameJsonContractV1 {
    pub schema_version: u32,
    pub frame: RenderFrame,
}

impl RenderFrame {
    pub fn to_json_contract_v1_pretty(&self) -> ScatterResult<String> {
        let payload = RenderFrameJsonContractV1 {
            schema_version: RENDER_FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ScatterError::InvalidData(format!("failed to serialize frame contract v1: {e}"))
        })
    }

    /// Accepts both a bare frame and the versioned contract wrapper.
    pub fn from_json_compat_str(input: &str) -> ScatterResult<Self> {
        if let Ok(frame) = serde_json::from_str::<RenderFrame>(input) {
            return Ok(frame);
        }
        let payload: RenderFrameJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ScatterError::InvalidData(format!("failed to parse frame json payload: {e}"))
        })?;
        if payload.schema_version != RENDER_FRAME_JSON_SCHEMA_V1 {
            return Err(ScatterError::InvalidData(format!(
                "unsupported frame schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }
}

impl<R: Renderer> ScatterEngine<R> {
    pub fn frame_json_contract_v1_pretty(&self) -> ScatterResult<String> {
        self.build_frame()?.to_json_contract_v1_pretty()
    }
}
