use serde::{Deserialize, Serialize};

use crate::core::RowKey;
use crate::error::{ChartError, ChartResult};
use crate::interaction::HighlightPhase;

use super::{ChartLayoutEngine, ChartRenderModel};

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Inspectable state of one engine at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub model: ChartRenderModel,
    pub hovered: Option<RowKey>,
    pub highlight_phase: HighlightPhase,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl ChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl ChartLayoutEngine {
    pub fn snapshot(&mut self) -> ChartSnapshot {
        let model = self.render_model().clone();
        ChartSnapshot {
            model,
            hovered: self.hover.hovered().cloned(),
            highlight_phase: self.highlight.phase().clone(),
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&mut self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
