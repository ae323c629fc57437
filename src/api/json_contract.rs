use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Metric;
use crate::error::{ChartError, ChartResult};

use super::RadarSnapshot;

pub const RADAR_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: RadarSnapshot,
}

impl RadarSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize radar snapshot: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = RadarSnapshotJsonContractV1 {
            schema_version: RADAR_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize radar snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<RadarSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: RadarSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse radar snapshot json payload: {e}"))
        })?;
        if payload.schema_version != RADAR_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported radar snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

/// Metrics as sent by the clients: either a list or an object keyed by
/// nutrient (`{"calories": {"metric_name": ..., "metric_score": ...}, ...}`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MetricsPayload {
    List(Vec<Metric>),
    Keyed(IndexMap<String, Metric>),
}

/// Parses a metrics document, preserving document order.
pub fn metrics_from_json_str(input: &str) -> ChartResult<Vec<Metric>> {
    let payload: MetricsPayload = serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse metrics json: {e}")))?;
    Ok(match payload {
        MetricsPayload::List(metrics) => metrics,
        MetricsPayload::Keyed(metrics) => metrics.into_values().collect(),
    })
}
