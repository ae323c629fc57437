use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{GoalProgress, Metric, Point};

use super::RadarChartConfig;

/// Serializable state of one radar: inputs, resolved goals and computed
/// geometry. Used by regression tests and by hosts caching the last draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarSnapshot {
    pub config: RadarChartConfig,
    pub metrics: Vec<Metric>,
    pub goals: IndexMap<String, f64>,
    pub points: Vec<Point>,
    pub progress: Vec<GoalProgress>,
}
