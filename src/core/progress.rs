use serde::{Deserialize, Serialize};

use crate::core::goals::{GoalTable, validate_goal_score};
use crate::core::primitives::ensure_finite;
use crate::core::types::Metric;
use crate::error::ChartResult;

pub const MAX_PROGRESS_PERCENTAGE: f64 = 100.0;

/// Coarse progress classification shown next to each goal bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBand {
    OnTrack,
    Partial,
    Behind,
}

impl ProgressBand {
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            Self::OnTrack
        } else if percentage >= 50.0 {
            Self::Partial
        } else {
            Self::Behind
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub name: String,
    pub current: f64,
    pub target: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub percentage: f64,
    pub band: ProgressBand,
}

/// Share of `target` reached by `current`, in percent, capped at 100.
///
/// Unlike the radar ratio, over-achievement saturates here.
pub fn progress_percentage(name: &str, current: f64, target: f64) -> ChartResult<f64> {
    let target = validate_goal_score(name, target)?;
    let current = ensure_finite(current, "current value")?;
    Ok((current / target * 100.0).min(MAX_PROGRESS_PERCENTAGE))
}

impl GoalTable {
    /// Progress of each metric against its goal, in metric order.
    pub fn progress(&self, metrics: &[Metric]) -> ChartResult<Vec<GoalProgress>> {
        metrics
            .iter()
            .map(|metric| {
                let target = self.target_for(&metric.name)?;
                let percentage = progress_percentage(&metric.name, metric.score, target)?;
                let unit = self.get(&metric.name).and_then(|goal| goal.unit.clone());
                Ok(GoalProgress {
                    name: metric.name.clone(),
                    current: metric.score,
                    target,
                    unit,
                    percentage,
                    band: ProgressBand::from_percentage(percentage),
                })
            })
            .collect()
    }
}
