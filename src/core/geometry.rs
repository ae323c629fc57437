use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::goals::{GoalTable, validate_goal_score};
use crate::core::primitives::{ensure_finite, ensure_non_negative, ensure_positive};
use crate::core::types::{Metric, Point};
use crate::error::{ChartError, ChartResult};

pub const FULL_TURN_DEGREES: f64 = 360.0;

/// Rotates sector 0 from 3 o'clock to 12 o'clock.
const TOP_OFFSET_DEGREES: f64 = -90.0;

/// How achievement ratios above 1.0 map onto the radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverAchievementPolicy {
    /// `ratio > 1` is plotted as `1 / ratio`: over-shooting a goal moves the
    /// vertex back toward the center as far as under-shooting would.
    #[default]
    Invert,
    /// `ratio > 1` saturates at the outer edge.
    Clamp,
}

/// Angle in degrees of sector `index` out of `total_points`, with sector 0
/// pointing straight up.
pub fn sector_angle_degrees(index: usize, total_points: usize) -> ChartResult<f64> {
    if total_points == 0 {
        return Err(ChartError::InvalidSectorCount(total_points));
    }
    if index >= total_points {
        return Err(ChartError::InvalidData(format!(
            "sector index {index} out of range for {total_points} sectors"
        )));
    }
    Ok(index as f64 * (FULL_TURN_DEGREES / total_points as f64) + TOP_OFFSET_DEGREES)
}

/// Maps a radius on sector `index` to chart-local coordinates.
///
/// Screen space grows downward, so sector 0 lands at `(cx, cy - radius)`
/// and sectors advance clockwise.
pub fn polar_to_cartesian(
    radius: f64,
    index: usize,
    total_points: usize,
    center_x: f64,
    center_y: f64,
) -> ChartResult<Point> {
    let angle = sector_angle_degrees(index, total_points)?.to_radians();
    let radius = ensure_non_negative(radius, "radius")?;
    let center_x = ensure_finite(center_x, "center x")?;
    let center_y = ensure_finite(center_y, "center y")?;

    Ok(Point::new(
        center_x + radius * angle.cos(),
        center_y + radius * angle.sin(),
    ))
}

/// Fraction of `goal` reached by `metric`, folded into `[0, 1]` by `policy`.
pub fn achievement_ratio(
    metric: &Metric,
    goal: f64,
    policy: OverAchievementPolicy,
) -> ChartResult<f64> {
    let goal = validate_goal_score(&metric.name, goal)?;
    if !metric.score.is_finite() || metric.score < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "metric `{}` score must be finite and >= 0",
            metric.name
        )));
    }

    let ratio = metric.score / goal;
    if ratio <= 1.0 {
        return Ok(ratio);
    }
    Ok(match policy {
        OverAchievementPolicy::Invert => 1.0 / ratio,
        OverAchievementPolicy::Clamp => 1.0,
    })
}

/// Projects every metric onto its radar vertex, looking goals up by name.
///
/// Returns one point per metric in input order; an empty slice yields an
/// empty vector.
pub fn calculate_data_points(
    metrics: &[Metric],
    goals: &GoalTable,
    max_radius: f64,
    center_x: f64,
    center_y: f64,
) -> ChartResult<Vec<Point>> {
    calculate_data_points_with_policy(
        metrics,
        goals,
        max_radius,
        center_x,
        center_y,
        OverAchievementPolicy::default(),
    )
}

pub fn calculate_data_points_with_policy(
    metrics: &[Metric],
    goals: &GoalTable,
    max_radius: f64,
    center_x: f64,
    center_y: f64,
    policy: OverAchievementPolicy,
) -> ChartResult<Vec<Point>> {
    let denominators = metrics
        .iter()
        .map(|metric| goals.target_for(&metric.name))
        .collect::<ChartResult<Vec<f64>>>()?;
    project(metrics, &denominators, max_radius, center_x, center_y, policy)
}

/// Positional variant: `goals[i]` is the goal of `metrics[i]`.
///
/// Names are not compared; both slices must have the same length.
pub fn calculate_data_points_aligned(
    metrics: &[Metric],
    goals: &[Metric],
    max_radius: f64,
    center_x: f64,
    center_y: f64,
    policy: OverAchievementPolicy,
) -> ChartResult<Vec<Point>> {
    if metrics.len() != goals.len() {
        return Err(ChartError::MetricGoalArityMismatch {
            metrics: metrics.len(),
            goals: goals.len(),
        });
    }
    let denominators = goals
        .iter()
        .map(|goal| validate_goal_score(&goal.name, goal.score))
        .collect::<ChartResult<Vec<f64>>>()?;
    project(metrics, &denominators, max_radius, center_x, center_y, policy)
}

fn project(
    metrics: &[Metric],
    goals: &[f64],
    max_radius: f64,
    center_x: f64,
    center_y: f64,
    policy: OverAchievementPolicy,
) -> ChartResult<Vec<Point>> {
    let max_radius = ensure_positive(max_radius, "max radius")?;
    let total = metrics.len();

    let mut points = Vec::with_capacity(total);
    for (index, (metric, goal)) in metrics.iter().zip(goals).enumerate() {
        let ratio = achievement_ratio(metric, *goal, policy)?;
        trace!(metric = %metric.name, score = metric.score, goal, ratio, "radar ratio");
        points.push(polar_to_cartesian(
            ratio * max_radius,
            index,
            total,
            center_x,
            center_y,
        )?);
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_zero_points_up() {
        assert_eq!(sector_angle_degrees(0, 5).expect("angle"), -90.0);
        assert_eq!(sector_angle_degrees(2, 4).expect("angle"), 90.0);
    }

    #[test]
    fn ratio_at_goal_is_exactly_one() {
        let metric = Metric::new("protein", 130.0);
        let ratio =
            achievement_ratio(&metric, 130.0, OverAchievementPolicy::Invert).expect("ratio");
        assert_eq!(ratio, 1.0);
    }

    #[test]
    fn clamp_policy_saturates() {
        let metric = Metric::new("carbs", 300.0);
        let ratio = achievement_ratio(&metric, 100.0, OverAchievementPolicy::Clamp).expect("ratio");
        assert_eq!(ratio, 1.0);
    }

    #[test]
    fn negative_score_is_rejected_with_metric_name() {
        let goals = GoalTable::nutrition_defaults();
        let err = calculate_data_points(&[Metric::new("sugar", -1.0)], &goals, 10.0, 0.0, 0.0)
            .expect_err("negative score");
        assert!(err.to_string().contains("sugar"), "{err}");
    }
}
