use std::collections::HashSet;

use tracing::{debug, trace, warn};

use crate::core::{
    GoalProgress, GoalTable, Metric, Point, calculate_data_points_with_policy,
};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::frame_builder::build_radar_frame;
use super::validation::validate_radar_config;
use super::{RadarChartConfig, RadarSnapshot};

/// Facade consumed by host screens.
///
/// `RadarChart` owns the chart config, the goal table used for
/// normalization and the metrics of the day, and hands materialized frames
/// to its renderer.
pub struct RadarChart<R: Renderer> {
    renderer: R,
    config: RadarChartConfig,
    goals: GoalTable,
    metrics: Vec<Metric>,
}

impl<R: Renderer> RadarChart<R> {
    /// Creates a chart normalized against the default nutrition goals.
    pub fn new(renderer: R, config: RadarChartConfig) -> ChartResult<Self> {
        let config = validate_radar_config(config)?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            max_radius = config.max_radius,
            "init radar chart"
        );
        Ok(Self {
            renderer,
            config,
            goals: GoalTable::nutrition_defaults(),
            metrics: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_goals(mut self, goals: GoalTable) -> Self {
        self.set_goals(goals);
        self
    }

    #[must_use]
    pub fn config(&self) -> &RadarChartConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RadarChartConfig) -> ChartResult<()> {
        self.config = validate_radar_config(config)?;
        Ok(())
    }

    #[must_use]
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// Replaces the plotted metrics; their order defines the axis order.
    pub fn set_metrics(&mut self, metrics: Vec<Metric>) {
        let mut seen = HashSet::with_capacity(metrics.len());
        for metric in &metrics {
            if !seen.insert(metric.name.trim().to_lowercase()) {
                warn!(metric = %metric.name, "duplicate metric name on radar");
            }
        }
        debug!(count = metrics.len(), "set radar metrics");
        self.metrics = metrics;
    }

    /// Updates the score of a plotted metric, appending it as a new axis
    /// when absent.
    pub fn upsert_metric(&mut self, metric: Metric) {
        let position = self.metrics.iter().position(|existing| {
            existing
                .name
                .trim()
                .eq_ignore_ascii_case(metric.name.trim())
        });
        match position {
            Some(index) => {
                trace!(metric = %metric.name, score = metric.score, "update radar metric");
                self.metrics[index].score = metric.score;
            }
            None => {
                trace!(metric = %metric.name, score = metric.score, "append radar metric");
                self.metrics.push(metric);
            }
        }
    }

    #[must_use]
    pub fn goals(&self) -> &GoalTable {
        &self.goals
    }

    /// Replaces the whole goal table.
    pub fn set_goals(&mut self, goals: GoalTable) {
        debug!(count = goals.len(), "replace radar goals");
        self.goals = goals;
    }

    pub fn set_goal_target(&mut self, name: &str, target: f64) -> ChartResult<()> {
        self.goals.set_target(name, target)
    }

    /// Radar vertices for the current metrics, one per metric in order.
    pub fn data_points(&self) -> ChartResult<Vec<Point>> {
        calculate_data_points_with_policy(
            &self.metrics,
            &self.goals,
            self.config.max_radius,
            self.config.center_x,
            self.config.center_y,
            self.config.over_achievement,
        )
    }

    pub fn progress(&self) -> ChartResult<Vec<GoalProgress>> {
        self.goals.progress(&self.metrics)
    }

    pub fn build_frame(&self) -> ChartResult<RenderFrame> {
        let points = self.data_points()?;
        build_radar_frame(&self.config, &self.metrics, &points)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame()?;
        trace!(
            polygons = frame.polygons.len(),
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "render radar frame"
        );
        self.renderer.render(&frame)
    }

    pub fn snapshot(&self) -> ChartResult<RadarSnapshot> {
        Ok(RadarSnapshot {
            config: self.config,
            metrics: self.metrics.clone(),
            goals: self.goals.targets(),
            points: self.data_points()?,
            progress: self.progress()?,
        })
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
