use serde::{Deserialize, Serialize};

use crate::core::{OverAchievementPolicy, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;
pub const DEFAULT_GRID_RINGS: usize = 4;
pub const DEFAULT_LABEL_FONT_SIZE_PX: f64 = 12.0;

/// Share of the half-viewport used by the outer ring; the rest is left for
/// axis labels.
const DEFAULT_RADIUS_FILL_RATIO: f64 = 0.8;

/// Public radar bootstrap configuration.
///
/// Serializable so hosts can persist chart setup next to user preferences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarChartConfig {
    pub viewport: Viewport,
    pub max_radius: f64,
    pub center_x: f64,
    pub center_y: f64,
    #[serde(default = "default_stroke_color")]
    pub stroke_color: Color,
    #[serde(default = "default_fill_color")]
    pub fill_color: Color,
    #[serde(default)]
    pub stroke_width: Option<f64>,
    #[serde(default = "default_grid_rings")]
    pub grid_rings: usize,
    #[serde(default = "default_grid_color")]
    pub grid_color: Color,
    #[serde(default = "default_true")]
    pub show_axes: bool,
    #[serde(default = "default_true")]
    pub show_labels: bool,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
    #[serde(default)]
    pub over_achievement: OverAchievementPolicy,
}

impl RadarChartConfig {
    /// Centers the radar in `viewport` and sizes it to leave a label margin.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        let (center_x, center_y) = viewport.center();
        let max_radius = center_x.min(center_y) * DEFAULT_RADIUS_FILL_RATIO;
        Self {
            viewport,
            max_radius,
            center_x,
            center_y,
            stroke_color: default_stroke_color(),
            fill_color: default_fill_color(),
            stroke_width: None,
            grid_rings: default_grid_rings(),
            grid_color: default_grid_color(),
            show_axes: true,
            show_labels: true,
            label_font_size_px: default_label_font_size_px(),
            label_color: default_label_color(),
            over_achievement: OverAchievementPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_center(mut self, center_x: f64, center_y: f64) -> Self {
        self.center_x = center_x;
        self.center_y = center_y;
        self
    }

    #[must_use]
    pub fn with_max_radius(mut self, max_radius: f64) -> Self {
        self.max_radius = max_radius;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, stroke_color: Color, fill_color: Color) -> Self {
        self.stroke_color = stroke_color;
        self.fill_color = fill_color;
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = Some(stroke_width);
        self
    }

    /// Number of concentric guide polygons; `0` disables the grid.
    #[must_use]
    pub fn with_grid_rings(mut self, grid_rings: usize) -> Self {
        self.grid_rings = grid_rings;
        self
    }

    #[must_use]
    pub fn with_axes(mut self, show_axes: bool) -> Self {
        self.show_axes = show_axes;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }

    #[must_use]
    pub fn with_over_achievement(mut self, policy: OverAchievementPolicy) -> Self {
        self.over_achievement = policy;
        self
    }

    #[must_use]
    pub fn effective_stroke_width(&self) -> f64 {
        self.stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize radar config: {e}")))
    }

    /// Parses and validates a config document.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse radar config: {e}")))?;
        super::validation::validate_radar_config(config)
    }
}

fn default_stroke_color() -> Color {
    Color::rgb(0.086, 0.639, 0.290)
}

fn default_fill_color() -> Color {
    Color::rgba(0.133, 0.773, 0.369, 0.35)
}

fn default_grid_rings() -> usize {
    DEFAULT_GRID_RINGS
}

fn default_grid_color() -> Color {
    Color::rgb(0.898, 0.906, 0.922)
}

fn default_true() -> bool {
    true
}

fn default_label_font_size_px() -> f64 {
    DEFAULT_LABEL_FONT_SIZE_PX
}

fn default_label_color() -> Color {
    Color::rgb(0.420, 0.447, 0.502)
}
