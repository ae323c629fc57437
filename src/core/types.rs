use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::ChartResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Geometric center of the viewport in pixel space.
    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// One chart-local vertex produced by the geometry engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Named scalar measurement.
///
/// For plotted metrics `score` is the achieved value of the day; for goal
/// lists it is the target. Serialized with the client field names
/// (`metric_name` / `metric_score`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    #[serde(rename = "metric_name", alias = "name")]
    pub name: String,
    #[serde(rename = "metric_score", alias = "score")]
    pub score: f64,
}

impl Metric {
    #[must_use]
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// Builds a metric from an exact decimal value reported by the backend.
    pub fn from_decimal(name: impl Into<String>, score: Decimal) -> ChartResult<Self> {
        let name = name.into();
        let score = decimal_to_f64(score, &name)?;
        Ok(Self { name, score })
    }
}
