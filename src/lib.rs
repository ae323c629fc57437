//! nutri-radar: radar-chart geometry for nutrition goal tracking.
//!
//! The crate maps named nutrition metrics and the user's goals onto the
//! vertices of a regular polygon, and materializes a backend-agnostic
//! frame that hosts can draw (or export as SVG).

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{RadarChart, RadarChartConfig};
pub use error::{ChartError, ChartResult};
