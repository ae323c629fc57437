use crate::core::{Metric, Point, polar_to_cartesian};
use crate::error::ChartResult;
use crate::render::{
    Color, LinePrimitive, PolygonPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::RadarChartConfig;

const GRID_STROKE_WIDTH: f64 = 1.0;

/// Horizontal distance from the center under which a label is centered.
const LABEL_CENTER_TOLERANCE_PX: f64 = 1.0;

/// Materializes one radar draw pass.
///
/// Layer order: guide rings, axis spokes, axis labels, then the data shape.
/// With fewer than three metrics there is no area to fill, so the data is
/// drawn as spokes from the center to each point.
pub(super) fn build_radar_frame(
    config: &RadarChartConfig,
    metrics: &[Metric],
    points: &[Point],
) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(config.viewport);
    let total = metrics.len();
    if total == 0 {
        return Ok(frame);
    }

    let center = Point::new(config.center_x, config.center_y);
    let outer = (0..total)
        .map(|index| {
            polar_to_cartesian(config.max_radius, index, total, center.x, center.y)
        })
        .collect::<ChartResult<Vec<Point>>>()?;

    if total >= PolygonPrimitive::MIN_VERTICES {
        for ring in 1..=config.grid_rings {
            let radius = config.max_radius * ring as f64 / config.grid_rings as f64;
            let vertices = (0..total)
                .map(|index| polar_to_cartesian(radius, index, total, center.x, center.y))
                .collect::<ChartResult<Vec<Point>>>()?;
            frame.polygons.push(PolygonPrimitive::new(
                vertices,
                GRID_STROKE_WIDTH,
                config.grid_color,
                Color::TRANSPARENT,
            ));
        }
    }

    if config.show_axes {
        for vertex in &outer {
            frame.lines.push(LinePrimitive::between(
                center,
                *vertex,
                GRID_STROKE_WIDTH,
                config.grid_color,
            ));
        }
    }

    if config.show_labels {
        let label_radius = config.max_radius + config.label_font_size_px;
        for (index, metric) in metrics.iter().enumerate() {
            if metric.name.is_empty() {
                continue;
            }
            let anchor = polar_to_cartesian(label_radius, index, total, center.x, center.y)?;
            frame.texts.push(TextPrimitive::new(
                metric.name.clone(),
                anchor.x,
                anchor.y,
                config.label_font_size_px,
                config.label_color,
                label_alignment(anchor.x, center.x),
            ));
        }
    }

    let stroke_width = config.effective_stroke_width();
    if points.len() >= PolygonPrimitive::MIN_VERTICES {
        frame.polygons.push(PolygonPrimitive::new(
            points.to_vec(),
            stroke_width,
            config.stroke_color,
            config.fill_color,
        ));
    } else {
        for point in points {
            frame.lines.push(LinePrimitive::between(
                center,
                *point,
                stroke_width,
                config.stroke_color,
            ));
        }
    }

    Ok(frame)
}

fn label_alignment(x: f64, center_x: f64) -> TextHAlign {
    if x > center_x + LABEL_CENTER_TOLERANCE_PX {
        TextHAlign::Left
    } else if x < center_x - LABEL_CENTER_TOLERANCE_PX {
        TextHAlign::Right
    } else {
        TextHAlign::Center
    }
}
