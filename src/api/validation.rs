use crate::error::{ChartError, ChartResult};

use super::RadarChartConfig;

/// Upper bound on guide rings; more than this is unreadable at any size.
const MAX_GRID_RINGS: usize = 20;

pub(super) fn validate_radar_config(config: RadarChartConfig) -> ChartResult<RadarChartConfig> {
    if !config.viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }
    if !config.center_x.is_finite() || !config.center_y.is_finite() {
        return Err(ChartError::InvalidData(
            "radar center must be finite".to_owned(),
        ));
    }
    if !config.max_radius.is_finite() || config.max_radius <= 0.0 {
        return Err(ChartError::InvalidData(
            "radar max radius must be finite and > 0".to_owned(),
        ));
    }
    if let Some(stroke_width) = config.stroke_width {
        if !stroke_width.is_finite() || stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "radar stroke width must be finite and > 0".to_owned(),
            ));
        }
    }
    if config.grid_rings > MAX_GRID_RINGS {
        return Err(ChartError::InvalidData(format!(
            "radar grid rings must be <= {MAX_GRID_RINGS}"
        )));
    }
    if !config.label_font_size_px.is_finite() || config.label_font_size_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "radar label font size must be finite and > 0".to_owned(),
        ));
    }

    for color in [
        config.stroke_color,
        config.fill_color,
        config.grid_color,
        config.label_color,
    ] {
        color.validate()?;
    }

    Ok(config)
}
