mod chart_config;
mod frame_builder;
mod json_contract;
mod radar_chart;
mod snapshot;
mod validation;

pub use chart_config::{
    DEFAULT_GRID_RINGS, DEFAULT_LABEL_FONT_SIZE_PX, DEFAULT_STROKE_WIDTH, RadarChartConfig,
};
pub use json_contract::{
    RADAR_SNAPSHOT_JSON_SCHEMA_V1, RadarSnapshotJsonContractV1, metrics_from_json_str,
};
pub use radar_chart::RadarChart;
pub use snapshot::RadarSnapshot;
