use nutri_radar::api::{
    RADAR_SNAPSHOT_JSON_SCHEMA_V1, RadarChart, RadarChartConfig, RadarSnapshot,
    metrics_from_json_str,
};
use nutri_radar::core::{GoalTable, Metric, OverAchievementPolicy, Viewport};
use nutri_radar::render::{NullRenderer, SvgRenderer, TextHAlign};
use nutri_radar::ChartError;

fn daily_metrics() -> Vec<Metric> {
    vec![
        Metric::new("calories", 1650.0),
        Metric::new("protein", 85.0),
        Metric::new("carbs", 180.0),
        Metric::new("fats", 45.0),
        Metric::new("sugar", 35.0),
        Metric::new("fiber", 18.0),
        Metric::new("satiety", 72.0),
    ]
}

#[test]
fn radar_smoke_flow() {
    let config = RadarChartConfig::new(Viewport::new(400, 400));
    let mut chart = RadarChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_metrics(daily_metrics());

    chart.render().expect("render");
    let renderer = chart.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    // four guide rings plus the data polygon
    assert_eq!(renderer.last_polygon_count, 5);
    assert_eq!(renderer.last_line_count, 7);
    assert_eq!(renderer.last_text_count, 7);

    let points = chart.data_points().expect("points");
    assert_eq!(points.len(), 7);
    let (cx, cy) = (200.0, 200.0);
    for point in &points {
        assert!((point.x - cx).hypot(point.y - cy) <= 160.0 + 1e-9);
    }
}

#[test]
fn first_axis_label_is_centered_above_the_chart() {
    let config = RadarChartConfig::new(Viewport::new(400, 400));
    let mut chart = RadarChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_metrics(daily_metrics());

    let frame = chart.build_frame().expect("frame");
    let label = &frame.texts[0];
    assert_eq!(label.text, "calories");
    assert_eq!(label.h_align, TextHAlign::Center);
    assert!(label.y < 200.0 - 160.0);
    assert_eq!(frame.texts[1].h_align, TextHAlign::Left);
    assert_eq!(frame.texts[6].h_align, TextHAlign::Right);
}

#[test]
fn fewer_than_three_metrics_draw_spokes_instead_of_a_polygon() {
    let config = RadarChartConfig::new(Viewport::new(200, 200)).with_axes(false);
    let mut chart = RadarChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_metrics(vec![
        Metric::new("calories", 1000.0),
        Metric::new("protein", 65.0),
    ]);

    let frame = chart.build_frame().expect("frame");
    assert!(frame.polygons.is_empty());
    assert_eq!(frame.lines.len(), 2);
    chart.render().expect("render");
}

#[test]
fn empty_chart_renders_an_empty_frame() {
    let config = RadarChartConfig::new(Viewport::new(200, 200));
    let mut chart = RadarChart::new(NullRenderer::default(), config).expect("chart init");
    assert!(chart.build_frame().expect("frame").is_empty());
    chart.render().expect("render");
}

#[test]
fn render_surfaces_goal_errors() {
    let config = RadarChartConfig::new(Viewport::new(200, 200));
    let mut chart = RadarChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_metrics(daily_metrics());
    chart.set_goal_target("fats", 0.0).expect("edit goal");

    assert!(matches!(
        chart.render(),
        Err(ChartError::InvalidGoalScore { .. })
    ));
    assert_eq!(chart.renderer().frames_rendered, 0);
}

#[test]
fn replacing_goals_changes_normalization() {
    let config = RadarChartConfig::new(Viewport::new(200, 200))
        .with_center(0.0, 0.0)
        .with_max_radius(100.0);
    let goals = GoalTable::from_metrics(vec![Metric::new("protein", 170.0)]).expect("goals");
    let mut chart = RadarChart::new(NullRenderer::default(), config)
        .expect("chart init")
        .with_goals(goals);
    chart.upsert_metric(Metric::new("protein", 85.0));

    let points = chart.data_points().expect("points");
    assert!((points[0].y + 50.0).abs() <= 1e-9);

    chart.upsert_metric(Metric::new("Protein", 170.0));
    assert_eq!(chart.metrics().len(), 1);
    let points = chart.data_points().expect("points");
    assert!((points[0].y + 100.0).abs() <= 1e-9);
}

#[test]
fn config_policy_flows_into_the_chart() {
    let config = RadarChartConfig::new(Viewport::new(200, 200))
        .with_center(0.0, 0.0)
        .with_max_radius(100.0)
        .with_over_achievement(OverAchievementPolicy::Clamp);
    let mut chart = RadarChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_metrics(vec![Metric::new("sugar", 60.0)]);

    let points = chart.data_points().expect("points");
    assert!((points[0].y + 100.0).abs() <= 1e-9);
}

#[test]
fn invalid_config_is_rejected_at_init() {
    let config = RadarChartConfig::new(Viewport::new(200, 200)).with_stroke_width(0.0);
    assert!(RadarChart::new(NullRenderer::default(), config).is_err());
}

#[test]
fn svg_renderer_emits_polygons_spokes_and_labels() {
    let config = RadarChartConfig::new(Viewport::new(320, 240));
    let mut chart = RadarChart::new(SvgRenderer::new(), config).expect("chart init");
    chart.set_metrics(daily_metrics());
    chart.render().expect("render");

    let svg = chart.into_renderer().into_document();
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<polygon").count(), 5);
    assert_eq!(svg.matches("<line").count(), 7);
    assert_eq!(svg.matches("<text").count(), 7);
    assert!(svg.contains(">satiety</text>"));
    assert!(svg.contains("fill-opacity"));
}

#[test]
fn config_json_fills_defaults() {
    let json = r#"{
        "viewport": { "width": 300, "height": 300 },
        "max_radius": 100.0,
        "center_x": 150.0,
        "center_y": 150.0,
        "over_achievement": "clamp"
    }"#;
    let config = RadarChartConfig::from_json_str(json).expect("config");
    assert_eq!(config.grid_rings, 4);
    assert!(config.show_labels);
    assert_eq!(config.effective_stroke_width(), 2.0);
    assert_eq!(config.over_achievement, OverAchievementPolicy::Clamp);

    let bad = json.replace("100.0", "-1.0");
    assert!(RadarChartConfig::from_json_str(&bad).is_err());
}

#[test]
fn snapshot_json_contract_round_trip() {
    let config = RadarChartConfig::new(Viewport::new(400, 400));
    let mut chart = RadarChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_metrics(daily_metrics());
    let snapshot = chart.snapshot().expect("snapshot");

    let json = snapshot.to_json_contract_v1_pretty().expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("value");
    assert_eq!(value["schema_version"], RADAR_SNAPSHOT_JSON_SCHEMA_V1);

    let restored = RadarSnapshot::from_json_compat_str(&json).expect("contract parse");
    assert_eq!(restored.metrics, snapshot.metrics);
    assert_eq!(restored.goals.len(), 7);
    assert_eq!(restored.points.len(), snapshot.points.len());
    for (lhs, rhs) in restored.points.iter().zip(&snapshot.points) {
        assert!((lhs.x - rhs.x).abs() <= 1e-9);
        assert!((lhs.y - rhs.y).abs() <= 1e-9);
    }

    let bare = snapshot.to_json_pretty().expect("bare json");
    let restored = RadarSnapshot::from_json_compat_str(&bare).expect("bare parse");
    assert_eq!(restored.progress.len(), 7);
}

#[test]
fn snapshot_rejects_unknown_schema_version() {
    let config = RadarChartConfig::new(Viewport::new(100, 100));
    let chart = RadarChart::new(NullRenderer::default(), config).expect("chart init");
    let json = chart
        .snapshot()
        .expect("snapshot")
        .to_json_contract_v1_pretty()
        .expect("json")
        .replace("\"schema_version\": 1", "\"schema_version\": 9");
    assert!(RadarSnapshot::from_json_compat_str(&json).is_err());
}

#[test]
fn metrics_parse_from_list_and_keyed_documents() {
    let list = r#"[{"metric_name":"calories","metric_score":1200},{"metric_name":"protein","metric_score":90}]"#;
    let metrics = metrics_from_json_str(list).expect("list");
    assert_eq!(metrics[1], Metric::new("protein", 90.0));

    let keyed = r#"{
        "satiety": {"metric_name":"satiety","metric_score":70},
        "calories": {"metric_name":"calories","metric_score":1200}
    }"#;
    let metrics = metrics_from_json_str(keyed).expect("keyed");
    let names: Vec<&str> = metrics.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["satiety", "calories"]);

    assert!(metrics_from_json_str("42").is_err());
}
