use mood_chart::core::{
    ChartConfiguration, Color, GridOptions, VALENCE_LINE_TENSION, VALENCE_LINE_WIDTH,
    VALENCE_POINT_RADIUS,
};
use serde_json::json;

fn weekday_config() -> ChartConfiguration {
    let labels = vec!["Mon".to_owned(), "Tue".to_owned(), "Wed".to_owned()];
    ChartConfiguration::mood_line(&labels, &[0.2, 0.5, 0.3])
}

#[test]
fn serializes_to_chart_js_line_options() {
    let value: serde_json::Value =
        serde_json::from_str(&weekday_config().to_json().expect("serialize")).expect("json");

    let expected = json!({
        "type": "line",
        "data": {
            "labels": ["Mon", "Tue", "Wed"],
            "datasets": [
                {
                    "label": "valence",
                    "data": [0.2, 0.5, 0.3],
                    "backgroundColor": "rgba(30, 215, 96, 0.2)",
                    "borderColor": "rgb(30, 215, 96)",
                    "borderWidth": 3,
                    "tension": 0.2,
                    "pointRadius": 3,
                    "pointBorderColor": "rgba(0, 0, 0, 0)",
                    "pointBackgroundColor": "rgba(0, 0, 0, 0)"
                }
            ]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "elements": { "point": { "radius": 3 } },
            "scales": {
                "y": { "grid": { "display": false, "drawBorder": false } },
                "x": { "grid": { "display": false, "drawBorder": false } }
            }
        }
    });

    assert_eq!(value, expected);
}

#[test]
fn visual_constants_are_fixed() {
    let config = weekday_config();
    let dataset = config.primary_dataset().expect("valence dataset");

    assert_eq!(dataset.border_width, VALENCE_LINE_WIDTH);
    assert_eq!(dataset.border_width, 3);
    assert_eq!(dataset.tension, VALENCE_LINE_TENSION);
    assert_eq!(dataset.point_radius, VALENCE_POINT_RADIUS);
    assert_eq!(dataset.point_border_color, Color::TRANSPARENT);
    assert_eq!(dataset.point_background_color, Color::TRANSPARENT);
    assert!(dataset.points_invisible());
    assert_eq!(config.options.elements.point.radius, 3);
    assert!(config.options.responsive);
    assert!(!config.options.maintain_aspect_ratio);
    assert_eq!(config.options.scales.x.grid, GridOptions::HIDDEN);
    assert_eq!(config.options.scales.y.grid, GridOptions::HIDDEN);
}

#[test]
fn pretty_json_parses_back_to_same_configuration() {
    let config = weekday_config();
    let pretty = config.to_json_pretty().expect("pretty json");

    let parsed = ChartConfiguration::from_json_str(&pretty).expect("parse");

    assert_eq!(parsed, config);
}

#[test]
fn rejects_configuration_with_unknown_chart_kind() {
    let json = weekday_config()
        .to_json()
        .expect("serialize")
        .replace("\"line\"", "\"bar\"");

    assert!(ChartConfiguration::from_json_str(&json).is_err());
}

#[test]
fn non_finite_values_serialize_as_gaps() {
    let labels = vec!["a".to_owned(), "b".to_owned()];
    let config = ChartConfiguration::mood_line(&labels, &[0.4, f64::NAN]);

    let value: serde_json::Value =
        serde_json::from_str(&config.to_json().expect("serialize")).expect("json");

    assert_eq!(value["data"]["datasets"][0]["data"], json!([0.4, null]));

    let parsed = ChartConfiguration::from_json_str(&config.to_json().expect("serialize"))
        .expect("gapped configuration parses back");
    let data = &parsed.primary_dataset().expect("dataset").data;
    assert_eq!(data[0], 0.4);
    assert!(data[1].is_nan());
}
