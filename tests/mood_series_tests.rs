use chrono::NaiveDate;
use mood_chart::api::{DEFAULT_PERIOD_PADDING, MoodPeriod, MoodSeries, period_surface_id};
use mood_chart::error::ChartError;

fn numbered_series(len: usize) -> MoodSeries {
    let labels = (0..len).map(|i| format!("d{i}")).collect();
    let values = (0..len).map(|i| i as f64 / 10.0).collect();
    MoodSeries::new(labels, values).expect("aligned series")
}

#[test]
fn rejects_misaligned_series() {
    let err = MoodSeries::new(vec!["a".to_owned()], vec![]).expect_err("misaligned");

    assert!(matches!(
        err,
        ChartError::LengthMismatch {
            labels: 1,
            values: 0
        }
    ));
}

#[test]
fn dated_samples_are_labelled_by_iso_date() {
    let jan = |day| NaiveDate::from_ymd_opt(2024, 1, day).expect("valid date");
    let series = MoodSeries::from_dated([(jan(1), 0.3), (jan(2), 0.7)]);

    assert_eq!(series.labels(), ["2024-01-01", "2024-01-02"]);
    assert_eq!(series.values(), [0.3, 0.7]);
}

#[test]
fn skip_warmup_drops_leading_samples() {
    let series = numbered_series(5);

    let trimmed = series.skip_warmup(2);

    assert_eq!(trimmed.labels(), ["d2", "d3", "d4"]);
    assert_eq!(trimmed.len(), 3);
    assert!(series.skip_warmup(60).is_empty());
}

#[test]
fn period_requests_pad_and_number_windows() {
    let series = numbered_series(30);
    let periods = [MoodPeriod::new(10, 15), MoodPeriod::new(20, 22)];

    let requests = series.period_requests(&periods, DEFAULT_PERIOD_PADDING);

    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].surface_id, "lineChart-1");
    assert_eq!(requests[0].labels.first().map(String::as_str), Some("d7"));
    assert_eq!(requests[0].labels.last().map(String::as_str), Some("d17"));
    assert_eq!(requests[0].values.len(), 11);
    assert_eq!(requests[1].surface_id, period_surface_id(2));
    assert_eq!(requests[1].labels.len(), 8);
    assert!(requests.iter().all(|request| request.is_aligned()));
}

#[test]
fn period_windows_clamp_at_series_edges() {
    let series = numbered_series(6);
    let periods = [MoodPeriod::new(1, 5)];

    let requests = series.period_requests(&periods, 3);

    assert_eq!(requests[0].labels, vec!["d0", "d1", "d2", "d3", "d4", "d5"]);
}

#[test]
fn inverted_window_is_empty() {
    let series = numbered_series(10);

    assert!(series.window(8, 4).is_empty());
}

#[test]
fn to_request_targets_given_surface() {
    let request = numbered_series(3).to_request("chart1");

    assert_eq!(request.surface_id, "chart1");
    assert_eq!(request.values, vec![0.0, 0.1, 0.2]);
}

#[test]
fn deserializing_misaligned_series_fails() {
    let result = serde_json::from_str::<MoodSeries>(r#"{"labels":["a"],"values":[0.1,0.2,0.3]}"#);

    assert!(result.is_err());
}

#[test]
fn deserialized_series_keeps_null_gaps() {
    let series: MoodSeries =
        serde_json::from_str(r#"{"labels":["a","b","c"],"values":[null,0.2,0.3]}"#)
            .expect("aligned series");

    let trimmed = series.skip_warmup(0);

    assert_eq!(trimmed.len(), 3);
    assert!(trimmed.values()[0].is_nan());
}
