use approx::assert_relative_eq;
use chart_data::api::{Axis, ChartType, StackMode};
use chart_data::core::XDomain;
use chart_data::{DataConfig, PersistedState, UiState, VisData};
use chrono::{TimeZone, Utc};
use serde_json::{Value, json};

/// Date histogram whose first and last buckets fall outside the ordered
/// range and carry the most extreme values.
fn date_series() -> Value {
    json!({
        "label": "",
        "ordered": { "date": true, "min": 1000, "max": 5000, "interval": 1000 },
        "series": [{
            "label": "Count",
            "values": [
                { "x": 0, "y": 99 },
                { "x": 1000, "y": 12 },
                { "x": 2000, "y": 4 },
                { "x": 3000, "y": 41 },
                { "x": 4000, "y": 18 },
                { "x": 5000, "y": 7 },
                { "x": 6000, "y": -50 }
            ]
        }]
    })
}

fn date_series_neg() -> Value {
    json!({
        "label": "",
        "ordered": { "date": true, "min": 1000, "max": 5000, "interval": 1000 },
        "series": [{
            "label": "Count",
            "values": [
                { "x": 0, "y": -200 },
                { "x": 1000, "y": -12 },
                { "x": 2000, "y": -4 },
                { "x": 3000, "y": -41 },
                { "x": 4000, "y": -18 },
                { "x": 5000, "y": -7 },
                { "x": 6000, "y": 5 }
            ]
        }]
    })
}

fn stacked_rows() -> Value {
    json!({
        "ordered": { "date": true, "min": 1000, "max": 3000, "interval": 1000 },
        "rows": [{
            "label": "stacked",
            "series": [
                {
                    "label": "200",
                    "values": [
                        { "x": 1000, "y": 10 },
                        { "x": 2000, "y": 5 },
                        { "x": 3000, "y": 40 },
                        { "x": 4000, "y": 500 }
                    ]
                },
                {
                    "label": "404",
                    "values": [
                        { "x": 0, "y": 1 },
                        { "x": 1000, "y": 5 },
                        { "x": 2000, "y": 20 },
                        { "x": 3000, "y": 75 }
                    ]
                }
            ]
        }]
    })
}

fn histogram() -> DataConfig {
    DataConfig::new().with_chart_type(ChartType::Histogram)
}

fn build(value: Value, config: DataConfig) -> VisData {
    let mut state = PersistedState::new();
    VisData::from_value(value, config, &mut state).expect("build data")
}

#[test]
fn y_min_ignores_points_outside_ordered_range() {
    assert_eq!(build(date_series(), DataConfig::default()).y_min(), Some(4.0));
    assert_eq!(build(date_series_neg(), DataConfig::default()).y_min(), Some(-41.0));
    assert_eq!(build(stacked_rows(), histogram()).y_min(), Some(15.0));
}

#[test]
fn y_max_ignores_points_outside_ordered_range() {
    assert_eq!(build(date_series(), DataConfig::default()).y_max(), Some(41.0));
    assert_eq!(build(date_series_neg(), DataConfig::default()).y_max(), Some(-4.0));
    assert_eq!(build(stacked_rows(), histogram()).y_max(), Some(115.0));
}

#[test]
fn value_getter_scales_extents() {
    let data = build(date_series(), DataConfig::default());
    let multiplier = 13.2;

    let real_min = data.y_min().expect("min");
    let real_max = data.y_max().expect("max");
    assert_eq!(
        data.y_min_by(|point| point.y.map(|y| y * multiplier)),
        Some(real_min * multiplier)
    );
    assert_eq!(
        data.y_max_by(|point| point.y.map(|y| y * multiplier)),
        Some(real_max * multiplier)
    );
}

#[test]
fn stacked_getter_sees_baselines() {
    let data = build(stacked_rows(), histogram());
    assert!(data.should_be_stacked());

    assert_eq!(data.y_max_by(|point| point.y), Some(115.0));

    // Only the bottom series sits on a zero baseline.
    let bottom = |point: &chart_data::core::StackedPoint| point.y.filter(|_| point.y0 == 0.0);
    assert_eq!(data.y_min_by(bottom), Some(5.0));
    assert_eq!(data.y_max_by(bottom), Some(40.0));
}

#[test]
fn grouped_histogram_is_not_stacked() {
    let data = build(stacked_rows(), histogram().with_mode(StackMode::Grouped));
    assert!(!data.should_be_stacked());
    assert_eq!(data.y_min(), Some(5.0));
    assert_eq!(data.y_max(), Some(75.0));
}

#[test]
fn stacking_changes_extents_for_opposite_signs() {
    let payload = json!({
        "rows": [{
            "label": "signs",
            "series": [
                { "label": "up", "values": [{ "x": 1, "y": 10 }, { "x": 2, "y": 3 }] },
                { "label": "down", "values": [{ "x": 1, "y": -4 }, { "x": 2, "y": -8 }] }
            ]
        }]
    });

    let flat = build(payload.clone(), DataConfig::default());
    let stacked = build(payload, histogram());

    assert_eq!(flat.y_min(), Some(-8.0));
    assert_eq!(flat.y_max(), Some(10.0));
    assert_eq!(stacked.y_min(), Some(-5.0));
    assert_eq!(stacked.y_max(), Some(6.0));
    assert_ne!(flat.y_min(), stacked.y_min());
    assert_ne!(flat.y_max(), stacked.y_max());
}

#[test]
fn stacked_totals_stay_within_each_chart() {
    let payload = json!({
        "rows": [
            { "label": "a", "series": [{ "label": "s", "values": [{ "x": 1, "y": 4 }] }] },
            { "label": "b", "series": [{ "label": "s", "values": [{ "x": 1, "y": 7 }] }] }
        ]
    });

    let data = build(payload, histogram());
    assert_eq!(data.y_min(), Some(4.0));
    assert_eq!(data.y_max(), Some(7.0));
}

#[test]
fn area_charts_stack_unless_overlapping() {
    let area = DataConfig::new().with_chart_type(ChartType::Area);
    assert_eq!(build(stacked_rows(), area.clone()).y_max(), Some(115.0));
    assert_eq!(
        build(stacked_rows(), area.with_mode(StackMode::Overlap)).y_max(),
        Some(75.0)
    );
}

#[test]
fn percentage_mode_pins_domain() {
    let data = build(stacked_rows(), histogram().with_mode(StackMode::Percentage));
    assert_eq!(data.y_min(), Some(0.0));
    assert_eq!(data.y_max(), Some(1.0));
}

#[test]
fn percentage_mode_without_points_yields_none() {
    let percentage = histogram().with_mode(StackMode::Percentage);
    let outside = build(
        json!({
            "ordered": { "date": true, "min": 10000, "max": 20000 },
            "series": [{ "label": "s", "values": [{ "x": 1, "y": 1 }] }]
        }),
        percentage.clone(),
    );
    assert_eq!(outside.y_min(), None);
    assert_eq!(outside.y_max(), None);

    let pie = build(
        json!({ "slices": { "children": [{ "name": "a", "size": 3 }] } }),
        percentage,
    );
    assert_eq!(pie.y_min(), None);
    assert_eq!(pie.y_max(), None);
}

#[test]
fn empty_domain_yields_none() {
    let data = build(
        json!({
            "ordered": { "date": true, "min": 10000, "max": 20000 },
            "series": [{ "label": "s", "values": [{ "x": 1, "y": 1 }, { "x": 2, "y": 3 }] }]
        }),
        DataConfig::default(),
    );
    assert_eq!(data.y_min(), None);
    assert_eq!(data.y_max(), None);
    assert_eq!(data.y_max_by(|point| point.y), None);
}

#[test]
fn null_and_nan_values_are_skipped() {
    let data = build(
        json!({
            "series": [{
                "label": "s",
                "values": [{ "x": 1, "y": null }, { "x": 2, "y": 30 }, { "x": 3, "y": 18 }]
            }]
        }),
        DataConfig::default(),
    );
    assert_eq!(data.y_min(), Some(18.0));
    assert_eq!(
        data.y_max_by(|point| point.y.map(|y| if y > 20.0 { f64::NAN } else { y })),
        Some(18.0)
    );
}

#[test]
fn ui_state_hint_overrides_ordered_range() {
    let mut state = PersistedState::new();
    state.set_axis_hint(Axis::X, XDomain::new(3000.0, 4000.0).expect("domain"));

    let data =
        VisData::from_value(date_series(), DataConfig::default(), &mut state).expect("build data");
    assert_eq!(data.y_min(), Some(18.0));
    assert_eq!(data.y_max(), Some(41.0));
    assert_eq!(
        state.axis_hint(Axis::X),
        Some(XDomain::new(3000.0, 4000.0).expect("domain"))
    );
}

#[test]
fn ordered_range_is_written_back_to_ui_state() {
    let mut state = PersistedState::new();
    let data =
        VisData::from_value(date_series(), DataConfig::default(), &mut state).expect("build data");

    let expected = XDomain::new(1000.0, 5000.0).expect("domain");
    assert_eq!(data.x_domain(), Some(expected));
    assert_eq!(state.axis_hint(Axis::X), Some(expected));
    assert_eq!(state.axis_hint(Axis::Y), None);
}

#[test]
fn date_bounds_map_to_epoch_millis() {
    let start = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 2).unwrap();
    let end = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 4).unwrap();
    let domain = XDomain::from_dates(end, start).expect("domain");

    assert_relative_eq!(domain.min(), 2000.0);
    assert_relative_eq!(domain.max(), 4000.0);

    let mut state = PersistedState::new();
    state.set_axis_hint(Axis::X, domain);
    let data =
        VisData::from_value(date_series(), DataConfig::default(), &mut state).expect("build data");
    assert_eq!(data.y_min(), Some(4.0));
    assert_eq!(data.y_max(), Some(41.0));
}
