// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::{
    AutoScrollingMode, AxisConfig, AxisInputs, AxisState, CategoryArrangement, CategoryValue,
    DoubleRange, EdgeLabelsVisibility, LabelPlacement, RangePadding, ScaleKind, SeriesData,
    get_log_value, get_pow_value, nice_interval, recompute,
};

fn plot() -> AxisInputs {
    AxisInputs::new(Rect::new(0.0, 0.0, 400.0, 300.0))
}

fn with_range(start: f64, end: f64) -> AxisInputs {
    plot().with_series(SeriesData::Range(DoubleRange::new(start, end)))
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() <= 1e-9 * b.abs().max(1.0), "{a} != {b}");
}

fn assert_strictly_increasing(values: &[f64]) {
    for pair in values.windows(2) {
        assert!(pair[0] < pair[1], "not increasing: {values:?}");
    }
}

fn label_positions(state: &AxisState) -> Vec<f64> {
    state.visible_labels().iter().map(|l| l.position()).collect()
}

#[test]
fn round_padding_on_a_400px_axis() {
    let config = AxisConfig::default().with_range_padding(RangePadding::Round);
    let state = recompute(&config, &with_range(0.0, 97.0));
    assert_eq!(state.actual_interval(), 20.0);
    assert_eq!(state.actual_range(), DoubleRange::new(0.0, 100.0));
    assert_eq!(
        label_positions(&state),
        vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]
    );
}

#[test]
fn category_values_across_two_series() {
    let inputs = plot()
        .with_series(SeriesData::categories(["A", "B", "A"]))
        .with_series(SeriesData::categories(["C"]));
    let state = recompute(&AxisConfig::horizontal(ScaleKind::Category), &inputs);
    let index = state.category_index().expect("category axis has an index");
    assert_eq!(
        index.distinct_values(),
        &[
            CategoryValue::from("A"),
            CategoryValue::from("B"),
            CategoryValue::from("C"),
        ]
    );
    assert_eq!(index.series_indexes(0), Some(&[0, 1, 0][..]));
}

#[test]
fn log_axis_ticks_on_powers_of_ten() {
    let config = AxisConfig::horizontal(ScaleKind::Log { base: 10.0 });
    let state = recompute(&config, &with_range(1.0, 1000.0));
    assert_eq!(state.visible_log_range(), Some(DoubleRange::new(0.0, 3.0)));
    let ticks = state.tick_positions();
    assert_eq!(ticks.len(), 4);
    for (tick, expected) in ticks.iter().zip([1.0, 10.0, 100.0, 1000.0]) {
        assert_close(*tick, expected);
    }
    let text: Vec<&str> = state
        .visible_labels()
        .iter()
        .map(|l| l.content.as_str())
        .collect();
    assert_eq!(text, vec!["1", "10", "100", "1000"]);
}

#[test]
fn log_axis_clamps_non_positive_data() {
    let config = AxisConfig::horizontal(ScaleKind::Log { base: 10.0 });
    let state = recompute(&config, &with_range(-5.0, 100.0));
    assert_eq!(state.visible_log_range(), Some(DoubleRange::new(0.0, 2.0)));
    assert_eq!(state.value_to_coefficient(-5.0), 0.0);
    assert_close(state.value_to_coefficient(10.0), 0.5);
}

#[test]
fn half_zoom_from_a_quarter() {
    let config = AxisConfig::default().with_zoom(0.5, 0.25);
    let state = recompute(&config, &with_range(0.0, 100.0));
    assert_eq!(state.actual_range(), DoubleRange::new(0.0, 100.0));
    assert_eq!(state.visible_range(), DoubleRange::new(25.0, 75.0));
}

#[test]
fn degenerate_range_is_repaired() {
    let state = recompute(&AxisConfig::default(), &with_range(5.0, 5.0));
    assert_eq!(state.actual_range(), DoubleRange::new(5.0, 6.0));
    assert!(state.actual_interval().is_finite());
    assert!(state.actual_interval() > 0.0);
    assert!(!state.tick_positions().is_empty());
}

#[test]
fn mapping_round_trips() {
    for inversed in [false, true] {
        for config in [
            AxisConfig::horizontal(ScaleKind::Linear),
            AxisConfig::vertical(ScaleKind::Linear),
        ] {
            let config = config.with_inversed(inversed).with_zoom(0.4, 0.3);
            let state = recompute(&config, &with_range(-37.0, 1234.5));
            let visible = state.visible_range();
            for i in 0..=20 {
                let v = visible.start() + visible.delta() * f64::from(i) / 20.0;
                assert!((state.coefficient_to_value(state.value_to_coefficient(v)) - v).abs() < 1e-9);
            }
            for px in [0.0, 17.5, 150.0, 299.0] {
                let v = state.point_to_value(Point::new(px, px));
                assert!((state.value_to_point(v) - px).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn zoom_windows_stay_inside_actual_range() {
    let inputs = with_range(-250.0, 980.0);
    for factor in [0.01, 0.1, 0.33, 0.5, 0.9, 0.999] {
        for step in 0..=10 {
            let position = (1.0 - factor) * f64::from(step) / 10.0;
            let config = AxisConfig::vertical(ScaleKind::Linear).with_zoom(factor, position);
            let state = recompute(&config, &inputs);
            let actual = state.actual_range();
            let visible = state.visible_range();
            assert!(actual.contains_range(visible, 1e-9), "{visible:?} outside {actual:?}");
            assert_close(visible.delta(), factor * actual.delta());
        }
    }
}

#[test]
fn ticks_are_monotonic_for_every_scale() {
    let cases = [
        (AxisConfig::vertical(ScaleKind::Linear), with_range(-3.3, 17.9)),
        (
            AxisConfig::horizontal(ScaleKind::Log { base: 2.0 }),
            with_range(0.5, 4096.0),
        ),
        (
            AxisConfig::horizontal(ScaleKind::DateTime),
            with_range(0.0, 3.0 * 86_400.0),
        ),
        (
            AxisConfig::horizontal(ScaleKind::Linear)
                .with_edge_labels(EdgeLabelsVisibility::AlwaysVisible)
                .with_zoom(0.37, 0.2),
            with_range(0.0, 1.0),
        ),
    ];
    for (config, inputs) in cases {
        let state = recompute(&config.with_minor_ticks(3), &inputs);
        assert!(!state.tick_positions().is_empty());
        assert_strictly_increasing(state.tick_positions());
        assert_strictly_increasing(state.minor_tick_positions());
        let visible = state.visible_range();
        for tick in state.tick_positions() {
            assert!(visible.contains_range(DoubleRange::new(*tick, *tick), 1e-9));
        }
    }
}

#[test]
fn nice_intervals_are_one_two_five_or_ten() {
    for (start, end) in [(0.0, 97.0), (-0.003, 0.0041), (12.0, 13.0), (1e6, 7.3e7)] {
        for desired in [1.0, 2.5, 6.4, 17.0] {
            let interval = nice_interval(DoubleRange::new(start, end), desired);
            let magnitude = 10_f64.powf(interval.log10().floor());
            let mantissa = interval / magnitude;
            assert!(
                [1.0, 2.0, 5.0, 10.0].iter().any(|m| (mantissa - m).abs() < 1e-9),
                "{interval} for [{start}, {end}] / {desired}"
            );
        }
    }
}

#[test]
fn log_and_pow_are_inverse() {
    for x in [1e-9, 0.25, 1.0, 7.0, 1e15] {
        assert_close(get_pow_value(get_log_value(x, 10.0), 10.0), x);
    }
}

#[test]
fn date_time_axis_picks_hour_steps() {
    let config = AxisConfig::horizontal(ScaleKind::DateTime);
    let state = recompute(&config, &with_range(0.0, 5.0 * 3600.0));
    assert_eq!(state.actual_interval(), 3600.0);
    assert_eq!(state.visible_labels()[1].content, "1:00:00");
}

#[test]
fn between_ticks_category_axis() {
    let config = AxisConfig::horizontal(ScaleKind::Category)
        .with_label_placement(LabelPlacement::BetweenTicks);
    let inputs = plot().with_series(SeriesData::categories(["Mon", "Tue", "Wed", "Thu"]));
    let state = recompute(&config, &inputs);
    assert_eq!(state.actual_range(), DoubleRange::new(-0.5, 3.5));
    assert_eq!(label_positions(&state), vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(state.tick_positions(), &[-0.5, 0.5, 1.5, 2.5, 3.5]);
    // Slot centers sit halfway between ticks in pixels too.
    assert_close(state.value_to_point(0.0), 50.0);
}

#[test]
fn positional_categories_join_labels() {
    let config = AxisConfig::horizontal(ScaleKind::Category)
        .with_category_arrangement(CategoryArrangement::Positional);
    let inputs = plot()
        .with_series(SeriesData::categories(["a", "b"]))
        .with_series(SeriesData::categories(["c", "b", "d"]));
    let state = recompute(&config, &inputs);
    let text: Vec<&str> = state
        .visible_labels()
        .iter()
        .map(|l| l.content.as_str())
        .collect();
    assert_eq!(text, vec!["a, c", "b", "d"]);
}

#[test]
fn auto_scrolling_follows_the_latest_data() {
    let config = AxisConfig::default().with_auto_scrolling(10.0, AutoScrollingMode::End);
    let state = recompute(&config, &with_range(0.0, 60.0));
    assert_eq!(state.visible_range(), DoubleRange::new(50.0, 60.0));
    assert_close(state.zoom_factor(), 10.0 / 60.0);
    assert_close(state.zoom_position(), 50.0 / 60.0);
    assert!(state.visible_interval() < state.actual_interval());
}

#[test]
fn range_hook_widens_the_axis() {
    let config = AxisConfig::default().on_actual_range_changed(|e| {
        e.actual_range = e.actual_range.union_value(-100.0);
        e.visible_range = e.actual_range;
    });
    let state = recompute(&config, &with_range(0.0, 100.0));
    assert_eq!(state.actual_range(), DoubleRange::new(-100.0, 100.0));
    assert_eq!(state.visible_range(), state.actual_range());
    assert_eq!(state.zoom_factor(), 1.0);
}

#[test]
fn label_hook_hides_every_other_label() {
    let config = AxisConfig::default()
        .with_range_padding(RangePadding::Round)
        .on_label_created(|label| {
            label.is_visible = label.position() % 40.0 == 0.0;
        });
    let state = recompute(&config, &with_range(0.0, 97.0));
    let visible: Vec<f64> = state
        .visible_labels()
        .iter()
        .filter(|l| l.is_visible)
        .map(|l| l.position())
        .collect();
    assert_eq!(visible, vec![0.0, 40.0, 80.0]);
}

#[test]
fn second_ticks_over_a_day_reach_the_end() {
    let config = AxisConfig::horizontal(ScaleKind::DateTime)
        .with_interval(1.0)
        .with_range_padding(RangePadding::None);
    let state = recompute(&config, &with_range(0.0, 86_400.0));
    let end = state.visible_range().end();
    let last = *state.tick_positions().last().expect("ticks were generated");
    assert!(end - last <= 0.01 * end, "last tick {last}, range end {end}");
    assert_strictly_increasing(state.tick_positions());
}
