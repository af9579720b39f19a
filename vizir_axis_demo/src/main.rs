// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis demos for `vizir_axis`.
//!
//! Lays out a handful of axes (linear, log, category, date-time; zoomed,
//! auto-scrolled, hooked) and writes them to `vizir_axis_demo.svg`.
//! Set `RUST_LOG=vizir_axis=trace` to see every layout pass.

mod svg;

use kurbo::{Insets, Point, Rect, Size};
use peniko::Brush;
use peniko::color::palette::css;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vizir_axis::{
    AutoScrollingMode, AxisConfig, AxisInputs, AxisOrientation, AxisState, EdgeLabelsVisibility,
    LabelFormat, LabelPlacement, LabelStyle, RangePadding, ScaleKind, SeriesData, recompute,
};

use crate::svg::{Anchor, SvgDoc};

const AXIS_LENGTH: f64 = 480.0;
const ROW_HEIGHT: f64 = 80.0;
const PLOT_INSET: f64 = 12.0;
const FONT_SIZE: f64 = 11.0;

#[derive(Debug)]
struct Demo {
    title: &'static str,
    config: AxisConfig,
    series: Vec<SeriesData>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut doc = SvgDoc::default();
    let mut y = 0.0;
    for demo in horizontal_demos() {
        let state = draw_horizontal(&mut doc, &demo, Point::new(0.0, y));
        info!(
            title = demo.title,
            interval = state.visible_interval(),
            labels = state.visible_labels().len(),
            "laid out axis"
        );
        y += ROW_HEIGHT;
    }

    let mut x = 80.0;
    for demo in vertical_demos() {
        let state = draw_vertical(&mut doc, &demo, Point::new(x, y + 20.0));
        info!(
            title = demo.title,
            interval = state.visible_interval(),
            labels = state.visible_labels().len(),
            "laid out axis"
        );
        x += 160.0;
    }

    std::fs::write("vizir_axis_demo.svg", doc.to_svg_string()).expect("write vizir_axis_demo.svg");
    println!("wrote vizir_axis_demo.svg");
}

fn horizontal_demos() -> Vec<Demo> {
    let numbers = vec![SeriesData::from_values([0.0, 12.5, 48.0, 97.0])];
    let full = AxisConfig::horizontal(ScaleKind::Linear)
        .with_range_padding(RangePadding::Round)
        .with_minor_ticks(4);

    // Zoom onto 20..45 of the padded range.
    let unzoomed = recompute(
        &full,
        &plot_inputs(
            Rect::from_origin_size(Point::ZERO, Size::new(AXIS_LENGTH, 30.0)),
            AxisOrientation::Horizontal,
            numbers.clone(),
        ),
    );
    let (factor, position) = unzoomed.zoom_to_range(20.0, 45.0);

    vec![
        Demo {
            title: "linear, round padding",
            config: full.clone(),
            series: numbers.clone(),
        },
        Demo {
            title: "linear, zoomed to 20..45",
            config: full
                .clone()
                .with_zoom(factor, position)
                .with_edge_labels(EdgeLabelsVisibility::AlwaysVisible),
            series: numbers,
        },
        Demo {
            title: "log base 10",
            config: AxisConfig::horizontal(ScaleKind::Log { base: 10.0 }).with_minor_ticks(8),
            series: vec![SeriesData::from_values([1.0, 320.0, 100_000.0])],
        },
        Demo {
            title: "category, labels between ticks",
            config: AxisConfig::horizontal(ScaleKind::Category)
                .with_label_placement(LabelPlacement::BetweenTicks),
            series: vec![
                SeriesData::categories(["Mon", "Tue", "Wed", "Thu", "Fri"]),
                SeriesData::categories(["Sat", "Sun"]),
            ],
        },
        Demo {
            title: "date-time, midnight in red",
            config: AxisConfig::horizontal(ScaleKind::DateTime)
                .with_minor_ticks(1)
                .on_label_created(|label| {
                    if label.position() % 86_400.0 == 0.0 {
                        label.style.fill = Some(Brush::Solid(css::CRIMSON));
                    }
                }),
            series: vec![SeriesData::from_values([0.0, 2.5 * 86_400.0])],
        },
        Demo {
            title: "auto-scrolling, last 30 s",
            config: AxisConfig::horizontal(ScaleKind::Linear)
                .with_auto_scrolling(30.0, AutoScrollingMode::End)
                .with_label_format(LabelFormat::Template("{value}s".to_string())),
            series: vec![SeriesData::from_values([0.0, 240.0])],
        },
    ]
}

fn vertical_demos() -> Vec<Demo> {
    vec![
        Demo {
            title: "normal padding",
            config: AxisConfig::vertical(ScaleKind::Linear)
                .with_range_padding(RangePadding::Normal)
                .with_minor_ticks(1),
            series: vec![SeriesData::from_values([-12.0, 48.0])],
        },
        Demo {
            title: "pinned 0..1, inversed",
            config: AxisConfig::vertical(ScaleKind::Linear)
                .with_minimum(0.0)
                .with_maximum(1.0)
                .with_inversed(true)
                .with_label_format(LabelFormat::Fixed(2)),
            series: vec![SeriesData::from_values([0.2, 0.7])],
        },
        Demo {
            title: "hook forces zero",
            config: AxisConfig::vertical(ScaleKind::Linear).on_actual_range_changed(|e| {
                e.actual_range = e.actual_range.union_value(0.0);
                e.visible_range = e.actual_range;
            }),
            series: vec![SeriesData::from_values([310.0, 455.0])],
        },
    ]
}

fn plot_inputs(rect: Rect, orientation: AxisOrientation, series: Vec<SeriesData>) -> AxisInputs {
    let offset = match orientation {
        AxisOrientation::Horizontal => Insets::new(PLOT_INSET, 0.0, PLOT_INSET, 0.0),
        AxisOrientation::Vertical => Insets::new(0.0, PLOT_INSET, 0.0, PLOT_INSET),
    };
    let mut inputs = AxisInputs::new(rect).with_plot_offset(offset);
    inputs.series = series;
    inputs
}

fn label_paint(style: &LabelStyle) -> (Brush, f64) {
    (
        style.fill.clone().unwrap_or(Brush::Solid(css::BLACK)),
        style.font_size.unwrap_or(FONT_SIZE),
    )
}

fn draw_horizontal(doc: &mut SvgDoc, demo: &Demo, origin: Point) -> AxisState {
    let rect = Rect::from_origin_size(origin + (0.0, 24.0), Size::new(AXIS_LENGTH, 30.0));
    let state = recompute(
        &demo.config,
        &plot_inputs(rect, AxisOrientation::Horizontal, demo.series.clone()),
    );
    let axis = Brush::Solid(css::DIM_GRAY);

    doc.text(
        origin + (0.0, 8.0),
        demo.title,
        FONT_SIZE,
        Anchor::Start,
        Brush::Solid(css::SLATE_GRAY),
    );
    doc.rect(
        Rect::new(rect.x0, rect.y0 - 4.0, rect.x1, rect.y0),
        Brush::Solid(css::WHITE_SMOKE),
    );
    doc.line(
        Point::new(rect.x0 + PLOT_INSET, rect.y0),
        Point::new(rect.x1 - PLOT_INSET, rect.y0),
        axis.clone(),
        1.0,
    );
    for &tick in state.minor_tick_positions() {
        let x = state.value_to_point(tick);
        doc.line(
            Point::new(x, rect.y0),
            Point::new(x, rect.y0 + 3.0),
            axis.clone(),
            0.5,
        );
    }
    for &tick in state.tick_positions() {
        let x = state.value_to_point(tick);
        doc.line(
            Point::new(x, rect.y0),
            Point::new(x, rect.y0 + 6.0),
            axis.clone(),
            1.0,
        );
    }
    for label in state.visible_labels().iter().filter(|l| l.is_visible) {
        let (fill, font_size) = label_paint(&label.style);
        let x = state.value_to_point(label.position());
        doc.text(
            Point::new(x, rect.y0 + 16.0),
            &label.content,
            font_size,
            Anchor::Middle,
            fill,
        );
    }
    state
}

fn draw_vertical(doc: &mut SvgDoc, demo: &Demo, origin: Point) -> AxisState {
    let rect = Rect::from_origin_size(origin, Size::new(30.0, AXIS_LENGTH));
    let state = recompute(
        &demo.config,
        &plot_inputs(rect, AxisOrientation::Vertical, demo.series.clone()),
    );
    let axis = Brush::Solid(css::DIM_GRAY);

    doc.text(
        origin - (0.0, 12.0),
        demo.title,
        FONT_SIZE,
        Anchor::Middle,
        Brush::Solid(css::SLATE_GRAY),
    );
    doc.line(
        Point::new(rect.x0, rect.y0 + PLOT_INSET),
        Point::new(rect.x0, rect.y1 - PLOT_INSET),
        axis.clone(),
        1.0,
    );
    for &tick in state.minor_tick_positions() {
        let y = state.value_to_point(tick);
        doc.line(
            Point::new(rect.x0 - 3.0, y),
            Point::new(rect.x0, y),
            axis.clone(),
            0.5,
        );
    }
    for &tick in state.tick_positions() {
        let y = state.value_to_point(tick);
        doc.line(
            Point::new(rect.x0 - 6.0, y),
            Point::new(rect.x0, y),
            axis.clone(),
            1.0,
        );
    }
    for label in state.visible_labels().iter().filter(|l| l.is_visible) {
        let (fill, font_size) = label_paint(&label.style);
        let y = state.value_to_point(label.position());
        doc.text(
            Point::new(rect.x0 - 9.0, y),
            &label.content,
            font_size,
            Anchor::End,
            fill,
        );
    }
    state
}
