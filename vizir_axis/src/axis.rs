// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-pass entry point.
//!
//! [`recompute`] takes the host's [`AxisConfig`] and this pass's
//! [`AxisInputs`] and returns an immutable [`AxisState`] snapshot: ranges,
//! intervals, zoom state, labels, ticks and the coordinate mapper. Nothing is
//! cached between passes; hosts that want incremental rendering diff two
//! snapshots themselves.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Insets, Point, Rect, Size};
use tracing::{trace, warn};

use crate::category::{CategoryIndex, CategoryValue};
use crate::config::{AxisConfig, ScaleKind};
use crate::interval::desired_intervals_count;
use crate::labels::{AxisLabel, generate};
use crate::mapper::CoordinateMapper;
use crate::range::DoubleRange;
use crate::resolver::{ResolvedRanges, Resolver, zoom_from_window};
use crate::scale::Scale;

/// What one series contributes to an axis.
#[derive(Clone, Debug, PartialEq)]
pub enum SeriesData {
    /// The series' value range along this axis, in data units.
    Range(DoubleRange),
    /// The series' x values, for category axes.
    ///
    /// On a continuous axis only the numeric values count.
    Categories(Vec<CategoryValue>),
}

impl SeriesData {
    /// Range over `values`, skipping non-finite ones.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        Self::Range(DoubleRange::from_values(values))
    }

    /// Category x values.
    pub fn categories<T: Into<CategoryValue>>(values: impl IntoIterator<Item = T>) -> Self {
        Self::Categories(values.into_iter().map(Into::into).collect())
    }
}

/// Per-pass layout inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisInputs {
    /// Data from every series bound to the axis, in series order.
    pub series: Vec<SeriesData>,
    /// Plot size used for label density.
    pub available_size: Size,
    /// Rectangle the axis is rendered into.
    pub rendered_rect: Rect,
    /// Insets between the rendered rectangle and the plotted area.
    pub plot_offset: Insets,
}

impl AxisInputs {
    /// Inputs with no series, sized to `rendered_rect` and no plot offset.
    pub fn new(rendered_rect: Rect) -> Self {
        Self {
            series: Vec::new(),
            available_size: rendered_rect.size(),
            rendered_rect,
            plot_offset: Insets::ZERO,
        }
    }

    /// Add a series.
    pub fn with_series(mut self, series: SeriesData) -> Self {
        self.series.push(series);
        self
    }

    /// Override the size used for label density.
    pub fn with_available_size(mut self, size: Size) -> Self {
        self.available_size = size;
        self
    }

    /// Set the plot-offset insets.
    pub fn with_plot_offset(mut self, plot_offset: Insets) -> Self {
        self.plot_offset = plot_offset;
        self
    }
}

/// Snapshot of an axis after one layout pass.
///
/// Ranges are reported in data units; intervals are in the scale's native
/// units (powers of the base for log axes, seconds for date-time axes).
#[derive(Clone, Debug)]
pub struct AxisState {
    scale: Scale,
    ranges: ResolvedRanges,
    labels: Vec<AxisLabel>,
    ticks: Vec<f64>,
    minor_ticks: Vec<f64>,
    mapper: CoordinateMapper,
}

/// Computes the full axis state for one layout pass.
///
/// Never fails: unusable settings are replaced with defaults and reported
/// through `tracing` at `warn`.
pub fn recompute(config: &AxisConfig, inputs: &AxisInputs) -> AxisState {
    if let Err(issue) = config.validate() {
        warn!(%issue, "axis setting replaced with a default");
    }

    let categories = match config.kind {
        ScaleKind::Category => CategoryIndex::build(
            inputs.series.iter().filter_map(|s| match s {
                SeriesData::Categories(values) => Some(values.as_slice()),
                SeriesData::Range(_) => None,
            }),
            config.category_arrangement,
        ),
        _ => CategoryIndex::default(),
    };
    let scale = Scale::new(config.kind, categories);
    let data = data_range(&scale, &inputs.series);

    let desired_count = desired_intervals_count(
        inputs.available_size,
        config.orientation,
        config.effective_max_labels(),
    );
    let ranges = Resolver::new(config, &scale, desired_count).resolve(data);
    let generated = generate(config, &scale, &ranges);

    let mut mapper = CoordinateMapper::new(
        ranges.visible_range,
        config.orientation,
        config.is_inversed,
        inputs.rendered_rect,
        inputs.plot_offset,
    );
    if let Some(base) = scale.log_base() {
        mapper = mapper.with_log_base(base);
    }

    trace!(
        actual_start = ranges.actual_range.start(),
        actual_end = ranges.actual_range.end(),
        visible_start = ranges.visible_range.start(),
        visible_end = ranges.visible_range.end(),
        actual_interval = ranges.actual_interval,
        visible_interval = ranges.visible_interval,
        labels = generated.labels.len(),
        "axis recomputed"
    );

    AxisState {
        scale,
        ranges,
        labels: generated.labels,
        ticks: generated.ticks,
        minor_ticks: generated.minor_ticks,
        mapper,
    }
}

/// Union of the series' contributions, in native space.
fn data_range(scale: &Scale, series: &[SeriesData]) -> DoubleRange {
    if let Some(index) = scale.category_index() {
        let count = series
            .iter()
            .filter(|s| matches!(s, SeriesData::Categories(_)))
            .count();
        return (0..count).fold(DoubleRange::EMPTY, |acc, i| acc.union(index.series_range(i)));
    }
    series.iter().fold(DoubleRange::EMPTY, |acc, s| match s {
        SeriesData::Range(range) => acc.union(scale.range_to_native(*range)),
        SeriesData::Categories(values) => values.iter().fold(acc, |acc, v| match v {
            CategoryValue::Number(n) => acc.union_value(scale.to_native(*n)),
            CategoryValue::Text(_) => acc,
        }),
    })
}

impl AxisState {
    /// Padded actual range.
    pub fn actual_range(&self) -> DoubleRange {
        self.scale.range_from_native(self.ranges.actual_range)
    }

    /// Visible window.
    pub fn visible_range(&self) -> DoubleRange {
        self.scale.range_from_native(self.ranges.visible_range)
    }

    /// Visible window in log space, for log axes.
    pub fn visible_log_range(&self) -> Option<DoubleRange> {
        self.scale.log_base().map(|_| self.ranges.visible_range)
    }

    /// Interval over the actual range.
    pub fn actual_interval(&self) -> f64 {
        self.ranges.actual_interval
    }

    /// Interval over the visible window.
    pub fn visible_interval(&self) -> f64 {
        self.ranges.visible_interval
    }

    /// Effective zoom factor, after clamping and auto-scrolling.
    pub fn zoom_factor(&self) -> f64 {
        self.ranges.zoom_factor
    }

    /// Effective zoom position, after clamping and auto-scrolling.
    pub fn zoom_position(&self) -> f64 {
        self.ranges.zoom_position
    }

    /// Labels in increasing position order.
    pub fn visible_labels(&self) -> &[AxisLabel] {
        &self.labels
    }

    /// Major tick positions, strictly increasing.
    pub fn tick_positions(&self) -> &[f64] {
        &self.ticks
    }

    /// Minor tick positions, strictly increasing.
    pub fn minor_tick_positions(&self) -> &[f64] {
        &self.minor_ticks
    }

    /// The coordinate mapper for this pass.
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// The resolved scale.
    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    /// Category slot lookup, for category axes.
    pub fn category_index(&self) -> Option<&CategoryIndex> {
        self.scale.category_index()
    }

    /// See [`CoordinateMapper::value_to_coefficient`].
    pub fn value_to_coefficient(&self, value: f64) -> f64 {
        self.mapper.value_to_coefficient(value)
    }

    /// See [`CoordinateMapper::coefficient_to_value`].
    pub fn coefficient_to_value(&self, coefficient: f64) -> f64 {
        self.mapper.coefficient_to_value(coefficient)
    }

    /// See [`CoordinateMapper::value_to_point`].
    pub fn value_to_point(&self, value: f64) -> f64 {
        self.mapper.value_to_point(value)
    }

    /// See [`CoordinateMapper::point_to_value`].
    pub fn point_to_value(&self, point: Point) -> f64 {
        self.mapper.point_to_value(point)
    }

    /// Zoom factor and position that would show `[start, end]` (data units)
    /// out of this pass's actual range.
    ///
    /// Feed the result back through [`AxisConfig::with_zoom`] to zoom to a
    /// selection.
    pub fn zoom_to_range(&self, start: f64, end: f64) -> (f64, f64) {
        let window = self.scale.range_to_native(DoubleRange::new(start, end));
        zoom_from_window(self.ranges.actual_range, window)
    }
}
