// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis configuration.
//!
//! An [`AxisConfig`] is everything the host sets on an axis: scale kind,
//! orientation, zoom state, interval and padding policy, label options and
//! override hooks. It is plain data; [`crate::recompute`] reads it once per
//! layout pass.

extern crate alloc;

use alloc::sync::Arc;

use peniko::Brush;

use crate::category::{CategoryArrangement, LabelPlacement};
use crate::error::AxisConfigIssue;
use crate::format::LabelFormat;
use crate::labels::AxisLabel;
use crate::padding::RangePadding;
use crate::resolver::ActualRangeChanged;

/// Smallest zoom factor an axis will use; zero would make the visible range empty.
pub const MIN_ZOOM_FACTOR: f64 = 1e-6;

/// Log base used when the configured one is unusable.
pub const DEFAULT_LOG_BASE: f64 = 10.0;

/// Which way an axis runs on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisOrientation {
    /// Values grow to the right.
    #[default]
    Horizontal,
    /// Values grow upward.
    Vertical,
}

/// The scale an axis maps its values through.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ScaleKind {
    /// Continuous linear values.
    #[default]
    Linear,
    /// Continuous positive values on a log scale.
    Log {
        /// Log base; values that are not finite, positive and `!= 1` fall back to 10.
        base: f64,
    },
    /// Discrete categories, one slot per distinct x value (or per point position).
    Category,
    /// Timestamps in seconds.
    DateTime,
}

/// When labels are forced onto the exact ends of the visible range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeLabelsVisibility {
    /// Labels only sit on interval boundaries.
    #[default]
    Default,
    /// Edge labels are shown while the axis is not zoomed.
    Visible,
    /// Edge labels are always shown.
    AlwaysVisible,
}

/// Which end of the actual range auto-scrolling keeps in view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AutoScrollingMode {
    /// Show the first `delta` of the range.
    Start,
    /// Show the last `delta` of the range.
    #[default]
    End,
}

/// Paint and size overrides for axis labels. `None` leaves the renderer's default.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelStyle {
    /// Label fill paint.
    pub fill: Option<Brush>,
    /// Label font size.
    pub font_size: Option<f64>,
}

/// Hook run after the ranges are resolved and before labels are generated.
pub type ActualRangeChangedHook = Arc<dyn Fn(&mut ActualRangeChanged)>;

/// Hook run on every generated label. Only content, style and visibility can change.
pub type LabelCreatedHook = Arc<dyn Fn(&mut AxisLabel)>;

/// Everything the host configures on an axis.
#[derive(Clone)]
pub struct AxisConfig {
    /// Scale kind.
    pub kind: ScaleKind,
    /// Screen orientation.
    pub orientation: AxisOrientation,
    /// Whether values grow toward the left (horizontal) or downward (vertical).
    pub is_inversed: bool,
    /// Whether the owning chart swaps its x and y axes.
    pub is_transposed: bool,
    /// Explicit major interval in scale units (log axes: powers of the base).
    pub interval: Option<f64>,
    /// Pinned minimum, in data units.
    pub minimum: Option<f64>,
    /// Pinned maximum, in data units.
    pub maximum: Option<f64>,
    /// Range padding policy.
    pub range_padding: RangePadding,
    /// Visible fraction of the actual range, in `(0, 1]`.
    pub zoom_factor: f64,
    /// Start of the visible window as a fraction of the actual range.
    pub zoom_position: f64,
    /// Recompute the interval for the visible range while zoomed.
    pub enable_auto_interval_on_zooming: bool,
    /// Width of the auto-scrolling window in scale units.
    pub auto_scrolling_delta: Option<f64>,
    /// Which end auto-scrolling keeps in view.
    pub auto_scrolling_mode: AutoScrollingMode,
    /// Target label density, in labels per 100 px.
    pub max_labels: f64,
    /// Edge label policy.
    pub edge_labels_visibility: EdgeLabelsVisibility,
    /// Label content format.
    pub label_format: LabelFormat,
    /// Default label style.
    pub label_style: LabelStyle,
    /// Minor ticks between consecutive major ticks.
    pub minor_ticks_per_interval: usize,
    /// Category label placement.
    pub label_placement: LabelPlacement,
    /// Category slot assignment.
    pub category_arrangement: CategoryArrangement,
    /// Range override hook.
    pub actual_range_changed: Option<ActualRangeChangedHook>,
    /// Label override hook.
    pub label_created: Option<LabelCreatedHook>,
}

impl core::fmt::Debug for AxisConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisConfig")
            .field("kind", &self.kind)
            .field("orientation", &self.orientation)
            .field("is_inversed", &self.is_inversed)
            .field("is_transposed", &self.is_transposed)
            .field("interval", &self.interval)
            .field("minimum", &self.minimum)
            .field("maximum", &self.maximum)
            .field("range_padding", &self.range_padding)
            .field("zoom_factor", &self.zoom_factor)
            .field("zoom_position", &self.zoom_position)
            .field(
                "enable_auto_interval_on_zooming",
                &self.enable_auto_interval_on_zooming,
            )
            .field("auto_scrolling_delta", &self.auto_scrolling_delta)
            .field("auto_scrolling_mode", &self.auto_scrolling_mode)
            .field("max_labels", &self.max_labels)
            .field("edge_labels_visibility", &self.edge_labels_visibility)
            .field("label_format", &self.label_format)
            .field("label_style", &self.label_style)
            .field("minor_ticks_per_interval", &self.minor_ticks_per_interval)
            .field("label_placement", &self.label_placement)
            .field("category_arrangement", &self.category_arrangement)
            .field("actual_range_changed", &self.actual_range_changed.is_some())
            .field("label_created", &self.label_created.is_some())
            .finish()
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self::new(ScaleKind::Linear, AxisOrientation::Horizontal)
    }
}

impl AxisConfig {
    /// Creates an unzoomed axis with `max_labels = 3` and `Auto` padding.
    pub fn new(kind: ScaleKind, orientation: AxisOrientation) -> Self {
        Self {
            kind,
            orientation,
            is_inversed: false,
            is_transposed: false,
            interval: None,
            minimum: None,
            maximum: None,
            range_padding: RangePadding::Auto,
            zoom_factor: 1.0,
            zoom_position: 0.0,
            enable_auto_interval_on_zooming: true,
            auto_scrolling_delta: None,
            auto_scrolling_mode: AutoScrollingMode::End,
            max_labels: 3.0,
            edge_labels_visibility: EdgeLabelsVisibility::Default,
            label_format: LabelFormat::Auto,
            label_style: LabelStyle::default(),
            minor_ticks_per_interval: 0,
            label_placement: LabelPlacement::OnTicks,
            category_arrangement: CategoryArrangement::Grouped,
            actual_range_changed: None,
            label_created: None,
        }
    }

    /// Convenience constructor for a horizontal axis.
    pub fn horizontal(kind: ScaleKind) -> Self {
        Self::new(kind, AxisOrientation::Horizontal)
    }

    /// Convenience constructor for a vertical axis.
    pub fn vertical(kind: ScaleKind) -> Self {
        Self::new(kind, AxisOrientation::Vertical)
    }

    /// Reverse the value direction.
    pub fn with_inversed(mut self, is_inversed: bool) -> Self {
        self.is_inversed = is_inversed;
        self
    }

    /// Mark the owning chart as transposed.
    pub fn with_transposed(mut self, is_transposed: bool) -> Self {
        self.is_transposed = is_transposed;
        self
    }

    /// Set an explicit major interval.
    pub fn with_interval(mut self, interval: f64) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Pin the minimum.
    pub fn with_minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Pin the maximum.
    pub fn with_maximum(mut self, maximum: f64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Set the range padding policy.
    pub fn with_range_padding(mut self, range_padding: RangePadding) -> Self {
        self.range_padding = range_padding;
        self
    }

    /// Set zoom factor and position.
    pub fn with_zoom(mut self, zoom_factor: f64, zoom_position: f64) -> Self {
        self.zoom_factor = zoom_factor;
        self.zoom_position = zoom_position;
        self
    }

    /// Enable or disable interval recomputation while zoomed.
    pub fn with_auto_interval_on_zooming(mut self, enable: bool) -> Self {
        self.enable_auto_interval_on_zooming = enable;
        self
    }

    /// Keep a fixed-width window at one end of the range in view.
    pub fn with_auto_scrolling(mut self, delta: f64, mode: AutoScrollingMode) -> Self {
        self.auto_scrolling_delta = Some(delta);
        self.auto_scrolling_mode = mode;
        self
    }

    /// Set the label density (labels per 100 px).
    pub fn with_max_labels(mut self, max_labels: f64) -> Self {
        self.max_labels = max_labels;
        self
    }

    /// Set the edge label policy.
    pub fn with_edge_labels(mut self, visibility: EdgeLabelsVisibility) -> Self {
        self.edge_labels_visibility = visibility;
        self
    }

    /// Set the label format.
    pub fn with_label_format(mut self, format: LabelFormat) -> Self {
        self.label_format = format;
        self
    }

    /// Set the default label style.
    pub fn with_label_style(mut self, style: LabelStyle) -> Self {
        self.label_style = style;
        self
    }

    /// Set the number of minor ticks per interval.
    pub fn with_minor_ticks(mut self, per_interval: usize) -> Self {
        self.minor_ticks_per_interval = per_interval;
        self
    }

    /// Set category label placement.
    pub fn with_label_placement(mut self, placement: LabelPlacement) -> Self {
        self.label_placement = placement;
        self
    }

    /// Set category slot assignment.
    pub fn with_category_arrangement(mut self, arrangement: CategoryArrangement) -> Self {
        self.category_arrangement = arrangement;
        self
    }

    /// Install the range override hook.
    pub fn on_actual_range_changed(mut self, f: impl Fn(&mut ActualRangeChanged) + 'static) -> Self {
        self.actual_range_changed = Some(Arc::new(f));
        self
    }

    /// Install the label override hook.
    pub fn on_label_created(mut self, f: impl Fn(&mut AxisLabel) + 'static) -> Self {
        self.label_created = Some(Arc::new(f));
        self
    }

    /// Returns `true` when this axis plots series values rather than x positions.
    pub fn is_value_axis(&self) -> bool {
        (self.orientation == AxisOrientation::Vertical) != self.is_transposed
    }

    /// Reports the first setting layout will replace with a default.
    pub fn validate(&self) -> Result<(), AxisConfigIssue> {
        if let Some(interval) = self.interval
            && !(interval.is_finite() && interval > 0.0)
        {
            return Err(AxisConfigIssue::InvalidInterval(interval));
        }
        if !(self.zoom_factor > 0.0 && self.zoom_factor <= 1.0) {
            return Err(AxisConfigIssue::ZoomFactorOutOfRange(self.zoom_factor));
        }
        if !(self.zoom_position >= 0.0 && self.zoom_position <= 1.0 - self.zoom_factor + 1e-12) {
            return Err(AxisConfigIssue::ZoomPositionOutOfRange(self.zoom_position));
        }
        if let ScaleKind::Log { base } = self.kind
            && !is_usable_log_base(base)
        {
            return Err(AxisConfigIssue::InvalidLogBase(base));
        }
        for bound in [self.minimum, self.maximum].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(AxisConfigIssue::NonFiniteBound(bound));
            }
        }
        if let (Some(minimum), Some(maximum)) = (self.minimum, self.maximum)
            && minimum >= maximum
        {
            return Err(AxisConfigIssue::InvertedBounds { minimum, maximum });
        }
        if let Some(delta) = self.auto_scrolling_delta
            && !(delta.is_finite() && delta > 0.0)
        {
            return Err(AxisConfigIssue::InvalidAutoScrollingDelta(delta));
        }
        if !(self.max_labels.is_finite() && self.max_labels > 0.0) {
            return Err(AxisConfigIssue::InvalidMaxLabels(self.max_labels));
        }
        Ok(())
    }

    /// Zoom factor clamped to `[MIN_ZOOM_FACTOR, 1]`.
    pub(crate) fn effective_zoom_factor(&self) -> f64 {
        if self.zoom_factor.is_nan() {
            return 1.0;
        }
        self.zoom_factor.clamp(MIN_ZOOM_FACTOR, 1.0)
    }

    /// Zoom position clamped to `[0, 1 - zoom_factor]`.
    pub(crate) fn effective_zoom_position(&self) -> f64 {
        if self.zoom_position.is_nan() {
            return 0.0;
        }
        self.zoom_position
            .clamp(0.0, 1.0 - self.effective_zoom_factor())
    }

    pub(crate) fn effective_interval(&self) -> Option<f64> {
        self.interval.filter(|i| i.is_finite() && *i > 0.0)
    }

    pub(crate) fn effective_max_labels(&self) -> f64 {
        if self.max_labels.is_finite() && self.max_labels > 0.0 {
            self.max_labels
        } else {
            3.0
        }
    }

    pub(crate) fn effective_auto_scrolling_delta(&self) -> Option<f64> {
        self.auto_scrolling_delta
            .filter(|d| d.is_finite() && *d > 0.0)
    }

    pub(crate) fn pinned_minimum(&self) -> Option<f64> {
        self.minimum.filter(|v| v.is_finite())
    }

    pub(crate) fn pinned_maximum(&self) -> Option<f64> {
        self.maximum.filter(|v| v.is_finite())
    }
}

pub(crate) fn is_usable_log_base(base: f64) -> bool {
    base.is_finite() && base > 0.0 && base != 1.0
}
