// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range resolution: data range to actual range, interval, padding and zoom window.
//!
//! Everything here runs in the scale's native space. The only value-space
//! surface is [`ActualRangeChanged`], which the override hook sees.

use tracing::debug;

use crate::config::{AutoScrollingMode, AxisConfig, MIN_ZOOM_FACTOR};
use crate::range::DoubleRange;
use crate::scale::Scale;

/// Ranges and intervals handed to the range override hook, in data units.
///
/// Log axes report ranges as powers of the base and intervals in powers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActualRangeChanged {
    /// Padded actual range.
    pub actual_range: DoubleRange,
    /// Visible window.
    pub visible_range: DoubleRange,
    /// Interval over the actual range.
    pub actual_interval: f64,
    /// Interval over the visible window.
    pub visible_interval: f64,
}

/// Output of one resolution pass, in native space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ResolvedRanges {
    pub(crate) actual_range: DoubleRange,
    pub(crate) actual_interval: f64,
    pub(crate) visible_range: DoubleRange,
    pub(crate) visible_interval: f64,
    pub(crate) zoom_factor: f64,
    pub(crate) zoom_position: f64,
}

impl ResolvedRanges {
    /// The interval labels step by; never zero or `NaN`.
    pub(crate) fn label_interval(&self) -> f64 {
        usable_interval(self.visible_interval)
            .or_else(|| usable_interval(self.actual_interval))
            .unwrap_or(1.0)
    }

    pub(crate) fn is_zoomed(&self) -> bool {
        self.zoom_factor < 1.0
    }
}

fn usable_interval(interval: f64) -> Option<f64> {
    (interval.is_finite() && interval > 0.0).then_some(interval)
}

fn usable_window(range: DoubleRange) -> bool {
    !range.is_empty() && range.is_finite() && range.delta() > 0.0
}

/// Zoom factor and position that show `window` out of `actual`.
///
/// The factor is clamped to `[MIN_ZOOM_FACTOR, 1]` and the position to
/// `[0, 1 - factor]`.
pub(crate) fn zoom_from_window(actual: DoubleRange, window: DoubleRange) -> (f64, f64) {
    if !usable_window(actual) || !usable_window(window) {
        return (1.0, 0.0);
    }
    let factor = (window.delta() / actual.delta()).clamp(MIN_ZOOM_FACTOR, 1.0);
    let position = ((window.start() - actual.start()) / actual.delta()).clamp(0.0, 1.0 - factor);
    (factor, position)
}

/// Stateless range resolver for one axis and one layout pass.
pub(crate) struct Resolver<'a> {
    config: &'a AxisConfig,
    scale: &'a Scale,
    desired_count: f64,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(config: &'a AxisConfig, scale: &'a Scale, desired_count: f64) -> Self {
        Self {
            config,
            scale,
            desired_count,
        }
    }

    /// Pinned bounds in native space. Category axes have none.
    fn pinned(&self) -> (Option<f64>, Option<f64>) {
        if matches!(self.scale, Scale::Category(_)) {
            return (None, None);
        }
        (
            self.config.pinned_minimum().map(|v| self.scale.to_native(v)),
            self.config.pinned_maximum().map(|v| self.scale.to_native(v)),
        )
    }

    /// Runs the whole pipeline on the union of the series' native data ranges.
    pub(crate) fn resolve(&self, data: DoubleRange) -> ResolvedRanges {
        let (minimum, maximum) = self.pinned();

        let range = match (minimum, maximum) {
            (Some(min), Some(max)) => DoubleRange::new(min, max),
            (Some(min), None) if data.is_empty() => DoubleRange::new(min, min),
            (Some(min), None) => DoubleRange::new(min, data.end().max(min)),
            (None, Some(max)) if data.is_empty() => DoubleRange::new(max, max),
            (None, Some(max)) => DoubleRange::new(data.start().min(max), max),
            (None, None) => data,
        };
        let range = repair(range, minimum.is_none() && maximum.is_some());

        let actual_interval = self.actual_interval(range);

        let actual_range = match (minimum, maximum) {
            (Some(_), Some(_)) => range,
            _ => {
                let padded = self
                    .scale
                    .pad(range, actual_interval, self.config, self.desired_count);
                let padded = DoubleRange::new(
                    minimum.unwrap_or(padded.start()),
                    maximum.unwrap_or(padded.end()),
                );
                if usable_window(padded) { padded } else { range }
            }
        };

        let mut resolved = self.window(
            actual_range,
            actual_interval,
            self.config.effective_zoom_factor(),
            self.config.effective_zoom_position(),
        );

        if self.config.actual_range_changed.is_some() {
            resolved = self.apply_hook(resolved);
        }
        resolved
    }

    /// Explicit interval if usable, otherwise the scale's automatic interval.
    fn actual_interval(&self, range: DoubleRange) -> f64 {
        if let Some(interval) = self.config.effective_interval() {
            return interval;
        }
        let interval = self.scale.interval(range, self.desired_count);
        usable_interval(interval).unwrap_or_else(|| {
            debug!(interval, "replaced unusable actual interval with 1");
            1.0
        })
    }

    /// Visible window, zoom state and visible interval for an actual range.
    fn window(
        &self,
        actual_range: DoubleRange,
        actual_interval: f64,
        zoom_factor: f64,
        zoom_position: f64,
    ) -> ResolvedRanges {
        let (visible_range, zoom_factor, zoom_position) =
            match self.config.effective_auto_scrolling_delta() {
                Some(delta) => self.auto_scroll(actual_range, delta),
                None => (
                    zoom_window(actual_range, zoom_factor, zoom_position),
                    zoom_factor,
                    zoom_position,
                ),
            };
        let visible_interval =
            self.visible_interval(visible_range, actual_interval, zoom_factor < 1.0);
        ResolvedRanges {
            actual_range,
            actual_interval,
            visible_range,
            visible_interval,
            zoom_factor,
            zoom_position,
        }
    }

    fn auto_scroll(&self, actual: DoubleRange, delta: f64) -> (DoubleRange, f64, f64) {
        if delta >= actual.delta() {
            return (actual, 1.0, 0.0);
        }
        let window = match self.config.auto_scrolling_mode {
            AutoScrollingMode::Start => DoubleRange::new(actual.start(), actual.start() + delta),
            AutoScrollingMode::End => DoubleRange::new(actual.end() - delta, actual.end()),
        };
        let (factor, position) = zoom_from_window(actual, window);
        debug!(
            start = window.start(),
            end = window.end(),
            factor,
            position,
            "auto-scrolling forced the visible window"
        );
        (window, factor, position)
    }

    fn visible_interval(&self, visible: DoubleRange, actual_interval: f64, zoomed: bool) -> f64 {
        if !zoomed
            || !self.config.enable_auto_interval_on_zooming
            || self.config.effective_interval().is_some()
        {
            return actual_interval;
        }
        let interval = self.scale.interval(visible, self.desired_count);
        usable_interval(interval).unwrap_or_else(|| {
            debug!(interval, actual_interval, "visible interval fell back to actual interval");
            actual_interval
        })
    }

    /// Runs the override hook and folds its changes back in.
    fn apply_hook(&self, resolved: ResolvedRanges) -> ResolvedRanges {
        let Some(hook) = &self.config.actual_range_changed else {
            return resolved;
        };
        let before = ActualRangeChanged {
            actual_range: self.scale.range_from_native(resolved.actual_range),
            visible_range: self.scale.range_from_native(resolved.visible_range),
            actual_interval: resolved.actual_interval,
            visible_interval: resolved.visible_interval,
        };
        let mut event = before;
        hook(&mut event);
        if event == before {
            return resolved;
        }
        debug!(?before, after = ?event, "range hook overrode resolved ranges");

        let mut actual_range = resolved.actual_range;
        let mut actual_interval = resolved.actual_interval;
        let new_actual = self.scale.range_to_native(event.actual_range);
        let actual_changed = event.actual_range != before.actual_range && usable_window(new_actual);
        if actual_changed {
            actual_range = new_actual;
        }
        if event.actual_interval != before.actual_interval {
            actual_interval = usable_interval(event.actual_interval).unwrap_or(actual_interval);
        } else if actual_changed {
            actual_interval = self.actual_interval(actual_range);
        }

        let new_visible = self.scale.range_to_native(event.visible_range);
        let mut out = if event.visible_range != before.visible_range && usable_window(new_visible) {
            let (zoom_factor, zoom_position) = zoom_from_window(actual_range, new_visible);
            ResolvedRanges {
                actual_range,
                actual_interval,
                visible_range: new_visible,
                visible_interval: self.visible_interval(
                    new_visible,
                    actual_interval,
                    zoom_factor < 1.0,
                ),
                zoom_factor,
                zoom_position,
            }
        } else {
            self.window(
                actual_range,
                actual_interval,
                resolved.zoom_factor,
                resolved.zoom_position,
            )
        };
        if event.visible_interval != before.visible_interval
            && let Some(interval) = usable_interval(event.visible_interval)
        {
            out.visible_interval = interval;
        }
        out
    }
}

/// Replaces an empty or zero-width range with a unit range.
///
/// A zero-width range normally grows upward; with only a maximum pinned it
/// grows downward so the pinned bound stays put.
fn repair(range: DoubleRange, grow_down: bool) -> DoubleRange {
    if range.is_empty() || !range.is_finite() {
        debug!("empty data range replaced with [0, 1]");
        return DoubleRange::new(0.0, 1.0);
    }
    if range.start() == range.end() {
        let value = range.start();
        debug!(value, "zero-width data range widened by one unit");
        return if grow_down {
            DoubleRange::new(value - 1.0, value)
        } else {
            DoubleRange::new(value, value + 1.0)
        };
    }
    range
}

/// The zoomed window, slid back inside `actual` when it overhangs either end.
fn zoom_window(actual: DoubleRange, factor: f64, position: f64) -> DoubleRange {
    if factor >= 1.0 {
        return actual;
    }
    let width = factor * actual.delta();
    let mut start = actual.start() + position * actual.delta();
    if start + width > actual.end() {
        start = actual.end() - width;
    }
    if start < actual.start() {
        start = actual.start();
    }
    DoubleRange::new(start, start + width)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::cell::Cell;

    use alloc::rc::Rc;

    use super::*;
    use crate::config::ScaleKind;
    use crate::padding::RangePadding;

    fn resolve(config: &AxisConfig, data: DoubleRange) -> ResolvedRanges {
        let scale = Scale::new(config.kind, crate::CategoryIndex::default());
        Resolver::new(config, &scale, 6.0).resolve(data)
    }

    fn vertical() -> AxisConfig {
        AxisConfig::vertical(ScaleKind::Linear)
    }

    #[test]
    fn zero_width_range_is_widened_before_interval() {
        let out = resolve(&AxisConfig::default(), DoubleRange::new(5.0, 5.0));
        assert_eq!(out.actual_range, DoubleRange::new(5.0, 6.0));
        assert!(out.actual_interval.is_finite() && out.actual_interval > 0.0);
    }

    #[test]
    fn empty_data_becomes_unit_range() {
        let out = resolve(&AxisConfig::default(), DoubleRange::EMPTY);
        assert_eq!(out.actual_range, DoubleRange::new(0.0, 1.0));
    }

    #[test]
    fn value_axis_rounds_outward() {
        let out = resolve(&vertical(), DoubleRange::new(3.0, 97.0));
        assert_eq!(out.actual_interval, 20.0);
        assert_eq!(out.actual_range, DoubleRange::new(0.0, 100.0));
    }

    #[test]
    fn explicit_interval_wins() {
        let config = vertical().with_interval(25.0);
        let out = resolve(&config, DoubleRange::new(3.0, 97.0));
        assert_eq!(out.actual_interval, 25.0);
        assert_eq!(out.actual_range, DoubleRange::new(0.0, 100.0));
    }

    #[test]
    fn unusable_explicit_interval_is_ignored() {
        let config = vertical().with_interval(f64::NAN);
        let out = resolve(&config, DoubleRange::new(3.0, 97.0));
        assert_eq!(out.actual_interval, 20.0);
    }

    #[test]
    fn pinned_bounds_skip_padding() {
        let config = vertical().with_minimum(-3.0).with_maximum(42.0);
        let out = resolve(&config, DoubleRange::new(3.0, 97.0));
        assert_eq!(out.actual_range, DoubleRange::new(-3.0, 42.0));
    }

    #[test]
    fn one_pinned_bound_pads_the_other_side() {
        let config = vertical().with_minimum(-3.0);
        let out = resolve(&config, DoubleRange::new(3.0, 97.0));
        assert_eq!(out.actual_range, DoubleRange::new(-3.0, 100.0));

        let config = vertical().with_maximum(90.0);
        let out = resolve(&config, DoubleRange::new(3.0, 97.0));
        assert_eq!(out.actual_range.end(), 90.0);
        assert_eq!(out.actual_range.start(), 0.0);
    }

    #[test]
    fn pinned_maximum_alone_grows_downward() {
        let config = AxisConfig::default().with_maximum(10.0);
        let out = resolve(&config, DoubleRange::EMPTY);
        assert_eq!(out.actual_range, DoubleRange::new(9.0, 10.0));
    }

    #[test]
    fn zoom_window_is_a_slice_of_actual() {
        let config = AxisConfig::default().with_zoom(0.5, 0.25);
        let out = resolve(&config, DoubleRange::new(0.0, 100.0));
        assert_eq!(out.visible_range, DoubleRange::new(25.0, 75.0));
        assert!(out.is_zoomed());
    }

    #[test]
    fn overhanging_zoom_slides_back() {
        let window = zoom_window(DoubleRange::new(0.0, 100.0), 0.5, 0.75);
        assert_eq!(window, DoubleRange::new(50.0, 100.0));
    }

    #[test]
    fn zoomed_interval_follows_setting() {
        let data = DoubleRange::new(0.0, 100.0);
        let on = resolve(&AxisConfig::default().with_zoom(0.1, 0.0), data);
        assert!(on.visible_interval < on.actual_interval);
        let off = resolve(
            &AxisConfig::default()
                .with_zoom(0.1, 0.0)
                .with_auto_interval_on_zooming(false),
            data,
        );
        assert_eq!(off.visible_interval, off.actual_interval);
    }

    #[test]
    fn auto_scrolling_pins_window_to_end() {
        let config = AxisConfig::default()
            .with_range_padding(RangePadding::None)
            .with_auto_scrolling(20.0, AutoScrollingMode::End);
        let out = resolve(&config, DoubleRange::new(0.0, 100.0));
        assert_eq!(out.visible_range, DoubleRange::new(80.0, 100.0));
        assert!((out.zoom_factor - 0.2).abs() < 1e-12);
        assert!((out.zoom_position - 0.8).abs() < 1e-12);

        let config = config.with_auto_scrolling(20.0, AutoScrollingMode::Start);
        let out = resolve(&config, DoubleRange::new(0.0, 100.0));
        assert_eq!(out.visible_range, DoubleRange::new(0.0, 20.0));
        assert_eq!(out.zoom_position, 0.0);
    }

    #[test]
    fn wide_auto_scrolling_shows_everything() {
        let config = AxisConfig::default().with_auto_scrolling(500.0, AutoScrollingMode::End);
        let out = resolve(&config, DoubleRange::new(0.0, 100.0));
        assert_eq!(out.visible_range, out.actual_range);
        assert_eq!(out.zoom_factor, 1.0);
    }

    #[test]
    fn hook_override_of_actual_range_recomputes_interval() {
        let config = AxisConfig::default()
            .with_range_padding(RangePadding::None)
            .on_actual_range_changed(|e| e.actual_range = DoubleRange::new(0.0, 1000.0));
        let plain = resolve(
            &AxisConfig::default().with_range_padding(RangePadding::None),
            DoubleRange::new(0.0, 100.0),
        );
        let out = resolve(&config, DoubleRange::new(0.0, 100.0));
        assert_eq!(out.actual_range, DoubleRange::new(0.0, 1000.0));
        assert_eq!(out.visible_range, out.actual_range);
        assert_eq!(out.actual_interval, plain.actual_interval * 10.0);
    }

    #[test]
    fn hook_override_of_visible_range_derives_zoom() {
        let config = AxisConfig::default()
            .with_range_padding(RangePadding::None)
            .on_actual_range_changed(|e| e.visible_range = DoubleRange::new(10.0, 60.0));
        let out = resolve(&config, DoubleRange::new(0.0, 100.0));
        assert_eq!(out.visible_range, DoubleRange::new(10.0, 60.0));
        assert!((out.zoom_factor - 0.5).abs() < 1e-12);
        assert!((out.zoom_position - 0.1).abs() < 1e-12);
    }

    #[test]
    fn hook_runs_once_and_unchanged_event_is_a_no_op() {
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let config = AxisConfig::default().on_actual_range_changed(move |_| {
            seen.set(seen.get() + 1);
        });
        let with_hook = resolve(&config, DoubleRange::new(3.0, 97.0));
        let without = resolve(&AxisConfig::default(), DoubleRange::new(3.0, 97.0));
        assert_eq!(calls.get(), 1);
        assert_eq!(with_hook, without);
    }

    #[test]
    fn hook_sees_log_ranges_in_data_units() {
        let seen = Rc::new(Cell::new(DoubleRange::EMPTY));
        let sink = seen.clone();
        let config = AxisConfig::horizontal(ScaleKind::Log { base: 10.0 })
            .on_actual_range_changed(move |e| sink.set(e.actual_range));
        let out = resolve(&config, DoubleRange::new(0.0, 3.0));
        assert_eq!(out.actual_range, DoubleRange::new(0.0, 3.0));
        let reported = seen.get();
        assert!((reported.start() - 1.0).abs() < 1e-9);
        assert!((reported.end() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn zoom_from_window_inverts_zoom_window() {
        let actual = DoubleRange::new(-50.0, 150.0);
        let (factor, position) = zoom_from_window(actual, DoubleRange::new(0.0, 50.0));
        assert_eq!(zoom_window(actual, factor, position), DoubleRange::new(0.0, 50.0));
    }
}
