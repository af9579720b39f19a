// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! "Nice" tick interval planning.
//!
//! Intervals are always of the form `{1, 2, 5, 10} × 10ⁿ`. The number of
//! intervals an axis wants is derived from its pixel length and the
//! `max_labels` density (labels per 100 px).

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::Size;

use crate::config::AxisOrientation;
use crate::range::DoubleRange;

/// Label density multiplier along a horizontal axis.
///
/// Horizontal labels are wider than they are tall, so horizontal axes ask for
/// roughly half as many intervals per pixel as vertical ones.
pub const HORIZONTAL_DENSITY: f64 = 0.533;

/// Label density multiplier along a vertical axis.
pub const VERTICAL_DENSITY: f64 = 1.0;

/// Multipliers tried from largest to smallest.
const INTERVAL_DIVS: [f64; 4] = [10.0, 5.0, 2.0, 1.0];

/// Returns how many intervals an axis of the given orientation wants for `available_size`.
///
/// The result is never less than `1`.
pub fn desired_intervals_count(
    available_size: Size,
    orientation: AxisOrientation,
    max_labels: f64,
) -> f64 {
    let (length, density) = match orientation {
        AxisOrientation::Horizontal => (available_size.width, HORIZONTAL_DENSITY),
        AxisOrientation::Vertical => (available_size.height, VERTICAL_DENSITY),
    };
    let count = length * density * max_labels / 100.0;
    if count.is_finite() { count.max(1.0) } else { 1.0 }
}

/// Picks a `{1, 2, 5, 10} × 10ⁿ` interval giving at most about `desired_count`
/// intervals over `range`.
///
/// Returns `NaN` for an empty, degenerate or non-finite range; callers repair
/// degenerate ranges before asking for an interval.
pub fn nice_interval(range: DoubleRange, desired_count: f64) -> f64 {
    let delta = range.delta();
    if !(delta.is_finite() && delta > 0.0) {
        return f64::NAN;
    }
    let desired_count = desired_count.max(1.0);
    let mut nice = delta / desired_count;
    let magnitude = 10_f64.powf(nice.log10().floor());
    for mul in INTERVAL_DIVS {
        let candidate = magnitude * mul;
        if desired_count < delta / candidate {
            break;
        }
        nice = candidate;
    }
    nice
}

/// Interval for a category axis: whole category steps, at least `1`.
pub fn category_interval(range: DoubleRange, desired_count: f64) -> f64 {
    let delta = range.delta();
    if !delta.is_finite() {
        return 1.0;
    }
    (delta / desired_count.max(1.0)).floor().max(1.0)
}

/// Interval for a log axis, computed in log space and floored to `1`.
///
/// Log ticks step by whole powers of the base, so a sub-unit interval would
/// place ticks between powers.
pub fn log_interval(log_range: DoubleRange, desired_count: f64) -> f64 {
    let nice = nice_interval(log_range, desired_count);
    if nice.is_finite() { nice.max(1.0) } else { 1.0 }
}
