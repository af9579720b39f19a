// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range padding: extending the tight data range to friendlier bounds.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::range::DoubleRange;

/// How an axis extends its data range before it becomes the actual range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RangePadding {
    /// Use the data range as is.
    None,
    /// Add about 1/20 of the range at each end, keep zero in view, then snap to the interval.
    Normal,
    /// Snap both ends outward to interval multiples.
    Round,
    /// Snap only the start down to an interval multiple.
    RoundStart,
    /// Snap only the end up to an interval multiple.
    RoundEnd,
    /// Subtract one interval from the start.
    PrependInterval,
    /// Add one interval to the end.
    AppendInterval,
    /// [`RangePadding::Round`] on a value axis, [`RangePadding::None`] otherwise.
    #[default]
    Auto,
}

impl RangePadding {
    /// Resolves [`RangePadding::Auto`] for an axis.
    ///
    /// `is_value_axis` is `true` when the axis plots series values rather than
    /// their x positions, taking chart transposition into account.
    pub fn resolve(self, is_value_axis: bool) -> Self {
        match self {
            Self::Auto if is_value_axis => Self::Round,
            Self::Auto => Self::None,
            other => other,
        }
    }
}

/// Applies `padding` to `range` using `interval`.
///
/// `Auto` must already be resolved; it is treated as `None` here. An invalid
/// interval (non-finite or non-positive) skips padding entirely.
///
/// `interval_for` recomputes an interval for a new range. `Normal` padding
/// uses it to re-snap the maximum when the padded minimum lands on zero.
pub(crate) fn apply_padding(
    range: DoubleRange,
    interval: f64,
    padding: RangePadding,
    interval_for: &dyn Fn(DoubleRange) -> f64,
) -> DoubleRange {
    if range.is_empty() || !(interval.is_finite() && interval > 0.0) {
        return range;
    }
    let (start, end) = (range.start(), range.end());
    let padded = match padding {
        RangePadding::None | RangePadding::Auto => range,
        RangePadding::Round => DoubleRange::new(
            (start / interval).floor() * interval,
            (end / interval).ceil() * interval,
        ),
        RangePadding::RoundStart => DoubleRange::new((start / interval).floor() * interval, end),
        RangePadding::RoundEnd => DoubleRange::new(start, (end / interval).ceil() * interval),
        RangePadding::PrependInterval => DoubleRange::new(start - interval, end),
        RangePadding::AppendInterval => DoubleRange::new(start, end + interval),
        RangePadding::Normal => normal_padding(range, interval, interval_for),
    };
    if padded.is_finite() { padded } else { range }
}

/// The empirically tuned `Normal` padding.
///
/// The constants (`1/20`, `5/6`, `0.365`) reproduce established chart output
/// and are kept exactly.
fn normal_padding(
    range: DoubleRange,
    interval: f64,
    interval_for: &dyn Fn(DoubleRange) -> f64,
) -> DoubleRange {
    let (start, end) = (range.start(), range.end());
    let mut base = start;
    let minimum = if start < 0.0 {
        base = 0.0;
        let mut minimum = start + start / 20.0;
        let remaining = interval + minimum % interval;
        if 0.365 * interval >= remaining {
            minimum -= interval;
        }
        if minimum % interval < 0.0 {
            minimum = (minimum - interval) - minimum % interval;
        }
        minimum
    } else {
        let mut minimum = if start < (5.0 / 6.0) * end {
            0.0
        } else {
            start - (end - start) / 2.0
        };
        if minimum % interval > 0.0 {
            minimum -= minimum % interval;
        }
        minimum
    };

    let mut maximum = end + (end - base) / 20.0;
    let remaining = interval - maximum % interval;
    if 0.365 * interval >= remaining {
        maximum += interval;
    }
    if maximum % interval > 0.0 {
        maximum = (maximum + interval) - maximum % interval;
    }

    if minimum == 0.0 {
        let zero_based = interval_for(DoubleRange::new(0.0, maximum));
        if zero_based.is_finite() && zero_based > 0.0 {
            return DoubleRange::new(0.0, (maximum / zero_based).ceil() * zero_based);
        }
    }
    DoubleRange::new(minimum, maximum)
}
