// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-kind scale behavior.
//!
//! Every stage of the pipeline works in a scale's *native* space: data units
//! for linear, date-time and category axes, `log_base(value)` for log axes.
//! [`Scale`] converts in and out of that space and supplies the pieces that
//! differ per kind (interval rule, padding, label text, minor tick spacing).

extern crate alloc;

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::category::{CategoryIndex, LabelPlacement};
use crate::config::{AxisConfig, DEFAULT_LOG_BASE, ScaleKind, is_usable_log_base};
use crate::format::LabelFormat;
use crate::interval::{category_interval, log_interval, nice_interval};
use crate::padding::{RangePadding, apply_padding};
use crate::range::DoubleRange;
use crate::time::{format_time_seconds, nice_time_interval};

/// `log_base(value)`, with values `<= 0` (and `NaN`) clamped to `1` first.
pub fn get_log_value(value: f64, base: f64) -> f64 {
    let value = if value > 0.0 { value } else { 1.0 };
    // `ln(x) / ln(10)` misses exact powers of ten by an ulp.
    if base == 10.0 {
        value.log10()
    } else {
        value.ln() / base.ln()
    }
}

/// `base ^ value`, the inverse of [`get_log_value`] for positive inputs.
pub fn get_pow_value(value: f64, base: f64) -> f64 {
    base.powf(value)
}

/// A scale resolved for one layout pass.
#[derive(Clone, Debug)]
pub enum Scale {
    /// Linear values.
    Linear,
    /// Log values with a usable base.
    Log {
        /// Log base.
        base: f64,
    },
    /// Category slots.
    Category(CategoryIndex),
    /// Timestamps in seconds.
    DateTime,
}

impl Scale {
    /// Resolves `kind`, substituting [`DEFAULT_LOG_BASE`] for an unusable log base.
    ///
    /// `categories` is only kept for [`ScaleKind::Category`].
    pub fn new(kind: ScaleKind, categories: CategoryIndex) -> Self {
        match kind {
            ScaleKind::Linear => Self::Linear,
            ScaleKind::Log { base } => Self::Log {
                base: if is_usable_log_base(base) {
                    base
                } else {
                    DEFAULT_LOG_BASE
                },
            },
            ScaleKind::Category => Self::Category(categories),
            ScaleKind::DateTime => Self::DateTime,
        }
    }

    /// The log base, for log scales.
    pub fn log_base(&self) -> Option<f64> {
        match self {
            Self::Log { base } => Some(*base),
            _ => None,
        }
    }

    /// The slot lookup, for category scales.
    pub fn category_index(&self) -> Option<&CategoryIndex> {
        match self {
            Self::Category(index) => Some(index),
            _ => None,
        }
    }

    /// Converts a data value into native space.
    pub fn to_native(&self, value: f64) -> f64 {
        match self {
            Self::Log { base } => get_log_value(value, *base),
            _ => value,
        }
    }

    /// Converts a native position back into data units.
    pub fn from_native(&self, native: f64) -> f64 {
        match self {
            Self::Log { base } => get_pow_value(native, *base),
            _ => native,
        }
    }

    /// Converts a data range into native space.
    pub fn range_to_native(&self, range: DoubleRange) -> DoubleRange {
        if range.is_empty() {
            return range;
        }
        DoubleRange::new(self.to_native(range.start()), self.to_native(range.end()))
    }

    /// Converts a native range back into data units.
    pub fn range_from_native(&self, range: DoubleRange) -> DoubleRange {
        if range.is_empty() {
            return range;
        }
        DoubleRange::new(
            self.from_native(range.start()),
            self.from_native(range.end()),
        )
    }

    /// Computes the automatic interval for a native range.
    pub(crate) fn interval(&self, range: DoubleRange, desired_count: f64) -> f64 {
        match self {
            Self::Linear => nice_interval(range, desired_count),
            Self::Log { .. } => log_interval(range, desired_count),
            Self::Category(_) => category_interval(range, desired_count),
            Self::DateTime => nice_time_interval(range, desired_count),
        }
    }

    /// Pads a native range.
    ///
    /// Category axes ignore the padding policy; they only widen by half a slot
    /// when labels sit between ticks.
    pub(crate) fn pad(
        &self,
        range: DoubleRange,
        interval: f64,
        config: &AxisConfig,
        desired_count: f64,
    ) -> DoubleRange {
        match self {
            Self::Category(_) => match config.label_placement {
                LabelPlacement::BetweenTicks => {
                    DoubleRange::new(range.start() - 0.5, range.end() + 0.5)
                }
                LabelPlacement::OnTicks => range,
            },
            _ => {
                let padding = config.range_padding.resolve(config.is_value_axis());
                if padding == RangePadding::None {
                    return range;
                }
                apply_padding(range, interval, padding, &|r| {
                    self.interval(r, desired_count)
                })
            }
        }
    }

    /// Label text for a native position.
    pub(crate) fn label_text(&self, native: f64, interval: f64, format: &LabelFormat) -> String {
        match self {
            Self::Category(index) => {
                let slot = native.round();
                if slot >= 0.0 && slot < index.len() as f64 {
                    let slot = {
                        #[allow(
                            clippy::cast_possible_truncation,
                            reason = "non-negative and below the category count"
                        )]
                        {
                            slot as usize
                        }
                    };
                    if let Some(text) = index.label(slot) {
                        return text;
                    }
                }
                format.format(native, interval)
            }
            Self::Log { base } => {
                let value = get_pow_value(native, *base);
                format.format(value, value)
            }
            Self::DateTime => match format {
                LabelFormat::Auto => format_time_seconds(native, interval),
                _ => format.format(native, interval),
            },
            Self::Linear => format.format(native, interval),
        }
    }

    /// Minor tick positions (native) following the major position `major`.
    ///
    /// Linear-like scales subdivide the interval evenly. Log scales subdivide
    /// evenly in data units, which bunches minors toward the next power.
    pub(crate) fn minor_ticks_after(
        &self,
        major: f64,
        interval: f64,
        count: usize,
        mut emit: impl FnMut(f64),
    ) {
        let parts = (count + 1) as f64;
        match self {
            Self::Log { base } => {
                let lo = get_pow_value(major, *base);
                let hi = get_pow_value(major + interval, *base);
                let step = (hi - lo) / parts;
                for k in 1..=count {
                    emit(get_log_value(lo + step * k as f64, *base));
                }
            }
            _ => {
                let step = interval / parts;
                for k in 1..=count {
                    emit(major + step * k as f64);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn log_and_pow_are_inverse_for_positive_values() {
        for base in [2.0, 10.0, core::f64::consts::E] {
            for x in [1e-6, 0.5, 1.0, 3.0, 1000.0, 1.5e12] {
                let back = get_pow_value(get_log_value(x, base), base);
                assert!((back - x).abs() <= x * 1e-12, "{x} -> {back} (base {base})");
            }
        }
    }

    #[test]
    fn non_positive_values_clamp_to_one() {
        assert_eq!(get_log_value(0.0, 10.0), 0.0);
        assert_eq!(get_log_value(-5.0, 10.0), 0.0);
    }

    #[test]
    fn unusable_log_base_falls_back_to_ten() {
        let scale = Scale::new(ScaleKind::Log { base: -2.0 }, CategoryIndex::default());
        assert_eq!(scale.log_base(), Some(DEFAULT_LOG_BASE));
    }

    #[test]
    fn log_minor_ticks_are_evenly_spaced_in_data_units() {
        let scale = Scale::Log { base: 10.0 };
        let mut minors = std::vec::Vec::new();
        scale.minor_ticks_after(0.0, 1.0, 8, |n| minors.push(scale.from_native(n)));
        assert_eq!(minors.len(), 8);
        for (i, v) in minors.iter().enumerate() {
            assert!((v - (i + 2) as f64).abs() < 1e-9, "{minors:?}");
        }
    }

    #[test]
    fn category_label_text_uses_slots() {
        let xs = [crate::CategoryValue::from("a"), crate::CategoryValue::from("b")];
        let index = CategoryIndex::build(
            [xs.as_slice()],
            crate::category::CategoryArrangement::Grouped,
        );
        let scale = Scale::Category(index);
        assert_eq!(scale.label_text(1.0, 1.0, &LabelFormat::Auto), "b");
    }
}
