// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Largest number of fraction digits [`LabelFormat::Auto`] will print.
const MAX_AUTO_DECIMALS: usize = 10;

/// How numeric label content is produced.
#[derive(Clone, Default)]
pub enum LabelFormat {
    /// Just enough decimals to tell neighbouring ticks apart.
    #[default]
    Auto,
    /// A fixed number of fraction digits.
    Fixed(usize),
    /// A template where `{value}` is replaced by the [`LabelFormat::Auto`] text,
    /// e.g. `"${value}k"`.
    Template(String),
    /// A caller-supplied formatter receiving `(value, step)`.
    Custom(Arc<dyn Fn(f64, f64) -> String>),
}

impl core::fmt::Debug for LabelFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Auto => f.write_str("Auto"),
            Self::Fixed(n) => f.debug_tuple("Fixed").field(n).finish(),
            Self::Template(t) => f.debug_tuple("Template").field(t).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl LabelFormat {
    /// Creates a [`LabelFormat::Custom`] from a closure.
    pub fn custom(f: impl Fn(f64, f64) -> String + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Formats `value`; `step` is the distance to the neighbouring tick.
    pub fn format(&self, value: f64, step: f64) -> String {
        match self {
            Self::Auto => format_tick_with_step(value, step),
            Self::Fixed(decimals) => format_fixed(value, *decimals),
            Self::Template(template) => {
                template.replace("{value}", &format_tick_with_step(value, step))
            }
            Self::Custom(f) => f(value, step),
        }
    }
}

/// Formats `value` with enough decimals to resolve `step`.
pub fn format_tick_with_step(value: f64, step: f64) -> String {
    format_fixed(value, decimals_for_step(step))
}

fn decimals_for_step(step: f64) -> usize {
    let step = step.abs();
    if !step.is_finite() || step == 0.0 || step >= 1.0 {
        return 0;
    }
    // The epsilon keeps exact powers of ten (0.1, 0.01) from gaining a digit.
    let digits = (-step.log10() - 1e-9).ceil();
    if digits <= 0.0 {
        0
    } else {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "positive and capped before conversion"
        )]
        {
            (digits.min(MAX_AUTO_DECIMALS as f64)) as usize
        }
    }
}

fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return alloc::format!("{value}");
    }
    let text = alloc::format!("{value:.decimals$}");
    // Avoid "-0" / "-0.00" for values that round to zero.
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        return String::from(&text[1..]);
    }
    text
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn auto_uses_step_magnitude() {
        assert_eq!(LabelFormat::Auto.format(20.0, 20.0), "20");
        assert_eq!(LabelFormat::Auto.format(0.30000000000000004, 0.1), "0.3");
        assert_eq!(LabelFormat::Auto.format(1.25, 0.05), "1.25");
        assert_eq!(LabelFormat::Auto.format(-0.000_000_1, 0.5), "0.0");
    }

    #[test]
    fn fixed_and_template() {
        assert_eq!(LabelFormat::Fixed(2).format(3.0, 1.0), "3.00");
        assert_eq!(
            LabelFormat::Template(String::from("${value}k")).format(40.0, 20.0),
            "$40k"
        );
    }

    #[test]
    fn custom_receives_value_and_step() {
        let fmt = LabelFormat::custom(|v, step| alloc::format!("{v}/{step}"));
        assert_eq!(fmt.format(4.0, 2.0), "4/2");
    }
}
