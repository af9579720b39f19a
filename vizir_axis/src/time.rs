// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Date-time axis helpers.
//!
//! Time is modeled as a numeric value in **seconds**. This module provides
//! "nice" intervals over seconds/minutes/hours/days and label formatting
//! (e.g. `1:05`, `2:03:00`, `3d 4:00`).

extern crate alloc;

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::range::DoubleRange;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;

/// Candidate steps in seconds.
const STEPS: &[f64] = &[
    1.0,
    2.0,
    5.0,
    10.0,
    15.0,
    30.0,
    MINUTE,
    2.0 * MINUTE,
    5.0 * MINUTE,
    10.0 * MINUTE,
    15.0 * MINUTE,
    30.0 * MINUTE,
    HOUR,
    2.0 * HOUR,
    3.0 * HOUR,
    6.0 * HOUR,
    12.0 * HOUR,
    DAY,
    2.0 * DAY,
    7.0 * DAY,
];

/// Picks a time step giving at most about `desired_count` intervals over `range`.
///
/// Spans under a second fall back to the decimal `{1, 2, 5}` rule. Spans past
/// the step table round up to whole weeks. Returns `NaN` for a degenerate range.
pub fn nice_time_interval(range: DoubleRange, desired_count: f64) -> f64 {
    let delta = range.delta();
    if !(delta.is_finite() && delta > 0.0) {
        return f64::NAN;
    }
    let step = delta / desired_count.max(1.0);
    if step < 1.0 {
        return crate::interval::nice_interval(range, desired_count);
    }
    for &s in STEPS {
        if s >= step {
            return s;
        }
    }
    let weeks = (step / (7.0 * DAY)).ceil();
    weeks.max(1.0) * 7.0 * DAY
}

/// Formats a tick value (seconds) given the tick step (seconds).
pub fn format_time_seconds(v: f64, step: f64) -> String {
    if !v.is_finite() {
        return alloc::format!("{v}");
    }

    let sign = if v < 0.0 { "-" } else { "" };
    let secs = {
        let secs_f = v.abs().round().clamp(i64::MIN as f64, i64::MAX as f64);
        #[allow(clippy::cast_possible_truncation, reason = "clamped to the i64 range")]
        {
            secs_f as i64
        }
    };
    let step = step.abs();

    let d = secs / 86_400;
    let h = (secs / 3600) % 24;
    let m = (secs / 60) % 60;
    let s = secs % 60;

    if step >= DAY || d > 0 {
        alloc::format!("{sign}{d}d {h}:{m:02}")
    } else if step >= HOUR || h > 0 {
        alloc::format!("{sign}{h}:{m:02}:{s:02}")
    } else if step >= MINUTE || m > 0 {
        alloc::format!("{sign}{m}:{s:02}")
    } else {
        alloc::format!("{sign}{s}")
    }
}
