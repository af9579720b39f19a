// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label and tick generation.
//!
//! Labels walk the visible range at the visible interval. Positions are
//! computed in the scale's native space and reported in data units, the same
//! space as [`crate::AxisState::visible_range`].

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::category::LabelPlacement;
use crate::config::{AxisConfig, EdgeLabelsVisibility, LabelStyle};
use crate::range::DoubleRange;
use crate::resolver::ResolvedRanges;
use crate::scale::Scale;

/// Upper bound on positions walked in one pass.
const MAX_LABELS: usize = 10_000;

/// A generated axis label.
///
/// The position is fixed once generated; hooks may change everything else.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    position: f64,
    /// Label text.
    pub content: String,
    /// Paint and size overrides.
    pub style: LabelStyle,
    /// Whether the renderer should draw it.
    pub is_visible: bool,
}

impl AxisLabel {
    /// Creates a visible label.
    pub fn new(position: f64, content: impl Into<String>, style: LabelStyle) -> Self {
        Self {
            position,
            content: content.into(),
            style,
            is_visible: true,
        }
    }

    /// Position in data units.
    pub fn position(&self) -> f64 {
        self.position
    }
}

/// Labels and ticks for one layout pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct GeneratedLabels {
    pub(crate) labels: Vec<AxisLabel>,
    pub(crate) ticks: Vec<f64>,
    pub(crate) minor_ticks: Vec<f64>,
}

/// Coefficient rounded to three decimals, as an integer key.
fn rounded_coefficient(native: f64, visible: DoubleRange) -> i64 {
    let key = ((native - visible.start()) / visible.delta() * 1000.0).round();
    #[allow(
        clippy::cast_possible_truncation,
        reason = "label positions lie inside the visible range, so the key is within ±1000"
    )]
    {
        key as i64
    }
}

/// Generates labels, major ticks and minor ticks for the resolved ranges.
pub(crate) fn generate(
    config: &AxisConfig,
    scale: &Scale,
    ranges: &ResolvedRanges,
) -> GeneratedLabels {
    let visible = ranges.visible_range;
    if visible.is_empty() || !(visible.delta() > 0.0) || !visible.is_finite() {
        return GeneratedLabels::default();
    }
    let interval = ranges.label_interval();
    let is_category = matches!(scale, Scale::Category(_));
    let is_zoomed = ranges.is_zoomed();
    let edge_visible = !is_category
        && match config.edge_labels_visibility {
            EdgeLabelsVisibility::Default => false,
            EdgeLabelsVisibility::Visible => !is_zoomed,
            EdgeLabelsVisibility::AlwaysVisible => true,
        };
    let pinned_start = !is_category && config.pinned_minimum().is_some() && !is_zoomed;

    let start = if edge_visible || pinned_start {
        visible.start()
    } else {
        visible.start() - visible.start() % interval
    };

    // Coarsen the step to a whole multiple of the interval when walking it
    // one interval at a time would exceed the cap.
    let steps = visible.delta() / interval;
    let step = if steps > MAX_LABELS as f64 {
        interval * (steps / MAX_LABELS as f64).ceil()
    } else {
        interval
    };

    let mut out = GeneratedLabels::default();
    let mut natives: Vec<f64> = Vec::new();
    let mut last_key: Option<i64> = None;
    // A position within this distance of the range end is snapped onto it.
    let snap = step * 1e-9;
    for i in 0..=MAX_LABELS + 1 {
        let mut native = start + step * i as f64;
        if (native - visible.end()).abs() <= snap {
            native = visible.end();
        }
        if native > visible.end() {
            break;
        }
        if !visible.inside(native) {
            continue;
        }
        let key = rounded_coefficient(native, visible);
        if last_key == Some(key) {
            continue;
        }
        last_key = Some(key);
        natives.push(native);
    }

    if edge_visible && last_key != Some(rounded_coefficient(visible.end(), visible)) {
        natives.push(visible.end());
    }

    for &native in &natives {
        let mut label = AxisLabel::new(
            scale.from_native(native),
            scale.label_text(native, interval, &config.label_format),
            config.label_style.clone(),
        );
        if let Some(hook) = &config.label_created {
            let position = label.position;
            hook(&mut label);
            label.position = position;
        }
        out.labels.push(label);
    }

    let majors = major_ticks(config, scale, &natives, visible);
    if config.minor_ticks_per_interval > 0 {
        out.minor_ticks = minor_ticks(config, scale, &majors, visible, step);
    }
    out.ticks = majors.iter().map(|&n| scale.from_native(n)).collect();
    out
}

/// Major tick positions in native space.
fn major_ticks(
    config: &AxisConfig,
    scale: &Scale,
    natives: &[f64],
    visible: DoubleRange,
) -> Vec<f64> {
    let between = matches!(scale, Scale::Category(_))
        && config.label_placement == LabelPlacement::BetweenTicks;
    if !between {
        return natives.to_vec();
    }
    let mut ticks: Vec<f64> = natives
        .iter()
        .map(|&n| n - 0.5)
        .filter(|&t| visible.inside(t))
        .collect();
    if let Some(&last) = natives.last()
        && visible.inside(last + 0.5)
    {
        ticks.push(last + 0.5);
    }
    ticks
}

/// Minor ticks between consecutive native major ticks, plus the stretch
/// before the first one.
fn minor_ticks(
    config: &AxisConfig,
    scale: &Scale,
    majors: &[f64],
    visible: DoubleRange,
    interval: f64,
) -> Vec<f64> {
    let count = config.minor_ticks_per_interval;
    let first = majors
        .first()
        .copied()
        .unwrap_or_else(|| (visible.start() / interval).floor() * interval + interval);
    let mut anchors: Vec<f64> = Vec::with_capacity(majors.len() + 1);
    anchors.push(first - interval);
    anchors.extend_from_slice(majors);

    let mut out = Vec::new();
    let mut last = f64::NEG_INFINITY;
    for anchor in anchors {
        scale.minor_ticks_after(anchor, interval, count, |native| {
            if visible.inside(native) && native > last {
                last = native;
                out.push(scale.from_native(native));
            }
        });
    }
    out
}
