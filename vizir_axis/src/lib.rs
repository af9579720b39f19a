// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cartesian axis engine for VizIR charts.
//!
//! Given the ranges contributed by plotted series, a plot size and the host's
//! zoom state, this crate decides:
//! - the **actual range** (data extent after padding) and its tick interval,
//! - the **visible range** shown under the current zoom or auto-scroll window,
//! - the **labels and ticks** along the visible range, and
//! - a **coordinate mapper** between data values, `[0, 1]` coefficients and pixels.
//!
//! Linear, logarithmic, category and date-time scales share one pipeline; the
//! per-kind differences live in [`Scale`].
//!
//! Everything is recomputed from scratch by [`recompute`] once per layout pass
//! and returned as an immutable [`AxisState`]. Drawing is out of scope.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod axis;
mod category;
mod config;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod interval;
mod labels;
mod mapper;
mod padding;
mod range;
mod resolver;
mod scale;
#[cfg(test)]
mod scenario_tests;
mod time;

pub use axis::{AxisInputs, AxisState, SeriesData, recompute};
pub use category::{CategoryArrangement, CategoryIndex, CategoryValue, LabelPlacement};
pub use config::{
    ActualRangeChangedHook, AutoScrollingMode, AxisConfig, AxisOrientation, DEFAULT_LOG_BASE,
    EdgeLabelsVisibility, LabelCreatedHook, LabelStyle, MIN_ZOOM_FACTOR, ScaleKind,
};
pub use error::AxisConfigIssue;
pub use format::{LabelFormat, format_tick_with_step};
pub use interval::{
    HORIZONTAL_DENSITY, VERTICAL_DENSITY, category_interval, desired_intervals_count,
    log_interval, nice_interval,
};
pub use labels::AxisLabel;
pub use mapper::CoordinateMapper;
pub use padding::RangePadding;
pub use range::DoubleRange;
pub use resolver::ActualRangeChanged;
pub use scale::{Scale, get_log_value, get_pow_value};
pub use time::{format_time_seconds, nice_time_interval};
