// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value ↔ coefficient ↔ pixel mapping.
//!
//! A *coefficient* is a position along the visible range normalized to
//! `[0, 1]`, independent of pixel size. Pixels are measured along the
//! rendered rectangle minus the plot-offset insets; vertical axes are flipped
//! so larger values sit higher on screen.

use kurbo::{Insets, Point, Rect};

use crate::config::AxisOrientation;
use crate::range::DoubleRange;
use crate::scale::{get_log_value, get_pow_value};

/// Bidirectional mapping for one axis, captured at the end of a layout pass.
///
/// The visible range must have a non-zero delta; the resolver guarantees this
/// by repairing degenerate ranges before they get here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    /// Visible range in native space (log space for log axes).
    visible: DoubleRange,
    log_base: Option<f64>,
    orientation: AxisOrientation,
    is_inversed: bool,
    rect: Rect,
    plot_offset: Insets,
}

impl CoordinateMapper {
    /// Creates a linear mapper over `visible`.
    pub fn new(
        visible: DoubleRange,
        orientation: AxisOrientation,
        is_inversed: bool,
        rect: Rect,
        plot_offset: Insets,
    ) -> Self {
        Self {
            visible,
            log_base: None,
            orientation,
            is_inversed,
            rect,
            plot_offset,
        }
    }

    /// Makes this a log mapper; `visible` is then read as a log-space range.
    pub fn with_log_base(mut self, base: f64) -> Self {
        self.log_base = Some(base);
        self
    }

    /// The rendered rectangle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Normalized position of `value` in the visible range.
    ///
    /// Log mappers send non-positive values to `0`.
    pub fn value_to_coefficient(&self, value: f64) -> f64 {
        let native = match self.log_base {
            Some(_) if value <= 0.0 => return 0.0,
            Some(base) => get_log_value(value, base),
            None => value,
        };
        let coefficient = (native - self.visible.start()) / self.visible.delta();
        if self.is_inversed {
            1.0 - coefficient
        } else {
            coefficient
        }
    }

    /// Inverse of [`CoordinateMapper::value_to_coefficient`].
    pub fn coefficient_to_value(&self, coefficient: f64) -> f64 {
        let coefficient = if self.is_inversed {
            1.0 - coefficient
        } else {
            coefficient
        };
        let native = self.visible.start() + coefficient * self.visible.delta();
        match self.log_base {
            Some(base) => get_pow_value(native, base),
            None => native,
        }
    }

    /// Pixel position of `value` along the axis (x for horizontal, y for vertical).
    pub fn value_to_point(&self, value: f64) -> f64 {
        self.coefficient_to_point(self.value_to_coefficient(value))
    }

    /// Value under `point`, reading the pixel coordinate that runs along the axis.
    pub fn point_to_value(&self, point: Point) -> f64 {
        self.coefficient_to_value(self.point_to_coefficient(point))
    }

    /// Pixel position of a coefficient along the axis.
    pub fn coefficient_to_point(&self, coefficient: f64) -> f64 {
        match self.orientation {
            AxisOrientation::Horizontal => {
                self.rect.x0 + self.plot_offset.x0 + coefficient * self.length()
            }
            AxisOrientation::Vertical => {
                self.rect.y0 + self.plot_offset.y0 + (1.0 - coefficient) * self.length()
            }
        }
    }

    /// Coefficient under `point`.
    pub fn point_to_coefficient(&self, point: Point) -> f64 {
        match self.orientation {
            AxisOrientation::Horizontal => {
                (point.x - self.rect.x0 - self.plot_offset.x0) / self.length()
            }
            AxisOrientation::Vertical => {
                1.0 - (point.y - self.rect.y0 - self.plot_offset.y0) / self.length()
            }
        }
    }

    /// Usable pixel length along the axis.
    pub fn length(&self) -> f64 {
        match self.orientation {
            AxisOrientation::Horizontal => {
                self.rect.width() - self.plot_offset.x0 - self.plot_offset.x1
            }
            AxisOrientation::Vertical => {
                self.rect.height() - self.plot_offset.y0 - self.plot_offset.y1
            }
        }
    }
}
