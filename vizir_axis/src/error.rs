// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration diagnostics.
//!
//! Axis computation never fails: bad settings are replaced by safe defaults
//! during layout. [`AxisConfigIssue`] describes what will be replaced so hosts
//! can surface it in their own tooling.

use thiserror::Error;

/// A configuration value that layout will substitute with a default.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum AxisConfigIssue {
    /// The explicit interval is zero, negative or not finite.
    #[error("interval must be finite and positive, got {0}")]
    InvalidInterval(f64),
    /// The zoom factor is outside `(0, 1]`.
    #[error("zoom factor must lie in (0, 1], got {0}")]
    ZoomFactorOutOfRange(f64),
    /// The zoom position is outside `[0, 1 - zoom_factor]`.
    #[error("zoom position must lie in [0, 1 - zoom factor], got {0}")]
    ZoomPositionOutOfRange(f64),
    /// The log base is not usable.
    #[error("log base must be finite, positive and not 1, got {0}")]
    InvalidLogBase(f64),
    /// A pinned minimum or maximum is not finite.
    #[error("pinned bound must be finite, got {0}")]
    NonFiniteBound(f64),
    /// Both bounds are pinned and the minimum is not below the maximum.
    #[error("pinned minimum {minimum} is not below pinned maximum {maximum}")]
    InvertedBounds {
        /// The pinned minimum.
        minimum: f64,
        /// The pinned maximum.
        maximum: f64,
    },
    /// The auto-scrolling delta is zero, negative or not finite.
    #[error("auto-scrolling delta must be finite and positive, got {0}")]
    InvalidAutoScrollingDelta(f64),
    /// The label density is zero, negative or not finite.
    #[error("max labels per 100px must be finite and positive, got {0}")]
    InvalidMaxLabels(f64),
}
