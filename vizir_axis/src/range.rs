// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `(start, end)` value type shared by every stage of the axis pipeline.

/// An ordered, closed interval of `f64` values.
///
/// A non-empty range always satisfies `start <= end`. The distinguished
/// [`DoubleRange::EMPTY`] value means "no data" and absorbs nothing: the union
/// of `EMPTY` with any range is that range.
#[derive(Clone, Copy, Debug)]
pub struct DoubleRange {
    start: f64,
    end: f64,
}

impl DoubleRange {
    /// The empty range.
    pub const EMPTY: Self = Self {
        start: f64::NAN,
        end: f64::NAN,
    };

    /// Creates a range covering `a` and `b`, in either order.
    ///
    /// If either bound is not finite, the result is [`DoubleRange::EMPTY`], so
    /// a range built from bad data drops out of any later union.
    pub fn new(a: f64, b: f64) -> Self {
        if !a.is_finite() || !b.is_finite() {
            return Self::EMPTY;
        }
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Returns the smallest range containing every finite value of `values`.
    ///
    /// Non-finite values are ignored. Returns [`DoubleRange::EMPTY`] if no finite
    /// value is present.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        values
            .into_iter()
            .fold(Self::EMPTY, |range, v| range.union_value(v))
    }

    /// Lower bound (`NaN` when empty).
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Upper bound (`NaN` when empty).
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Returns `true` for [`DoubleRange::EMPTY`].
    pub fn is_empty(&self) -> bool {
        self.start.is_nan()
    }

    /// `end - start`; `NaN` when empty.
    pub fn delta(&self) -> f64 {
        self.end - self.start
    }

    /// The convex hull of both ranges.
    pub fn union(self, other: Self) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Extends the range to include `value`. Non-finite values are ignored.
    pub fn union_value(self, value: f64) -> Self {
        if !value.is_finite() {
            return self;
        }
        if self.is_empty() {
            return Self {
                start: value,
                end: value,
            };
        }
        Self {
            start: self.start.min(value),
            end: self.end.max(value),
        }
    }

    /// Returns `true` if `start <= value <= end`.
    pub fn inside(&self, value: f64) -> bool {
        value >= self.start && value <= self.end
    }

    /// Returns `true` if `other` lies within this range, allowing `tolerance` at each end.
    pub fn contains_range(&self, other: Self, tolerance: f64) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        other.start >= self.start - tolerance && other.end <= self.end + tolerance
    }

    /// Returns `true` if both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

impl Default for DoubleRange {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl PartialEq for DoubleRange {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => true,
            (false, false) => self.start == other.start && self.end == other.end,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn new_orders_bounds() {
        let r = DoubleRange::new(10.0, -2.0);
        assert_eq!(r.start(), -2.0);
        assert_eq!(r.end(), 10.0);
        assert_eq!(r.delta(), 12.0);
    }

    #[test]
    fn non_finite_bounds_make_an_empty_range() {
        assert!(DoubleRange::new(f64::NAN, 1.0).is_empty());
        assert!(DoubleRange::new(0.0, f64::INFINITY).is_empty());
        assert!(DoubleRange::new(f64::NEG_INFINITY, 0.0).is_empty());
        let kept = DoubleRange::new(2.0, 5.0);
        assert_eq!(kept.union(DoubleRange::new(0.0, f64::INFINITY)), kept);
    }

    #[test]
    fn empty_is_identity_for_union() {
        let r = DoubleRange::new(1.0, 2.0);
        assert_eq!(DoubleRange::EMPTY.union(r), r);
        assert_eq!(r.union(DoubleRange::EMPTY), r);
        assert!(DoubleRange::EMPTY.union(DoubleRange::EMPTY).is_empty());
    }

    #[test]
    fn union_is_convex_hull() {
        let a = DoubleRange::new(0.0, 3.0);
        let b = DoubleRange::new(5.0, 8.0);
        assert_eq!(a.union(b), DoubleRange::new(0.0, 8.0));
    }

    #[test]
    fn union_value_extends_and_skips_non_finite() {
        let r = DoubleRange::EMPTY.union_value(4.0).union_value(-1.0);
        assert_eq!(r, DoubleRange::new(-1.0, 4.0));
        assert_eq!(r.union_value(f64::NAN), r);
        assert_eq!(r.union_value(f64::INFINITY), r);
    }

    #[test]
    fn inside_is_closed_on_both_ends() {
        let r = DoubleRange::new(0.0, 1.0);
        assert!(r.inside(0.0));
        assert!(r.inside(1.0));
        assert!(!r.inside(1.0 + 1e-12));
        assert!(!DoubleRange::EMPTY.inside(0.0));
    }

    #[test]
    fn from_values_ignores_nan() {
        let r = DoubleRange::from_values([3.0, f64::NAN, 9.0, 1.0]);
        assert_eq!(r, DoubleRange::new(1.0, 9.0));
        assert!(DoubleRange::from_values([f64::NAN]).is_empty());
    }
}
