// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category domains: distinct x values and the index each series point maps to.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::hash::{Hash, Hasher};

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::range::DoubleRange;

/// A category key: text or a number.
#[derive(Clone, Debug)]
pub enum CategoryValue {
    /// A text category.
    Text(String),
    /// A numeric category (compared by value, with `-0.0 == 0.0` and all `NaN`s equal).
    Number(f64),
}

impl CategoryValue {
    fn number_bits(v: f64) -> u64 {
        if v == 0.0 {
            0.0_f64.to_bits()
        } else if v.is_nan() {
            f64::NAN.to_bits()
        } else {
            v.to_bits()
        }
    }
}

impl PartialEq for CategoryValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => Self::number_bits(*a) == Self::number_bits(*b),
            _ => false,
        }
    }
}

impl Eq for CategoryValue {}

impl Hash for CategoryValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Text(s) => {
                0_u8.hash(state);
                s.hash(state);
            }
            Self::Number(v) => {
                1_u8.hash(state);
                Self::number_bits(*v).hash(state);
            }
        }
    }
}

impl core::fmt::Display for CategoryValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for CategoryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CategoryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CategoryValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// How series points are assigned to category slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryArrangement {
    /// Index-arranged: every distinct x value owns one slot, in first-seen order,
    /// and each point is looked up by its value. A slot's label is its value.
    #[default]
    Grouped,
    /// Value-arranged: each point sits at its own position in its series. A
    /// slot's label joins the distinct values the series have at that position.
    Positional,
}

/// Where category labels sit relative to ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LabelPlacement {
    /// Ticks and labels share the category positions.
    #[default]
    OnTicks,
    /// Ticks fall halfway between categories; the range grows by half a slot at each end.
    BetweenTicks,
}

/// The slot lookup for a category axis.
///
/// Built once per layout pass from the x values of every series bound to the axis.
#[derive(Clone, Debug, Default)]
pub struct CategoryIndex {
    arrangement: CategoryArrangement,
    distinct: Vec<CategoryValue>,
    series_values: Vec<Vec<CategoryValue>>,
    series_indexes: Vec<Vec<usize>>,
}

impl CategoryIndex {
    /// Builds the lookup from each series' x values, in series order.
    pub fn build<'a>(
        series: impl IntoIterator<Item = &'a [CategoryValue]>,
        arrangement: CategoryArrangement,
    ) -> Self {
        let mut slots: HashMap<CategoryValue, usize> = HashMap::new();
        let mut distinct = Vec::new();
        let mut series_values = Vec::new();
        let mut series_indexes = Vec::new();
        for values in series {
            let mut indexes = Vec::with_capacity(values.len());
            for (position, value) in values.iter().enumerate() {
                let slot = *slots.entry(value.clone()).or_insert_with(|| {
                    distinct.push(value.clone());
                    distinct.len() - 1
                });
                indexes.push(match arrangement {
                    CategoryArrangement::Grouped => slot,
                    CategoryArrangement::Positional => position,
                });
            }
            series_values.push(values.to_vec());
            series_indexes.push(indexes);
        }
        Self {
            arrangement,
            distinct,
            series_values,
            series_indexes,
        }
    }

    /// Distinct x values across all series, in first-seen order.
    pub fn distinct_values(&self) -> &[CategoryValue] {
        &self.distinct
    }

    /// Slot index of every point of series `series`.
    pub fn series_indexes(&self, series: usize) -> Option<&[usize]> {
        self.series_indexes.get(series).map(Vec::as_slice)
    }

    /// Number of slots on the axis.
    pub fn len(&self) -> usize {
        match self.arrangement {
            CategoryArrangement::Grouped => self.distinct.len(),
            CategoryArrangement::Positional => self
                .series_values
                .iter()
                .map(Vec::len)
                .max()
                .unwrap_or(0),
        }
    }

    /// Returns `true` if no series contributed any value.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index range covered by series `series`.
    pub fn series_range(&self, series: usize) -> DoubleRange {
        self.series_indexes(series)
            .map(|ix| DoubleRange::from_values(ix.iter().map(|&i| i as f64)))
            .unwrap_or(DoubleRange::EMPTY)
    }

    /// Label text for slot `index`, or `None` past the last slot.
    pub fn label(&self, index: usize) -> Option<String> {
        match self.arrangement {
            CategoryArrangement::Grouped => self.distinct.get(index).map(ToString::to_string),
            CategoryArrangement::Positional => {
                let mut parts: SmallVec<[&CategoryValue; 4]> = SmallVec::new();
                for values in &self.series_values {
                    if let Some(v) = values.get(index)
                        && !parts.contains(&v)
                    {
                        parts.push(v);
                    }
                }
                if parts.is_empty() {
                    return None;
                }
                let mut out = String::new();
                for (i, v) in parts.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&v.to_string());
                }
                Some(out)
            }
        }
    }
}
