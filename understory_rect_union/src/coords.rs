// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate compaction: dense integer indices for rectangle edge coordinates.
//!
//! Each axis is indexed independently. Lookups are exact matches against the
//! coordinates that actually occur as edges; there is no interpolation.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Rect;

/// Sorted, de-duplicated edge coordinates of one axis with reverse lookup.
#[derive(Clone, Debug, Default)]
pub(crate) struct AxisIndex {
    values: Vec<f64>,
    lookup: HashMap<u64, usize>,
}

impl AxisIndex {
    /// Builds an index from (possibly repeated) finite coordinates.
    pub(crate) fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut values: Vec<f64> = values.into_iter().map(canonical).collect();
        values.sort_by(f64::total_cmp);
        values.dedup();
        let lookup = values
            .iter()
            .enumerate()
            .map(|(i, v)| (v.to_bits(), i))
            .collect();
        Self { values, lookup }
    }

    /// Position of `value` in the sorted coordinate list, if it is an edge coordinate.
    pub(crate) fn index_of(&self, value: f64) -> Option<usize> {
        self.lookup.get(&canonical(value).to_bits()).copied()
    }

    /// Coordinate stored at `index`.
    pub(crate) fn value(&self, index: usize) -> f64 {
        self.values[index]
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }
}

/// Per-axis coordinate indices for one union computation.
#[derive(Clone, Debug, Default)]
pub(crate) struct CoordinateIndex {
    pub(crate) xs: AxisIndex,
    pub(crate) ys: AxisIndex,
}

impl CoordinateIndex {
    /// Indexes the min/max coordinates of every rectangle.
    ///
    /// Callers drop degenerate rectangles beforehand so that no tree range
    /// has zero length.
    pub(crate) fn new(rects: &[Rect]) -> Self {
        Self {
            xs: AxisIndex::from_values(rects.iter().flat_map(|r| [r.x0, r.x1])),
            ys: AxisIndex::from_values(rects.iter().flat_map(|r| [r.y0, r.y1])),
        }
    }
}

/// Folds `-0.0` into `0.0` so both hash to the same key.
fn canonical(value: f64) -> f64 {
    value + 0.0
}
