// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Serde interchange form for rectangle lists.
//!
//! A rectangle is written as `[[x, y], [width, height]]`, so a list reads
//! like `[[[65,26],[80,197]],[[37,145],[271,43]]]`.

use alloc::vec::Vec;

use kurbo::Rect;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::editor::RectEditor;
use crate::error::UnionError;

/// A rectangle as `[[x, y], [width, height]]`.
///
/// Width and height may be negative; [`to_rect`](Self::to_rect) standardizes.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectRecord(pub [f64; 2], pub [f64; 2]);

impl RectRecord {
    /// The standardized rectangle this record describes.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        self.raw_rect().abs()
    }

    fn raw_rect(&self) -> Rect {
        let [x, y] = self.0;
        let [width, height] = self.1;
        Rect::new(x, y, x + width, y + height)
    }
}

impl From<Rect> for RectRecord {
    fn from(rect: Rect) -> Self {
        let rect = rect.abs();
        Self([rect.x0, rect.y0], [rect.width(), rect.height()])
    }
}

impl RectEditor {
    /// The committed rectangles as interchange records.
    #[must_use]
    pub fn records(&self) -> Vec<RectRecord> {
        self.rects().iter().copied().map(RectRecord::from).collect()
    }

    /// Replaces all rectangles with `records`.
    ///
    /// The whole import is rejected if any record is not finite.
    pub fn replace_from_records(
        &mut self,
        records: impl IntoIterator<Item = RectRecord>,
    ) -> Result<(), UnionError> {
        let mut rects = Vec::new();
        for (index, record) in records.into_iter().enumerate() {
            let rect = record.raw_rect();
            if !rect.is_finite() {
                warn!("rejecting imported rectangle {index}: {record:?}");
                return Err(UnionError::InvalidRect { index, rect });
            }
            rects.push(rect);
        }
        self.set_rects(rects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_round_trips_through_rect() {
        let record = RectRecord([65.0, 26.0], [80.0, 197.0]);
        let rect = record.to_rect();
        assert_eq!(rect, Rect::new(65.0, 26.0, 145.0, 223.0));
        assert_eq!(RectRecord::from(rect), record);
    }

    #[test]
    fn reads_the_array_form() {
        let json = "[[[65,26],[80,197]],[[37,145],[271,43]],[[230,67],[94,137]],[[119,48],[140,57]]]";
        let records: Vec<RectRecord> = serde_json::from_str(json).unwrap();
        let rects: Vec<Rect> = records.iter().map(RectRecord::to_rect).collect();
        assert_eq!(rects, crate::DEFAULT_RECTS);
        assert_eq!(
            serde_json::to_string(&records[0]).unwrap(),
            "[[65.0,26.0],[80.0,197.0]]"
        );
    }

    #[test]
    fn editor_exports_what_it_imports() {
        let mut editor = RectEditor::new();
        let records = RectEditor::with_default_rects().records();
        editor.replace_from_records(records.iter().copied()).unwrap();
        assert_eq!(editor.rects(), crate::DEFAULT_RECTS);
        assert_eq!(editor.records(), records);
    }

    #[test]
    fn negative_sizes_standardize() {
        let record = RectRecord([10.0, 10.0], [-4.0, -2.0]);
        assert_eq!(record.to_rect(), Rect::new(6.0, 8.0, 10.0, 10.0));
    }

    #[test]
    fn import_rejects_non_finite() {
        let mut editor = RectEditor::with_default_rects();
        let err = editor
            .replace_from_records([
                RectRecord([0.0, 0.0], [1.0, 1.0]),
                RectRecord([0.0, 0.0], [f64::NAN, 1.0]),
            ])
            .unwrap_err();
        assert!(matches!(err, UnionError::InvalidRect { index: 1, .. }));
        assert_eq!(editor.rects().len(), 4);
    }
}
