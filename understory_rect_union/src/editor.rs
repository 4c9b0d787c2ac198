// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive rectangle editing on top of the union computation.
//!
//! ## Usage
//!
//! 1) Seed a [`RectEditor`] (empty, or with [`DEFAULT_RECTS`]).
//! 2) Feed pointer input to [`RectEditor::begin_drag`],
//!    [`RectEditor::update_drag`] and [`RectEditor::end_drag`]. While a drag
//!    is active, its rectangle takes part in the union.
//! 3) Call [`RectEditor::union_path`] when painting. The path is recomputed
//!    only when the rectangles, the drag, or the options changed.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_rect_union::RectEditor;
//!
//! let mut editor = RectEditor::new();
//! editor.begin_drag(Point::new(10.2, 10.4));
//! editor.update_drag(Point::new(40.0, 30.0));
//! let added = editor.end_drag(Point::new(49.7, 30.1));
//! assert_eq!(added, Some(Rect::new(10.0, 10.0, 50.0, 30.0)));
//!
//! let path = editor.union_path().unwrap();
//! assert!(!path.elements().is_empty());
//! ```

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect};
use log::{trace, warn};

use crate::error::UnionError;
use crate::options::UnionOptions;

/// A small sample layout of four overlapping rectangles.
///
/// Their union has a single outer boundary and one hole.
pub const DEFAULT_RECTS: [Rect; 4] = [
    Rect::new(65.0, 26.0, 145.0, 223.0),
    Rect::new(37.0, 145.0, 308.0, 188.0),
    Rect::new(230.0, 67.0, 324.0, 204.0),
    Rect::new(119.0, 48.0, 259.0, 105.0),
];

/// Pointer-drag state for drawing a new rectangle.
///
/// Positions are rounded to whole units. The draft rectangle spans the
/// point where the drag started and the latest pointer position, in either
/// direction.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RectDrag {
    origin: Option<Point>,
    corner: Point,
}

impl RectDrag {
    /// Smallest width and height a finished drag must have to be kept.
    pub const MIN_EXTENT: f64 = 1.0;

    /// Starts a new drag at `pos`.
    pub fn start(&mut self, pos: Point) {
        let origin = pos.round();
        self.origin = Some(origin);
        self.corner = origin;
    }

    /// Moves the dragged corner to `pos`, returning the new draft if it changed.
    pub fn update(&mut self, pos: Point) -> Option<Rect> {
        self.origin?;
        let corner = pos.round();
        if corner == self.corner {
            return None;
        }
        self.corner = corner;
        self.draft()
    }

    /// The rectangle currently being drawn, standardized.
    #[must_use]
    pub fn draft(&self) -> Option<Rect> {
        self.origin.map(|origin| Rect::from_points(origin, self.corner))
    }

    /// Ends the drag at `pos`, returning the rectangle if it is large enough.
    pub fn finish(&mut self, pos: Point) -> Option<Rect> {
        self.origin?;
        self.corner = pos.round();
        let rect = self.draft();
        self.cancel();
        rect.filter(|r| r.width() >= Self::MIN_EXTENT && r.height() >= Self::MIN_EXTENT)
    }

    /// Abandons the drag.
    pub fn cancel(&mut self) {
        self.origin = None;
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }
}

/// A rectangle list with drag editing and a cached rounded union.
#[derive(Clone, Debug, Default)]
pub struct RectEditor {
    rects: Vec<Rect>,
    drag: RectDrag,
    options: UnionOptions,
    revision: u64,
    path: BezPath,
    path_revision: Option<u64>,
}

impl RectEditor {
    /// Creates an editor with no rectangles and default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an editor seeded with [`DEFAULT_RECTS`].
    #[must_use]
    pub fn with_default_rects() -> Self {
        Self {
            rects: DEFAULT_RECTS.to_vec(),
            ..Self::default()
        }
    }

    /// The committed rectangles, in insertion order.
    #[must_use]
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// The options used for the union.
    #[must_use]
    pub fn options(&self) -> UnionOptions {
        self.options
    }

    /// Replaces the union options.
    pub fn set_options(&mut self, options: UnionOptions) {
        if self.options != options {
            self.options = options;
            self.bump();
        }
    }

    /// Monotonic counter bumped whenever the union input changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Appends a rectangle, standardizing it first.
    pub fn push(&mut self, rect: Rect) -> Result<(), UnionError> {
        if !rect.is_finite() {
            warn!("rejecting non-finite rectangle {rect:?}");
            return Err(UnionError::InvalidRect {
                index: self.rects.len(),
                rect,
            });
        }
        self.rects.push(rect.abs());
        self.bump();
        Ok(())
    }

    /// Replaces all rectangles. Nothing changes if any of them is not finite.
    pub fn set_rects(&mut self, rects: impl IntoIterator<Item = Rect>) -> Result<(), UnionError> {
        let mut next = Vec::new();
        for (index, rect) in rects.into_iter().enumerate() {
            if !rect.is_finite() {
                warn!("rejecting non-finite rectangle {rect:?} at {index}");
                return Err(UnionError::InvalidRect { index, rect });
            }
            next.push(rect.abs());
        }
        self.rects = next;
        self.bump();
        Ok(())
    }

    /// Removes every rectangle and abandons any drag.
    pub fn clear(&mut self) {
        if !self.rects.is_empty() || self.drag.is_dragging() {
            self.rects.clear();
            self.drag.cancel();
            self.bump();
        }
    }

    /// Starts drawing a rectangle at `pos`.
    pub fn begin_drag(&mut self, pos: Point) {
        self.drag.start(pos);
        self.bump();
    }

    /// Moves the corner of the rectangle being drawn.
    pub fn update_drag(&mut self, pos: Point) {
        if self.drag.update(pos).is_some() {
            self.bump();
        }
    }

    /// Finishes the drag at `pos`, committing and returning the rectangle if
    /// it is at least one unit wide and tall.
    pub fn end_drag(&mut self, pos: Point) -> Option<Rect> {
        if !self.drag.is_dragging() {
            return None;
        }
        let rect = self.drag.finish(pos);
        match rect {
            Some(rect) => {
                trace!("committing dragged rectangle {rect:?}");
                self.rects.push(rect);
            }
            None => trace!("dropping dragged rectangle below minimum size"),
        }
        self.bump();
        rect
    }

    /// Abandons the drag without committing anything.
    pub fn cancel_drag(&mut self) {
        if self.drag.is_dragging() {
            self.drag.cancel();
            self.bump();
        }
    }

    /// The rectangle currently being drawn, if any.
    #[must_use]
    pub fn draft(&self) -> Option<Rect> {
        self.drag.draft()
    }

    /// The committed rectangles plus the draft, as handed to the union.
    #[must_use]
    pub fn union_rects(&self) -> Vec<Rect> {
        let mut rects = self.rects.clone();
        rects.extend(self.drag.draft());
        rects
    }

    /// The rounded union of [`union_rects`](Self::union_rects).
    ///
    /// On failure the previously computed path stays available through
    /// [`last_path`](Self::last_path).
    pub fn union_path(&mut self) -> Result<&BezPath, UnionError> {
        if self.path_revision != Some(self.revision) {
            let path = self
                .options
                .rounded_union(&self.union_rects())
                .inspect_err(|err| warn!("keeping previous union path: {err}"))?;
            self.path = path;
            self.path_revision = Some(self.revision);
        }
        Ok(&self.path)
    }

    /// The most recently computed path, which may be stale.
    #[must_use]
    pub fn last_path(&self) -> Option<&BezPath> {
        self.path_revision.map(|_| &self.path)
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Shape;

    #[test]
    fn drag_rounds_and_standardizes() {
        let mut drag = RectDrag::default();
        drag.start(Point::new(20.4, 20.6));
        assert_eq!(
            drag.update(Point::new(9.6, 30.2)),
            Some(Rect::new(10.0, 21.0, 20.0, 30.0))
        );
        // Same rounded position: no change.
        assert_eq!(drag.update(Point::new(9.9, 29.8)), None);
        assert!(drag.is_dragging());
    }

    #[test]
    fn tiny_drags_are_dropped() {
        let mut drag = RectDrag::default();
        drag.start(Point::new(5.0, 5.0));
        assert_eq!(drag.finish(Point::new(5.3, 50.0)), None);
        assert!(!drag.is_dragging());
        assert_eq!(drag.update(Point::new(9.0, 9.0)), None);
    }

    #[test]
    fn draft_joins_the_union_until_cancelled() {
        let mut editor = RectEditor::new();
        editor.push(Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        editor.begin_drag(Point::new(20.0, 0.0));
        editor.update_drag(Point::new(30.0, 10.0));
        assert_eq!(editor.union_rects().len(), 2);
        assert!(editor.union_path().unwrap().contains(Point::new(25.0, 5.0)));

        editor.cancel_drag();
        assert_eq!(editor.union_rects().len(), 1);
        assert!(!editor.union_path().unwrap().contains(Point::new(25.0, 5.0)));
    }

    #[test]
    fn path_is_cached_per_revision() {
        let mut editor = RectEditor::with_default_rects();
        let first = editor.union_path().unwrap().clone();
        let revision = editor.revision();
        assert_eq!(editor.union_path().unwrap(), &first);
        assert_eq!(editor.revision(), revision);

        editor.set_options(UnionOptions::new().with_corner_radius(6.0));
        assert!(editor.revision() > revision);
        assert_ne!(editor.union_path().unwrap(), &first);

        // Same options again: no invalidation.
        let revision = editor.revision();
        editor.set_options(UnionOptions::new().with_corner_radius(6.0));
        assert_eq!(editor.revision(), revision);
    }

    #[test]
    fn failed_union_keeps_previous_path() {
        let mut editor = RectEditor::with_default_rects();
        let good = editor.union_path().unwrap().clone();
        editor.set_options(UnionOptions::new().with_corner_radius(f64::NAN));
        assert!(editor.union_path().is_err());
        assert_eq!(editor.last_path(), Some(&good));
    }

    #[test]
    fn push_standardizes_and_rejects_nan() {
        let mut editor = RectEditor::new();
        editor.push(Rect::new(10.0, 10.0, 0.0, 0.0)).unwrap();
        assert_eq!(editor.rects(), &[Rect::new(0.0, 0.0, 10.0, 10.0)]);
        assert!(editor.push(Rect::new(f64::NAN, 0.0, 1.0, 1.0)).is_err());
        assert_eq!(editor.rects().len(), 1);
    }

    #[test]
    fn clear_resets_everything() {
        let mut editor = RectEditor::with_default_rects();
        editor.begin_drag(Point::ZERO);
        editor.clear();
        assert!(editor.rects().is_empty());
        assert!(editor.draft().is_none());
        assert!(editor.union_path().unwrap().elements().is_empty());
    }

    #[test]
    fn default_rects_have_one_hole() {
        let contours = UnionOptions::new().contours(&DEFAULT_RECTS).unwrap();
        assert_eq!(contours.len(), 2);
        assert_eq!(contours.iter().filter(|c| c.is_hole()).count(), 1);
    }
}
