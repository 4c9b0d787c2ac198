// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Preparing text-layout line rectangles for a highlight union.

use alloc::vec::Vec;

use kurbo::{Rect, Vec2};

use crate::options::shrink;

/// Turns per-line used rectangles from a text layout into union input.
///
/// Lines with zero width or height (empty lines) are dropped. The rest are
/// translated by `offset`, typically the text container's inset within the
/// surface the highlight is drawn on, and shrunk by `inset` on every side
/// (negative values pad them instead). The result is meant to be unioned
/// with an inset of zero.
///
/// ```
/// use kurbo::{Rect, Vec2};
/// use understory_rect_union::{UnionOptions, line_highlight_rects};
///
/// let lines = [
///     Rect::new(0.0, 0.0, 180.0, 18.0),
///     Rect::new(0.0, 18.0, 0.0, 36.0), // blank line
///     Rect::new(0.0, 36.0, 95.0, 54.0),
/// ];
/// let rects = line_highlight_rects(lines, Vec2::new(8.0, 8.0), -2.0);
/// assert_eq!(rects.len(), 2);
///
/// let path = UnionOptions::new()
///     .with_corner_radius(5.0)
///     .rounded_union(&rects)
///     .unwrap();
/// assert!(!path.elements().is_empty());
/// ```
pub fn line_highlight_rects(
    lines: impl IntoIterator<Item = Rect>,
    offset: Vec2,
    inset: f64,
) -> Vec<Rect> {
    lines
        .into_iter()
        .filter(|line| line.width() > 0.0 && line.height() > 0.0)
        .map(|line| shrink(line + offset, inset))
        .collect()
}
