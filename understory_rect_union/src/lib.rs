// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_rect_union --heading-base-level=0

//! Understory Rect Union: the outline of a set of rectangles, with rounded corners.
//!
//! Given axis-aligned rectangles that may overlap, touch, or nest, this crate
//! computes the boundary of their union as closed rectilinear loops and emits
//! it as a path whose corners are replaced by circular fillets. Typical uses
//! are text-selection highlights built from per-line rectangles and
//! "blob" backgrounds behind groups of boxes.
//!
//! The computation is a plane sweep:
//! - Edge coordinates are compacted to dense indices per axis.
//! - A left-to-right sweep over rectangle edges maintains y-coverage in a
//!   segment tree ([`CoverageTree`]) and reports the vertical pieces of the
//!   boundary ([`BoundarySide`]).
//! - Sides are linked end-to-start through the horizontal runs between
//!   them and traced into loops ([`Contour`]). Holes come out with the
//!   opposite orientation to outer boundaries.
//! - Each loop is emitted with fillets clamped to half of the shorter
//!   adjoining run, so rounding never crosses the shape's own boundary.
//!   In a [`kurbo::BezPath`] each fillet is a single cubic approximating
//!   the quarter circle, so radii measured from the path are approximate;
//!   [`FilletSink`] receives the exact radius.
//!
//! It does **not** own the rectangles, cache results between calls, or
//! render anything. Callers produce a rectangle list (from a layout engine,
//! an editor, ...) and fill or stroke the returned [`kurbo::BezPath`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Shape};
//! use understory_rect_union::UnionOptions;
//!
//! // Two lines of a text selection, the second one shorter.
//! let lines = [
//!     Rect::new(0.0, 0.0, 120.0, 20.0),
//!     Rect::new(0.0, 20.0, 70.0, 40.0),
//! ];
//!
//! let options = UnionOptions::new().with_corner_radius(4.0);
//! let path = options.rounded_union(&lines).unwrap();
//!
//! assert!(path.contains(Point::new(100.0, 10.0)));
//! assert!(!path.contains(Point::new(100.0, 30.0)));
//!
//! // One loop: the step where the lines meet is part of the same outline.
//! assert_eq!(options.contours(&lines).unwrap().len(), 1);
//! ```
//!
//! ## Custom output
//!
//! [`UnionOptions::emit_to`] drives any [`FilletSink`], which receives each
//! corner together with its clamped radius. Implement it to target a backend
//! with native arcs instead of the cubic approximation [`kurbo::BezPath`]
//! uses.
//!
//! ## Editing helpers
//!
//! [`RectEditor`] keeps a rectangle list, turns pointer drags into new
//! rectangles, and caches the rounded union until something changes.
//! [`line_highlight_rects`] prepares per-line rectangles from a text layout.
//! With the `serde` feature, [`RectRecord`] reads and writes rectangles in the
//! `[[x, y], [width, height]]` array form.
//!
//! ## Errors
//!
//! Rectangles with NaN or infinite coordinates, or with `x0 > x1` or
//! `y0 > y1`, are rejected with [`UnionError::InvalidRect`]. Rectangles that
//! have no area (before or after the inset) are skipped silently. If the
//! sweep ever breaks one of its own invariants the call fails with
//! [`UnionError::Inconsistent`] instead of returning a wrong shape.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod contour;
mod coords;
mod editor;
mod emit;
mod error;
mod highlight;
#[cfg(feature = "serde")]
mod interchange;
mod options;
mod sweep;
mod tree;

pub use contour::Contour;
pub use editor::{DEFAULT_RECTS, RectDrag, RectEditor};
pub use emit::{FilletSink, emit_contours};
pub use error::{ConsistencyError, UnionError};
pub use highlight::line_highlight_rects;
#[cfg(feature = "serde")]
pub use interchange::RectRecord;
pub use options::{UnionOptions, compute_rounded_union};
pub use sweep::{BoundarySide, Edge};
pub use tree::{Coverage, CoverageTree};
