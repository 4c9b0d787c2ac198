// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parameters and entry points for a union computation.

use alloc::vec::Vec;

use kurbo::{BezPath, Rect};
use log::debug;

use crate::contour::{Contour, assemble_contours};
use crate::coords::CoordinateIndex;
use crate::emit::{FilletSink, emit_contours};
use crate::error::UnionError;
use crate::sweep::sweep_boundary;

/// Parameters for computing a rounded union.
///
/// Every call recomputes from scratch; nothing is cached between calls.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct UnionOptions {
    /// Amount each rectangle is shrunk on all four sides before the union.
    ///
    /// Negative values grow the rectangles instead.
    pub inset: f64,
    /// Largest fillet radius used for any corner.
    ///
    /// Each corner's radius is further clamped to half of the shorter of
    /// its two adjoining runs. Zero keeps the corners square.
    pub corner_radius: f64,
}

impl UnionOptions {
    /// Options with no inset and square corners.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inset: 0.0,
            corner_radius: 0.0,
        }
    }

    /// Returns these options with `inset` replaced.
    #[must_use]
    pub const fn with_inset(mut self, inset: f64) -> Self {
        self.inset = inset;
        self
    }

    /// Returns these options with `corner_radius` replaced.
    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Checks that the inset is finite and the corner radius is finite and
    /// non-negative.
    pub fn validate(&self) -> Result<(), UnionError> {
        if !self.inset.is_finite() {
            return Err(UnionError::InvalidParameter {
                name: "inset",
                value: self.inset,
            });
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(UnionError::InvalidParameter {
                name: "corner_radius",
                value: self.corner_radius,
            });
        }
        Ok(())
    }

    /// Validates `rects`, applies the inset, and drops rectangles left with
    /// no area.
    pub fn prepare(&self, rects: &[Rect]) -> Result<Vec<Rect>, UnionError> {
        self.validate()?;
        let mut prepared = Vec::with_capacity(rects.len());
        for (index, &rect) in rects.iter().enumerate() {
            check_rect(index, rect)?;
            let rect = shrink(rect, self.inset);
            if rect.width() > 0.0 && rect.height() > 0.0 {
                prepared.push(rect);
            }
        }
        debug!(
            "{} of {} rectangles have area after inset {}",
            prepared.len(),
            rects.len(),
            self.inset
        );
        Ok(prepared)
    }

    /// Computes the closed boundary loops of the union of `rects`.
    ///
    /// Outer boundaries and holes are both returned; see
    /// [`Contour::is_hole`].
    pub fn contours(&self, rects: &[Rect]) -> Result<Vec<Contour>, UnionError> {
        let rects = self.prepare(rects)?;
        if rects.is_empty() {
            return Ok(Vec::new());
        }
        let index = CoordinateIndex::new(&rects);
        let sides = sweep_boundary(&rects, &index)?;
        Ok(assemble_contours(sides)?)
    }

    /// Emits the rounded union of `rects` into `sink`.
    ///
    /// Nothing is emitted if the computation fails.
    pub fn emit_to<S: FilletSink + ?Sized>(
        &self,
        rects: &[Rect],
        sink: &mut S,
    ) -> Result<(), UnionError> {
        let contours = self.contours(rects)?;
        emit_contours(&contours, self.corner_radius, sink);
        Ok(())
    }

    /// Computes the rounded union of `rects` as a path of closed subpaths.
    pub fn rounded_union(&self, rects: &[Rect]) -> Result<BezPath, UnionError> {
        let mut path = BezPath::new();
        self.emit_to(rects, &mut path)?;
        Ok(path)
    }
}

/// Computes the rounded union of `rects`.
///
/// Shorthand for [`UnionOptions::rounded_union`] with the given `inset` and
/// `corner_radius`.
pub fn compute_rounded_union(
    rects: &[Rect],
    inset: f64,
    corner_radius: f64,
) -> Result<BezPath, UnionError> {
    UnionOptions::new()
        .with_inset(inset)
        .with_corner_radius(corner_radius)
        .rounded_union(rects)
}

/// Moves every side of `rect` inward by `inset`.
pub(crate) fn shrink(rect: Rect, inset: f64) -> Rect {
    Rect::new(
        rect.x0 + inset,
        rect.y0 + inset,
        rect.x1 - inset,
        rect.y1 - inset,
    )
}

/// Rejects non-finite and inverted rectangles.
pub(crate) fn check_rect(index: usize, rect: Rect) -> Result<(), UnionError> {
    if rect.is_finite() && rect.x0 <= rect.x1 && rect.y0 <= rect.y1 {
        Ok(())
    } else {
        Err(UnionError::InvalidRect { index, rect })
    }
}
