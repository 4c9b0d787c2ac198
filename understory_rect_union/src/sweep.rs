// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Left-to-right sweep that discovers the vertical sides of the union boundary.
//!
//! Every rectangle contributes a left-edge event and a right-edge event.
//! Events are grouped by `(x, edge)`, left groups before right groups at the
//! same x. A left edge reports the uncovered part of its y-range *before*
//! inserting it: that part is about to become covered, so it is boundary. A
//! right edge reports the uncovered part *after* removing its range: that
//! part has just become exposed. Swapping either order shifts the boundary by
//! one sweep step.

use alloc::vec::Vec;
use core::ops::Range;

use kurbo::{Point, Rect};
use log::{debug, trace};

use crate::coords::{AxisIndex, CoordinateIndex};
use crate::error::ConsistencyError;
use crate::tree::CoverageTree;

/// Which edge of a rectangle an event or boundary side came from.
///
/// The derived ordering puts `Left` before `Right`, which is the order the
/// sweep processes groups sharing an x-coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Edge {
    /// A rectangle's minimum-x edge; the union's boundary runs toward `-y`.
    Left,
    /// A rectangle's maximum-x edge; the union's boundary runs toward `+y`.
    Right,
}

/// A vertical piece of the union boundary.
///
/// The side runs from `(x, y0)` to `(x, y1)`. Sides found on left edges
/// have `y0 > y1`, sides found on right edges have `y0 < y1`, so every loop
/// built from them is consistently oriented and holes run opposite to
/// outer boundaries.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundarySide {
    /// Sweep position at which the side was found.
    pub x: f64,
    /// Start of the side.
    pub y0: f64,
    /// End of the side.
    pub y1: f64,
    /// Edge type of the sweep group that found the side.
    pub edge: Edge,
}

impl BoundarySide {
    /// The point where the side starts.
    #[must_use]
    pub fn start(&self) -> Point {
        Point::new(self.x, self.y0)
    }

    /// The point where the side ends.
    #[must_use]
    pub fn end(&self) -> Point {
        Point::new(self.x, self.y1)
    }

    /// The middle of the side.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        Point::new(self.x, 0.5 * (self.y0 + self.y1))
    }
}

#[derive(Clone, Debug)]
struct SideEvent {
    x: usize,
    edge: Edge,
    ys: Range<usize>,
}

impl SideEvent {
    fn sort_key(&self) -> (usize, Edge, usize, usize) {
        (self.x, self.edge, self.ys.start, self.ys.end)
    }
}

fn side_events(
    rects: &[Rect],
    index: &CoordinateIndex,
) -> Result<Vec<SideEvent>, ConsistencyError> {
    let mut events = Vec::with_capacity(2 * rects.len());
    let lookup = |axis: &AxisIndex, v: f64| {
        axis.index_of(v).ok_or(ConsistencyError::UnindexedCoordinate)
    };
    for rect in rects {
        let ys = lookup(&index.ys, rect.y0)?..lookup(&index.ys, rect.y1)?;
        if ys.is_empty() {
            continue;
        }
        events.push(SideEvent {
            x: lookup(&index.xs, rect.x0)?,
            edge: Edge::Left,
            ys: ys.clone(),
        });
        events.push(SideEvent {
            x: lookup(&index.xs, rect.x1)?,
            edge: Edge::Right,
            ys,
        });
    }
    events.sort_unstable_by_key(SideEvent::sort_key);
    Ok(events)
}

/// Sweeps `rects` and returns the vertical sides of their union's boundary.
///
/// `rects` must already be validated and free of zero-area entries, and
/// `index` must have been built from the same rectangles.
pub(crate) fn sweep_boundary(
    rects: &[Rect],
    index: &CoordinateIndex,
) -> Result<Vec<BoundarySide>, ConsistencyError> {
    let events = side_events(rects, index)?;
    let mut tree = CoverageTree::new(index.ys.len());
    let mut runs: Vec<Range<usize>> = Vec::new();
    let mut sides = Vec::new();
    let mut group: Option<(usize, Edge)> = None;

    for event in &events {
        if group != Some((event.x, event.edge)) {
            if let Some((x, edge)) = group {
                flush_group(&mut runs, x, edge, index, &mut sides);
                if cfg!(debug_assertions) {
                    tree.verify()?;
                }
            }
            group = Some((event.x, event.edge));
        }
        match event.edge {
            Edge::Left => {
                tree.collect_empty(event.ys.clone(), &mut runs);
                tree.adjust(event.ys.clone(), 1);
            }
            Edge::Right => {
                tree.adjust(event.ys.clone(), -1);
                tree.collect_empty(event.ys.clone(), &mut runs);
            }
        }
    }
    if let Some((x, edge)) = group {
        flush_group(&mut runs, x, edge, index, &mut sides);
    }

    tree.verify()?;
    if !tree.is_clear() {
        return Err(ConsistencyError::ResidualCoverage);
    }
    debug!(
        "swept {} edge events over {} x {} coordinates into {} boundary sides",
        events.len(),
        index.xs.len(),
        index.ys.len(),
        sides.len()
    );
    Ok(sides)
}

/// Turns the runs collected for one `(x, edge)` group into boundary sides.
fn flush_group(
    runs: &mut Vec<Range<usize>>,
    x: usize,
    edge: Edge,
    index: &CoordinateIndex,
    sides: &mut Vec<BoundarySide>,
) {
    if runs.is_empty() {
        return;
    }
    // Runs from different events of a group are disjoint but may abut.
    runs.sort_unstable_by_key(|run| run.start);
    runs.dedup_by(|next, prev| {
        if prev.end == next.start {
            prev.end = next.end;
            true
        } else {
            false
        }
    });
    trace!("sweep group x#{x} {edge:?}: {} boundary runs", runs.len());

    let gx = index.xs.value(x);
    for run in runs.drain(..) {
        let lo = index.ys.value(run.start);
        let hi = index.ys.value(run.end);
        let (y0, y1) = match edge {
            Edge::Left => (hi, lo),
            Edge::Right => (lo, hi),
        };
        sides.push(BoundarySide {
            x: gx,
            y0,
            y1,
            edge,
        });
    }
}
