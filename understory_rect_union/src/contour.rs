// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Assembly of boundary sides into closed loops.
//!
//! Every side has a start and an end point. Sorting all endpoints by `y`
//! (then `x`) lines up the horizontal runs of the boundary: at each y-level,
//! consecutive endpoints taken two at a time are the two ends of one
//! horizontal connector, joining the end of one side to the start of the
//! next. The resulting successor relation is a permutation of the sides, and
//! its cycles are the loops.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Point;
use log::debug;

use crate::error::ConsistencyError;
use crate::sweep::BoundarySide;

/// One closed, rectilinear loop of the union boundary.
///
/// Only the vertical sides are stored; each horizontal run joins the end of
/// a side to the start of the one after it (wrapping around). Outer
/// boundaries have positive [`signed_area`](Self::signed_area), holes have
/// negative.
#[derive(Clone, Debug, PartialEq)]
pub struct Contour {
    sides: Vec<BoundarySide>,
}

impl Contour {
    /// The vertical sides of the loop in traversal order.
    #[must_use]
    pub fn sides(&self) -> &[BoundarySide] {
        &self.sides
    }

    /// Number of vertical sides; the loop has twice as many corners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sides.len()
    }

    /// Returns `true` if the loop has no sides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sides.is_empty()
    }

    /// Corner points of the loop in traversal order.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.sides.iter().flat_map(|side| [side.start(), side.end()])
    }

    /// Signed shoelace area of the loop.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let corners: Vec<Point> = self.vertices().collect();
        let mut twice = 0.0;
        for (i, p) in corners.iter().enumerate() {
            let q = corners[(i + 1) % corners.len()];
            twice += p.x * q.y - q.x * p.y;
        }
        0.5 * twice
    }

    /// Returns `true` if the loop bounds a hole in the union.
    #[must_use]
    pub fn is_hole(&self) -> bool {
        self.signed_area() < 0.0
    }
}

#[derive(Copy, Clone, Debug)]
struct Vertex {
    x: f64,
    y: f64,
    side: usize,
    is_end: bool,
}

/// Links the sides found by the sweep and splits them into loops.
pub(crate) fn assemble_contours(
    mut sides: Vec<BoundarySide>,
) -> Result<Vec<Contour>, ConsistencyError> {
    sides.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y0.total_cmp(&b.y0)));
    let next = link_sides(&sides)?;
    let contours = trace_loops(&sides, &next)?;
    debug!(
        "assembled {} contours from {} boundary sides",
        contours.len(),
        sides.len()
    );
    Ok(contours)
}

/// Computes, for each side, the index of the side that follows it.
fn link_sides(sides: &[BoundarySide]) -> Result<Vec<Option<usize>>, ConsistencyError> {
    let mut vertices = Vec::with_capacity(2 * sides.len());
    for (i, side) in sides.iter().enumerate() {
        vertices.push(Vertex {
            x: side.x,
            y: side.y0,
            side: i,
            is_end: false,
        });
        vertices.push(Vertex {
            x: side.x,
            y: side.y1,
            side: i,
            is_end: true,
        });
    }
    vertices.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));

    let mut next = vec![None; sides.len()];
    for pair in vertices.chunks_exact(2) {
        let (a, b) = (pair[0], pair[1]);
        if a.y != b.y {
            return Err(ConsistencyError::MismatchedVertices { y: a.y });
        }
        let (from, to) = match (a.is_end, b.is_end) {
            (true, false) => (a.side, b.side),
            (false, true) => (b.side, a.side),
            _ => return Err(ConsistencyError::MismatchedVertices { y: a.y }),
        };
        if next[from].is_some() {
            return Err(ConsistencyError::SuccessorLinkedTwice { side: from });
        }
        next[from] = Some(to);
    }
    Ok(next)
}

/// Follows successor links from each unvisited side until it returns.
fn trace_loops(
    sides: &[BoundarySide],
    next: &[Option<usize>],
) -> Result<Vec<Contour>, ConsistencyError> {
    let mut visited = vec![false; sides.len()];
    let mut contours = Vec::new();
    for start in 0..sides.len() {
        if visited[start] {
            continue;
        }
        let mut loop_sides = Vec::new();
        let mut at = start;
        loop {
            if visited[at] {
                return Err(ConsistencyError::OpenLoop { start });
            }
            visited[at] = true;
            loop_sides.push(sides[at]);
            at = next[at].ok_or(ConsistencyError::UnlinkedSide { side: at })?;
            if at == start {
                break;
            }
        }
        contours.push(Contour { sides: loop_sides });
    }
    Ok(contours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::Edge;

    fn left(x: f64, top: f64, bottom: f64) -> BoundarySide {
        BoundarySide {
            x,
            y0: top,
            y1: bottom,
            edge: Edge::Left,
        }
    }

    fn right(x: f64, bottom: f64, top: f64) -> BoundarySide {
        BoundarySide {
            x,
            y0: bottom,
            y1: top,
            edge: Edge::Right,
        }
    }

    #[test]
    fn rectangle_is_one_loop() {
        let contours =
            assemble_contours(vec![right(4.0, 0.0, 2.0), left(0.0, 2.0, 0.0)]).unwrap();
        assert_eq!(contours.len(), 1);
        let contour = &contours[0];
        assert_eq!(contour.len(), 2);
        assert_eq!(contour.sides()[0], left(0.0, 2.0, 0.0));
        assert_eq!(contour.signed_area(), 8.0);
        assert!(!contour.is_hole());
    }

    #[test]
    fn step_shape_links_in_order() {
        // An L: (0,0)-(2,1) plus (0,1)-(1,2).
        let sides = vec![
            left(0.0, 2.0, 0.0),
            right(1.0, 1.0, 2.0),
            right(2.0, 0.0, 1.0),
        ];
        let contours = assemble_contours(sides).unwrap();
        assert_eq!(contours.len(), 1);
        let vertices: Vec<Point> = contours[0].vertices().collect();
        assert_eq!(
            vertices,
            [
                Point::new(0.0, 2.0),
                Point::new(0.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 1.0),
                Point::new(1.0, 1.0),
                Point::new(1.0, 2.0),
            ]
        );
        assert_eq!(contours[0].signed_area(), 3.0);
    }

    #[test]
    fn unpaired_levels_are_rejected() {
        let err = assemble_contours(vec![right(0.0, 0.0, 1.0), left(5.0, 3.0, 2.0)]).unwrap_err();
        assert_eq!(err, ConsistencyError::MismatchedVertices { y: 0.0 });
    }

    #[test]
    fn same_direction_pairs_are_rejected() {
        let err = assemble_contours(vec![left(0.0, 1.0, 0.0), left(3.0, 1.0, 0.0)]).unwrap_err();
        assert_eq!(err, ConsistencyError::MismatchedVertices { y: 0.0 });
    }

    #[test]
    fn tracing_reports_broken_links() {
        let sides = [
            left(0.0, 1.0, 0.0),
            right(1.0, 0.0, 1.0),
            left(2.0, 1.0, 0.0),
        ];
        assert_eq!(
            trace_loops(&sides, &[Some(1), None, Some(0)]),
            Err(ConsistencyError::UnlinkedSide { side: 1 })
        );
        assert_eq!(
            trace_loops(&sides, &[Some(1), Some(2), Some(1)]),
            Err(ConsistencyError::OpenLoop { start: 0 })
        );
    }
}
