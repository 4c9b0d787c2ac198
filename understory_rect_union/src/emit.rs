// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Emission of contours as paths with filleted corners.
//!
//! Each loop starts at the middle of its first vertical side. Every corner
//! is reached from the midpoint of one leg and left toward the midpoint of
//! the other, and its fillet radius is clamped to the distance from the
//! corner to both midpoints. Two fillets on the same straight run can
//! therefore touch but never overlap.

use kurbo::{BezPath, Point};

use crate::contour::Contour;

/// Distance along a quarter circle's tangent to its cubic Bézier control point,
/// as a fraction of the radius: `4/3 * (sqrt(2) - 1)`.
const QUARTER_ARC_HANDLE: f64 = 0.552_284_749_830_793_4;

/// Receiver for the primitives of a rounded outline.
///
/// [`BezPath`] implements this, approximating each fillet with the standard
/// single-cubic quarter circle. Implement it directly to consume exact arcs,
/// for example to drive a backend with native arc support.
pub trait FilletSink {
    /// Starts a new closed subpath at `point`.
    fn begin(&mut self, point: Point);

    /// Continues along the straight leg from `from` toward `corner`, rounds
    /// the corner with a circular arc of `radius` tangent to both legs, and
    /// stops on the leg from `corner` toward `to`.
    ///
    /// A `radius` of zero is a sharp corner: the subpath goes to `corner`.
    fn fillet(&mut self, from: Point, corner: Point, to: Point, radius: f64);

    /// Closes the current subpath back to where it began.
    fn close(&mut self);
}

impl FilletSink for BezPath {
    fn begin(&mut self, point: Point) {
        self.move_to(point);
    }

    fn fillet(&mut self, from: Point, corner: Point, to: Point, radius: f64) {
        if radius <= 0.0 {
            self.line_to(corner);
            return;
        }
        let t1 = corner + (from - corner) * (radius / (from - corner).hypot());
        let t2 = corner + (to - corner) * (radius / (to - corner).hypot());
        self.line_to(t1);
        self.curve_to(
            t1.lerp(corner, QUARTER_ARC_HANDLE),
            t2.lerp(corner, QUARTER_ARC_HANDLE),
            t2,
        );
    }

    fn close(&mut self) {
        self.close_path();
    }
}

/// Emits every contour into `sink`, rounding corners by at most `max_radius`.
pub fn emit_contours<S: FilletSink + ?Sized>(contours: &[Contour], max_radius: f64, sink: &mut S) {
    for contour in contours {
        emit_contour(contour, max_radius, sink);
    }
}

fn emit_contour<S: FilletSink + ?Sized>(contour: &Contour, max_radius: f64, sink: &mut S) {
    let sides = contour.sides();
    let Some(first) = sides.first() else {
        return;
    };
    let mut point = first.midpoint();
    sink.begin(point);
    for (i, from) in sides.iter().enumerate() {
        let to = &sides[(i + 1) % sides.len()];
        let across = Point::new(0.5 * (from.x + to.x), from.y1);
        sink.fillet(
            point,
            from.end(),
            across,
            fillet_radius(point, across, max_radius),
        );
        let next = to.midpoint();
        sink.fillet(
            across,
            to.start(),
            next,
            fillet_radius(across, next, max_radius),
        );
        point = next;
    }
    sink.close();
}

/// Largest usable radius for a corner between the legs ending at `a` and `b`.
fn fillet_radius(a: Point, b: Point, max_radius: f64) -> f64 {
    max_radius.min((a.x - b.x).abs()).min((a.y - b.y).abs())
}
