// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection highlight behind a few lines of laid-out text.
//!
//! Line boxes stand in for what a text layout would report. Blank lines are
//! skipped, the rest are padded and merged into one rounded shape.
//!
//! Run:
//! - `cargo run -p understory_demos --example text_highlight > highlight.svg`

use kurbo::{Rect, Vec2};
use understory_demos::{Layer, svg_document, view_box};
use understory_rect_union::{UnionOptions, line_highlight_rects};

const LINE_HEIGHT: f64 = 20.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let widths = [212.0, 274.0, 0.0, 131.0, 248.0, 96.0];
    let lines: Vec<Rect> = widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            let y = i as f64 * LINE_HEIGHT;
            Rect::new(0.0, y, w, y + LINE_HEIGHT)
        })
        .collect();

    // Text container inset of 16, highlight padded by 3 around each line.
    let rects = line_highlight_rects(lines.iter().copied(), Vec2::new(16.0, 16.0), -3.0);
    let path = UnionOptions::new()
        .with_corner_radius(6.0)
        .rounded_union(&rects)?;

    let glyph_runs: Vec<Rect> = lines
        .iter()
        .filter(|l| l.width() > 0.0)
        .map(|l| (*l + Vec2::new(16.0, 16.0)).inset((0.0, -5.0)))
        .collect();

    print!(
        "{}",
        svg_document(
            view_box(&rects, 16.0),
            &[
                Layer::Fill {
                    path: &path,
                    color: "#fde293",
                },
                Layer::Outline {
                    rects: &glyph_runs,
                    color: "#5f6368",
                },
            ],
        )
    );
    Ok(())
}
