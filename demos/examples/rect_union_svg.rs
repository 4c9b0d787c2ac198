// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rounded union of a rectangle list, written as SVG.
//!
//! Without a file argument the built-in sample layout is used. A file holds
//! rectangles as `[[[x, y], [width, height]], ...]`.
//!
//! Run:
//! - `cargo run -p understory_demos --example rect_union_svg > union.svg`
//! - `cargo run -p understory_demos --example rect_union_svg -- 12 2 rects.json > union.svg`
//!
//! Arguments are the corner radius (default 8), the inset (default 0) and an
//! optional rectangle file.

use std::env;

use understory_demos::{Layer, parse_rects, svg_document, view_box};
use understory_rect_union::{DEFAULT_RECTS, UnionOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let radius: f64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(8.0);
    let inset: f64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(0.0);
    let rects = match args.next() {
        Some(file) => parse_rects(&std::fs::read_to_string(file)?)?,
        None => DEFAULT_RECTS.to_vec(),
    };

    let options = UnionOptions::new()
        .with_corner_radius(radius)
        .with_inset(inset);
    let contours = options.contours(&rects)?;
    let path = options.rounded_union(&rects)?;

    let holes = contours.iter().filter(|c| c.is_hole()).count();
    eprintln!(
        "{} rectangles -> {} loops ({} holes)",
        rects.len(),
        contours.len(),
        holes
    );

    print!(
        "{}",
        svg_document(
            view_box(&rects, 10.0),
            &[
                Layer::Fill {
                    path: &path,
                    color: "#8ab4f8",
                },
                Layer::Outline {
                    rects: &rects,
                    color: "#1a73e8",
                },
            ],
        )
    );
    Ok(())
}
