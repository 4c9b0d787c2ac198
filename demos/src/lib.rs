// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the rect union demos.

use kurbo::{BezPath, Rect};
use understory_rect_union::RectRecord;

/// Parses rectangles in the `[[x, y], [width, height]]` array form.
pub fn parse_rects(json: &str) -> Result<Vec<Rect>, serde_json::Error> {
    let records: Vec<RectRecord> = serde_json::from_str(json)?;
    Ok(records.iter().map(RectRecord::to_rect).collect())
}

/// One layer of a demo drawing.
#[derive(Debug)]
pub enum Layer<'a> {
    /// A path filled with the nonzero rule.
    Fill {
        /// Outline to fill.
        path: &'a BezPath,
        /// SVG color.
        color: &'a str,
    },
    /// Hairline rectangle outlines.
    Outline {
        /// Rectangles to stroke.
        rects: &'a [Rect],
        /// SVG color.
        color: &'a str,
    },
}

/// Renders `layers` into a standalone SVG document covering `view`.
pub fn svg_document(view: Rect, layers: &[Layer<'_>]) -> String {
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n",
        view.x0,
        view.y0,
        view.width(),
        view.height()
    );
    for layer in layers {
        match layer {
            Layer::Fill { path, color } => out.push_str(&format!(
                "  <path d=\"{}\" fill=\"{color}\" fill-rule=\"nonzero\"/>\n",
                path.to_svg()
            )),
            Layer::Outline { rects, color } => {
                for r in *rects {
                    out.push_str(&format!(
                        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"0.5\"/>\n",
                        r.x0,
                        r.y0,
                        r.width(),
                        r.height()
                    ));
                }
            }
        }
    }
    out.push_str("</svg>\n");
    out
}

/// Bounds of `rects` grown by `margin`, or a unit square when empty.
pub fn view_box(rects: &[Rect], margin: f64) -> Rect {
    rects
        .iter()
        .copied()
        .reduce(|a, b| a.union(b))
        .unwrap_or(Rect::new(0.0, 0.0, 1.0, 1.0))
        .inflate(margin, margin)
}
