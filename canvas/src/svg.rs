//! Standalone SVG export of a diagram.
//!
//! The output mirrors the world layer: same coordinates, same connector
//! positions. The frame starts at the world origin like the editor's world
//! layer, and grows to the left or top when boxes sit in negative space.
//! Editor chrome (handles, buttons, connectors) is left out.

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

use crate::consts::{CANVAS_MARGIN, DRAG_HANDLE_HEIGHT, LINE_STROKE, LINE_STROKE_WIDTH};
use crate::doc::{BoxObject, DocStore};
use crate::geometry::{self, Rect};

const CORNER_RADIUS: f64 = 6.0;
const TEXT_PADDING: f64 = 10.0;
const FONT_SIZE: f64 = 14.0;
const LINE_HEIGHT: f64 = 18.0;
const TEXT_FILL: &str = "#fff";

/// Render `doc` as a self-contained SVG document.
#[must_use]
pub fn render_svg(doc: &DocStore) -> String {
    let Rect { x, y, width, height } = export_frame(doc);

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"{x} {y} {width} {height}\">\n"
    ));
    svg.push_str("<defs>\n");
    svg.push_str(&format!(
        "  <marker id=\"arrow\" viewBox=\"0 0 10 10\" refX=\"10\" refY=\"5\" markerWidth=\"8\" markerHeight=\"8\" orient=\"auto\"><path d=\"M0,0 L10,5 L0,10 z\" fill=\"{LINE_STROKE}\" /></marker>\n"
    ));
    svg.push_str("</defs>\n");
    svg.push_str("<style>\n  text { font-family: system-ui, sans-serif; }\n</style>\n");

    for obj in doc.boxes() {
        render_box(&mut svg, obj);
    }

    // Lines go on top so they stay visible where they cross boxes.
    for conn in doc.connections() {
        let Some(line) = geometry::connection_line(doc, conn) else {
            continue;
        };
        svg.push_str(&format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{LINE_STROKE}\" stroke-width=\"{LINE_STROKE_WIDTH}\" marker-end=\"url(#arrow)\" />\n",
            line.x1, line.y1, line.x2, line.y2
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// World-space area covered by the export.
///
/// The right and bottom edges match [`geometry::canvas_extent`]. The left and
/// top edges stay at zero unless a box reaches past them, in which case they
/// move out to that box plus the same margin.
#[must_use]
pub fn export_frame(doc: &DocStore) -> Rect {
    let extent = geometry::canvas_extent(doc);
    let (min_left, min_top) = doc
        .boxes()
        .fold((0.0_f64, 0.0_f64), |(l, t), obj| (l.min(obj.left), t.min(obj.top)));
    let x = if min_left < 0.0 { min_left - CANVAS_MARGIN } else { 0.0 };
    let y = if min_top < 0.0 { min_top - CANVAS_MARGIN } else { 0.0 };
    Rect::new(x, y, extent.width - x, extent.height - y)
}

fn render_box(out: &mut String, obj: &BoxObject) {
    out.push_str(&format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{CORNER_RADIUS}\" ry=\"{CORNER_RADIUS}\" fill=\"{}\" />\n",
        obj.left,
        obj.top,
        obj.width,
        obj.height,
        escape_xml(&obj.background_color)
    ));
    if obj.text.is_empty() {
        return;
    }
    let x = obj.left + TEXT_PADDING;
    let first_y = obj.top + DRAG_HANDLE_HEIGHT + LINE_HEIGHT;
    out.push_str(&format!("<text x=\"{x}\" y=\"{first_y}\" font-size=\"{FONT_SIZE}\" fill=\"{TEXT_FILL}\">"));
    for (i, line) in obj.text.lines().enumerate() {
        let dy = if i == 0 { 0.0 } else { LINE_HEIGHT };
        out.push_str(&format!("<tspan x=\"{x}\" dy=\"{dy}\">{}</tspan>", escape_xml(line)));
    }
    out.push_str("</text>\n");
}

/// Escape the five XML special characters.
#[must_use]
pub fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
