#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::BoxObject;

fn make_box(id: &str, left: f64, top: f64, text: &str) -> BoxObject {
    BoxObject {
        id: id.to_owned(),
        left,
        top,
        width: 200.0,
        height: 150.0,
        background_color: "#3b3f46".to_owned(),
        text: text.to_owned(),
    }
}

#[test]
fn empty_document_is_margin_sized() {
    let svg = render_svg(&DocStore::new());
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains("width=\"100\" height=\"100\""));
    assert!(!svg.contains("<rect"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn sized_to_canvas_extent() {
    let mut doc = DocStore::new();
    doc.insert_box(make_box("a", 300.0, 50.0, ""));
    let svg = render_svg(&doc);
    assert!(svg.contains("width=\"600\" height=\"300\""));
    assert!(svg.contains("viewBox=\"0 0 600 300\""));
}

#[test]
fn negative_space_box_stays_inside_view_box() {
    let mut doc = DocStore::new();
    doc.insert_box(make_box("a", -300.0, -200.0, "lost"));
    let svg = render_svg(&doc);
    assert!(svg.contains("width=\"500\" height=\"400\" viewBox=\"-400 -300 500 400\""));
    assert!(svg.contains("<rect x=\"-300\" y=\"-200\""));
    assert!(svg.contains(">lost</tspan>"));
}

#[test]
fn export_frame_spans_both_sides_of_origin() {
    let mut doc = DocStore::new();
    doc.insert_box(make_box("a", -50.0, 20.0, ""));
    doc.insert_box(make_box("b", 400.0, 300.0, ""));
    let frame = export_frame(&doc);
    assert_eq!((frame.x, frame.y), (-150.0, 0.0));
    assert_eq!((frame.width, frame.height), (850.0, 550.0));
    for obj in doc.boxes() {
        assert!(obj.left >= frame.x && obj.right() <= frame.x + frame.width);
        assert!(obj.top >= frame.y && obj.bottom() <= frame.y + frame.height);
    }
}

#[test]
fn boxes_render_with_fill() {
    let mut doc = DocStore::new();
    doc.insert_box(make_box("a", 10.0, 20.0, ""));
    let svg = render_svg(&doc);
    assert!(svg.contains("<rect x=\"10\" y=\"20\" width=\"200\" height=\"150\""));
    assert!(svg.contains("fill=\"#3b3f46\""));
    assert!(!svg.contains("<text"));
}

#[test]
fn multiline_text_becomes_tspans() {
    let mut doc = DocStore::new();
    doc.insert_box(make_box("a", 0.0, 0.0, "first\nsecond"));
    let svg = render_svg(&doc);
    assert_eq!(svg.matches("<tspan").count(), 2);
    assert!(svg.contains(">first</tspan>"));
    assert!(svg.contains(">second</tspan>"));
}

#[test]
fn text_is_escaped() {
    let mut doc = DocStore::new();
    doc.insert_box(make_box("a", 0.0, 0.0, "a < b & \"c\""));
    let svg = render_svg(&doc);
    assert!(svg.contains("a &lt; b &amp; &quot;c&quot;"));
    assert!(!svg.contains("a < b"));
}

#[test]
fn connections_render_between_connectors() {
    let mut doc = DocStore::new();
    doc.insert_box(make_box("a", 0.0, 0.0, ""));
    doc.insert_box(make_box("b", 400.0, 0.0, ""));
    doc.add_connection("a", "b").unwrap();
    let svg = render_svg(&doc);
    assert!(svg.contains("<line x1=\"200\" y1=\"75\" x2=\"400\" y2=\"75\""));
    assert!(svg.contains("marker-end=\"url(#arrow)\""));
}

#[test]
fn lines_are_drawn_after_boxes() {
    let mut doc = DocStore::new();
    doc.insert_box(make_box("a", 0.0, 0.0, ""));
    doc.insert_box(make_box("b", 400.0, 0.0, ""));
    doc.add_connection("a", "b").unwrap();
    let svg = render_svg(&doc);
    let last_rect = svg.rfind("<rect").unwrap();
    let line = svg.find("<line").unwrap();
    assert!(line > last_rect);
}

#[test]
fn escape_xml_covers_all_specials() {
    assert_eq!(escape_xml("<&>\"'"), "&lt;&amp;&gt;&quot;&apos;");
    assert_eq!(escape_xml("plain"), "plain");
}
