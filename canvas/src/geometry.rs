//! Connector and connection geometry, computed from the model in world space.
//!
//! Connection lines live in the same transformed layer as the boxes, so every
//! position here is independent of the camera: panning or zooming never moves
//! a line endpoint off its connector.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::camera::Point;
use crate::consts::{CANVAS_MARGIN, CONNECTION_DELETE_SIZE};
use crate::doc::{BoxObject, Connection, DocStore};

/// Axis-aligned rectangle in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Whether `pt` lies inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.x + self.width && pt.y >= self.y && pt.y <= self.y + self.height
    }
}

/// Width and height of the world layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

/// A rendered connection segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl ConnectionLine {
    #[must_use]
    pub fn between(from: Point, to: Point) -> Self {
        Self { x1: from.x, y1: from.y, x2: to.x, y2: to.y }
    }

    #[must_use]
    pub fn midpoint(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Top-left corner of the delete button, which is centered on the midpoint.
    #[must_use]
    pub fn delete_button_origin(&self) -> Point {
        let mid = self.midpoint();
        let half = CONNECTION_DELETE_SIZE / 2.0;
        Point::new(mid.x - half, mid.y - half)
    }

    /// Bounds of the delete button.
    #[must_use]
    pub fn delete_button_rect(&self) -> Rect {
        let origin = self.delete_button_origin();
        Rect::new(origin.x, origin.y, CONNECTION_DELETE_SIZE, CONNECTION_DELETE_SIZE)
    }
}

/// Bounds of a box.
#[must_use]
pub fn box_rect(obj: &BoxObject) -> Rect {
    Rect::new(obj.left, obj.top, obj.width, obj.height)
}

/// Center of the input connector, on the middle of the left edge.
#[must_use]
pub fn input_connector_center(obj: &BoxObject) -> Point {
    Point::new(obj.left, obj.top + obj.height / 2.0)
}

/// Center of the output connector, on the middle of the right edge.
#[must_use]
pub fn output_connector_center(obj: &BoxObject) -> Point {
    Point::new(obj.right(), obj.top + obj.height / 2.0)
}

/// Line from the source box's output connector to the destination's input connector.
///
/// Returns `None` if either box is missing from `doc`.
#[must_use]
pub fn connection_line(doc: &DocStore, conn: &Connection) -> Option<ConnectionLine> {
    let from = doc.get(&conn.from_box_id)?;
    let to = doc.get(&conn.to_box_id)?;
    Some(ConnectionLine::between(output_connector_center(from), input_connector_center(to)))
}

/// Size of the world layer: the furthest box edge plus [`CANVAS_MARGIN`].
#[must_use]
pub fn canvas_extent(doc: &DocStore) -> Extent {
    let (max_right, max_bottom) = doc
        .boxes()
        .fold((0.0_f64, 0.0_f64), |(r, b), obj| (r.max(obj.right()), b.max(obj.bottom())));
    Extent { width: max_right + CANVAS_MARGIN, height: max_bottom + CANVAS_MARGIN }
}
