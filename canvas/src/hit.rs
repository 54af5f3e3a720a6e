//! Hit-testing against box chrome and connection delete buttons.
//!
//! Every box carries the same chrome at fixed world-space offsets from its
//! top-left corner. The client lays out its DOM with the same constants, so a
//! world point resolves to the control the user sees under the pointer.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::consts::{
    CONNECTOR_HIT_SLOP, CONNECTOR_RADIUS, CONTROL_INSET, CONTROL_SIZE, DRAG_HANDLE_HEIGHT, RESIZE_HANDLE_SIZE, SETTINGS_TOP,
};
use crate::doc::{BoxId, BoxObject, ConnectionId, DocStore};
use crate::geometry::{self, Rect};

/// Which control of a box was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxPart {
    /// Strip along the top edge used to move the box.
    DragHandle,
    /// The `×` button in the top-right corner.
    DeleteButton,
    /// The gear icon that opens the color picker.
    Settings,
    /// Grip in the bottom-right corner used to resize the box.
    ResizeHandle,
    /// Connector on the left edge; receives connections.
    InputConnector,
    /// Connector on the right edge; starts connections.
    OutputConnector,
    /// The text body.
    Content,
}

/// Result of a hit test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    Box { id: BoxId, part: BoxPart },
    ConnectionDelete(ConnectionId),
}

/// Bounds of the delete button of `obj`.
#[must_use]
pub fn delete_button_rect(obj: &BoxObject) -> Rect {
    Rect::new(obj.right() - CONTROL_INSET - CONTROL_SIZE, obj.top + CONTROL_INSET, CONTROL_SIZE, CONTROL_SIZE)
}

/// Bounds of the settings icon of `obj`.
#[must_use]
pub fn settings_rect(obj: &BoxObject) -> Rect {
    Rect::new(obj.right() - CONTROL_INSET - CONTROL_SIZE, obj.top + SETTINGS_TOP, CONTROL_SIZE, CONTROL_SIZE)
}

/// Bounds of the drag strip of `obj`.
#[must_use]
pub fn drag_handle_rect(obj: &BoxObject) -> Rect {
    Rect::new(obj.left, obj.top, obj.width, DRAG_HANDLE_HEIGHT.min(obj.height))
}

/// Bounds of the resize grip of `obj`.
#[must_use]
pub fn resize_handle_rect(obj: &BoxObject) -> Rect {
    let size = RESIZE_HANDLE_SIZE;
    Rect::new(obj.right() - size, obj.bottom() - size, size, size)
}

fn within_connector(center: Point, pt: Point) -> bool {
    let r = CONNECTOR_RADIUS + CONNECTOR_HIT_SLOP;
    let dx = pt.x - center.x;
    let dy = pt.y - center.y;
    dx * dx + dy * dy <= r * r
}

/// Which part of `obj` (if any) is under `pt`.
///
/// Connectors overhang the box edges, so they are checked before the body.
/// The resize grip wins over the other controls so a minimum-size box can
/// always be grown again.
#[must_use]
pub fn hit_box(pt: Point, obj: &BoxObject) -> Option<BoxPart> {
    if within_connector(geometry::output_connector_center(obj), pt) {
        return Some(BoxPart::OutputConnector);
    }
    if within_connector(geometry::input_connector_center(obj), pt) {
        return Some(BoxPart::InputConnector);
    }
    if !geometry::box_rect(obj).contains(pt) {
        return None;
    }
    if resize_handle_rect(obj).contains(pt) {
        return Some(BoxPart::ResizeHandle);
    }
    if delete_button_rect(obj).contains(pt) {
        return Some(BoxPart::DeleteButton);
    }
    if settings_rect(obj).contains(pt) {
        return Some(BoxPart::Settings);
    }
    if drag_handle_rect(obj).contains(pt) {
        return Some(BoxPart::DragHandle);
    }
    Some(BoxPart::Content)
}

/// Test what is under `world_pt`.
///
/// Connection delete buttons are drawn above boxes and win; boxes are then
/// tested topmost first.
#[must_use]
pub fn hit_test(world_pt: Point, doc: &DocStore) -> Option<Hit> {
    for conn in doc.connections().iter().rev() {
        if let Some(line) = geometry::connection_line(doc, conn) {
            if line.delete_button_rect().contains(world_pt) {
                return Some(Hit::ConnectionDelete(conn.id));
            }
        }
    }
    let boxes: Vec<&BoxObject> = doc.boxes().collect();
    boxes.into_iter().rev().find_map(|obj| {
        hit_box(world_pt, obj).map(|part| Hit::Box { id: obj.id.clone(), part })
    })
}
