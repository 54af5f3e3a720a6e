//! Inline styles for the world layer and everything positioned inside it.
//!
//! All positions are world units; the world layer's CSS transform maps them
//! to the screen, so nothing here depends on the camera except
//! [`world_layer_style`].

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use canvas::camera::Camera;
use canvas::consts::{CONNECTION_DELETE_SIZE, CONTROL_INSET, CONTROL_SIZE, SETTINGS_TOP};
use canvas::doc::BoxObject;
use canvas::geometry::{ConnectionLine, Extent};

/// Gap between the settings icon and the color picker below it.
const POPOVER_GAP: f64 = 4.0;

/// Transform and size of the world layer.
pub fn world_layer_style(camera: &Camera, extent: Extent) -> String {
    format!(
        "transform: {}; width: {}px; height: {}px;",
        camera.css_transform(),
        extent.width,
        extent.height
    )
}

pub fn box_style(obj: &BoxObject) -> String {
    format!(
        "left: {}px; top: {}px; width: {}px; height: {}px; background-color: {};",
        obj.left, obj.top, obj.width, obj.height, obj.background_color
    )
}

/// Delete button centered on the line's midpoint.
pub fn connection_delete_style(line: &ConnectionLine) -> String {
    let origin = line.delete_button_origin();
    format!(
        "left: {}px; top: {}px; width: {CONNECTION_DELETE_SIZE}px; height: {CONNECTION_DELETE_SIZE}px;",
        origin.x, origin.y
    )
}

/// Color picker anchored under the settings icon, right-aligned with it.
pub fn color_popover_style(obj: &BoxObject) -> String {
    let right_edge = obj.right() - CONTROL_INSET;
    let top = obj.top + SETTINGS_TOP + CONTROL_SIZE + POPOVER_GAP;
    format!("left: {right_edge}px; top: {top}px;")
}

/// Zoom level as a whole percentage for the toolbar readout.
pub fn zoom_label(zoom: f64) -> String {
    format!("{:.0}%", zoom * 100.0)
}
