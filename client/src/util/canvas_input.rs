//! Mapping from DOM events to engine input types.

#[cfg(test)]
#[path = "canvas_input_test.rs"]
mod canvas_input_test;

use canvas::camera::Point;
use canvas::input::Button;

/// CSS selector for overlay controls that handle their own events.
pub const CONTROL_SELECTOR: &str = ".canvas-control";

/// Map `MouseEvent.button` to an engine button.
pub fn map_button(button: i16) -> Button {
    match button {
        1 => Button::Middle,
        2 => Button::Secondary,
        _ => Button::Primary,
    }
}

/// Keys whose browser default must not run while the canvas has focus.
pub fn should_prevent_default_key(key: &str) -> bool {
    matches!(key, "Escape")
}

/// Convert client coordinates to a point relative to the wrapper's top-left corner.
pub fn wrapper_point(client_x: f64, client_y: f64, wrapper_left: f64, wrapper_top: f64) -> Point {
    Point::new(client_x - wrapper_left, client_y - wrapper_top)
}

/// Pointer position relative to the canvas wrapper.
///
/// `offsetX/Y` is relative to whichever child the pointer is over, so the
/// position is derived from client coordinates instead.
#[cfg(feature = "csr")]
pub fn mouse_point(ev: &web_sys::MouseEvent, wrapper: &web_sys::HtmlDivElement) -> Point {
    let rect = wrapper.get_bounding_client_rect();
    wrapper_point(f64::from(ev.client_x()), f64::from(ev.client_y()), rect.left(), rect.top())
}

/// Whether the event started inside an overlay control such as the color picker.
#[cfg(feature = "csr")]
pub fn event_hits_control(ev: &web_sys::Event) -> bool {
    use wasm_bindgen::JsCast;

    let Some(element) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return false;
    };
    matches!(element.closest(CONTROL_SELECTOR), Ok(Some(_)))
}
