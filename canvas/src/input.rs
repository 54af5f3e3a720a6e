//! Input model: mouse buttons, keys, editor toggles, and the gesture state
//! machine.
//!
//! `Button` and `Key` capture the raw event. `UiState` holds the
//! editor toggles that change what a click means (brush mode) and which popover
//! is open. `InputState` is the active gesture, carrying the context needed to
//! compute incremental deltas between pointer events.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::consts::{DEFAULT_BOX_COLOR, DEFAULT_BRUSH_COLOR};
use crate::doc::BoxId;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// While on, clicking a box body recolors it with `brush_color`.
    pub brush_mode: bool,
    /// Color applied by the brush.
    pub brush_color: String,
    /// Fill for newly added boxes.
    pub default_box_color: String,
    /// Box whose color picker is open, if any.
    pub settings_box: Option<BoxId>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            brush_mode: false,
            brush_color: DEFAULT_BRUSH_COLOR.to_owned(),
            default_box_color: DEFAULT_BOX_COLOR.to_owned(),
            settings_box: None,
        }
    }
}

impl UiState {
    /// Label for the brush toggle button.
    #[must_use]
    pub fn brush_label(&self) -> &'static str {
        if self.brush_mode { "Brush On" } else { "Brush Off" }
    }
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning by dragging the empty canvas background.
    Panning {
        /// Screen-space position of the previous pointer event, used to compute pan delta.
        last_screen: Point,
    },
    /// The user is moving a box by its drag handle.
    DraggingBox {
        /// Id of the box being dragged.
        id: BoxId,
        /// Pointer position minus the box's top-left corner, in world units.
        grab_offset: Point,
    },
    /// The user is resizing a box by its bottom-right grip.
    ResizingBox {
        /// Id of the box being resized.
        id: BoxId,
        /// Pointer position minus the box's bottom-right corner, in world units.
        grab_offset: Point,
    },
    /// A connection has been started from an output connector and follows the
    /// pointer until an input connector is clicked or the gesture is cancelled.
    Connecting {
        /// Box whose output connector the pending line starts at.
        from: BoxId,
        /// World-space pointer position; the loose end of the pending line.
        cursor_world: Point,
    },
}

impl InputState {
    /// Whether a connection is waiting for its destination.
    #[must_use]
    pub fn is_connecting(&self) -> bool {
        matches!(self, Self::Connecting { .. })
    }
}
