//! Shared numeric constants for the canvas crate.

// ── New boxes ───────────────────────────────────────────────────

/// Width of a freshly added box, in world units.
pub const DEFAULT_BOX_WIDTH: f64 = 200.0;

/// Height of a freshly added box, in world units.
pub const DEFAULT_BOX_HEIGHT: f64 = 150.0;

/// World-space left edge of a freshly added box.
pub const DEFAULT_BOX_LEFT: f64 = 100.0;

/// World-space top edge of a freshly added box.
pub const DEFAULT_BOX_TOP: f64 = 100.0;

/// Placeholder text of a freshly added box.
pub const DEFAULT_BOX_TEXT: &str = "Double-click to edit text...";

/// Fill used for new boxes until the user picks a default color.
pub const DEFAULT_BOX_COLOR: &str = "#3b3f46";

/// Initial brush color.
pub const DEFAULT_BRUSH_COLOR: &str = "#e06c75";

/// Smallest width a box can be resized to.
pub const MIN_BOX_WIDTH: f64 = 60.0;

/// Smallest height a box can be resized to.
pub const MIN_BOX_HEIGHT: f64 = 40.0;

// ── Camera ──────────────────────────────────────────────────────

/// Zoom multiplier for one wheel notch towards the user.
pub const ZOOM_IN_FACTOR: f64 = 1.1;

/// Zoom multiplier for one wheel notch away from the user.
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

/// Lower zoom bound.
pub const MIN_ZOOM: f64 = 0.1;

/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 8.0;

// ── Canvas ──────────────────────────────────────────────────────

/// Margin added past the right-most and bottom-most box when sizing the world layer.
pub const CANVAS_MARGIN: f64 = 100.0;

// ── Box chrome (world units, relative to the box's top-left corner) ──

/// Height of the drag strip along the top edge.
pub const DRAG_HANDLE_HEIGHT: f64 = 20.0;

/// Side length of the square delete button and settings icon.
pub const CONTROL_SIZE: f64 = 20.0;

/// Gap between a control and the box edge.
pub const CONTROL_INSET: f64 = 2.0;

/// Top of the settings icon, below the delete button.
pub const SETTINGS_TOP: f64 = 26.0;

/// Radius of the input/output connector dots.
pub const CONNECTOR_RADIUS: f64 = 6.0;

/// Side length of the resize grip in the bottom-right corner.
pub const RESIZE_HANDLE_SIZE: f64 = 12.0;

/// Extra pick slop around connectors so they are easy to hit.
pub const CONNECTOR_HIT_SLOP: f64 = 3.0;

// ── Connections ─────────────────────────────────────────────────

/// Side length of the delete button centered on a connection.
pub const CONNECTION_DELETE_SIZE: f64 = 20.0;

/// Connection stroke color.
pub const LINE_STROKE: &str = "#fff";

/// Connection stroke width in world units.
pub const LINE_STROKE_WIDTH: f64 = 2.0;
