//! Pan/zoom camera and conversions between screen and world space.
//!
//! Screen space is CSS pixels relative to the top-left corner of the canvas
//! wrapper element. World space is the coordinate system boxes are stored in.
//! The world layer is drawn with `translate(pan) scale(zoom)` and a `0 0`
//! transform origin, so the two spaces relate by `screen = world * zoom + pan`.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{MAX_ZOOM, MIN_ZOOM, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Camera state for pan/zoom on the canvas.
///
/// `pan_x` / `pan_y` are in CSS pixels.
/// `zoom` is a scale factor (1.0 = no zoom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

/// Zoom multiplier for a wheel event with vertical delta `dy`.
///
/// Scrolling up (negative `dy`) zooms in; anything else zooms out.
#[must_use]
pub fn wheel_zoom_factor(dy: f64) -> f64 {
    if dy < 0.0 { ZOOM_IN_FACTOR } else { ZOOM_OUT_FACTOR }
}

impl Camera {
    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }

    /// Multiply the zoom by `factor`, keeping the world point under
    /// `screen_anchor` fixed on screen.
    ///
    /// The resulting zoom is clamped to `[MIN_ZOOM, MAX_ZOOM]`. Returns `false`
    /// when the clamp leaves the camera unchanged.
    pub fn zoom_at(&mut self, screen_anchor: Point, factor: f64) -> bool {
        let new_zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return false;
        }
        let ratio = new_zoom / self.zoom;
        self.pan_x = screen_anchor.x - (screen_anchor.x - self.pan_x) * ratio;
        self.pan_y = screen_anchor.y - (screen_anchor.y - self.pan_y) * ratio;
        self.zoom = new_zoom;
        true
    }

    /// Shift the camera by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// CSS `transform` value for the world layer.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.pan_x, self.pan_y, self.zoom)
    }
}
