//! Editing engine: turns pointer, wheel, and keyboard input into document and
//! camera mutations, and exposes the toolbar operations.
//!
//! `EngineCore` is deliberately free of browser types so every interaction can
//! be exercised in native tests. The host feeds it screen-space points relative
//! to the canvas wrapper and applies the returned [`Action`]s to the UI.

use crate::camera::{Camera, Point, wheel_zoom_factor};
use crate::consts::{
    DEFAULT_BOX_HEIGHT, DEFAULT_BOX_LEFT, DEFAULT_BOX_TEXT, DEFAULT_BOX_TOP, DEFAULT_BOX_WIDTH, MIN_BOX_HEIGHT,
    MIN_BOX_WIDTH,
};
use crate::doc::{BoxId, BoxObject, Connection, ConnectionId, DocStore, PartialBox, new_box_id};
use crate::geometry::{self, ConnectionLine, Extent};
use crate::hit::{BoxPart, Hit, hit_test};
use crate::input::{Button, InputState, Key, UiState};
use crate::profile::{LoadReport, Profile, ProfileError};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    BoxCreated(BoxObject),
    BoxUpdated { id: BoxId, fields: PartialBox },
    BoxDeleted { id: BoxId, connections: Vec<ConnectionId> },
    ConnectionCreated(Connection),
    ConnectionDeleted { id: ConnectionId },
    /// The host should open a text editor for the box.
    EditTextRequested { id: BoxId, text: String },
    /// The host should open a color picker seeded with `color` (`#rrggbb`).
    OpenColorPicker { id: BoxId, color: String },
    /// The whole document was replaced (new or loaded profile).
    DocumentReplaced(LoadReport),
    SetCursor(String),
    CameraChanged(Camera),
    RenderNeeded,
}

/// Core engine state.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub doc: DocStore,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Boxes ---

    /// Add a default-sized box at the default position, filled with the
    /// current default color.
    pub fn add_box(&mut self) -> Vec<Action> {
        let obj = BoxObject {
            id: new_box_id(),
            left: DEFAULT_BOX_LEFT,
            top: DEFAULT_BOX_TOP,
            width: DEFAULT_BOX_WIDTH,
            height: DEFAULT_BOX_HEIGHT,
            background_color: self.ui.default_box_color.clone(),
            text: DEFAULT_BOX_TEXT.to_owned(),
        };
        log::debug!("box created: {}", obj.id);
        self.doc.insert_box(obj.clone());
        vec![Action::BoxCreated(obj), Action::RenderNeeded]
    }

    /// Delete a box together with every connection touching it.
    pub fn delete_box(&mut self, id: &str) -> Vec<Action> {
        let Some((_, removed)) = self.doc.remove_box(id) else {
            return Vec::new();
        };
        if self.ui.settings_box.as_deref() == Some(id) {
            self.ui.settings_box = None;
        }
        let pending_gone = match &self.input {
            InputState::Connecting { from, .. }
            | InputState::DraggingBox { id: from, .. }
            | InputState::ResizingBox { id: from, .. } => from == id,
            _ => false,
        };
        if pending_gone {
            self.input = InputState::Idle;
        }
        log::debug!("box deleted: {id} ({} connections)", removed.len());
        vec![
            Action::BoxDeleted { id: id.to_owned(), connections: removed.into_iter().map(|c| c.id).collect() },
            Action::RenderNeeded,
        ]
    }

    /// Resize a box, clamping to the minimum box size.
    pub fn resize_box(&mut self, id: &str, width: f64, height: f64) -> Vec<Action> {
        let fields = PartialBox {
            width: Some(width.max(MIN_BOX_WIDTH)),
            height: Some(height.max(MIN_BOX_HEIGHT)),
            ..PartialBox::default()
        };
        self.update_box(id, fields)
    }

    /// Move a box so its top-left corner sits at the given world position.
    pub fn move_box(&mut self, id: &str, left: f64, top: f64) -> Vec<Action> {
        self.update_box(id, PartialBox { left: Some(left), top: Some(top), ..PartialBox::default() })
    }

    /// Ask the host to open the text editor for a box.
    pub fn request_text_edit(&self, id: &str) -> Vec<Action> {
        match self.doc.get(id) {
            Some(obj) => vec![Action::EditTextRequested { id: obj.id.clone(), text: obj.text.clone() }],
            None => Vec::new(),
        }
    }

    /// Commit edited text.
    pub fn set_text(&mut self, id: &str, text: String) -> Vec<Action> {
        self.update_box(id, PartialBox { text: Some(text), ..PartialBox::default() })
    }

    /// Set a box's fill color.
    pub fn set_box_color(&mut self, id: &str, color: &str) -> Vec<Action> {
        self.update_box(id, PartialBox { background_color: Some(color.to_owned()), ..PartialBox::default() })
    }

    /// Open the color picker for a box.
    pub fn open_settings(&mut self, id: &str) -> Vec<Action> {
        let Some(obj) = self.doc.get(id) else {
            return Vec::new();
        };
        let color = crate::color::to_hex_color(&obj.background_color, &self.ui.default_box_color);
        self.ui.settings_box = Some(obj.id.clone());
        vec![Action::OpenColorPicker { id: obj.id.clone(), color }, Action::RenderNeeded]
    }

    /// Close the color picker, if open.
    pub fn close_settings(&mut self) -> Vec<Action> {
        if self.ui.settings_box.take().is_some() {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    fn update_box(&mut self, id: &str, fields: PartialBox) -> Vec<Action> {
        if !self.doc.apply_partial(id, &fields) {
            return Vec::new();
        }
        vec![Action::BoxUpdated { id: id.to_owned(), fields }, Action::RenderNeeded]
    }

    // --- Brush ---

    /// Flip brush mode. Returns the new state.
    pub fn toggle_brush(&mut self) -> bool {
        self.ui.brush_mode = !self.ui.brush_mode;
        self.ui.brush_mode
    }

    pub fn set_brush_color(&mut self, color: &str) {
        self.ui.brush_color = color.to_owned();
    }

    pub fn set_default_box_color(&mut self, color: &str) {
        self.ui.default_box_color = color.to_owned();
    }

    /// Recolor a box with the brush color.
    pub fn brush_box(&mut self, id: &str) -> Vec<Action> {
        let color = self.ui.brush_color.clone();
        self.set_box_color(id, &color)
    }

    // --- Connections ---

    /// Begin a connection from `from`'s output connector.
    ///
    /// A connection already pending is discarded first.
    pub fn start_connection(&mut self, from: &str, cursor_world: Point) -> Vec<Action> {
        if !self.doc.contains(from) {
            return Vec::new();
        }
        self.input = InputState::Connecting { from: from.to_owned(), cursor_world };
        vec![Action::RenderNeeded]
    }

    /// Move the loose end of the pending connection.
    pub fn update_pending(&mut self, cursor_world: Point) -> Vec<Action> {
        match &mut self.input {
            InputState::Connecting { cursor_world: c, .. } => {
                *c = cursor_world;
                vec![Action::RenderNeeded]
            }
            _ => Vec::new(),
        }
    }

    /// Finish the pending connection at `to`'s input connector.
    ///
    /// Does nothing when no connection is pending.
    pub fn complete_connection(&mut self, to: &str) -> Vec<Action> {
        if !self.input.is_connecting() {
            return Vec::new();
        }
        let InputState::Connecting { from, .. } = std::mem::take(&mut self.input) else {
            return Vec::new();
        };
        match self.doc.add_connection(&from, to) {
            Ok(conn) => {
                log::debug!("connection created: {from} -> {to}");
                vec![Action::ConnectionCreated(conn), Action::RenderNeeded]
            }
            Err(err) => {
                log::warn!("connection rejected: {err}");
                vec![Action::RenderNeeded]
            }
        }
    }

    /// Drop the pending connection, if any.
    pub fn cancel_connection(&mut self) -> Vec<Action> {
        if self.input.is_connecting() {
            self.input = InputState::Idle;
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Delete an existing connection.
    pub fn delete_connection(&mut self, id: &ConnectionId) -> Vec<Action> {
        match self.doc.remove_connection(id) {
            Some(conn) => vec![Action::ConnectionDeleted { id: conn.id }, Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    // --- Profiles ---

    /// Clear the canvas.
    pub fn new_profile(&mut self) -> Vec<Action> {
        self.doc.clear();
        self.input = InputState::Idle;
        self.ui.settings_box = None;
        vec![Action::DocumentReplaced(LoadReport::default()), Action::RenderNeeded]
    }

    /// Snapshot the current document.
    #[must_use]
    pub fn save_profile(&self) -> Profile {
        Profile::from_doc(&self.doc)
    }

    /// Replace the document with a saved profile.
    ///
    /// # Errors
    ///
    /// Returns the parse error and leaves the current document untouched when
    /// `raw` is not a valid profile.
    pub fn load_profile(&mut self, raw: &str) -> Result<Vec<Action>, ProfileError> {
        let profile = Profile::from_json(raw)?;
        let (doc, report) = profile.into_doc();
        self.doc = doc;
        self.input = InputState::Idle;
        self.ui.settings_box = None;
        log::info!(
            "profile loaded: {} boxes, {} connections ({} skipped)",
            report.boxes,
            report.connections,
            report.skipped_connections
        );
        Ok(vec![Action::DocumentReplaced(report), Action::RenderNeeded])
    }

    // --- Input events ---

    /// Pointer pressed at `screen_pt`.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        match button {
            Button::Secondary => return Vec::new(),
            Button::Middle => return self.begin_pan(screen_pt),
            Button::Primary => {}
        }

        let hit = hit_test(world, &self.doc);
        let mut actions = Vec::new();

        if !matches!(hit, Some(Hit::Box { part: BoxPart::Settings, .. })) {
            actions.extend(self.close_settings());
        }

        if self.input.is_connecting() {
            if let Some(Hit::Box { id, part: BoxPart::InputConnector }) = &hit {
                actions.extend(self.complete_connection(id));
                return actions;
            }
            actions.extend(self.cancel_connection());
        }

        match hit {
            None => actions.extend(self.begin_pan(screen_pt)),
            Some(Hit::ConnectionDelete(id)) => actions.extend(self.delete_connection(&id)),
            Some(Hit::Box { id, part }) => match part {
                BoxPart::DeleteButton => actions.extend(self.delete_box(&id)),
                BoxPart::Settings => actions.extend(self.open_settings(&id)),
                BoxPart::OutputConnector => actions.extend(self.start_connection(&id, world)),
                BoxPart::InputConnector => {}
                BoxPart::DragHandle => actions.extend(self.begin_drag(&id, world)),
                BoxPart::ResizeHandle => actions.extend(self.begin_resize(&id, world)),
                BoxPart::Content => {
                    if self.ui.brush_mode {
                        actions.extend(self.brush_box(&id));
                    }
                }
            },
        }
        actions
    }

    /// Pointer moved to `screen_pt`.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        match &mut self.input {
            InputState::Idle => Vec::new(),
            InputState::Panning { last_screen } => {
                let dx = screen_pt.x - last_screen.x;
                let dy = screen_pt.y - last_screen.y;
                *last_screen = screen_pt;
                self.camera.pan_by(dx, dy);
                vec![Action::CameraChanged(self.camera), Action::RenderNeeded]
            }
            InputState::DraggingBox { id, grab_offset } => {
                let id = id.clone();
                let left = world.x - grab_offset.x;
                let top = world.y - grab_offset.y;
                self.move_box(&id, left, top)
            }
            InputState::ResizingBox { id, grab_offset } => {
                let id = id.clone();
                let corner = Point::new(world.x - grab_offset.x, world.y - grab_offset.y);
                let Some(obj) = self.doc.get(&id) else {
                    return Vec::new();
                };
                let (width, height) = (corner.x - obj.left, corner.y - obj.top);
                self.resize_box(&id, width, height)
            }
            InputState::Connecting { cursor_world, .. } => {
                *cursor_world = world;
                vec![Action::RenderNeeded]
            }
        }
    }

    /// Pointer released. Ends panning, dragging, and resizing; a pending
    /// connection stays open until the next click.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        match self.input {
            InputState::Panning { .. } | InputState::ResizingBox { .. } => {
                self.input = InputState::Idle;
                vec![Action::SetCursor("grab".to_owned()), Action::RenderNeeded]
            }
            InputState::DraggingBox { .. } => {
                self.input = InputState::Idle;
                vec![Action::RenderNeeded]
            }
            InputState::Idle | InputState::Connecting { .. } => Vec::new(),
        }
    }

    /// Double click: opens the text editor when it lands on a box body.
    pub fn on_double_click(&mut self, screen_pt: Point) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        match hit_test(world, &self.doc) {
            Some(Hit::Box { id, part: BoxPart::Content }) if !self.ui.brush_mode => self.request_text_edit(&id),
            _ => Vec::new(),
        }
    }

    /// Wheel: zoom anchored at the pointer. `delta_y < 0` zooms in.
    pub fn on_wheel(&mut self, screen_pt: Point, delta_y: f64) -> Vec<Action> {
        if !self.camera.zoom_at(screen_pt, wheel_zoom_factor(delta_y)) {
            return Vec::new();
        }
        vec![Action::CameraChanged(self.camera), Action::RenderNeeded]
    }

    /// Key pressed. `Escape` cancels a pending connection and closes the color picker.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if key.0 != "Escape" {
            return Vec::new();
        }
        let mut actions = self.cancel_connection();
        actions.extend(self.close_settings());
        actions
    }

    fn begin_pan(&mut self, screen_pt: Point) -> Vec<Action> {
        self.input = InputState::Panning { last_screen: screen_pt };
        vec![Action::SetCursor("grabbing".to_owned())]
    }

    fn begin_drag(&mut self, id: &str, world: Point) -> Vec<Action> {
        let Some(obj) = self.doc.get(id) else {
            return Vec::new();
        };
        let grab_offset = Point::new(world.x - obj.left, world.y - obj.top);
        self.input = InputState::DraggingBox { id: obj.id.clone(), grab_offset };
        Vec::new()
    }

    fn begin_resize(&mut self, id: &str, world: Point) -> Vec<Action> {
        let Some(obj) = self.doc.get(id) else {
            return Vec::new();
        };
        let grab_offset = Point::new(world.x - obj.right(), world.y - obj.bottom());
        self.input = InputState::ResizingBox { id: obj.id.clone(), grab_offset };
        vec![Action::SetCursor("nwse-resize".to_owned())]
    }

    // --- Queries ---

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Look up a box by id.
    #[must_use]
    pub fn box_by_id(&self, id: &str) -> Option<&BoxObject> {
        self.doc.get(id)
    }

    /// Every connection with its current line, in creation order.
    #[must_use]
    pub fn connection_lines(&self) -> Vec<(ConnectionId, ConnectionLine)> {
        self.doc
            .connections()
            .iter()
            .filter_map(|c| geometry::connection_line(&self.doc, c).map(|line| (c.id, line)))
            .collect()
    }

    /// The pending connection line, from the source's output connector to the pointer.
    #[must_use]
    pub fn pending_line(&self) -> Option<ConnectionLine> {
        let InputState::Connecting { from, cursor_world } = &self.input else {
            return None;
        };
        let obj = self.doc.get(from)?;
        Some(ConnectionLine::between(geometry::output_connector_center(obj), *cursor_world))
    }

    /// Size of the world layer.
    #[must_use]
    pub fn canvas_extent(&self) -> Extent {
        geometry::canvas_extent(&self.doc)
    }

    #[must_use]
    pub fn box_count(&self) -> usize {
        self.doc.len()
    }

    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.doc.connection_count()
    }
}
