//! Dialog and cursor state driven by engine actions.
//!
//! ARCHITECTURE
//! ============
//! Engine handlers return `Action`s; `CanvasHost` feeds every one through
//! [`EditorUiState::apply`] so dialogs open and close in step with the
//! document without the engine knowing about the DOM.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use canvas::doc::BoxId;
use canvas::engine::Action;
use canvas::profile::LoadReport;

/// Cursor shown over the canvas wrapper when nothing is being dragged.
pub const IDLE_CURSOR: &str = "grab";

/// Text edit in progress for one box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    pub box_id: BoxId,
    pub draft: String,
}

/// Open color picker for one box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorPicker {
    pub box_id: BoxId,
    /// Seed value as `#rrggbb`.
    pub color: String,
}

/// UI state layered on top of the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorUiState {
    pub text_edit: Option<TextEdit>,
    pub color_picker: Option<ColorPicker>,
    pub cursor: String,
    pub last_load: Option<LoadReport>,
}

impl Default for EditorUiState {
    fn default() -> Self {
        Self { text_edit: None, color_picker: None, cursor: IDLE_CURSOR.to_owned(), last_load: None }
    }
}

impl EditorUiState {
    /// Fold one engine action into the UI state.
    pub fn apply(&mut self, action: &Action) {
        match action {
            Action::EditTextRequested { id, text } => {
                self.text_edit = Some(TextEdit { box_id: id.clone(), draft: text.clone() });
            }
            Action::OpenColorPicker { id, color } => {
                self.color_picker = Some(ColorPicker { box_id: id.clone(), color: color.clone() });
            }
            Action::BoxDeleted { id, .. } => self.forget_box(id),
            Action::DocumentReplaced(report) => {
                self.text_edit = None;
                self.color_picker = None;
                self.last_load = Some(*report);
            }
            Action::SetCursor(cursor) => self.cursor.clone_from(cursor),
            Action::BoxCreated(_)
            | Action::BoxUpdated { .. }
            | Action::ConnectionCreated(_)
            | Action::ConnectionDeleted { .. }
            | Action::CameraChanged(_)
            | Action::RenderNeeded => {}
        }
    }

    /// Close the dialogs bound to a box that no longer exists.
    pub fn forget_box(&mut self, id: &str) {
        if self.text_edit.as_ref().is_some_and(|t| t.box_id == id) {
            self.text_edit = None;
        }
        if self.color_picker.as_ref().is_some_and(|c| c.box_id == id) {
            self.color_picker = None;
        }
    }

    /// Close the color picker. Returns whether one was open.
    pub fn close_color_picker(&mut self) -> bool {
        self.color_picker.take().is_some()
    }

    /// Take the pending text edit, closing the dialog.
    pub fn take_text_edit(&mut self) -> Option<TextEdit> {
        self.text_edit.take()
    }

    /// Toolbar message about the last load, when it dropped anything.
    pub fn load_notice(&self) -> Option<String> {
        let skipped = self.last_load?.skipped_connections;
        match skipped {
            0 => None,
            1 => Some("Skipped 1 connection to a missing box".to_owned()),
            n => Some(format!("Skipped {n} connections to missing boxes")),
        }
    }
}

/// What a key press inside the text dialog means.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKey {
    Save,
    Cancel,
    /// Let the textarea handle it.
    Pass,
}

/// `Escape` cancels; `Ctrl+Enter` / `Cmd+Enter` saves; plain `Enter` inserts a newline.
pub fn text_dialog_key(key: &str, ctrl: bool, meta: bool) -> DialogKey {
    match key {
        "Escape" => DialogKey::Cancel,
        "Enter" if ctrl || meta => DialogKey::Save,
        _ => DialogKey::Pass,
    }
}
