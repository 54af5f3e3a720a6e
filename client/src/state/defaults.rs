//! Persisted color choices for the toolbar.

#[cfg(test)]
#[path = "defaults_test.rs"]
mod defaults_test;

use canvas::color::is_valid_color;
use canvas::consts::{DEFAULT_BOX_COLOR, DEFAULT_BRUSH_COLOR};
use canvas::engine::EngineCore;
use serde::{Deserialize, Serialize};

use crate::util::ui_persistence::{load_json, save_json};

/// `localStorage` key for [`EditorDefaults`].
pub const STORAGE_KEY: &str = "linkboard.editor_defaults";

/// Colors the user last picked for the brush and for new boxes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorDefaults {
    pub brush_color: String,
    pub default_box_color: String,
}

impl Default for EditorDefaults {
    fn default() -> Self {
        Self { brush_color: DEFAULT_BRUSH_COLOR.to_owned(), default_box_color: DEFAULT_BOX_COLOR.to_owned() }
    }
}

impl EditorDefaults {
    /// Read the stored defaults, falling back to built-ins.
    pub fn load() -> Self {
        load_json::<Self>(STORAGE_KEY).map(Self::sanitized).unwrap_or_default()
    }

    pub fn save(&self) {
        save_json(STORAGE_KEY, self);
    }

    /// Replace any value that is not a usable CSS color with the built-in default.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let builtin = Self::default();
        Self {
            brush_color: if is_valid_color(&self.brush_color) { self.brush_color } else { builtin.brush_color },
            default_box_color: if is_valid_color(&self.default_box_color) {
                self.default_box_color
            } else {
                builtin.default_box_color
            },
        }
    }

    /// Push both colors into the engine's UI state.
    pub fn apply_to(&self, core: &mut EngineCore) {
        core.set_brush_color(&self.brush_color);
        core.set_default_box_color(&self.default_box_color);
    }
}
