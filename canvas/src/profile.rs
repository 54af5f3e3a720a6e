//! Save/load codec for diagrams ("profiles").
//!
//! A profile is the whole diagram as JSON:
//!
//! ```json
//! { "boxes": [{ "id": "box_1", "left": 100, "top": 100, "width": 200, "height": 150,
//!               "backgroundColor": "rgb(59, 63, 70)", "text": "hello" }],
//!   "connections": [{ "fromBoxId": "box_1", "toBoxId": "box_2" }] }
//! ```
//!
//! Connection ids are not persisted; they are regenerated on load. Loading is
//! optimistic about referential integrity: a connection whose endpoints are not
//! both present is skipped rather than failing the whole load.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BOX_COLOR;
use crate::doc::{BoxObject, DocStore};

/// Errors raised while encoding or decoding a profile.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("invalid profile JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("failed to encode profile: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Persisted form of a box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxState {
    pub id: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_background")]
    pub background_color: String,
    #[serde(default)]
    pub text: String,
}

fn default_background() -> String {
    DEFAULT_BOX_COLOR.to_owned()
}

/// Persisted form of a connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionState {
    pub from_box_id: String,
    pub to_box_id: String,
}

/// A whole saved diagram.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub boxes: Vec<BoxState>,
    #[serde(default)]
    pub connections: Vec<ConnectionState>,
}

/// Outcome of turning a profile back into a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Boxes in the resulting document.
    pub boxes: usize,
    /// Connections restored.
    pub connections: usize,
    /// Connections dropped because an endpoint was missing.
    pub skipped_connections: usize,
}

impl From<&BoxObject> for BoxState {
    fn from(obj: &BoxObject) -> Self {
        Self {
            id: obj.id.clone(),
            left: obj.left,
            top: obj.top,
            width: obj.width,
            height: obj.height,
            background_color: obj.background_color.clone(),
            text: obj.text.clone(),
        }
    }
}

impl From<BoxState> for BoxObject {
    fn from(state: BoxState) -> Self {
        Self {
            id: state.id,
            left: state.left,
            top: state.top,
            width: state.width,
            height: state.height,
            background_color: state.background_color,
            text: state.text,
        }
    }
}

impl Profile {
    /// Snapshot a document.
    #[must_use]
    pub fn from_doc(doc: &DocStore) -> Self {
        Self {
            boxes: doc.boxes().map(BoxState::from).collect(),
            connections: doc
                .connections()
                .iter()
                .map(|c| ConnectionState { from_box_id: c.from_box_id.clone(), to_box_id: c.to_box_id.clone() })
                .collect(),
        }
    }

    /// Decode a profile.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Parse`] for malformed JSON or missing fields.
    pub fn from_json(raw: &str) -> Result<Self, ProfileError> {
        serde_json::from_str(raw).map_err(ProfileError::Parse)
    }

    /// Encode as compact JSON, the form written to downloaded files.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ProfileError> {
        serde_json::to_string(self).map_err(ProfileError::Encode)
    }

    /// Encode as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Encode`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, ProfileError> {
        serde_json::to_string_pretty(self).map_err(ProfileError::Encode)
    }

    /// Connections whose endpoints are not both among the profile's boxes.
    #[must_use]
    pub fn dangling_connections(&self) -> Vec<&ConnectionState> {
        self.connections
            .iter()
            .filter(|c| !self.has_box(&c.from_box_id) || !self.has_box(&c.to_box_id))
            .collect()
    }

    fn has_box(&self, id: &str) -> bool {
        self.boxes.iter().any(|b| b.id == id)
    }

    /// Build a document: boxes first, then every connection whose endpoints exist.
    #[must_use]
    pub fn into_doc(self) -> (DocStore, LoadReport) {
        let mut doc = DocStore::new();
        for state in self.boxes {
            doc.insert_box(state.into());
        }
        let mut report = LoadReport { boxes: doc.len(), ..LoadReport::default() };
        for conn in self.connections {
            match doc.add_connection(&conn.from_box_id, &conn.to_box_id) {
                Ok(_) => report.connections += 1,
                Err(err) => {
                    log::warn!("skipping connection {} -> {}: {err}", conn.from_box_id, conn.to_box_id);
                    report.skipped_connections += 1;
                }
            }
        }
        (doc, report)
    }
}

/// File name for a downloaded profile.
///
/// Uses the user's stem when it is non-blank, otherwise `profile_<now_ms>`.
/// A trailing `.json` typed by the user is not doubled.
#[must_use]
pub fn profile_file_name(input: Option<&str>, now_ms: u64) -> String {
    let stem = input.map(str::trim).filter(|s| !s.is_empty());
    match stem {
        Some(s) => {
            let s = s.strip_suffix(".json").unwrap_or(s);
            format!("{s}.json")
        }
        None => format!("profile_{now_ms}.json"),
    }
}
