//! Document model: boxes, connections, and the in-memory store.
//!
//! This module defines the data that describes what is on the canvas
//! (`BoxObject`, `Connection`), a sparse-update type for incremental edits
//! (`PartialBox`), and the runtime store that owns all live state (`DocStore`).
//!
//! Data flows into this layer from the input engine (mutations) and from saved
//! profiles. The renderer reads boxes in insertion order, which is also their
//! stacking order: later boxes are drawn on top.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a box. Profiles may carry arbitrary strings.
pub type BoxId = String;

/// Identifier of a connection. Generated at creation, never persisted.
pub type ConnectionId = Uuid;

/// Generate a fresh box identifier.
#[must_use]
pub fn new_box_id() -> BoxId {
    format!("box_{}", Uuid::new_v4().simple())
}

/// Errors raised by document mutations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DocError {
    #[error("unknown box `{0}`")]
    UnknownBox(BoxId),
}

/// A box on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxObject {
    /// Unique identifier for this box.
    pub id: BoxId,
    /// Left edge in world coordinates.
    pub left: f64,
    /// Top edge in world coordinates.
    pub top: f64,
    /// Width in world units.
    pub width: f64,
    /// Height in world units.
    pub height: f64,
    /// CSS color string used for the box fill.
    pub background_color: String,
    /// Free text shown in the box body.
    pub text: String,
}

impl BoxObject {
    /// Right edge in world coordinates.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge in world coordinates.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Sparse update for a box. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialBox {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A directed link from one box's output connector to another box's input connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub id: ConnectionId,
    /// Box whose output connector the line starts at.
    pub from_box_id: BoxId,
    /// Box whose input connector the line ends at.
    pub to_box_id: BoxId,
}

/// In-memory store of boxes and connections.
///
/// Invariant: every stored connection references two boxes present in the store.
#[derive(Debug, Clone, Default)]
pub struct DocStore {
    boxes: HashMap<BoxId, BoxObject>,
    order: Vec<BoxId>,
    connections: Vec<Connection>,
}

impl DocStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a box. A replaced box keeps its stacking slot.
    pub fn insert_box(&mut self, obj: BoxObject) {
        if !self.boxes.contains_key(&obj.id) {
            self.order.push(obj.id.clone());
        }
        self.boxes.insert(obj.id.clone(), obj);
    }

    /// Remove a box and every connection touching it.
    ///
    /// Returns the box and the removed connections, or `None` if the box was
    /// not present.
    pub fn remove_box(&mut self, id: &str) -> Option<(BoxObject, Vec<Connection>)> {
        let obj = self.boxes.remove(id)?;
        self.order.retain(|o| o != id);
        let (removed, kept): (Vec<_>, Vec<_>) = self
            .connections
            .drain(..)
            .partition(|c| c.from_box_id == id || c.to_box_id == id);
        self.connections = kept;
        Some((obj, removed))
    }

    /// Return a reference to a box by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&BoxObject> {
        self.boxes.get(id)
    }

    /// Whether a box with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.boxes.contains_key(id)
    }

    /// Apply a partial update to an existing box. Returns false if the box doesn't exist.
    pub fn apply_partial(&mut self, id: &str, partial: &PartialBox) -> bool {
        let Some(obj) = self.boxes.get_mut(id) else {
            return false;
        };
        if let Some(left) = partial.left {
            obj.left = left;
        }
        if let Some(top) = partial.top {
            obj.top = top;
        }
        if let Some(w) = partial.width {
            obj.width = w;
        }
        if let Some(h) = partial.height {
            obj.height = h;
        }
        if let Some(ref color) = partial.background_color {
            obj.background_color.clone_from(color);
        }
        if let Some(ref text) = partial.text {
            obj.text.clone_from(text);
        }
        true
    }

    /// Connect `from`'s output to `to`'s input.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::UnknownBox`] if either endpoint is missing.
    pub fn add_connection(&mut self, from: &str, to: &str) -> Result<Connection, DocError> {
        for id in [from, to] {
            if !self.contains(id) {
                return Err(DocError::UnknownBox(id.to_owned()));
            }
        }
        let conn = Connection { id: Uuid::new_v4(), from_box_id: from.to_owned(), to_box_id: to.to_owned() };
        self.connections.push(conn.clone());
        Ok(conn)
    }

    /// Remove a connection by id, returning it if it was present.
    pub fn remove_connection(&mut self, id: &ConnectionId) -> Option<Connection> {
        let idx = self.connections.iter().position(|c| c.id == *id)?;
        Some(self.connections.remove(idx))
    }

    /// All boxes in stacking order (bottom first).
    pub fn boxes(&self) -> impl Iterator<Item = &BoxObject> {
        self.order.iter().filter_map(|id| self.boxes.get(id))
    }

    /// All connections in creation order.
    #[must_use]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Drop every box and connection.
    pub fn clear(&mut self) {
        self.boxes.clear();
        self.order.clear();
        self.connections.clear();
    }

    /// Number of boxes currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Returns `true` if the store contains no boxes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Number of connections currently in the store.
    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }
}
