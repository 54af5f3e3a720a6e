//! UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the shared `EngineCore` and `EditorUiState`
//! signals provided by `App`. Only `CanvasHost` translates DOM input into
//! engine calls; the rest are toolbar and dialog chrome.

pub mod box_view;
pub mod canvas_host;
pub mod color_popover;
pub mod connection_layer;
pub mod text_dialog;
pub mod toolbar;
