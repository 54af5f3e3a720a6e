//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The editing model itself lives in `canvas::engine::EngineCore`, held in a
//! `RwSignal` context. The types here cover what the engine does not own:
//! open dialogs, the wrapper cursor, and the user's persisted color choices.

pub mod defaults;
pub mod editor;
