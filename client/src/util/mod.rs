//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser glue (event mapping, storage, file transfer) lives here so the
//! components stay small. Everything that does not touch `web_sys` compiles
//! natively and is unit tested.

pub mod canvas_input;
pub mod engine_bridge;
#[cfg(feature = "csr")]
pub mod file_io;
pub mod layout;
pub mod ui_persistence;
