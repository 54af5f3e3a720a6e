//! # client
//!
//! Leptos + WASM frontend for the linkboard canvas editor.
//!
//! This crate contains the toolbar, the canvas host that bridges DOM events to
//! the `canvas` engine, dialog state, and browser glue for files and storage.
//! Build with the `csr` feature (e.g. via `trunk serve`) to run it in a
//! browser; without it the crate compiles natively for unit tests.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("linkboard client starting");
    leptos::mount::mount_to_body(app::App);
}
