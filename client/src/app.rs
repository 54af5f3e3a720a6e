//! Root application component with context providers.

use canvas::engine::EngineCore;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::canvas_host::CanvasHost;
use crate::components::text_dialog::TextDialog;
use crate::components::toolbar::Toolbar;
use crate::state::defaults::EditorDefaults;
use crate::state::editor::EditorUiState;

/// Root application component.
///
/// Provides the engine, dialog state, and persisted color defaults as
/// contexts, then lays out the toolbar above the canvas.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let defaults = EditorDefaults::load();
    let mut core = EngineCore::new();
    defaults.apply_to(&mut core);

    let engine = RwSignal::new(core);
    let editor = RwSignal::new(EditorUiState::default());
    let defaults = RwSignal::new(defaults);

    provide_context(engine);
    provide_context(editor);
    provide_context(defaults);

    view! {
        <Title text="Linkboard" />
        <div class="app">
            <Toolbar />
            <CanvasHost />
            <TextDialog />
        </div>
    }
}
