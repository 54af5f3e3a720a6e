//! Top menu: document commands, brush controls, and color defaults.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every button maps to one engine operation. File commands go through
//! `util::file_io`; color choices are mirrored into `EditorDefaults` so they
//! survive a reload.

use canvas::engine::EngineCore;
use leptos::prelude::*;

use crate::state::defaults::EditorDefaults;
use crate::state::editor::EditorUiState;
use crate::util::engine_bridge::run_engine;
use crate::util::layout::zoom_label;

/// Application toolbar.
#[component]
pub fn Toolbar() -> impl IntoView {
    let engine = expect_context::<RwSignal<EngineCore>>();
    let editor = expect_context::<RwSignal<EditorUiState>>();
    let defaults = expect_context::<RwSignal<EditorDefaults>>();
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let on_add_box = move |_| run_engine(engine, editor, EngineCore::add_box);
    let on_new = move |_| run_engine(engine, editor, EngineCore::new_profile);

    let on_save = move |_| {
        #[cfg(feature = "csr")]
        {
            use crate::util::file_io::{JSON_MIME, alert, download_text, prompt_profile_file_name};

            let json = match engine.with_untracked(EngineCore::save_profile).to_json() {
                Ok(json) => json,
                Err(err) => {
                    alert(&format!("Error saving profile: {err}"));
                    return;
                }
            };
            let file_name = prompt_profile_file_name();
            if let Err(err) = download_text(&file_name, &json, JSON_MIME) {
                log::error!("profile download failed: {err:?}");
            }
        }
    };

    let on_export_svg = move |_| {
        #[cfg(feature = "csr")]
        {
            use crate::util::file_io::{SVG_MIME, download_text, now_ms};

            let svg = engine.with_untracked(|e| canvas::svg::render_svg(&e.doc));
            if let Err(err) = download_text(&format!("diagram_{}.svg", now_ms()), &svg, SVG_MIME) {
                log::error!("svg download failed: {err:?}");
            }
        }
    };

    let on_load_click = move |_| {
        if let Some(input) = file_ref.get() {
            input.click();
        }
    };

    let on_file_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use crate::util::file_io::{alert, read_file_text, selected_file};

            let Some(input) = file_ref.get() else {
                return;
            };
            let Some(file) = selected_file(&input) else {
                return;
            };
            // Allow choosing the same file again.
            input.set_value("");
            leptos::task::spawn_local(async move {
                let text = match read_file_text(file).await {
                    Ok(text) => text,
                    Err(err) => {
                        alert(&format!("Error loading profile: {err}"));
                        return;
                    }
                };
                let mut failure = None;
                run_engine(engine, editor, |core| match core.load_profile(&text) {
                    Ok(actions) => actions,
                    Err(err) => {
                        failure = Some(err);
                        Vec::new()
                    }
                });
                if let Some(err) = failure {
                    alert(&format!("Error loading profile: {err}"));
                }
            });
        }
    };

    let on_brush_toggle = move |_| {
        engine.update(|e| {
            e.toggle_brush();
        });
    };

    let on_brush_color = move |ev: leptos::ev::Event| {
        let color = event_target_value(&ev);
        engine.update(|e| e.set_brush_color(&color));
        defaults.update(|d| d.brush_color = color);
        defaults.with_untracked(EditorDefaults::save);
    };

    let on_default_color = move |ev: leptos::ev::Event| {
        let color = event_target_value(&ev);
        engine.update(|e| e.set_default_box_color(&color));
        defaults.update(|d| d.default_box_color = color);
        defaults.with_untracked(EditorDefaults::save);
    };

    let brush_label = move || engine.with(|e| e.ui.brush_label());
    let brush_active = move || engine.with(|e| e.ui.brush_mode);
    let zoom = move || engine.with(|e| zoom_label(e.camera.zoom));
    let counts = move || engine.with(|e| format!("{} boxes · {} links", e.box_count(), e.connection_count()));
    let load_notice = move || {
        editor
            .with(EditorUiState::load_notice)
            .map(|notice| view! { <span class="toolbar__notice">{notice}</span> })
    };

    view! {
        <div class="toolbar">
            <button class="btn" on:click=on_add_box>
                "Add Box"
            </button>
            <span class="toolbar__divider"></span>
            <button class="btn" on:click=on_new>
                "New"
            </button>
            <button class="btn" on:click=on_save>
                "Save"
            </button>
            <button class="btn" on:click=on_load_click>
                "Load"
            </button>
            <input
                type="file"
                accept=".json,application/json"
                class="toolbar__file"
                node_ref=file_ref
                on:change=on_file_change
            />
            <button class="btn" on:click=on_export_svg>
                "Export SVG"
            </button>
            <span class="toolbar__divider"></span>
            <button class="btn" class:btn--active=brush_active on:click=on_brush_toggle>
                {brush_label}
            </button>
            <label class="toolbar__color" title="Brush color">
                "Brush"
                <input
                    type="color"
                    prop:value=move || defaults.with(|d| d.brush_color.clone())
                    on:input=on_brush_color
                />
            </label>
            <label class="toolbar__color" title="Color for new boxes">
                "Box"
                <input
                    type="color"
                    prop:value=move || defaults.with(|d| d.default_box_color.clone())
                    on:input=on_default_color
                />
            </label>
            <span class="toolbar__spacer"></span>
            {load_notice}
            <span class="toolbar__stat">{counts}</span>
            <span class="toolbar__stat">{zoom}</span>
        </div>
    }
}
