//! Per-box color picker opened from the settings icon.

use canvas::engine::EngineCore;
use leptos::prelude::*;

use crate::state::editor::EditorUiState;
use crate::util::engine_bridge::run_engine;
use crate::util::layout::color_popover_style;

/// Native color input positioned under the settings icon of the box being
/// edited. Lives in the world layer so it follows pan and zoom.
///
/// Input recolors the box live; losing focus closes the picker. The input is
/// focused as soon as it mounts so that blur fires when the user clicks away.
#[component]
pub fn ColorPopover() -> impl IntoView {
    let engine = expect_context::<RwSignal<EngineCore>>();
    let editor = expect_context::<RwSignal<EditorUiState>>();

    // The engine drops `settings_box` on any other click without reporting
    // it, so both sides must agree for the picker to stay visible.
    let open_for = Memo::new(move |_| {
        let picker = editor.with(|s| s.color_picker.clone())?;
        let still_open = engine.with(|e| e.ui.settings_box.as_deref() == Some(picker.box_id.as_str()));
        still_open.then_some(picker)
    });

    let input_ref = NodeRef::<leptos::html::Input>::new();
    #[cfg(feature = "csr")]
    Effect::new(move || {
        let open = open_for.with(Option::is_some);
        if let Some(input) = input_ref.get() {
            if open && input.focus().is_err() {
                log::debug!("color input refused focus");
            }
        }
    });

    move || {
        open_for.get().map(|picker| {
            let box_id = picker.box_id.clone();
            let style_id = box_id.clone();
            let style = move || engine.with(|e| e.box_by_id(&style_id).map(color_popover_style).unwrap_or_default());
            let on_input = move |ev: leptos::ev::Event| {
                let color = event_target_value(&ev);
                run_engine(engine, editor, |core| core.set_box_color(&box_id, &color));
            };
            let on_blur = move |_| {
                let was_open = editor.try_update(EditorUiState::close_color_picker).unwrap_or(false);
                if was_open {
                    run_engine(engine, editor, EngineCore::close_settings);
                }
            };
            view! {
                <div class="canvas-control color-popover" style=style>
                    <input
                        type="color"
                        node_ref=input_ref
                        value=picker.color
                        on:input=on_input
                        on:blur=on_blur
                    />
                </div>
            }
        })
    }
}
