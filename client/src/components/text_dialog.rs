//! Modal dialog for editing a box's text.

use canvas::engine::EngineCore;
use leptos::prelude::*;

use crate::state::editor::{DialogKey, EditorUiState, text_dialog_key};
use crate::util::engine_bridge::run_engine;

/// Shown while `EditorUiState::text_edit` is set. Saving commits the draft to
/// the engine; cancelling discards it.
#[component]
pub fn TextDialog() -> impl IntoView {
    let engine = expect_context::<RwSignal<EngineCore>>();
    let editor = expect_context::<RwSignal<EditorUiState>>();

    let draft = move || editor.with(|s| s.text_edit.as_ref().map(|t| t.draft.clone()).unwrap_or_default());
    let set_draft = move |value: String| {
        editor.update(|s| {
            if let Some(edit) = s.text_edit.as_mut() {
                edit.draft = value;
            }
        });
    };
    let open = Memo::new(move |_| editor.with(|s| s.text_edit.is_some()));
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();
    #[cfg(feature = "csr")]
    Effect::new(move || {
        if let Some(textarea) = textarea_ref.get() {
            if open.get() && textarea.focus().is_err() {
                log::debug!("text dialog refused focus");
            }
        }
    });

    let cancel = move || editor.update(|s| s.text_edit = None);
    let save = move || {
        let Some(edit) = editor.try_update(EditorUiState::take_text_edit).flatten() else {
            return;
        };
        run_engine(engine, editor, |core| core.set_text(&edit.box_id, edit.draft));
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match text_dialog_key(&ev.key(), ev.ctrl_key(), ev.meta_key()) {
        DialogKey::Save => {
            ev.prevent_default();
            save();
        }
        DialogKey::Cancel => {
            ev.prevent_default();
            cancel();
        }
        DialogKey::Pass => {}
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| cancel()>
                <div class="dialog dialog--box-text" on:click=move |ev| ev.stop_propagation()>
                    <label class="dialog__label">
                        "Text"
                        <textarea
                            class="dialog__textarea"
                            prop:value=draft
                            on:input=move |ev| set_draft(event_target_value(&ev))
                            node_ref=textarea_ref
                            on:keydown=on_keydown
                        ></textarea>
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| cancel()>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" on:click=move |_| save()>
                            "Save"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
