//! DOM rendering of one box and its chrome.

use canvas::doc::BoxId;
use canvas::engine::EngineCore;
use leptos::prelude::*;

use crate::util::layout::box_style;

/// A box positioned in world units.
///
/// The chrome elements are purely visual: the canvas wrapper receives every
/// pointer event and the engine hit-tests against the same layout constants.
#[component]
pub fn BoxView(id: BoxId) -> impl IntoView {
    let engine = expect_context::<RwSignal<EngineCore>>();
    let obj = Memo::new(move |_| engine.with(|e| e.box_by_id(&id).cloned()));

    let style = move || obj.with(|o| o.as_ref().map(box_style).unwrap_or_default());
    let text = move || obj.with(|o| o.as_ref().map(|b| b.text.clone()).unwrap_or_default());
    let brush_class = move || {
        if engine.with(|e| e.ui.brush_mode) { "box box--brush" } else { "box" }
    };

    view! {
        <div class=brush_class style=style>
            <div class="drag-handle"></div>
            <div class="delete-btn">"×"</div>
            <div class="settings-icon">"⚙"</div>
            <div class="box-content">{text}</div>
            <div class="connector input-connector"></div>
            <div class="connector output-connector"></div>
            <div class="resize-handle"></div>
        </div>
    }
}
