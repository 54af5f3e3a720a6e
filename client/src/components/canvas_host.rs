//! Bridge component between DOM input and `canvas::engine::EngineCore`.
//!
//! ARCHITECTURE
//! ============
//! The wrapper element receives every pointer, wheel, and keyboard event and
//! forwards it to the engine in wrapper-relative screen coordinates. The
//! engine hit-tests, mutates the document, and returns actions; the world
//! layer below re-renders from the engine signal. Boxes, lines, and delete
//! buttons all live in the transformed world layer, so pan and zoom only
//! change one CSS transform.

use canvas::engine::EngineCore;
use leptos::prelude::*;

use crate::components::box_view::BoxView;
use crate::components::color_popover::ColorPopover;
use crate::components::connection_layer::{ConnectionDeleteButtons, ConnectionLayer};
use crate::state::editor::EditorUiState;
#[cfg(feature = "csr")]
use crate::util::canvas_input::{event_hits_control, map_button, mouse_point, should_prevent_default_key};
#[cfg(feature = "csr")]
use crate::util::engine_bridge::run_engine;
use crate::util::layout::world_layer_style;

#[cfg(feature = "csr")]
use canvas::input::Key;

/// Pan/zoom canvas hosting the diagram.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let engine = expect_context::<RwSignal<EngineCore>>();
    let editor = expect_context::<RwSignal<EditorUiState>>();
    let wrapper_ref = NodeRef::<leptos::html::Div>::new();

    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::PointerEvent| {
                if event_hits_control(&ev) {
                    return;
                }
                let Some(wrapper) = wrapper_ref.get() else {
                    return;
                };
                ev.prevent_default();
                if wrapper.focus().is_err() {
                    log::debug!("canvas wrapper refused focus");
                }
                if wrapper.set_pointer_capture(ev.pointer_id()).is_err() {
                    log::debug!("pointer capture unavailable");
                }
                let point = mouse_point(&ev, &wrapper);
                let button = map_button(ev.button());
                run_engine(engine, editor, |core| core.on_pointer_down(point, button));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let Some(wrapper) = wrapper_ref.get() else {
                    return;
                };
                let point = mouse_point(&ev, &wrapper);
                run_engine(engine, editor, |core| core.on_pointer_move(point));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let Some(wrapper) = wrapper_ref.get() else {
                    return;
                };
                if wrapper.has_pointer_capture(ev.pointer_id()) && wrapper.release_pointer_capture(ev.pointer_id()).is_err() {
                    log::debug!("pointer capture already released");
                }
                run_engine(engine, editor, EngineCore::on_pointer_up);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_double_click = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::MouseEvent| {
                if ev.button() != 0 || event_hits_control(&ev) {
                    return;
                }
                let Some(wrapper) = wrapper_ref.get() else {
                    return;
                };
                let point = mouse_point(&ev, &wrapper);
                run_engine(engine, editor, |core| core.on_double_click(point));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_wheel = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::WheelEvent| {
                ev.prevent_default();
                let Some(wrapper) = wrapper_ref.get() else {
                    return;
                };
                let point = mouse_point(&ev, &wrapper);
                let delta_y = ev.delta_y();
                run_engine(engine, editor, |core| core.on_wheel(point, delta_y));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    let on_key_down = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::KeyboardEvent| {
                let key = ev.key();
                if should_prevent_default_key(&key) {
                    ev.prevent_default();
                }
                run_engine(engine, editor, |core| core.on_key_down(&Key(key)));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::KeyboardEvent| {}
        }
    };

    let cursor_style = move || editor.with(|s| format!("cursor: {};", s.cursor));
    let world_style = move || engine.with(|e| world_layer_style(&e.camera, e.canvas_extent()));
    let box_ids = move || engine.with(|e| e.doc.boxes().map(|b| b.id.clone()).collect::<Vec<_>>());

    view! {
        <div
            class="canvas-wrapper"
            node_ref=wrapper_ref
            tabindex="0"
            style=cursor_style
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_up
            on:dblclick=on_double_click
            on:wheel=on_wheel
            on:keydown=on_key_down
        >
            <div class="canvas-world" style=world_style>
                <For
                    each=box_ids
                    key=|id: &String| id.clone()
                    children=move |id: String| view! { <BoxView id=id /> }
                />
                <ConnectionLayer />
                <ConnectionDeleteButtons />
                <ColorPopover />
            </div>
        </div>
    }
}
