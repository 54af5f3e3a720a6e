//! SVG layer for connection lines and the pending line.

use canvas::consts::{LINE_STROKE, LINE_STROKE_WIDTH};
use canvas::engine::EngineCore;
use canvas::geometry::ConnectionLine;
use leptos::prelude::*;

use crate::util::layout::connection_delete_style;

fn line_view(line: ConnectionLine, class: &'static str) -> impl IntoView {
    view! {
        <line
            class=class
            x1=line.x1.to_string()
            y1=line.y1.to_string()
            x2=line.x2.to_string()
            y2=line.y2.to_string()
            stroke=LINE_STROKE
            stroke-width=LINE_STROKE_WIDTH.to_string()
            marker-end="url(#arrowhead)"
        />
    }
}

/// Lines for every connection, drawn in world units.
///
/// Endpoints come from the model, so the layer only changes when boxes or
/// connections do; panning and zooming move it with the world transform.
#[component]
pub fn ConnectionLayer() -> impl IntoView {
    let engine = expect_context::<RwSignal<EngineCore>>();

    let extent = move || engine.with(EngineCore::canvas_extent);
    let lines = move || {
        engine
            .with(EngineCore::connection_lines)
            .into_iter()
            .map(|(_, line)| line_view(line, "connection-line"))
            .collect_view()
    };
    let pending = move || engine.with(EngineCore::pending_line).map(|line| line_view(line, "connection-line connection-line--pending"));

    view! {
        <svg
            class="connection-layer"
            width=move || extent().width.to_string()
            height=move || extent().height.to_string()
        >
            <defs>
                <marker
                    id="arrowhead"
                    viewBox="0 0 10 10"
                    refX="10"
                    refY="5"
                    markerWidth="8"
                    markerHeight="8"
                    orient="auto"
                >
                    <path d="M0,0 L10,5 L0,10 z" fill=LINE_STROKE></path>
                </marker>
            </defs>
            {lines}
            {pending}
        </svg>
    }
}

/// Delete buttons on connection midpoints. HTML rather than SVG so they
/// share the box chrome styling.
#[component]
pub fn ConnectionDeleteButtons() -> impl IntoView {
    let engine = expect_context::<RwSignal<EngineCore>>();

    move || {
        engine
            .with(EngineCore::connection_lines)
            .into_iter()
            .map(|(_, line)| {
                view! { <div class="connection-delete-btn" style=connection_delete_style(&line)>"×"</div> }
            })
            .collect_view()
    }
}
