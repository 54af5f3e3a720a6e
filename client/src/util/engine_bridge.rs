//! Runs engine operations against the shared signals.
//!
//! The engine is mutated without tracking; subscribers are notified only when
//! an action says something visible changed, so idle pointer moves do not
//! re-run every view.

#[cfg(test)]
#[path = "engine_bridge_test.rs"]
mod engine_bridge_test;

use canvas::engine::{Action, EngineCore};
use leptos::prelude::*;

use crate::state::editor::EditorUiState;

/// Whether `action` changes anything the canvas draws.
pub fn needs_render(action: &Action) -> bool {
    !matches!(action, Action::SetCursor(_) | Action::EditTextRequested { .. })
}

/// Fold actions into the editor state. Returns whether any of them needs a redraw.
pub fn apply_actions(editor: &mut EditorUiState, actions: &[Action]) -> bool {
    let mut render = false;
    for action in actions {
        editor.apply(action);
        render |= needs_render(action);
    }
    render
}

/// Run `op` on the engine and route its actions to the UI.
pub fn run_engine<F>(engine: RwSignal<EngineCore>, editor: RwSignal<EditorUiState>, op: F)
where
    F: FnOnce(&mut EngineCore) -> Vec<Action>,
{
    let Some(actions) = engine.try_update_untracked(op) else {
        return;
    };
    if actions.is_empty() {
        return;
    }
    let mut render = false;
    editor.update(|state| render = apply_actions(state, &actions));
    if render {
        engine.notify();
    }
}
