use super::*;
use canvas::doc::{BoxObject, Connection};

fn sample_box(id: &str) -> BoxObject {
    BoxObject {
        id: id.to_owned(),
        left: 0.0,
        top: 0.0,
        width: 200.0,
        height: 150.0,
        background_color: "#3b3f46".to_owned(),
        text: String::new(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_has_no_dialogs_and_grab_cursor() {
    let state = EditorUiState::default();
    assert!(state.text_edit.is_none());
    assert!(state.color_picker.is_none());
    assert_eq!(state.cursor, "grab");
    assert!(state.last_load.is_none());
}

// =============================================================
// apply
// =============================================================

#[test]
fn edit_text_requested_opens_dialog_with_current_text() {
    let mut state = EditorUiState::default();
    state.apply(&Action::EditTextRequested { id: "a".to_owned(), text: "hello".to_owned() });
    assert_eq!(state.text_edit, Some(TextEdit { box_id: "a".to_owned(), draft: "hello".to_owned() }));
}

#[test]
fn open_color_picker_records_seed() {
    let mut state = EditorUiState::default();
    state.apply(&Action::OpenColorPicker { id: "a".to_owned(), color: "#ff0000".to_owned() });
    let picker = state.color_picker.unwrap();
    assert_eq!(picker.box_id, "a");
    assert_eq!(picker.color, "#ff0000");
}

#[test]
fn deleting_box_closes_its_dialogs() {
    let mut state = EditorUiState::default();
    state.apply(&Action::EditTextRequested { id: "a".to_owned(), text: String::new() });
    state.apply(&Action::OpenColorPicker { id: "a".to_owned(), color: "#000000".to_owned() });
    state.apply(&Action::BoxDeleted { id: "a".to_owned(), connections: Vec::new() });
    assert!(state.text_edit.is_none());
    assert!(state.color_picker.is_none());
}

#[test]
fn deleting_other_box_keeps_dialogs() {
    let mut state = EditorUiState::default();
    state.apply(&Action::EditTextRequested { id: "a".to_owned(), text: String::new() });
    state.apply(&Action::BoxDeleted { id: "b".to_owned(), connections: Vec::new() });
    assert!(state.text_edit.is_some());
}

#[test]
fn document_replaced_closes_dialogs_and_records_report() {
    let mut state = EditorUiState::default();
    state.apply(&Action::EditTextRequested { id: "a".to_owned(), text: String::new() });
    let report = LoadReport { boxes: 3, connections: 2, skipped_connections: 1 };
    state.apply(&Action::DocumentReplaced(report));
    assert!(state.text_edit.is_none());
    assert_eq!(state.last_load, Some(report));
}

#[test]
fn load_notice_reports_skipped_connections() {
    let mut state = EditorUiState::default();
    assert_eq!(state.load_notice(), None);

    state.apply(&Action::DocumentReplaced(LoadReport { boxes: 2, connections: 1, skipped_connections: 0 }));
    assert_eq!(state.load_notice(), None);

    state.apply(&Action::DocumentReplaced(LoadReport { boxes: 2, connections: 1, skipped_connections: 1 }));
    assert_eq!(state.load_notice().as_deref(), Some("Skipped 1 connection to a missing box"));

    state.apply(&Action::DocumentReplaced(LoadReport { boxes: 2, connections: 0, skipped_connections: 3 }));
    assert_eq!(state.load_notice().as_deref(), Some("Skipped 3 connections to missing boxes"));
}

#[test]
fn new_document_clears_load_notice() {
    let mut state = EditorUiState::default();
    state.apply(&Action::DocumentReplaced(LoadReport { boxes: 1, connections: 0, skipped_connections: 2 }));
    state.apply(&Action::DocumentReplaced(LoadReport::default()));
    assert_eq!(state.load_notice(), None);
}

#[test]
fn set_cursor_updates_cursor() {
    let mut state = EditorUiState::default();
    state.apply(&Action::SetCursor("grabbing".to_owned()));
    assert_eq!(state.cursor, "grabbing");
    state.apply(&Action::SetCursor("grab".to_owned()));
    assert_eq!(state.cursor, "grab");
}

#[test]
fn document_actions_leave_ui_alone() {
    let mut state = EditorUiState::default();
    let before = state.clone();
    state.apply(&Action::BoxCreated(sample_box("a")));
    state.apply(&Action::ConnectionCreated(Connection {
        id: uuid::Uuid::new_v4(),
        from_box_id: "a".to_owned(),
        to_box_id: "b".to_owned(),
    }));
    state.apply(&Action::RenderNeeded);
    assert_eq!(state, before);
}

#[test]
fn close_color_picker_reports_whether_open() {
    let mut state = EditorUiState::default();
    assert!(!state.close_color_picker());
    state.apply(&Action::OpenColorPicker { id: "a".to_owned(), color: "#000000".to_owned() });
    assert!(state.close_color_picker());
    assert!(state.color_picker.is_none());
    assert!(!state.close_color_picker());
}

#[test]
fn take_text_edit_closes_dialog() {
    let mut state = EditorUiState::default();
    state.apply(&Action::EditTextRequested { id: "a".to_owned(), text: "x".to_owned() });
    let edit = state.take_text_edit();
    assert_eq!(edit.map(|e| e.box_id), Some("a".to_owned()));
    assert!(state.text_edit.is_none());
}

// =============================================================
// text_dialog_key
// =============================================================

#[test]
fn escape_cancels_dialog() {
    assert_eq!(text_dialog_key("Escape", false, false), DialogKey::Cancel);
}

#[test]
fn ctrl_or_meta_enter_saves() {
    assert_eq!(text_dialog_key("Enter", true, false), DialogKey::Save);
    assert_eq!(text_dialog_key("Enter", false, true), DialogKey::Save);
}

#[test]
fn plain_enter_and_letters_pass_through() {
    assert_eq!(text_dialog_key("Enter", false, false), DialogKey::Pass);
    assert_eq!(text_dialog_key("a", true, false), DialogKey::Pass);
}
