//! Document state machine tests: dirty tracking, discard guard, open/save

mod common;

use std::path::{Path, PathBuf};

use common::{test_model, Fakes};
use metext::commands::Cmd;
use metext::io::MemoryStore;
use metext::messages::{AppMsg, DocumentMsg};
use metext::model::{AppModel, Document, DocumentStatus, DISCARD_CHANGES_MESSAGE};

fn insert(text: &str, offset: usize) -> DocumentMsg {
    DocumentMsg::InsertText {
        offset,
        text: text.to_string(),
    }
}

// ============================================================================
// Dirty tracking
// ============================================================================

#[test]
fn test_edits_keep_document_modified_until_save() {
    let mut fakes = Fakes::new();
    let mut model = AppModel::default();

    for (i, word) in ["a", "b", "c", "d"].iter().enumerate() {
        fakes.send(&mut model, insert(word, i));
        assert_eq!(model.document.status(), DocumentStatus::Modified);
    }
    fakes.send(&mut model, DocumentMsg::DeleteRange { start: 0, end: 2 });
    fakes.send(&mut model, DocumentMsg::MoveCursor(0));
    assert!(model.document.is_dirty());

    fakes.picker.save_path = Some(PathBuf::from("out.txt"));
    fakes.send(&mut model, AppMsg::SaveFile);
    assert_eq!(model.document.status(), DocumentStatus::Clean);
}

#[test]
fn test_cursor_move_alone_does_not_dirty() {
    let mut fakes = Fakes::new();
    let mut model = test_model("hello");
    fakes.send(&mut model, DocumentMsg::MoveCursor(3));
    assert!(!model.document.is_dirty());
    assert_eq!(model.ui.cursor, 3);
}

#[test]
fn test_insert_moves_cursor_after_text() {
    let mut fakes = Fakes::new();
    let mut model = test_model("hello");
    fakes.send(&mut model, insert(" world", 5));
    assert_eq!(model.document.text(), "hello world");
    assert_eq!(model.ui.cursor, 11);
}

#[test]
fn test_content_changed_notification_marks_modified() {
    let mut fakes = Fakes::with_store(MemoryStore::new().with_file("a.txt", "alpha"));
    let mut model = AppModel::default();
    fakes.send(&mut model, AppMsg::OpenPath(PathBuf::from("a.txt")));
    assert!(!model.document.is_dirty());

    assert_eq!(
        fakes.send(&mut model, DocumentMsg::ContentChanged),
        Some(Cmd::Redraw)
    );
    assert_eq!(model.document.status(), DocumentStatus::Modified);
    assert_eq!(model.document.text(), "alpha");

    // A repeated notification leaves a single pending change: one save clears it
    fakes.send(&mut model, DocumentMsg::ContentChanged);
    fakes.send(&mut model, AppMsg::SaveFile);
    assert_eq!(model.document.status(), DocumentStatus::Clean);
    assert_eq!(fakes.store.write_count, 1);

    fakes.send(&mut model, DocumentMsg::ContentChanged);
    assert!(model.document.is_dirty());
}

#[test]
fn test_title_tracks_dirty_state() {
    let mut fakes = Fakes::new();
    let mut model = AppModel::default();
    assert_eq!(model.window_title(), "metext - None Loaded");

    fakes.send(&mut model, insert("x", 0));
    assert_eq!(model.window_title(), "metext - None Loaded *");

    fakes.picker.save_path = Some(PathBuf::from("notes.txt"));
    fakes.send(&mut model, AppMsg::SaveFile);
    assert_eq!(model.window_title(), "metext - notes.txt");
}

// ============================================================================
// Discard guard
// ============================================================================

#[test]
fn test_prompt_never_shown_while_clean() {
    let mut fakes = Fakes::with_store(MemoryStore::new().with_file("a.txt", "alpha"));
    let mut model = test_model("clean");

    fakes.send(&mut model, AppMsg::NewFile);
    fakes.send(&mut model, AppMsg::OpenPath(PathBuf::from("a.txt")));
    fakes.send(&mut model, AppMsg::Quit);

    assert_eq!(fakes.prompt_count(), 0);
    assert!(model.ui.quit_requested);
}

#[test]
fn test_close_scenario() {
    let mut fakes = Fakes::new();
    let mut model = AppModel::default();

    model.document.mark_modified();
    assert!(model.document.is_dirty());

    fakes.prompt.answer = false;
    assert_eq!(fakes.send(&mut model, AppMsg::Quit), Some(Cmd::Redraw));
    assert!(!model.ui.quit_requested);
    assert!(model.document.is_dirty());
    assert_eq!(model.document.text(), "");

    fakes.prompt.answer = true;
    assert_eq!(fakes.send(&mut model, AppMsg::Quit), Some(Cmd::Quit));
    assert!(model.ui.quit_requested);
    assert_eq!(fakes.prompt.messages, vec![DISCARD_CHANGES_MESSAGE; 2]);
}

#[test]
fn test_close_direct_scenario() {
    let mut doc = Document::new();
    doc.mark_modified();
    assert!(!doc.close(&mut |_: &str| false));
    assert!(doc.is_dirty());
    assert!(doc.close(&mut |_: &str| true));
}

#[test]
fn test_new_file_declined_keeps_buffer() {
    let mut fakes = Fakes::new();
    let mut model = test_model("draft");
    fakes.send(&mut model, insert("!", 5));

    fakes.prompt.answer = false;
    fakes.send(&mut model, AppMsg::NewFile);
    assert_eq!(model.document.text(), "draft!");
    assert!(model.document.is_dirty());
    assert_eq!(model.ui.status_message, "New file cancelled");
}

#[test]
fn test_new_file_accepted_resets_everything() {
    let mut fakes = Fakes::with_store(MemoryStore::new().with_file("a.txt", "alpha"));
    let mut model = AppModel::default();
    fakes.send(&mut model, AppMsg::OpenPath(PathBuf::from("a.txt")));
    fakes.send(&mut model, insert("x", 0));

    fakes.prompt.answer = true;
    fakes.send(&mut model, AppMsg::NewFile);
    assert_eq!(model.document.text(), "");
    assert!(model.document.file_path().is_none());
    assert!(!model.document.is_dirty());
    assert_eq!(model.ui.cursor, 0);
}

// ============================================================================
// Open / save
// ============================================================================

#[test]
fn test_save_as_then_open_roundtrip() {
    let mut store = MemoryStore::new();
    let mut doc = Document::with_text("line one\nline two\n");
    doc.mark_modified();
    doc.save_as(PathBuf::from("p.txt"), &mut store).unwrap();

    let mut reopened = Document::new();
    reopened
        .open(PathBuf::from("p.txt"), &mut store, &mut |_: &str| true)
        .unwrap();
    assert_eq!(reopened.text(), "line one\nline two\n");
    assert!(!reopened.is_dirty());
}

#[test]
fn test_failed_save_keeps_dirty_and_path() {
    let mut fakes = Fakes::with_store(MemoryStore::new().with_file("a.txt", "alpha"));
    let mut model = AppModel::default();
    fakes.send(&mut model, AppMsg::OpenPath(PathBuf::from("a.txt")));
    fakes.send(&mut model, insert("x", 0));

    fakes.store.fail_writes = Some("disk full".to_string());
    fakes.send(&mut model, AppMsg::SaveFile);

    assert!(model.document.is_dirty());
    assert_eq!(model.document.file_path(), Some(Path::new("a.txt")));
    assert_eq!(model.ui.status_message, "Error saving: disk full");
    assert_eq!(fakes.store.get(Path::new("a.txt")), Some("alpha"));
}

#[test]
fn test_failed_open_leaves_document_untouched() {
    let mut fakes = Fakes::new();
    let mut model = test_model("keep");
    fakes.send(&mut model, insert("!", 4));

    fakes.prompt.answer = true;
    fakes.send(&mut model, AppMsg::OpenPath(PathBuf::from("missing.txt")));

    assert_eq!(model.document.text(), "keep!");
    assert!(model.document.is_dirty());
    assert!(model.document.file_path().is_none());
    assert_eq!(model.ui.status_message, "File not found: missing.txt");
}

#[test]
fn test_open_declined_keeps_buffer() {
    let mut fakes = Fakes::with_store(MemoryStore::new().with_file("a.txt", "alpha"));
    let mut model = test_model("mine");
    fakes.send(&mut model, insert("!", 4));

    fakes.prompt.answer = false;
    fakes.send(&mut model, AppMsg::OpenPath(PathBuf::from("a.txt")));
    assert_eq!(model.document.text(), "mine!");
    assert_eq!(model.ui.status_message, "Open cancelled");
}

#[test]
fn test_open_file_asks_once_then_picks() {
    let mut fakes = Fakes::with_store(MemoryStore::new().with_file("a.txt", "alpha"));
    let mut model = test_model("mine");
    fakes.send(&mut model, insert("!", 4));

    fakes.prompt.answer = true;
    fakes.picker.open_path = Some(PathBuf::from("a.txt"));
    fakes.send(&mut model, AppMsg::OpenFile);

    assert_eq!(model.document.text(), "alpha");
    assert_eq!(fakes.prompt_count(), 1);
    assert_eq!(fakes.picker.calls, 1);
}

#[test]
fn test_open_file_declined_skips_picker() {
    let mut fakes = Fakes::new();
    let mut model = test_model("mine");
    fakes.send(&mut model, insert("!", 4));

    fakes.prompt.answer = false;
    fakes.send(&mut model, AppMsg::OpenFile);
    assert_eq!(fakes.picker.calls, 0);
    assert_eq!(model.document.text(), "mine!");
}

#[test]
fn test_open_file_picker_cancel_changes_nothing() {
    let mut fakes = Fakes::new();
    let mut model = test_model("mine");

    fakes.send(&mut model, AppMsg::OpenFile);
    assert_eq!(model.document.text(), "mine");
    assert_eq!(model.ui.status_message, "Open cancelled");
}

#[test]
fn test_save_untitled_cancelled_picker() {
    let mut fakes = Fakes::new();
    let mut model = AppModel::default();
    fakes.send(&mut model, insert("text", 0));

    fakes.send(&mut model, AppMsg::SaveFile);
    assert!(model.document.is_dirty());
    assert!(model.document.file_path().is_none());
    assert_eq!(fakes.store.write_count, 0);
    assert_eq!(model.ui.status_message, "Save cancelled");
}

#[test]
fn test_save_as_moves_document_to_new_path() {
    let mut fakes = Fakes::with_store(MemoryStore::new().with_file("old.txt", "body"));
    let mut model = AppModel::default();
    fakes.send(&mut model, AppMsg::OpenPath(PathBuf::from("old.txt")));

    fakes.picker.save_path = Some(PathBuf::from("new.txt"));
    fakes.send(&mut model, AppMsg::SaveFileAs);

    assert_eq!(model.document.file_path(), Some(Path::new("new.txt")));
    assert_eq!(fakes.store.get(Path::new("new.txt")), Some("body"));
    assert_eq!(model.ui.status_message, "Saved: new.txt");
}

#[test]
fn test_save_as_failure_keeps_old_path() {
    let mut fakes = Fakes::with_store(MemoryStore::new().with_file("old.txt", "body"));
    let mut model = AppModel::default();
    fakes.send(&mut model, AppMsg::OpenPath(PathBuf::from("old.txt")));
    fakes.send(&mut model, insert("x", 0));

    fakes.store.fail_writes = Some("permission denied".to_string());
    fakes.picker.save_path = Some(PathBuf::from("new.txt"));
    fakes.send(&mut model, AppMsg::SaveFileAs);

    assert_eq!(model.document.file_path(), Some(Path::new("old.txt")));
    assert!(model.document.is_dirty());
}
