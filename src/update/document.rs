//! Document message handlers (raw edits and cursor moves)

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::AppModel;

/// Handle edits forwarded from the host's text widget
///
/// Each edit that changes the buffer marks the document modified exactly
/// once. The search highlight is dropped and the next find starts at the
/// cursor, since offsets before the edit may now be stale.
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::InsertText { offset, text } => {
            if text.is_empty() {
                return None;
            }
            let cursor = model.document.insert_text(offset, &text);
            model.set_cursor(cursor);
            model.search.reset_origin(model.ui.cursor);
            Some(Cmd::Redraw)
        }

        DocumentMsg::DeleteRange { start, end } => {
            if !model.document.delete_range(start, end) {
                return None;
            }
            model.set_cursor(start);
            model.search.reset_origin(model.ui.cursor);
            Some(Cmd::Redraw)
        }

        DocumentMsg::ContentChanged => {
            model.document.mark_modified();
            model.search.reset_origin(model.ui.cursor);
            Some(Cmd::Redraw)
        }

        DocumentMsg::MoveCursor(offset) => {
            model.set_cursor(offset);
            model.search.reset_origin(model.ui.cursor);
            Some(Cmd::Redraw)
        }
    }
}
