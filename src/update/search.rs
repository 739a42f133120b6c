//! Find message handlers

use crate::commands::Cmd;
use crate::messages::SearchMsg;
use crate::model::AppModel;
use crate::search::MatchRange;

/// Handle find messages
///
/// A hit moves the cursor to the end of the match, so a repeated
/// `FindNext` walks through every occurrence.
pub fn update_search(model: &mut AppModel, msg: SearchMsg) -> Option<Cmd> {
    match msg {
        SearchMsg::SetPattern(pattern) => {
            let cursor = model.ui.cursor;
            model.search.set_pattern(pattern, cursor);
            Some(Cmd::Redraw)
        }

        SearchMsg::FindNext => Some(step(model, Direction::Forward)),
        SearchMsg::FindPrevious => Some(step(model, Direction::Backward)),

        SearchMsg::ToggleCaseSensitive => {
            model.search.case_sensitive = !model.search.case_sensitive;
            model.search.invalidate_highlight();
            let status = if model.search.case_sensitive {
                "Case-sensitive search"
            } else {
                "Case-insensitive search"
            };
            model.ui.set_status(status);
            Some(Cmd::Redraw)
        }

        SearchMsg::Clear => {
            model.search.clear();
            model.ui.clear_status();
            Some(Cmd::Redraw)
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

fn step(model: &mut AppModel, direction: Direction) -> Cmd {
    if !model.search.is_active() {
        model.ui.set_status("No search pattern");
        return Cmd::Redraw;
    }

    let text = model.document.text();
    let found = match direction {
        Direction::Forward => model.search.find_next(&text),
        Direction::Backward => model.search.find_previous(&text),
    };

    match found {
        Some(m) => report_match(model, m),
        None => {
            let status = format!("\"{}\" not found", model.search.pattern);
            model.ui.set_status(status);
        }
    }
    Cmd::Redraw
}

fn report_match(model: &mut AppModel, m: MatchRange) {
    model.set_cursor(m.end);
    let (line, col) = model.document.offset_to_cursor(m.start);
    model.ui.set_status(format!("Found at Ln {}, Col {}", line + 1, col + 1));
}
