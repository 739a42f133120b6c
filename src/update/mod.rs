//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod document;
mod search;

use crate::commands::Cmd;
use crate::host::Host;
use crate::messages::Msg;
use crate::model::AppModel;

pub use app::update_app;
pub use document::update_document;
pub use search::update_search;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut AppModel, msg: Msg, host: &mut Host<'_>) -> Option<Cmd> {
    let span = tracing::debug_span!("update", ?msg);
    let _guard = span.enter();

    let before = model.document.status();
    let result = match msg {
        Msg::Document(m) => update_document(model, m),
        Msg::Search(m) => update_search(model, m),
        Msg::App(m) => update_app(model, m, host),
    };

    if before != model.document.status() {
        tracing::debug!(
            from = ?before,
            to = ?model.document.status(),
            "document status changed"
        );
    }

    result
}
