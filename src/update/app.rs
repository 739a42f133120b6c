//! App message handlers (file operations, quit)

use std::path::PathBuf;

use crate::commands::Cmd;
use crate::host::{Host, Prompt};
use crate::io::FileStore;
use crate::messages::AppMsg;
use crate::model::{AppModel, SaveOutcome};

/// Handle app messages (file operations)
pub fn update_app(model: &mut AppModel, msg: AppMsg, host: &mut Host<'_>) -> Option<Cmd> {
    match msg {
        AppMsg::NewFile => {
            if model.document.new_(&mut *host.prompt) {
                model.set_cursor(0);
                model.search.reset_origin(0);
                model.ui.set_status("New file");
            } else {
                model.ui.set_status("New file cancelled");
            }
            Some(Cmd::Redraw)
        }

        AppMsg::OpenFile => {
            // Ask before showing the picker; the open below must not ask again
            if !model.document.confirm_discard_if_needed(&mut *host.prompt) {
                model.ui.set_status("Open cancelled");
                return Some(Cmd::Redraw);
            }
            let Some(path) = host.picker.pick_open_path() else {
                model.ui.set_status("Open cancelled");
                return Some(Cmd::Redraw);
            };
            open_path(model, path, &mut *host.store, &mut |_: &str| true)
        }

        AppMsg::OpenPath(path) => open_path(model, path, &mut *host.store, &mut *host.prompt),

        AppMsg::SaveFile => {
            let picker = &mut *host.picker;
            let result = model
                .document
                .save(&mut *host.store, || picker.pick_save_path(None));
            match result {
                Ok(SaveOutcome::Saved(path)) => {
                    model.ui.set_status(format!("Saved: {}", path.display()));
                }
                Ok(SaveOutcome::Cancelled) => model.ui.set_status("Save cancelled"),
                Err(e) => model.ui.set_status(format!("Error saving: {}", e)),
            }
            Some(Cmd::Redraw)
        }

        AppMsg::SaveFileAs => {
            let suggested = model.document.file_path().map(|p| p.to_path_buf());
            let Some(path) = host.picker.pick_save_path(suggested.as_deref()) else {
                model.ui.set_status("Save cancelled");
                return Some(Cmd::Redraw);
            };
            match model.document.save_as(path.clone(), &mut *host.store) {
                Ok(()) => model.ui.set_status(format!("Saved: {}", path.display())),
                Err(e) => model.ui.set_status(format!("Error saving: {}", e)),
            }
            Some(Cmd::Redraw)
        }

        AppMsg::Quit => {
            if model.document.close(&mut *host.prompt) {
                model.ui.quit_requested = true;
                Some(Cmd::Quit)
            } else {
                model.ui.set_status("Quit cancelled");
                Some(Cmd::Redraw)
            }
        }
    }
}

fn open_path<S, P>(
    model: &mut AppModel,
    path: PathBuf,
    store: &mut S,
    prompt: &mut P,
) -> Option<Cmd>
where
    S: FileStore + ?Sized,
    P: Prompt + ?Sized,
{
    match model.document.open(path.clone(), store, prompt) {
        Ok(true) => {
            model.set_cursor(0);
            model.search.reset_origin(0);
            model.ui.set_status(format!("Loaded: {}", path.display()));
        }
        Ok(false) => model.ui.set_status("Open cancelled"),
        Err(e) => model.ui.set_status(e.user_message(&path)),
    }
    Some(Cmd::Redraw)
}
