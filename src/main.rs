//! Line-oriented terminal host for metext
//!
//! Each input line is either a command (`:w`, `:open notes.txt`, `/pattern`,
//! ...) or text appended at the cursor. Type `:help` for the list.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use metext::cli::{CliArgs, StartupMode};
use metext::commands::Cmd;
use metext::host::{Host, PathPicker, Prompt};
use metext::io::DiskStore;
use metext::messages::{AppMsg, DocumentMsg, Msg, SearchMsg};
use metext::model::{AppModel, Document};
use metext::update::update;
use metext::EditorConfig;

const HELP: &str = "\
commands:
  :new              new empty buffer
  :open [PATH]      open PATH, or ask for one
  :w                save (asks for a path if the buffer has none)
  :saveas           save under a new path
  :q                quit
  /PATTERN          set the search pattern and find the next match
  :n  :N            find next / previous
  :case             toggle case-sensitive search
  :goto OFFSET      move the cursor
  :del START END    delete a char range
  :print            show the buffer with the match in [brackets]
  anything else     inserted at the cursor, followed by a newline";

/// Reads one trimmed line from stdin; `None` on EOF or error
fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

fn ask(question: &str) -> Option<String> {
    print!("{} ", question);
    let _ = io::stdout().flush();
    read_line()
}

struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        matches!(
            ask(&format!("{} [y/N]", message)).as_deref().map(str::trim),
            Some("y" | "Y" | "yes")
        )
    }
}

struct StdinPicker;

impl StdinPicker {
    fn ask_path(question: &str) -> Option<PathBuf> {
        let answer = ask(question)?;
        let answer = answer.trim();
        (!answer.is_empty()).then(|| PathBuf::from(answer))
    }
}

impl PathPicker for StdinPicker {
    fn pick_open_path(&mut self) -> Option<PathBuf> {
        Self::ask_path("Open path (empty to cancel):")
    }

    fn pick_save_path(&mut self, suggested: Option<&Path>) -> Option<PathBuf> {
        match suggested {
            Some(current) => Self::ask_path(&format!(
                "Save as (current {}, empty to cancel):",
                current.display()
            )),
            None => Self::ask_path("Save as (empty to cancel):"),
        }
    }
}

/// Translate one input line into a message
fn parse_line(line: &str, model: &AppModel) -> Option<Msg> {
    if let Some(pattern) = line.strip_prefix('/') {
        return Some(SearchMsg::SetPattern(pattern.to_string()).into());
    }

    let Some(command) = line.strip_prefix(':') else {
        return Some(
            DocumentMsg::InsertText {
                offset: model.ui.cursor,
                text: format!("{}\n", line),
            }
            .into(),
        );
    };

    let mut parts = command.split_whitespace();
    let msg: Msg = match (parts.next()?, parts.next(), parts.next()) {
        ("new", _, _) => AppMsg::NewFile.into(),
        ("open", Some(path), _) => AppMsg::OpenPath(PathBuf::from(path)).into(),
        ("open", None, _) => AppMsg::OpenFile.into(),
        ("w", _, _) => AppMsg::SaveFile.into(),
        ("saveas", _, _) => AppMsg::SaveFileAs.into(),
        ("q", _, _) => AppMsg::Quit.into(),
        ("n", _, _) => SearchMsg::FindNext.into(),
        ("N", _, _) => SearchMsg::FindPrevious.into(),
        ("case", _, _) => SearchMsg::ToggleCaseSensitive.into(),
        ("goto", Some(offset), _) => DocumentMsg::MoveCursor(offset.parse().ok()?).into(),
        ("del", Some(start), Some(end)) => DocumentMsg::DeleteRange {
            start: start.parse().ok()?,
            end: end.parse().ok()?,
        }
        .into(),
        _ => return None,
    };
    Some(msg)
}

fn render(model: &AppModel) {
    let (line, col) = model.cursor_line_col();
    println!("== {} | Ln {}, Col {}", model.window_title(), line, col);
    if !model.ui.status_message.is_empty() {
        println!("   {}", model.ui.status_message);
    }
}

fn print_buffer(model: &AppModel) {
    let text = model.document.text();
    let Some(m) = model.search.highlight else {
        println!("{}", text);
        return;
    };
    let mut out = String::with_capacity(text.len() + 2);
    for (i, ch) in text.chars().enumerate() {
        if i == m.start {
            out.push('[');
        }
        if i == m.end {
            out.push(']');
        }
        out.push(ch);
    }
    if m.end >= text.chars().count() {
        out.push(']');
    }
    println!("{}", out);
}

fn main() -> Result<()> {
    metext::tracing::init();

    let args = CliArgs::parse();
    let mode = args.into_mode().map_err(anyhow::Error::msg)?;
    let config = EditorConfig::load();

    let mut store = DiskStore;
    let mut prompt = StdinPrompt;
    let mut picker = StdinPicker;

    let mut model = match mode {
        StartupMode::Empty => AppModel::new(config),
        StartupMode::NewFile(path) => AppModel::with_document(Document::new_with_path(path), config),
        StartupMode::OpenFile(path) => {
            let mut document = Document::new();
            document
                .open(path.clone(), &mut store, &mut prompt)
                .with_context(|| format!("failed to open {}", path.display()))?;
            AppModel::with_document(document, config)
        }
    };

    tracing::info!(title = %model.window_title(), "session started");
    render(&model);

    while !model.ui.quit_requested {
        let Some(line) = read_line() else {
            if model.document.is_dirty() {
                eprintln!("Input closed; unsaved changes were not written");
            }
            break;
        };

        match line.trim() {
            ":help" => {
                println!("{}", HELP);
                continue;
            }
            ":print" => {
                print_buffer(&model);
                continue;
            }
            _ => {}
        }

        let Some(msg) = parse_line(&line, &model) else {
            println!("   unknown command (try :help)");
            continue;
        };

        // A new pattern also jumps to the first match
        let find_after = matches!(msg, Msg::Search(SearchMsg::SetPattern(_)));

        let mut host = Host::new(&mut store, &mut prompt, &mut picker);
        let mut cmd = update(&mut model, msg, &mut host);
        if find_after {
            cmd = update(&mut model, SearchMsg::FindNext.into(), &mut host);
        }

        match Cmd::from(cmd) {
            Cmd::Quit => break,
            cmd if cmd.needs_redraw() => render(&model),
            _ => {}
        }
    }

    Ok(())
}
