use std::path::Path;

use crossterm::event::KeyCode;
use tracing::debug;

use crate::catalog::{Catalog, Status};

use super::{Flow, Pane, Prompt, PromptKind, TuiState};

pub(crate) fn status_info(msg: &str) -> String {
    format!("INFO: {msg}")
}

pub(crate) fn status_error(msg: &str) -> String {
    format!("ERROR: {msg}")
}

pub(crate) fn handle_key(
    catalog: &mut Catalog,
    state: &mut TuiState,
    key: KeyCode,
    data_file: &Path,
) -> Flow {
    if let Some(prompt) = state.prompt.as_mut() {
        match key {
            KeyCode::Esc => {
                state.prompt = None;
                state.status = status_info("Canceled.");
            }
            KeyCode::Enter => {
                if let Some(prompt) = state.prompt.take() {
                    submit_prompt(catalog, state, prompt);
                }
            }
            KeyCode::Backspace => {
                prompt.input.pop();
            }
            KeyCode::Char(c) => prompt.input.push(c),
            _ => {}
        }
        return Flow::Continue;
    }

    match key {
        KeyCode::Char('q') => {
            if save(catalog, state, data_file) {
                return Flow::Quit;
            }
            state.status.push_str(" Press Q to quit without saving.");
        }
        KeyCode::Char('Q') => return Flow::Quit,
        KeyCode::Char('w') => {
            save(catalog, state, data_file);
        }
        KeyCode::Char('a') => open_prompt(state, PromptKind::Add),
        KeyCode::Char('/') => open_prompt(state, PromptKind::Search),
        KeyCode::Char('1') => move_selected(catalog, state, Status::Pending),
        KeyCode::Char('2') => move_selected(catalog, state, Status::Watched),
        KeyCode::Char('3') => move_selected(catalog, state, Status::Dropped),
        KeyCode::Char('e') => enqueue_selected(catalog, state),
        KeyCode::Left => state.focus = state.focus.move_left(),
        KeyCode::Right => state.focus = state.focus.move_right(),
        KeyCode::Up => {
            let pane = state.focus;
            if let Some(selected) = state.selected(pane) {
                state
                    .selection_mut(pane)
                    .select(Some(selected.saturating_sub(1)));
            }
        }
        KeyCode::Down => {
            let pane = state.focus;
            let len = catalog.partition(pane.status()).len();
            if let Some(selected) = state.selected(pane)
                && len > 0
            {
                let next = (selected + 1).min(len - 1);
                state.selection_mut(pane).select(Some(next));
            }
        }
        _ => {}
    }
    Flow::Continue
}

fn open_prompt(state: &mut TuiState, kind: PromptKind) {
    state.prompt = Some(Prompt {
        kind,
        input: String::new(),
    });
    state.status = status_info("Type a title, Enter to confirm, Esc to cancel.");
}

fn submit_prompt(catalog: &mut Catalog, state: &mut TuiState, prompt: Prompt) {
    let name = prompt.input.trim();
    match prompt.kind {
        PromptKind::Add => match catalog.add(name) {
            Ok(entry) => {
                state.unsaved = true;
                let label = entry.status.label();
                state.status = status_info(&format!("Added to {label}: {}", entry.name));
                select_title(catalog, state, &entry.name);
            }
            Err(err) => state.status = status_error(&format!("Add failed: {err}")),
        },
        PromptKind::Search => match catalog.search(name) {
            Ok(entry) => {
                state.status = status_info(&format!(
                    "Found: {} (status: {})",
                    entry.name,
                    entry.status.label()
                ));
                select_title(catalog, state, &entry.name);
            }
            Err(err) => state.status = status_error(&format!("Search failed: {err}")),
        },
    }
}

pub(crate) fn selected_name(catalog: &Catalog, state: &TuiState) -> Option<String> {
    let pane = state.focus;
    let idx = state.selected(pane)?;
    catalog
        .partition(pane.status())
        .iter()
        .nth(idx)
        .map(|entry| entry.name.clone())
}

fn move_selected(catalog: &mut Catalog, state: &mut TuiState, target: Status) {
    let Some(name) = selected_name(catalog, state) else {
        state.status = status_error("Move failed: no title selected.");
        return;
    };
    match catalog.move_title(&name, target) {
        Ok(entry) => {
            state.unsaved = true;
            state.status = status_info(&format!("Moved to {}: {}", target.label(), entry.name));
        }
        Err(err) => state.status = status_error(&format!("Move failed: {err}")),
    }
    clamp_selections(catalog, state);
}

fn enqueue_selected(catalog: &mut Catalog, state: &mut TuiState) {
    let Some(name) = selected_name(catalog, state) else {
        state.status = status_error("Queue failed: no title selected.");
        return;
    };
    match catalog.enqueue_watch_next(&name) {
        Ok(()) => state.status = status_info(&format!("Queued to watch next: {name}")),
        Err(err) => state.status = status_error(&format!("Queue failed: {err}")),
    }
}

fn save(catalog: &Catalog, state: &mut TuiState, data_file: &Path) -> bool {
    match catalog.save_to_file(data_file) {
        Ok(()) => {
            state.unsaved = false;
            state.status = status_info(&format!(
                "Saved {} title(s) to {}",
                catalog.len(),
                data_file.display()
            ));
            true
        }
        Err(err) => {
            state.status = status_error(&format!("Save failed: {err}"));
            false
        }
    }
}

/// Focuses the pane holding `name` and selects its row.
fn select_title(catalog: &Catalog, state: &mut TuiState, name: &str) {
    let Ok(entry) = catalog.search(name) else {
        return;
    };
    let pane = Pane::for_status(entry.status);
    let position = catalog
        .partition(entry.status)
        .iter()
        .position(|listed| listed.name == name);
    debug!(title = name, row = ?position, "selecting title");
    state.focus = pane;
    state.selection_mut(pane).select(position);
    clamp_selections(catalog, state);
}

pub(crate) fn clamp_selections(catalog: &Catalog, state: &mut TuiState) {
    for pane in Pane::ALL {
        let len = catalog.partition(pane.status()).len();
        let selection = state.selection_mut(pane);
        if len == 0 {
            selection.select(None);
            continue;
        }
        let idx = selection
            .selected()
            .map_or(0, |selected| selected.min(len - 1));
        selection.select(Some(idx));
    }
}
