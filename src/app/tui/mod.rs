mod actions;
mod render;
mod session;

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::widgets::ListState;

use crate::catalog::{Catalog, Status};

pub(crate) use self::actions::{handle_key, status_error, status_info};
use self::render::draw_tui;
use self::session::TerminalGuard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pane {
    Pending,
    Watched,
    Dropped,
}

impl Pane {
    pub(crate) const ALL: [Pane; 3] = [Self::Pending, Self::Watched, Self::Dropped];

    pub(crate) fn status(self) -> Status {
        match self {
            Self::Pending => Status::Pending,
            Self::Watched => Status::Watched,
            Self::Dropped => Status::Dropped,
        }
    }

    pub(crate) fn for_status(status: Status) -> Self {
        match status {
            Status::Pending => Self::Pending,
            Status::Watched => Self::Watched,
            Status::Dropped => Self::Dropped,
        }
    }

    pub(crate) fn move_left(self) -> Self {
        match self {
            Self::Pending => Self::Pending,
            Self::Watched => Self::Pending,
            Self::Dropped => Self::Watched,
        }
    }

    pub(crate) fn move_right(self) -> Self {
        match self {
            Self::Pending => Self::Watched,
            Self::Watched => Self::Dropped,
            Self::Dropped => Self::Dropped,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Pending => 0,
            Self::Watched => 1,
            Self::Dropped => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PromptKind {
    Add,
    Search,
}

impl PromptKind {
    pub(crate) fn title(self) -> &'static str {
        match self {
            Self::Add => "Add Title",
            Self::Search => "Search Title",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Prompt {
    pub(crate) kind: PromptKind,
    pub(crate) input: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub(crate) struct TuiState {
    pub(crate) focus: Pane,
    pub(crate) prompt: Option<Prompt>,
    pub(crate) status: String,
    pub(crate) unsaved: bool,
    selections: [ListState; 3],
}

impl TuiState {
    pub(crate) fn new(status: String) -> Self {
        Self {
            focus: Pane::Pending,
            prompt: None,
            status,
            unsaved: false,
            selections: Default::default(),
        }
    }

    pub(crate) fn selected(&self, pane: Pane) -> Option<usize> {
        self.selections[pane.index()].selected()
    }

    pub(crate) fn selection_mut(&mut self, pane: Pane) -> &mut ListState {
        &mut self.selections[pane.index()]
    }
}

pub(crate) fn run_tui(
    catalog: &mut Catalog,
    data_file: &Path,
    load_warning: Option<String>,
) -> Result<()> {
    let mut guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("failed to initialize terminal backend")?;
    terminal.clear()?;

    let status = match load_warning {
        Some(warning) => status_error(&format!("Loaded with warnings: {warning}")),
        None if catalog.is_empty() => status_info("No titles yet. Press `a` to add one."),
        None => status_info(&format!("Loaded {} title(s).", catalog.len())),
    };
    let mut state = TuiState::new(status);
    actions::clamp_selections(catalog, &mut state);

    loop {
        terminal.draw(|frame| draw_tui(frame, catalog, &mut state))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if handle_key(catalog, &mut state, key.code, data_file) == Flow::Quit {
            break;
        }
    }

    terminal.show_cursor()?;
    guard.leave()?;
    Ok(())
}
