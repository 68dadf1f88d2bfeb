use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, List, ListItem, Padding, Paragraph, Wrap};

use crate::catalog::{Catalog, Entry};

use super::super::format::{format_entry, truncate};
use super::{Pane, Prompt, TuiState};

const ACCENT: Color = Color::Rgb(110, 170, 255);
const MUTED: Color = Color::Rgb(185, 195, 210);
const CONTROLS_HINT: &str = concat!(
    "←/→ list  ↑/↓ move  a add  / search  ",
    "1/2/3 to-watch/watched/dropped  e queue  w save  q quit"
);

pub(super) fn draw_tui(frame: &mut Frame, catalog: &Catalog, state: &mut TuiState) {
    let bg = Block::default().style(Style::default().bg(Color::Black));
    frame.render_widget(bg, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let mut header_spans = vec![
        Span::styled(
            "WATCHLIST",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("   ", Style::default()),
        Span::styled(
            format!("{} titles", catalog.len()),
            Style::default().fg(MUTED),
        ),
        Span::styled("   ", Style::default()),
        Span::styled(
            format!("focus {}", state.focus.status().label()),
            Style::default().fg(Color::Yellow),
        ),
    ];
    if state.unsaved {
        header_spans.push(Span::styled("   ", Style::default()));
        header_spans.push(Span::styled(
            "unsaved changes",
            Style::default().fg(Color::Rgb(255, 145, 120)),
        ));
    }
    let header = Paragraph::new(Line::from(header_spans))
        .alignment(Alignment::Center)
        .block(panel_block("Dashboard".to_string(), false));
    frame.render_widget(header, chunks[0]);

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .split(chunks[1]);
    let pane_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(body_chunks[0]);
    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(3)])
        .split(body_chunks[1]);

    for (pane, area) in Pane::ALL.into_iter().zip(pane_chunks.iter()) {
        let partition = catalog.partition(pane.status());
        let width = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = partition
            .iter()
            .map(|entry| ListItem::new(truncate(&entry.name, width)))
            .collect();
        let title = format!("{} ({})", pane.status().label(), partition.len());
        let focused = pane == state.focus;
        let mut list = List::new(items).block(panel_block(title, focused));
        if focused {
            list = list
                .highlight_style(
                    Style::default()
                        .bg(ACCENT)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▸ ");
        }
        frame.render_stateful_widget(list, *area, state.selection_mut(pane));
    }

    let history = catalog.history();
    frame.render_widget(
        numbered_list(&history, "Recently Added", "Nothing added yet."),
        side_chunks[0],
    );
    let queue = catalog.watch_next_queue();
    frame.render_widget(
        numbered_list(
            &queue,
            "Watch Next",
            "Queue is empty. Press e to queue a title.",
        ),
        side_chunks[1],
    );

    let hint = Span::styled(CONTROLS_HINT, Style::default().fg(MUTED));
    let controls = Paragraph::new(Line::from(hint))
        .alignment(Alignment::Center)
        .block(panel_block("Controls".to_string(), false));
    frame.render_widget(controls, chunks[2]);

    let status_widget = Paragraph::new(state.status.clone())
        .style(status_style(&state.status))
        .block(panel_block("Status".to_string(), false));
    frame.render_widget(status_widget, chunks[3]);

    if let Some(prompt) = state.prompt.as_ref() {
        render_prompt(frame, prompt);
    }
}

fn numbered_list(entries: &[&Entry], title: &str, empty_text: &str) -> List<'static> {
    let items: Vec<ListItem> = if entries.is_empty() {
        let hint = Span::styled(empty_text.to_string(), Style::default().fg(MUTED));
        vec![ListItem::new(hint)]
    } else {
        entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| ListItem::new(format!("{}. {}", idx + 1, format_entry(entry))))
            .collect()
    };
    List::new(items).block(panel_block(title.to_string(), false))
}

fn render_prompt(frame: &mut Frame, prompt: &Prompt) {
    let text = format!(
        "{}_\n\n[Enter] Confirm   [Esc] Cancel",
        truncate(&prompt.input, 60)
    );
    let area = centered_fixed_rect(72, 9, frame.area());
    render_popup_shadow(frame, area);
    frame.render_widget(Clear, area);
    let popup = Paragraph::new(text)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false })
        .block(modal_block(prompt.kind.title()));
    frame.render_widget(popup, area);
}

fn panel_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Rgb(125, 135, 150))
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .title(title)
}

fn modal_block(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(
            Style::default()
                .fg(Color::Rgb(160, 190, 235))
                .add_modifier(Modifier::BOLD),
        )
        .title(title)
        .padding(Padding::new(2, 2, 1, 1))
}

fn status_style(status: &str) -> Style {
    if status.starts_with("ERROR:") {
        Style::default()
            .fg(Color::Rgb(255, 145, 120))
            .add_modifier(Modifier::BOLD)
    } else if status.starts_with("INFO:") {
        Style::default().fg(Color::Rgb(205, 165, 255))
    } else {
        Style::default().fg(Color::Rgb(230, 235, 242))
    }
}

fn centered_fixed_rect(width: u16, height: u16, area: Rect) -> Rect {
    let clamped_width = width.min(area.width.max(1));
    let clamped_height = height.min(area.height.max(1));
    let x = area.x + area.width.saturating_sub(clamped_width) / 2;
    let y = area.y + area.height.saturating_sub(clamped_height) / 2;
    Rect::new(x, y, clamped_width, clamped_height)
}

fn render_popup_shadow(frame: &mut Frame, popup_area: Rect) {
    let area = frame.area();
    let shadow = Rect::new(
        (popup_area.x + 1).min(area.x + area.width.saturating_sub(1)),
        (popup_area.y + 1).min(area.y + area.height.saturating_sub(1)),
        popup_area.width.saturating_sub(1),
        popup_area.height.saturating_sub(1),
    );
    if shadow.width == 0 || shadow.height == 0 {
        return;
    }
    let shadow_block = Block::default().style(Style::default().bg(Color::Rgb(14, 16, 24)));
    frame.render_widget(shadow_block, shadow);
}
