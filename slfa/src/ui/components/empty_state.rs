//! Placeholder blocks for lists with nothing to show.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme;

/// Render a centered message inside a titled block, with an optional hint
/// line below it (e.g. the key that clears a filter).
pub fn render_empty_state(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    hint: Option<&str>,
) {
    render_message(f, area, title, message, theme::loading_style(), hint);
}

/// Loading placeholder, shown while nothing has been loaded yet
pub fn render_loading_state(f: &mut Frame, area: Rect, title: &str, message: &str) {
    render_message(f, area, title, message, theme::loading_style(), None);
}

/// Failure placeholder with the error text as hint
pub fn render_error_state(f: &mut Frame, area: Rect, title: &str, message: &str, error: &str) {
    render_message(f, area, title, message, theme::error_style(), Some(error));
}

fn render_message(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    style: Style,
    hint: Option<&str>,
) {
    let mut lines = vec![Line::from(""), Line::from(Span::styled(message, style))];

    if let Some(hint_text) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            hint_text,
            theme::help_text_style(),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(paragraph, area);
}
