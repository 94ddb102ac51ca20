//! Bottom bar with the most useful keys of the current screen.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Render a help bar with the given text, centered in a bordered block.
pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(theme::help_text_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}

pub const HELP_TEXT_PLAYERS: &str =
    "/: search | p/c/y: position/club/age | x: reset | Enter: profile | d: CV | m: agent | ?: help";

pub const HELP_TEXT_PLAYERS_SEARCH: &str =
    "Type to search by name | Enter: keep search | Esc: clear | Backspace: delete";

pub const HELP_TEXT_MATCHES: &str = "j/k: move | d: download fixtures | t: tickets | ?: help";

pub const HELP_TEXT_HOME: &str = "j/k: move | Enter: read article | ?: help";

pub const HELP_TEXT_CONTACT: &str = "Enter/i: fill in the form | j/k: move field | ?: help";

pub const HELP_TEXT_CONTACT_EDITING: &str =
    "Tab/Shift-Tab: next/previous field | Enter: submit | Esc: stop editing";
