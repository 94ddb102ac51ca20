//! The four player filter controls in one bar.

use ratatui::prelude::Rect;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::{InputMode, PlayersState};
use crate::ui::theme;

pub fn render_filter_bar(f: &mut Frame, area: Rect, state: &PlayersState) {
    let editing = state.input_mode == InputMode::Filter;

    let search = if editing {
        Span::styled(format!("{}_", state.search), theme::form_field_focused_style())
    } else if state.search.is_empty() {
        Span::styled("(none)", theme::muted_style())
    } else {
        Span::styled(state.search.clone(), theme::loading_style())
    };

    let line = Line::from(vec![
        Span::styled("Search: ", theme::header_style()),
        search,
        Span::raw("   "),
        Span::styled("Position: ", theme::header_style()),
        Span::raw(state.position.to_string()),
        Span::raw("   "),
        Span::styled("Club: ", theme::header_style()),
        Span::raw(state.club.to_string()),
        Span::raw("   "),
        Span::styled("Age: ", theme::header_style()),
        Span::raw(state.age_range.to_string()),
    ]);

    let title = if editing {
        "Filters (Enter: apply, Esc: clear)"
    } else {
        "Filters (x: reset)"
    };

    let border_style = if editing {
        theme::loading_style()
    } else {
        theme::accent_border_style()
    };

    let bar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );

    f.render_widget(bar, area);
}
