use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::state::{HomeState, LoadingState};
use crate::ui::{
    components::{empty_state, help_bar, screen_title},
    layouts, theme, utils,
};

const TEASER_WIDTH: usize = 90;

pub fn render(f: &mut Frame, area: Rect, state: &HomeState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(area);

    screen_title::render_screen_title(
        f,
        title_area,
        "Welcome to the Home of Sierra Leone Football",
        &LoadingState::NotStarted,
    );

    if state.news.is_empty() {
        empty_state::render_empty_state(f, content_area, "Latest News", "No news yet", None);
    } else {
        let rows: Vec<Row> = state
            .news
            .iter()
            .map(|item| {
                Row::new(vec![
                    Cell::from(item.date.as_str()).style(theme::muted_style()),
                    Cell::from(Text::from(vec![
                        Line::from(Span::styled(item.title.as_str(), theme::title_style())),
                        Line::from(utils::truncate_end(item.teaser(), TEASER_WIDTH)),
                    ])),
                ])
                .height(2)
                .bottom_margin(1)
            })
            .collect();

        let table = Table::new(rows, [Constraint::Length(14), Constraint::Min(20)])
            .block(Block::default().borders(Borders::ALL).title("Latest News"))
            .row_highlight_style(theme::selection_style());

        f.render_stateful_widget(table, content_area, &mut state.table_state.borrow_mut());
    }

    help_bar::render_help_bar(f, help_area, help_bar::HELP_TEXT_HOME);
}
